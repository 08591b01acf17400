use md5::{Digest, Md5};

/// Computes the `x-itraff-hash` header for a recognition request
///
/// The service expects the hex encoded MD5 digest of the API key immediately
/// followed by the raw image bytes.
///
/// # Examples
/// ```
/// use recognize_client::utils::hash::recognition_hash;
/// assert_eq!(recognition_hash("", b""), "d41d8cd98f00b204e9800998ecf8427e");
/// ```
#[must_use]
pub fn recognition_hash(api_key: &str, image: &[u8]) -> String {
    let mut hasher = Md5::new();
    hasher.update(api_key.as_bytes());
    hasher.update(image);
    hex::encode(hasher.finalize())
}
