/// Generates an identifier for an image inserted without an explicit ID.
///
/// The identifier is 16 characters long and drawn from uppercase English
/// letters and digits using `nanoid`, which keeps it safe to embed in the
/// SOAP envelope and in the thumbnail URLs returned by the service.
///
/// # Examples
/// ```
/// use recognize_client::utils::id::get_id;
/// let id = get_id();
/// assert_eq!(id.len(), 16);
/// ```
#[must_use]
pub fn get_id() -> String {
    let alphabet: Vec<char> = "ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789".chars().collect();
    nanoid::nanoid!(16, &alphabet)
}

/// Returns the trimmed `candidate` or a freshly generated identifier when it is blank
#[must_use]
pub fn id_or_generate(candidate: Option<&str>) -> String {
    match candidate.map(str::trim) {
        Some(id) if !id.is_empty() => id.to_string(),
        _ => get_id(),
    }
}
