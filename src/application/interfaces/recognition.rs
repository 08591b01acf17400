use crate::error::AppError;
use crate::model::recognition::RecognizeOptions;
use crate::presentation::recognition::RecognitionResponse;
use async_trait::async_trait;

/// Interface for the binary recognition endpoint
#[async_trait]
pub trait RecognitionService: Send + Sync {
    /// Recognizes the objects in a JPEG query image
    ///
    /// The image is checked against the limits of `options.mode` first; an image
    /// outside them fails with [`AppError::ImageRejected`] without any request.
    /// No session is needed.
    async fn recognize(
        &self,
        image: &[u8],
        options: RecognizeOptions,
    ) -> Result<RecognitionResponse, AppError>;
}
