use axum::extract::multipart::MultipartError;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use quick_xml::escape::escape;
use recognize_client::error::AppError;
use tracing::error;

/// Server error types
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// A call to the recognize.im service failed
    #[error("{}", .0.message())]
    Client(#[from] AppError),

    /// The upload form could not be read
    #[error("Invalid form: {0}")]
    Form(#[from] MultipartError),

    /// A required form field was not sent
    #[error("Missing form field: {0}")]
    MissingField(&'static str),

    /// Socket failure while serving
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type of the handlers
pub type ServerResult<T> = Result<T, ServerError>;

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        error!("Request failed: {}", self);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Html(escape(&self.to_string()).into_owned()),
        )
            .into_response()
    }
}
