/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use reqwest::StatusCode;
use thiserror::Error;

/// Error type for every fallible operation of the client
#[derive(Debug, Error)]
pub enum AppError {
    /// Transport level failure (connection, DNS, timeout, body read)
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
    /// I/O failure
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    /// JSON payload could not be parsed
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    /// XML payload could not be parsed or has an unexpected shape
    #[error("xml error: {0}")]
    Xml(String),
    /// The SOAP call was rejected with a fault
    #[error("soap fault: {0}")]
    Fault(String),
    /// The call was well formed but the service answered with a non-zero status
    #[error("api error (status {status}): {message}")]
    Api {
        /// Raw value of the `status` field
        status: String,
        /// Value of the `message` field, or a generic fallback
        message: String,
    },
    /// The session cookie was rejected
    #[error("unauthorized")]
    Unauthorized,
    /// The server answered with a status code the client does not handle
    #[error("unexpected status code: {0}")]
    Unexpected(StatusCode),
    /// Authentication succeeded but no session cookie came back
    #[error("missing session cookie")]
    MissingSessionCookie,
    /// The query image is outside the limits of the requested mode
    #[error("image rejected: {0}")]
    ImageRejected(String),
    /// The caller supplied an invalid argument
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl AppError {
    /// Message suitable for showing to an end user
    ///
    /// Faults and API errors yield the text sent by the service, everything else
    /// the display form of the error.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            AppError::Fault(fault) => fault.clone(),
            AppError::Api { message, .. } => message.clone(),
            AppError::ImageRejected(message) => message.clone(),
            other => other.to_string(),
        }
    }
}

impl From<quick_xml::Error> for AppError {
    fn from(err: quick_xml::Error) -> Self {
        AppError::Xml(err.to_string())
    }
}

impl From<quick_xml::escape::EscapeError> for AppError {
    fn from(err: quick_xml::escape::EscapeError) -> Self {
        AppError::Xml(err.to_string())
    }
}

impl From<image::ImageError> for AppError {
    fn from(err: image::ImageError) -> Self {
        AppError::ImageRejected(format!("unreadable image: {err}"))
    }
}
