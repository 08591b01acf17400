use crate::constants::RECOGNIZE_PATH;
use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Recognition mode of a query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecognitionMode {
    /// One object per query image
    #[default]
    Single,
    /// Several objects per query image
    Multi,
}

impl RecognitionMode {
    /// Path segment used by the recognition endpoint
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            RecognitionMode::Single => "single",
            RecognitionMode::Multi => "multi",
        }
    }
}

impl fmt::Display for RecognitionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecognitionMode {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "single" => Ok(RecognitionMode::Single),
            "multi" => Ok(RecognitionMode::Multi),
            other => Err(AppError::InvalidInput(format!(
                "unknown recognition mode: {other}"
            ))),
        }
    }
}

/// Options of a recognition query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RecognizeOptions {
    /// Single or multi object recognition
    pub mode: RecognitionMode,
    /// Return every match instead of the best one
    pub all_results: bool,
}

impl RecognizeOptions {
    /// Single mode, best match only
    #[must_use]
    pub fn single() -> Self {
        Self::default()
    }

    /// Multi mode, best matches only
    #[must_use]
    pub fn multi() -> Self {
        Self {
            mode: RecognitionMode::Multi,
            all_results: false,
        }
    }

    /// Requests every match
    #[must_use]
    pub fn with_all_results(mut self, all_results: bool) -> Self {
        self.all_results = all_results;
        self
    }

    /// Endpoint path for `client_id`, e.g. `/v2/recognize/multi/all/64`
    #[must_use]
    pub fn path(&self, client_id: &str) -> String {
        let mut path = format!("{RECOGNIZE_PATH}{}/", self.mode);
        if self.all_results {
            path.push_str("all/");
        }
        path.push_str(client_id);
        path
    }
}
