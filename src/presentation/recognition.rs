use crate::constants::DEFAULT_ERROR_MESSAGE;
use crate::presentation::serialization::{null_as_empty_vec, number_as_i64, string_or_number_opt};
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Response of the binary recognition endpoint
#[derive(DebugPretty, DisplaySimple, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecognitionResponse {
    /// Zero when the query was processed
    #[serde(deserialize_with = "number_as_i64::deserialize")]
    pub status: i64,
    /// Error description when `status` is not zero
    #[serde(default)]
    pub message: Option<String>,
    /// Identifier of the best match in single mode
    #[serde(default, deserialize_with = "string_or_number_opt::deserialize")]
    pub id: Option<String>,
    /// Matches in multi mode, or every match when all results were requested
    #[serde(default, deserialize_with = "null_as_empty_vec")]
    pub objects: Vec<RecognizedObject>,
    /// Fields not modelled above
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl RecognitionResponse {
    /// Whether the query was processed
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status == 0
    }

    /// Error message, falling back to a generic one
    #[must_use]
    pub fn error_message(&self) -> &str {
        self.message.as_deref().unwrap_or(DEFAULT_ERROR_MESSAGE)
    }

    /// Short textual result: matched ids on success, the error message otherwise
    #[must_use]
    pub fn summary(&self) -> String {
        if !self.is_success() {
            return self.error_message().to_string();
        }
        if let Some(id) = &self.id {
            return id.clone();
        }
        self.objects
            .iter()
            .filter_map(|object| object.id.as_deref())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// One recognized object
#[derive(DebugPretty, DisplaySimple, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecognizedObject {
    /// Identifier given to the reference image at insert time
    #[serde(default, deserialize_with = "string_or_number_opt::deserialize")]
    pub id: Option<String>,
    /// Name given to the reference image at insert time
    #[serde(default)]
    pub name: Option<String>,
    /// Position of the object in the query image, when reported
    #[serde(default)]
    pub location: Option<Value>,
}
