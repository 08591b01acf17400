/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::constants::DEFAULT_ERROR_MESSAGE;
use crate::error::AppError;
use crate::model::soap::SoapReply;
use serde_json::{Map, Value};

/// Turns a decoded SOAP reply into the terminal outcome of a call
///
/// * a fault is an error carrying the fault string;
/// * a `status` of zero is a success whose payload is the `data` field, or
///   `null` when the response has none;
/// * any other status, including a missing one, is an error carrying the
///   `message` field or a generic message.
pub fn evaluate(reply: SoapReply) -> Result<Value, AppError> {
    match reply {
        SoapReply::Fault(fault) => Err(AppError::Fault(fault)),
        SoapReply::Result(mut map) => {
            if is_success(&map) {
                Ok(map.remove("data").unwrap_or(Value::Null))
            } else {
                let status = map
                    .get("status")
                    .map(value_text)
                    .unwrap_or_default();
                let message = map
                    .get("message")
                    .map(value_text)
                    .filter(|message| !message.is_empty())
                    .unwrap_or_else(|| DEFAULT_ERROR_MESSAGE.to_string());
                Err(AppError::Api { status, message })
            }
        }
    }
}

/// Whether the normalized map reports a zero status
#[must_use]
pub fn is_success(map: &Map<String, Value>) -> bool {
    match map.get("status") {
        Some(Value::String(status)) => status.trim().parse::<i64>() == Ok(0),
        Some(Value::Number(status)) => status.as_i64() == Some(0),
        _ => false,
    }
}

fn value_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
