/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Lenient serde helpers for service payloads
//!
//! The recognition endpoint and the normalized SOAP payloads are loose about
//! types: identifiers and statuses come back as numbers or as strings depending
//! on the call.

use serde::Deserialize;
use serde_json::Value;

/// Renders a scalar JSON value as text; `None` for null, arrays and objects
#[must_use]
pub fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Deserializes a string or a number into `Option<String>`
pub mod string_or_number_opt {
    use super::*;
    use serde::Deserializer;

    /// Deserialize function
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<Value>::deserialize(deserializer)?;
        Ok(value.as_ref().and_then(scalar_to_string))
    }
}

/// Deserializes a number or a numeric string into `i64`
pub mod number_as_i64 {
    use super::*;
    use serde::Deserializer;
    use serde::de::Error;

    /// Deserialize function
    pub fn deserialize<'de, D>(deserializer: D) -> Result<i64, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Value::deserialize(deserializer)? {
            Value::Number(n) => n
                .as_i64()
                .ok_or_else(|| Error::custom(format!("status out of range: {n}"))),
            Value::String(s) => s
                .trim()
                .parse::<i64>()
                .map_err(|_| Error::custom(format!("invalid status: {s}"))),
            other => Err(Error::custom(format!("invalid status: {other}"))),
        }
    }
}

/// Deserializes `null` as an empty vector
pub fn null_as_empty_vec<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Deserialize<'de>,
{
    let opt = Option::deserialize(deserializer)?;
    Ok(opt.unwrap_or_default())
}
