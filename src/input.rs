//! Checks applied to raw input before any tokenizing work is done.

use tracing::debug;

use crate::error::{CalcError, CalcResult};

/// Longest accepted expression, in characters.
pub const MAX_INPUT_LENGTH: usize = 4096;

/// Rejects blank and over-long input.
pub fn validate_input(input: &str) -> CalcResult<()> {
    if input.trim().is_empty() {
        return Err(CalcError::EmptyInput);
    }

    let length = input.chars().count();
    if length > MAX_INPUT_LENGTH {
        debug!(length, max = MAX_INPUT_LENGTH, "input rejected as too long");
        return Err(CalcError::InputTooLong {
            length,
            max: MAX_INPUT_LENGTH,
        });
    }

    Ok(())
}

/// Extracts and validates an expression from a dynamically typed value.
///
/// Only JSON strings are accepted; anything else fails with
/// [`CalcError::InvalidType`] naming the JSON type that was found.
pub fn validate_value(value: &serde_json::Value) -> CalcResult<&str> {
    let expression = value.as_str().ok_or(CalcError::InvalidType {
        found: json_type_name(value),
    })?;
    validate_input(expression)?;
    Ok(expression)
}

/// Decodes raw bytes as text; anything that is not UTF-8 is rejected as
/// [`CalcError::InvalidType`].
pub fn decode_input(bytes: &[u8]) -> CalcResult<&str> {
    std::str::from_utf8(bytes).map_err(|_| CalcError::InvalidType {
        found: "non-UTF-8 bytes",
    })
}

/// Returns a human-readable type name for a JSON value
pub(crate) fn json_type_name(v: &serde_json::Value) -> &'static str {
    match v {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
