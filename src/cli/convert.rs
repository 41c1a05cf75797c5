//! Evaluation results and errors as JSON

use serde_json::json;

use crate::{CalcError, FormatOptions, format_result};

/// JSON number for a finite value, `null` otherwise
fn number_to_json(value: f64) -> serde_json::Value {
    serde_json::Number::from_f64(value)
        .map(serde_json::Value::Number)
        .unwrap_or(serde_json::Value::Null)
}

/// `{"value": .., "formatted": ..}`
pub fn outcome_to_json(value: f64, options: &FormatOptions) -> serde_json::Value {
    json!({
        "value": number_to_json(value),
        "formatted": format_result(value, options),
    })
}

/// `{"expression": .., "value": .., "formatted": ..}`
pub fn success_to_json(expression: &str, value: f64, options: &FormatOptions) -> serde_json::Value {
    json!({
        "expression": expression,
        "value": number_to_json(value),
        "formatted": format_result(value, options),
    })
}

/// `{"error": {"kind": .., "stage": .., "message": ..}}`
pub fn error_to_json(error: &CalcError) -> serde_json::Value {
    json!({
        "error": {
            "kind": error.kind_name(),
            "stage": error.stage().name(),
            "message": error.to_string(),
        }
    })
}
