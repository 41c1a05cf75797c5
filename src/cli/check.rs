//! Execute calc commands against expression input

use tracing::{debug, info};

use super::{CliError, error_to_json, outcome_to_json, success_to_json};
use crate::{
    Expr, FormatOptions, Token, check_syntax, evaluate_expression, format_result,
    input::json_type_name, tokenize, validate_input,
};

/// Options for the eval command
#[derive(Debug, Clone, Default)]
pub struct EvalOptions {
    /// The expression to evaluate
    pub expression: String,
    /// Rounding and trimming of the printed result
    pub format: FormatOptions,
    /// Print the unformatted `f64`
    pub raw: bool,
    /// Print a JSON object instead of a bare number
    pub json: bool,
}

/// Options for the batch command
#[derive(Debug, Clone, Default)]
pub struct BatchOptions {
    /// JSON array of expressions
    pub input: String,
    pub format: FormatOptions,
}

/// Evaluate one expression and render the line to print
pub fn execute_eval(options: &EvalOptions) -> Result<String, CliError> {
    let value = evaluate_expression(&options.expression)?;
    debug!(value, "eval command succeeded");

    let line = if options.json {
        success_to_json(&options.expression, value, &options.format).to_string()
    } else if options.raw {
        value.to_string()
    } else {
        format_result(value, &options.format)
    };
    Ok(line)
}

/// Validate syntax only, without evaluating
pub fn execute_check(expression: &str) -> Result<Expr, CliError> {
    Ok(check_syntax(expression)?)
}

/// Tokenize an expression without parsing it
pub fn execute_tokens(expression: &str) -> Result<Vec<Token>, CliError> {
    validate_input(expression)?;
    Ok(tokenize(expression)?)
}

/// One token per line, in source form (`-`, `1.5`)
pub fn render_tokens(tokens: &[Token]) -> String {
    tokens.iter().map(|token| format!("{}\n", token)).collect()
}

/// Evaluate every element of a JSON array.
///
/// Per-element failures become error objects in the output array; only
/// malformed batch input fails the whole run.
pub fn execute_batch(options: &BatchOptions) -> Result<serde_json::Value, CliError> {
    let input: serde_json::Value = serde_json::from_str(&options.input)?;

    let serde_json::Value::Array(items) = input else {
        return Err(CliError::NotAnArray(json_type_name(&input)));
    };

    let results: Vec<serde_json::Value> = items
        .iter()
        .map(|item| match crate::evaluate_value(item) {
            Ok(value) => outcome_to_json(value, &options.format),
            Err(e) => error_to_json(&e),
        })
        .collect();

    info!(count = results.len(), "batch evaluated");
    Ok(serde_json::Value::Array(results))
}
