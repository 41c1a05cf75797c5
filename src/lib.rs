pub mod ast;
pub mod error;
pub mod evaluator;
pub mod input;
pub mod lexer;
pub mod output;
pub mod parser;
pub mod sequence;

#[cfg(feature = "cli")]
pub mod cli;

pub use ast::{BinOp, Expr, Operator, Token};
pub use error::{CalcError, CalcResult, ParenMismatch, Stage};
pub use evaluator::Evaluator;
pub use input::{MAX_INPUT_LENGTH, validate_input, validate_value};
pub use lexer::{Lexer, tokenize};
pub use output::{FormatOptions, format_result};
pub use parser::{MAX_NESTING_DEPTH, Parser, parse};
pub use sequence::validate_sequence;

use tracing::{debug, instrument};

/// Evaluates an arithmetic expression.
///
/// Runs input validation, tokenization, token-sequence validation, parsing
/// and evaluation in that order, returning the first error encountered.
///
/// # Examples
///
/// ```
/// use calc_expr::{evaluate_expression, CalcError};
///
/// assert_eq!(evaluate_expression("1 + 2 * 3").unwrap(), 7.0);
/// assert_eq!(evaluate_expression("1 * -2").unwrap(), -2.0);
/// assert_eq!(evaluate_expression("5 / 0"), Err(CalcError::DivisionByZero));
/// ```
#[instrument(level = "debug", skip_all, fields(len = expression.len()))]
pub fn evaluate_expression(expression: &str) -> CalcResult<f64> {
    let expr = check_syntax(expression)?;
    let value = evaluator::evaluate(&expr)?;
    debug!(value, "evaluated expression");
    Ok(value)
}

/// Evaluates an expression held in a dynamically typed value.
///
/// Non-string values fail with [`CalcError::InvalidType`].
pub fn evaluate_value(value: &serde_json::Value) -> CalcResult<f64> {
    let expression = validate_value(value)?;
    evaluate_expression(expression)
}

/// Runs every stage up to and including parsing, without evaluating.
pub fn check_syntax(expression: &str) -> CalcResult<Expr> {
    validate_input(expression)?;
    let tokens = tokenize(expression)?;
    validate_sequence(&tokens)?;
    parse(&tokens)
}
