use std::fmt;

use thiserror::Error;

use crate::ast::Token;

/// Pipeline stage that detected a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Validator,
    Tokenizer,
    SequenceValidator,
    Parser,
    Evaluator,
}

impl Stage {
    pub fn name(self) -> &'static str {
        match self {
            Stage::Validator => "validator",
            Stage::Tokenizer => "tokenizer",
            Stage::SequenceValidator => "sequence-validator",
            Stage::Parser => "parser",
            Stage::Evaluator => "evaluator",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The ways parentheses can fail to match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParenMismatch {
    /// A `)` with no open `(` to close, found while scanning tokens
    TooManyClosing,
    /// Input ended with `(` still open, found while scanning tokens
    TooManyOpening,
    /// The parser expected `)` to close a group
    MissingClosing,
}

impl fmt::Display for ParenMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParenMismatch::TooManyClosing => write!(f, "too many closing )"),
            ParenMismatch::TooManyOpening => write!(f, "too many opening ("),
            ParenMismatch::MissingClosing => write!(f, "missing closing )"),
        }
    }
}

/// Errors that can occur while evaluating an expression.
///
/// Exactly one error is reported per failed call: the first violation found
/// by the earliest stage that runs.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalcError {
    /// Input is not text
    #[error("Expression must be a string, got {found}")]
    InvalidType { found: &'static str },

    /// Input is empty or whitespace-only
    #[error("Expression is empty")]
    EmptyInput,

    /// Input exceeds the length cap
    #[error("Expression exceeds maximum length of {max} characters (got {length})")]
    InputTooLong { length: usize, max: usize },

    /// A run of digits and dots that is not a valid decimal literal
    #[error("Malformed decimal number '{literal}' at position {position}")]
    MalformedNumber { literal: String, position: usize },

    /// A character outside the supported set
    #[error("Invalid character '{character}' at position {position}")]
    InvalidCharacter { character: char, position: usize },

    /// Two binary operators in a row
    #[error("Invalid operator sequence: \"{first}{second}\"")]
    InvalidOperatorSequence { first: char, second: char },

    #[error("Mismatched parentheses: {0}")]
    MismatchedParentheses(ParenMismatch),

    /// Incomplete expression or extra tokens
    #[error("Invalid expression: {}", describe_unexpected(.position, .found))]
    InvalidExpression {
        /// Index of the offending token
        position: usize,
        /// The offending token, or `None` at end of input
        found: Option<Token>,
    },

    /// Parentheses nested past the parser's depth limit
    #[error("Expression nests parentheses deeper than {max} levels")]
    NestingTooDeep { max: usize },

    #[error("Division by zero")]
    DivisionByZero,
}

fn describe_unexpected(position: &usize, found: &Option<Token>) -> String {
    match found {
        Some(token) => format!("unexpected '{}' at token {}", token, position),
        None => "unexpected end of input".to_string(),
    }
}

impl CalcError {
    /// Stable name of the error kind, e.g. `"DivisionByZeroError"`.
    pub fn kind_name(&self) -> &'static str {
        match self {
            CalcError::InvalidType { .. } => "TypeError",
            CalcError::EmptyInput => "EmptyInputError",
            CalcError::InputTooLong { .. } => "InputTooLongError",
            CalcError::MalformedNumber { .. } => "MalformedNumberError",
            CalcError::InvalidCharacter { .. } => "InvalidCharacterError",
            CalcError::InvalidOperatorSequence { .. } => "InvalidOperatorSequenceError",
            CalcError::MismatchedParentheses(_) => "MismatchedParenthesesError",
            CalcError::InvalidExpression { .. } => "InvalidExpressionError",
            CalcError::NestingTooDeep { .. } => "NestingTooDeepError",
            CalcError::DivisionByZero => "DivisionByZeroError",
        }
    }

    pub fn stage(&self) -> Stage {
        match self {
            CalcError::InvalidType { .. }
            | CalcError::EmptyInput
            | CalcError::InputTooLong { .. } => Stage::Validator,
            CalcError::MalformedNumber { .. } | CalcError::InvalidCharacter { .. } => {
                Stage::Tokenizer
            }
            CalcError::InvalidOperatorSequence { .. } => Stage::SequenceValidator,
            CalcError::MismatchedParentheses(ParenMismatch::MissingClosing) => Stage::Parser,
            CalcError::MismatchedParentheses(_) => Stage::SequenceValidator,
            CalcError::InvalidExpression { .. } | CalcError::NestingTooDeep { .. } => {
                Stage::Parser
            }
            CalcError::DivisionByZero => Stage::Evaluator,
        }
    }
}

pub type CalcResult<T> = Result<T, CalcError>;
