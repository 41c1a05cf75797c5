//! CLI support for calc-expr
//!
//! Provides programmatic access to the `calc` commands so they can be
//! embedded in other tools and tested without spawning a process.

mod check;
mod convert;
mod docs;

pub use check::{
    BatchOptions, EvalOptions, execute_batch, execute_check, execute_eval, execute_tokens,
    render_tokens,
};
pub use convert::{error_to_json, outcome_to_json, success_to_json};
pub use docs::get_docs;

use std::io;

use thiserror::Error;

/// Errors that can occur during CLI operations
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Calc(#[from] crate::CalcError),

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Batch input must be a JSON array, got {0}")]
    NotAnArray(&'static str),

    #[error("No input provided. Pass an expression or pipe input to stdin.")]
    NoInput,
}
