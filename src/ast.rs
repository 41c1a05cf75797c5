//! # Arithmetic Expressions - Tokens and Abstract Syntax Tree
//!
//! This module defines the data shared between the pipeline stages of the
//! evaluator.
//!
//! ## Architecture Overview
//!
//! - **[tokens]** - Lexical tokens produced by the lexer
//! - **[operators]** - Binary arithmetic operators
//! - **[expressions]** - Expression nodes built by the parser
//!
//! ## Grammar
//!
//! ```text
//! Expression  := AddSub
//! AddSub      := MulDiv ( ('+'|'-') MulDiv )*
//! MulDiv      := Unary  ( ('*'|'/') Unary  )*
//! Unary       := '-' Unary | Primary
//! Primary     := Number | '(' Expression ')'
//! ```
//!
//! ## Examples
//!
//! `1 + 2 * 3` parses as
//!
//! ```text
//! BinaryOp(+)
//! ├── Number(1)
//! └── BinaryOp(*)
//!     ├── Number(2)
//!     └── Number(3)
//! ```
//!
//! and `10 - 2 - 3` folds left into `((10 - 2) - 3)`.
pub mod expressions;
pub mod operators;
pub mod tokens;

pub use expressions::Expr;
pub use operators::BinOp;
pub use tokens::{Operator, Token};
