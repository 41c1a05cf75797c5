use std::fmt;

use crate::ast::Operator;

/// Binary arithmetic operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOp {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Subtract,
    /// Multiplication (`*`)
    Multiply,
    /// Division (`/`)
    Divide,
}

impl BinOp {
    pub fn symbol(self) -> char {
        match self {
            BinOp::Add => '+',
            BinOp::Subtract => '-',
            BinOp::Multiply => '*',
            BinOp::Divide => '/',
        }
    }
}

impl TryFrom<Operator> for BinOp {
    type Error = Operator;

    fn try_from(op: Operator) -> Result<Self, Self::Error> {
        match op {
            Operator::Plus => Ok(BinOp::Add),
            Operator::Minus => Ok(BinOp::Subtract),
            Operator::Star => Ok(BinOp::Multiply),
            Operator::Slash => Ok(BinOp::Divide),
            other => Err(other),
        }
    }
}

impl fmt::Display for BinOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
