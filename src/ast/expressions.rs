use std::fmt;

use crate::ast::BinOp;

/// Abstract Syntax Tree node representing a parsed expression.
///
/// Precedence and grouping are fixed by the shape of the tree, so the
/// evaluator never has to look at operator priorities. Every child is owned
/// by exactly one parent.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Literal number
    ///
    /// # Example
    /// ```text
    /// 42
    /// ```
    Number(f64),

    /// Unary minus
    ///
    /// # Examples
    /// ```text
    /// -5      // Negate(Number(5))
    /// --5     // Negate(Negate(Number(5)))
    /// ```
    Negate(Box<Expr>),

    /// Binary arithmetic operation
    BinaryOp {
        op: BinOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
}

impl Expr {
    pub fn negate(operand: Expr) -> Self {
        Expr::Negate(Box::new(operand))
    }

    pub fn binary(op: BinOp, left: Expr, right: Expr) -> Self {
        Expr::BinaryOp {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }
}

/// Fully parenthesised rendering, e.g. `((1 + 2) * -3)`.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Number(n) => write!(f, "{}", n),
            Expr::Negate(_) => {
                let mut inner = self;
                while let Expr::Negate(operand) = inner {
                    f.write_str("-")?;
                    inner = operand;
                }
                write!(f, "{}", inner)
            }
            Expr::BinaryOp { op, left, right } => write!(f, "({} {} {})", left, op, right),
        }
    }
}
