use tracing::debug;

use crate::{
    ast::{BinOp, Expr},
    error::{CalcError, CalcResult},
};

/// Walks an [`Expr`] tree and computes its value.
///
/// The evaluator holds no state between calls; one instance can be shared
/// freely across threads.
#[derive(Debug, Default, Clone, Copy)]
pub struct Evaluator;

impl Evaluator {
    pub fn new() -> Self {
        Self
    }

    /// Evaluates an expression tree in post-order.
    ///
    /// Left operands are evaluated before right operands, so when both sides
    /// of an operation would fail, the error from the left side is reported.
    ///
    /// # Examples
    ///
    /// ```
    /// use calc_expr::{BinOp, Evaluator, Expr};
    ///
    /// let expr = Expr::binary(BinOp::Multiply, Expr::Number(6.0), Expr::negate(Expr::Number(7.0)));
    /// assert_eq!(Evaluator::new().evaluate(&expr).unwrap(), -42.0);
    /// ```
    pub fn evaluate(&self, expr: &Expr) -> CalcResult<f64> {
        match expr {
            Expr::Number(n) => Ok(*n),
            Expr::Negate(_) => {
                // Peel the whole chain so `----5` costs one frame, not four
                let mut negations = 0usize;
                let mut inner = expr;
                while let Expr::Negate(operand) = inner {
                    negations += 1;
                    inner = operand;
                }
                let value = self.evaluate(inner)?;
                Ok(if negations % 2 == 0 { value } else { -value })
            }
            Expr::BinaryOp { op, left, right } => {
                let left = self.evaluate(left)?;
                let right = self.evaluate(right)?;
                self.apply_binop(*op, left, right)
            }
        }
    }

    fn apply_binop(&self, op: BinOp, left: f64, right: f64) -> CalcResult<f64> {
        match op {
            BinOp::Add => Ok(left + right),
            BinOp::Subtract => Ok(left - right),
            BinOp::Multiply => Ok(left * right),
            BinOp::Divide => {
                // -0.0 == 0.0, so both signed zeros are caught
                if right == 0.0 {
                    debug!(dividend = left, "division by zero");
                    return Err(CalcError::DivisionByZero);
                }
                Ok(left / right)
            }
        }
    }
}

pub fn evaluate(expr: &Expr) -> CalcResult<f64> {
    Evaluator::new().evaluate(expr)
}
