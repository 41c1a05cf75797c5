//! A cheap linear pre-check over the token stream.
//!
//! Catches doubled operators (`3 ++ 4`) and unbalanced parentheses before the
//! parser runs. The parser still verifies grouping on its own; this pass only
//! guarantees the stream is locally sane.

use tracing::debug;

use crate::{
    ast::{Operator, Token},
    error::{CalcError, CalcResult, ParenMismatch},
};

pub fn validate_sequence(tokens: &[Token]) -> CalcResult<()> {
    let mut previous: Option<Operator> = None;
    let mut depth: usize = 0;

    for token in tokens {
        let Token::Operator(op) = *token else {
            previous = None;
            continue;
        };

        if let Some(first) = previous
            && first.is_arithmetic()
            && op.is_arithmetic()
            && op != Operator::Minus
        {
            // A `-` after an operator is a unary minus; anything else is a typo
            return Err(CalcError::InvalidOperatorSequence {
                first: first.symbol(),
                second: op.symbol(),
            });
        }

        match op {
            Operator::LParen => depth += 1,
            Operator::RParen => {
                depth = depth
                    .checked_sub(1)
                    .ok_or(CalcError::MismatchedParentheses(ParenMismatch::TooManyClosing))?;
            }
            _ => {}
        }

        previous = Some(op);
    }

    if depth > 0 {
        debug!(depth, "unclosed parentheses after scan");
        return Err(CalcError::MismatchedParentheses(ParenMismatch::TooManyOpening));
    }

    Ok(())
}
