use tracing::debug;

use crate::{
    ast::{BinOp, Expr, Operator, Token},
    error::{CalcError, CalcResult, ParenMismatch},
};

/// Deepest parenthesis nesting the parser will descend into.
pub const MAX_NESTING_DEPTH: usize = 256;

/// Recursive-descent parser over a borrowed token slice.
pub struct Parser<'a> {
    tokens: &'a [Token],
    position: usize,
    depth: usize,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        Parser {
            tokens,
            position: 0,
            depth: 0,
        }
    }

    fn current_token(&self) -> Option<Token> {
        self.tokens.get(self.position).copied()
    }

    fn advance(&mut self) {
        self.position += 1;
    }

    fn check(&self, op: Operator) -> bool {
        self.current_token() == Some(Token::Operator(op))
    }

    fn unexpected(&self) -> CalcError {
        CalcError::InvalidExpression {
            position: self.position,
            found: self.current_token(),
        }
    }

    /// Parse primary expressions: numbers and parenthesised groups
    fn parse_primary(&mut self) -> CalcResult<Expr> {
        match self.current_token() {
            Some(Token::Number(n)) => {
                self.advance();
                Ok(Expr::Number(n))
            }
            Some(Token::Operator(Operator::LParen)) => {
                if self.depth == MAX_NESTING_DEPTH {
                    return Err(CalcError::NestingTooDeep {
                        max: MAX_NESTING_DEPTH,
                    });
                }
                self.advance();
                self.depth += 1;
                // Straight to the additive level, one frame less per group
                let expr = self.parse_additive()?;
                if !self.check(Operator::RParen) {
                    return Err(CalcError::MismatchedParentheses(ParenMismatch::MissingClosing));
                }
                self.advance();
                self.depth -= 1;
                Ok(expr)
            }
            _ => Err(self.unexpected()),
        }
    }

    /// `Unary := '-' Unary | Primary`, with the run of minuses counted
    /// rather than recursed into. `--5` still becomes `-(-5)`.
    fn parse_unary(&mut self) -> CalcResult<Expr> {
        let mut negations = 0usize;
        while self.check(Operator::Minus) {
            self.advance();
            negations += 1;
        }

        let mut expr = self.parse_primary()?;
        for _ in 0..negations {
            expr = Expr::negate(expr);
        }
        Ok(expr)
    }

    fn parse_multiplicative(&mut self) -> CalcResult<Expr> {
        let mut left = self.parse_unary()?;

        loop {
            let op = match self.current_token() {
                Some(Token::Operator(Operator::Star)) => BinOp::Multiply,
                Some(Token::Operator(Operator::Slash)) => BinOp::Divide,
                _ => break,
            };

            self.advance();
            let right = self.parse_unary()?;
            left = Expr::binary(op, left, right);
        }
        Ok(left)
    }

    fn parse_additive(&mut self) -> CalcResult<Expr> {
        let mut left = self.parse_multiplicative()?;

        loop {
            let op = match self.current_token() {
                Some(Token::Operator(Operator::Plus)) => BinOp::Add,
                Some(Token::Operator(Operator::Minus)) => BinOp::Subtract,
                _ => break,
            };

            self.advance();
            let right = self.parse_multiplicative()?;
            left = Expr::binary(op, left, right);
        }
        Ok(left)
    }

    pub fn parse_expression(&mut self) -> CalcResult<Expr> {
        self.parse_additive()
    }

    /// Parses the whole token stream; every token must be consumed.
    pub fn parse(&mut self) -> CalcResult<Expr> {
        let expr = self.parse_expression()?;
        if self.current_token().is_some() {
            return Err(self.unexpected());
        }
        debug!(tokens = self.tokens.len(), "parsed expression");
        Ok(expr)
    }
}

pub fn parse(tokens: &[Token]) -> CalcResult<Expr> {
    Parser::new(tokens).parse()
}
