use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, trace};

use crate::{
    ast::{Operator, Token},
    error::{CalcError, CalcResult},
};

/// Accepted shapes of a numeric literal: `12`, `12.`, `12.5`, `.5`.
static NUMBER_LITERAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d+(\.\d*)?|\.\d+)$").expect("number literal pattern is valid")
});

pub struct Lexer {
    input: Vec<char>,
    position: usize,
}

impl Lexer {
    pub fn new(input: &str) -> Self {
        Lexer {
            input: input.chars().collect(),
            position: 0,
        }
    }

    fn current_char(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    fn advance(&mut self) {
        self.position += 1;
    }

    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.current_char() {
            if ch.is_whitespace() {
                self.advance();
            } else {
                break;
            }
        }
    }

    /// Consumes the maximal run of digits and dots, then checks its shape.
    fn read_number(&mut self) -> CalcResult<Token> {
        let start = self.position;
        let mut literal = String::new();

        while let Some(ch) = self.current_char() {
            if is_number_char(ch) {
                literal.push(ch);
                self.advance();
            } else {
                break;
            }
        }

        if !NUMBER_LITERAL.is_match(&literal) {
            return Err(CalcError::MalformedNumber {
                literal,
                position: start,
            });
        }

        // Rust's f64 parser accepts every shape the pattern admits
        literal
            .parse::<f64>()
            .map(Token::Number)
            .map_err(|_| CalcError::MalformedNumber {
                literal,
                position: start,
            })
    }

    /// Returns the next token, or `None` once the input is exhausted.
    pub fn next_token(&mut self) -> CalcResult<Option<Token>> {
        self.skip_whitespace();

        let Some(ch) = self.current_char() else {
            return Ok(None);
        };

        if is_number_char(ch) {
            return self.read_number().map(Some);
        }

        match Operator::from_char(ch) {
            Some(op) => {
                self.advance();
                Ok(Some(Token::Operator(op)))
            }
            None => Err(CalcError::InvalidCharacter {
                character: ch,
                position: self.position,
            }),
        }
    }
}

fn is_number_char(ch: char) -> bool {
    ch.is_ascii_digit() || ch == '.'
}

/// Converts the whole input into tokens, stopping at the first lexical error.
pub fn tokenize(input: &str) -> CalcResult<Vec<Token>> {
    let mut lexer = Lexer::new(input);
    let mut tokens = Vec::new();

    while let Some(token) = lexer.next_token()? {
        trace!(%token, "lexed token");
        tokens.push(token);
    }

    debug!(count = tokens.len(), "tokenized input");
    Ok(tokens)
}

#[test]
fn test_operators() {
    let mut lexer = Lexer::new("+ - * / ( )");
    assert_eq!(lexer.next_token().unwrap(), Some(Token::Operator(Operator::Plus)));
    assert_eq!(lexer.next_token().unwrap(), Some(Token::Operator(Operator::Minus)));
    assert_eq!(lexer.next_token().unwrap(), Some(Token::Operator(Operator::Star)));
    assert_eq!(lexer.next_token().unwrap(), Some(Token::Operator(Operator::Slash)));
    assert_eq!(lexer.next_token().unwrap(), Some(Token::Operator(Operator::LParen)));
    assert_eq!(lexer.next_token().unwrap(), Some(Token::Operator(Operator::RParen)));
    assert_eq!(lexer.next_token().unwrap(), None);
}

#[test]
fn test_minus_is_never_folded() {
    let mut lexer = Lexer::new("-5");
    assert_eq!(lexer.next_token().unwrap(), Some(Token::Operator(Operator::Minus)));
    assert_eq!(lexer.next_token().unwrap(), Some(Token::Number(5.0)));
    assert_eq!(lexer.next_token().unwrap(), None);
}
