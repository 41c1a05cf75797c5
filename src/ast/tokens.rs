use std::fmt;

/// A lexical unit produced by the lexer.
///
/// Tokens appear in the same left-to-right order as in the source text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Token {
    /// Numeric literal
    ///
    /// # Examples
    /// ```text
    /// 42
    /// 3.14
    /// .5
    /// 7.
    /// ```
    Number(f64),

    /// Single-character operator or parenthesis
    ///
    /// `-` is always emitted as an operator; whether it negates or subtracts
    /// is decided by the parser.
    Operator(Operator),
}

/// The six single-character symbols the lexer recognises.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// Addition (`+`)
    Plus,

    /// Subtraction or negation (`-`)
    Minus,

    /// Multiplication (`*`)
    Star,

    /// Division (`/`)
    Slash,

    /// Left parenthesis
    LParen,

    /// Right parenthesis
    RParen,
}

impl Operator {
    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            '+' => Some(Operator::Plus),
            '-' => Some(Operator::Minus),
            '*' => Some(Operator::Star),
            '/' => Some(Operator::Slash),
            '(' => Some(Operator::LParen),
            ')' => Some(Operator::RParen),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Operator::Plus => '+',
            Operator::Minus => '-',
            Operator::Star => '*',
            Operator::Slash => '/',
            Operator::LParen => '(',
            Operator::RParen => ')',
        }
    }

    /// True for `+ - * /`, false for parentheses.
    pub fn is_arithmetic(self) -> bool {
        !matches!(self, Operator::LParen | Operator::RParen)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Number(n) => write!(f, "{}", n),
            Token::Operator(op) => write!(f, "{}", op),
        }
    }
}
