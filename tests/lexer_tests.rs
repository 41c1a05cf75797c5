// tests/lexer_tests.rs

use calc_expr::ast::{Operator, Token};
use calc_expr::error::CalcError;
use calc_expr::lexer::{Lexer, tokenize};
use rstest::rstest;

fn op(o: Operator) -> Token {
    Token::Operator(o)
}

// ============================================================================
// Single Character Tokens
// ============================================================================

#[test]
fn test_single_char_tokens() {
    let test_cases = vec![
        ("+", op(Operator::Plus)),
        ("-", op(Operator::Minus)),
        ("*", op(Operator::Star)),
        ("/", op(Operator::Slash)),
        ("(", op(Operator::LParen)),
        (")", op(Operator::RParen)),
    ];

    for (input, expected) in test_cases {
        let mut lexer = Lexer::new(input);
        let token = lexer.next_token().unwrap();
        assert_eq!(token, Some(expected), "Failed for input: {}", input);
        assert_eq!(lexer.next_token().unwrap(), None);
    }
}

// ============================================================================
// Numbers
// ============================================================================

#[rstest]
#[case("0", 0.0)]
#[case("42", 42.0)]
#[case("2.75", 2.75)]
#[case("0.5", 0.5)]
#[case(".5", 0.5)]
#[case("7.", 7.0)]
#[case("007", 7.0)]
#[case("1234567890.0987", 1234567890.0987)]
fn test_number_literals(#[case] input: &str, #[case] expected: f64) {
    assert_eq!(tokenize(input).unwrap(), vec![Token::Number(expected)]);
}

#[rstest]
#[case(".", ".", 0)]
#[case("..", "..", 0)]
#[case("1..2", "1..2", 0)]
#[case("1.2.3", "1.2.3", 0)]
#[case("2 + 3..", "3..", 4)]
#[case("1..2 + 3", "1..2", 0)]
fn test_malformed_numbers(#[case] input: &str, #[case] literal: &str, #[case] position: usize) {
    assert_eq!(
        tokenize(input),
        Err(CalcError::MalformedNumber {
            literal: literal.to_string(),
            position,
        })
    );
}

#[test]
fn test_number_run_is_greedy() {
    // The whole run of digits and dots is one candidate, not "1." then ".2"
    let err = tokenize("1..2").unwrap_err();
    assert!(matches!(err, CalcError::MalformedNumber { ref literal, .. } if literal == "1..2"));
}

// ============================================================================
// Whitespace and sequences
// ============================================================================

#[test]
fn test_whitespace_is_skipped() {
    let tokens = tokenize("  1 \t+\n 2  ").unwrap();
    assert_eq!(
        tokens,
        vec![Token::Number(1.0), op(Operator::Plus), Token::Number(2.0)]
    );
}

#[test]
fn test_whitespace_splits_numbers() {
    let tokens = tokenize("2 3").unwrap();
    assert_eq!(tokens, vec![Token::Number(2.0), Token::Number(3.0)]);
}

#[test]
fn test_full_expression() {
    let tokens = tokenize("(1.5+2)*-3/4").unwrap();
    assert_eq!(
        tokens,
        vec![
            op(Operator::LParen),
            Token::Number(1.5),
            op(Operator::Plus),
            Token::Number(2.0),
            op(Operator::RParen),
            op(Operator::Star),
            op(Operator::Minus),
            Token::Number(3.0),
            op(Operator::Slash),
            Token::Number(4.0),
        ]
    );
}

#[test]
fn test_unary_minus_stays_an_operator() {
    let tokens = tokenize("--5").unwrap();
    assert_eq!(
        tokens,
        vec![op(Operator::Minus), op(Operator::Minus), Token::Number(5.0)]
    );
}

#[test]
fn test_empty_input_has_no_tokens() {
    assert!(tokenize("").unwrap().is_empty());
    assert!(tokenize("   ").unwrap().is_empty());
}

// ============================================================================
// Invalid characters
// ============================================================================

#[rstest]
#[case("2 + a", 'a', 4)]
#[case("2^3", '^', 1)]
#[case("1 % 2", '%', 2)]
#[case("x", 'x', 0)]
#[case("1,5", ',', 1)]
#[case("3 × 4", '×', 2)]
fn test_invalid_characters(#[case] input: &str, #[case] character: char, #[case] position: usize) {
    assert_eq!(
        tokenize(input),
        Err(CalcError::InvalidCharacter {
            character,
            position
        })
    );
}

#[test]
fn test_first_lexical_error_wins() {
    // The malformed literal comes before the bad character
    let err = tokenize("1..2 + a").unwrap_err();
    assert!(matches!(err, CalcError::MalformedNumber { .. }));

    let err = tokenize("a + 1..2").unwrap_err();
    assert!(matches!(err, CalcError::InvalidCharacter { character: 'a', .. }));
}

#[test]
fn test_error_messages() {
    assert_eq!(
        tokenize("2 + a").unwrap_err().to_string(),
        "Invalid character 'a' at position 4"
    );
    assert_eq!(
        tokenize(".").unwrap_err().to_string(),
        "Malformed decimal number '.' at position 0"
    );
}
