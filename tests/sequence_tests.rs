// tests/sequence_tests.rs
//
// The sequence validator runs on its own here, independent of the parser.

use calc_expr::error::{CalcError, ParenMismatch};
use calc_expr::lexer::tokenize;
use calc_expr::sequence::validate_sequence;
use rstest::rstest;

fn check(input: &str) -> Result<(), CalcError> {
    let tokens = tokenize(input).expect("test input should tokenize");
    validate_sequence(&tokens)
}

#[rstest]
#[case("1 + 2")]
#[case("(1 + 2) * 3")]
#[case("((2+3)*4)")]
#[case("-5 + 2")]
#[case("--5")]
#[case("1*-2")]
#[case("3 - -4")]
#[case("(-1)")]
fn test_accepts_well_formed_sequences(#[case] input: &str) {
    assert_eq!(check(input), Ok(()));
}

#[rstest]
#[case("3 ++ 4", '+', '+')]
#[case("3 ** 4", '*', '*')]
#[case("3 // 4", '/', '/')]
#[case("3 +* 4", '+', '*')]
#[case("3 -+ 4", '-', '+')]
#[case("3 */ 4", '*', '/')]
#[case("3 - * 4", '-', '*')]
fn test_rejects_doubled_operators(#[case] input: &str, #[case] first: char, #[case] second: char) {
    assert_eq!(
        check(input),
        Err(CalcError::InvalidOperatorSequence { first, second })
    );
}

#[test]
fn test_operator_sequence_message() {
    assert_eq!(
        check("3 ++ 4").unwrap_err().to_string(),
        "Invalid operator sequence: \"++\""
    );
}

#[test]
fn test_parentheses_break_operator_runs() {
    // `+(` and `)*` are not operator pairs
    assert_eq!(check("1 + (2) * 3"), Ok(()));
}

#[rstest]
#[case("1 + 2)")]
#[case(")1(")]
#[case("(1))")]
fn test_too_many_closing(#[case] input: &str) {
    assert_eq!(
        check(input),
        Err(CalcError::MismatchedParentheses(ParenMismatch::TooManyClosing))
    );
}

#[rstest]
#[case("(1 + 2")]
#[case("((1)")]
#[case("(")]
fn test_too_many_opening(#[case] input: &str) {
    assert_eq!(
        check(input),
        Err(CalcError::MismatchedParentheses(ParenMismatch::TooManyOpening))
    );
}

#[test]
fn test_closing_checked_mid_scan() {
    // Balanced overall, but depth goes negative before the final `(`
    assert_eq!(
        check("1) + (2"),
        Err(CalcError::MismatchedParentheses(ParenMismatch::TooManyClosing))
    );
}

#[test]
fn test_balance_alone_misses_empty_groups() {
    // The parser is the layer that rejects these
    assert_eq!(check("()"), Ok(()));
    assert_eq!(check("(1)(2)"), Ok(()));
    assert_eq!(check("2 3"), Ok(()));
}

#[test]
fn test_empty_sequence_is_fine() {
    assert_eq!(validate_sequence(&[]), Ok(()));
}
