// tests/format_tests.rs

use calc_expr::output::{FormatOptions, format_result};
use rstest::rstest;

fn fmt(value: f64) -> String {
    format_result(value, &FormatOptions::default())
}

fn fmt_with(value: f64, max_decimals: u32) -> String {
    format_result(value, &FormatOptions::with_max_decimals(max_decimals))
}

#[rstest]
#[case(0.0, "0")]
#[case(7.0, "7")]
#[case(-5.0, "-5")]
#[case(1.75, "1.75")]
#[case(2.5, "2.5")]
#[case(0.1 + 0.2, "0.3")]
#[case(10.0 / 3.0, "3.333333")]
#[case(2.0 / 3.0, "0.666667")]
#[case(-2.0 / 3.0, "-0.666667")]
#[case(1e21, "1000000000000000000000")]
#[case(123456789.5, "123456789.5")]
fn test_default_formatting(#[case] value: f64, #[case] expected: &str) {
    assert_eq!(fmt(value), expected);
}

#[test]
fn test_no_scientific_notation() {
    assert!(!fmt(1e21).contains('e'));
    assert!(!fmt(1e25).contains('e'));
    assert!(!fmt(1e-7).contains('e'));
}

#[rstest]
#[case(-0.0000001)]
#[case(-0.0)]
#[case(0.0000004)]
#[case(-1e-12)]
fn test_no_signed_zero(#[case] value: f64) {
    assert_eq!(fmt(value), "0");
}

#[rstest]
#[case(1.25, 1, "1.3")]
#[case(-1.25, 1, "-1.3")]
#[case(2.5, 0, "3")]
#[case(-2.5, 0, "-3")]
#[case(0.125, 2, "0.13")]
#[case(1.23456, 2, "1.23")]
#[case(1.23456, 0, "1")]
fn test_rounds_half_away_from_zero(
    #[case] value: f64,
    #[case] max_decimals: u32,
    #[case] expected: &str,
) {
    assert_eq!(fmt_with(value, max_decimals), expected);
}

#[test]
fn test_rounds_the_stored_double_exactly() {
    // The double nearest 123456789012.345678 is 123456789012.3456726...
    assert_eq!(fmt(123456789012.345678), "123456789012.345673");
    // 2^52 - 0.5 has more significant digits than a shortest round-trip form keeps
    assert_eq!(fmt(4503599627370495.5), "4503599627370495.5");
    // 1.005 is stored as 1.00499999..., just below the midpoint
    assert_eq!(fmt_with(1.005, 2), "1");
}

#[test]
fn test_trailing_zeros_are_trimmed() {
    assert_eq!(fmt_with(1.5, 10), "1.5");
    assert_eq!(fmt_with(100.0, 10), "100");
    assert_eq!(fmt_with(1.999_999_9, 6), "2");
}

#[test]
fn test_max_decimals_is_clamped() {
    assert_eq!(fmt_with(0.5, 1000), "0.5");
}

#[test]
fn test_non_finite_values_pass_through() {
    assert_eq!(fmt(f64::NAN), "NaN");
    assert_eq!(fmt(f64::INFINITY), "Infinity");
    assert_eq!(fmt(f64::NEG_INFINITY), "-Infinity");
}

#[test]
fn test_formatting_is_idempotent() {
    let values = [
        0.0,
        1.0,
        -1.0,
        0.1 + 0.2,
        10.0 / 3.0,
        -2.0 / 3.0,
        1.0 / 7.0,
        123456.789_012_345,
        -98765.432_1,
        0.000_000_5,
        -0.000_001_5,
        1e15 + 0.3,
        1e21,
        1e30,
        -1e30,
        f64::MAX,
    ];

    for v in values {
        let once = fmt(v);
        let reparsed: f64 = once.parse().unwrap();
        assert_eq!(fmt(reparsed), once, "Not idempotent for {}", v);
    }
}
