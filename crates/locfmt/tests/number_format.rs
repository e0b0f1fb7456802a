//! Integration tests for number and percent formatting.

use locfmt::{LocaleError, ParseError, locale};

fn number(id: &str, n: f64, v: usize) -> String {
    locale(id).unwrap().fmt_number(n, v)
}

fn percent(id: &str, n: f64, v: usize) -> String {
    locale(id).unwrap().fmt_percent(n, v)
}

// =========================================================================
// Grouping and Decimals
// =========================================================================

#[test]
fn english_grouping() {
    assert_eq!(number("en_NU", 1234.5, 2), "1,234.50");
    assert_eq!(number("en_NU", -1234.5, 1), "-1,234.5");
    assert_eq!(number("en_NU", 1_234_567.891, 3), "1,234,567.891");
    assert_eq!(number("en_NU", 999.0, 0), "999");
    assert_eq!(number("en_NU", 1000.0, 0), "1,000");
}

#[test]
fn bulgarian_groups_with_no_break_space() {
    assert_eq!(number("bg_BG", -1234.5, 1), "-1\u{a0}234,5");
    assert_eq!(number("bg_BG", 1_000_000.0, 0), "1\u{a0}000\u{a0}000");
}

#[test]
fn comma_decimal_locales() {
    assert_eq!(number("bs", 1234.5, 2), "1.234,50");
    assert_eq!(number("ca_IT", 0.25, 2), "0,25");
    assert_eq!(number("az_Latn_AZ", 1234.0, 0), "1.234");
}

#[test]
fn precision_rounds_the_value() {
    assert_eq!(number("en_NU", 1.236, 2), "1.24");
    assert_eq!(number("en_NU", 1.5, 0), "2");
    assert_eq!(number("en_NU", 0.0, 3), "0.000");
}

#[test]
fn negative_zero_has_no_sign() {
    assert_eq!(number("en_NU", -0.0, 0), "0");
}

// =========================================================================
// Undefined Symbols
// =========================================================================

#[test]
fn undefined_symbols_fall_back_to_defaults() {
    let kw = locale("kw").unwrap();
    assert_eq!(kw.decimal(), ".");
    assert_eq!(kw.group(), "");
    assert_eq!(kw.minus(), "-");
    assert_eq!(kw.infinity(), "∞");
    assert_eq!(kw.fmt_number(1234.5, 1), "1234.5");
    assert_eq!(kw.fmt_number(-2.0, 0), "-2");
}

#[test]
fn undefined_minus_keeps_grouping_symbols() {
    assert_eq!(number("ksf_CM", -1234.5, 1), "-1\u{a0}234,5");
}

// =========================================================================
// Percent
// =========================================================================

#[test]
fn percent_is_not_scaled() {
    assert_eq!(percent("en_NU", 45.0, 0), "45%");
    assert_eq!(percent("en_NU", 1234.0, 0), "1234%");
    assert_eq!(percent("bg_BG", 12.5, 1), "12,5%");
}

#[test]
fn percent_with_no_break_space() {
    assert_eq!(percent("bs", 50.0, 0), "50\u{a0}%");
    assert_eq!(percent("es_US", -7.0, 0), "-7\u{a0}%");
}

#[test]
fn percent_pattern_without_glyph() {
    assert_eq!(percent("kw", 12.0, 0), "12");
}

// =========================================================================
// Non-finite Values
// =========================================================================

#[test]
fn non_finite_values_do_not_panic() {
    let en = locale("en_NU").unwrap();
    assert_eq!(en.fmt_number(f64::INFINITY, 2), "∞");
    assert_eq!(en.fmt_number(f64::NEG_INFINITY, 2), "-∞");
    assert_eq!(en.fmt_number(f64::NAN, 2), "NaN");
    assert_eq!(en.fmt_percent(f64::INFINITY, 0), "∞%");
}

#[test]
fn huge_values_and_precisions() {
    let en = locale("en_NU").unwrap();
    let max = en.fmt_number(f64::MAX, 0);
    assert_eq!(max.chars().filter(|c| c.is_ascii_digit()).count(), 309);
    let long = en.fmt_number(0.1, 50_000);
    assert_eq!(long.len(), 2 + locfmt::interpreter::MAX_PRECISION);
}

// =========================================================================
// Custom Patterns
// =========================================================================

#[test]
fn custom_number_pattern() {
    let bs = locale("bs").unwrap();
    assert_eq!(
        bs.fmt_number_pattern("#,##0.00 ¤", 1234.5, 1, Some(locfmt::Currency::EUR))
            .unwrap(),
        "1.234,50 €"
    );
    assert_eq!(
        bs.fmt_number_pattern("#0‰", 12.0, 0, None).unwrap(),
        "12‰"
    );
    assert_eq!(
        bs.fmt_number_pattern("¤#0", 3.0, 0, None).unwrap(),
        "¤3"
    );
    assert_eq!(
        bs.fmt_number_pattern("#0' o''clock'", 5.0, 0, None).unwrap(),
        "5 o'clock"
    );
}

#[test]
fn invalid_custom_number_pattern() {
    let en = locale("en_NU").unwrap();
    let err = en.fmt_number_pattern("#0'x", 1.0, 0, None).unwrap_err();
    assert_eq!(
        err,
        LocaleError::InvalidPattern {
            pattern: "#0'x".to_string(),
            source: ParseError::UnexpectedEof { line: 1, column: 3 },
        }
    );
}
