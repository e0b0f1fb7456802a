//! Integration tests for currency and accounting formatting.

use locfmt::Currency::{AZN, BAM, BGN, EUR, GBP, TZS, USD};
use locfmt::{Currency, locale};

// =========================================================================
// Symbols
// =========================================================================

#[test]
fn currency_symbols_come_from_the_locale() {
    assert_eq!(locale("bs").unwrap().currency_symbol(BAM), "KM");
    assert_eq!(locale("bs").unwrap().currency_symbol(EUR), "€");
    assert_eq!(locale("chr").unwrap().currency_symbol(GBP), "£");
    assert_eq!(locale("rwk").unwrap().currency_symbol(TZS), "TSh");
    assert_eq!(locale("en_NU").unwrap().currency_symbol(USD), "USD");
}

#[test]
fn currency_codes_parse_case_insensitively() {
    assert_eq!("usd".parse::<Currency>(), Ok(USD));
    assert_eq!(" Eur ".parse::<Currency>(), Ok(EUR));
    let err = "usx".parse::<Currency>().unwrap_err();
    assert!(err.suggestions.contains(&"USD".to_string()));
}

#[test]
fn currency_table_order() {
    assert_eq!(Currency::VARIANTS.len(), 298);
    assert_eq!(Currency::VARIANTS[0].code(), "ADP");
    assert_eq!(Currency::VARIANTS[297].code(), "ZWR");
    assert_eq!(Currency::from_index(USD.index()), Some(USD));
    assert_eq!(Currency::from_index(298), None);
}

// =========================================================================
// Standard Notation
// =========================================================================

#[test]
fn prefix_currency() {
    let en = locale("en_NU").unwrap();
    assert_eq!(en.fmt_currency(1234.5, 2, USD), "USD1,234.50");
    assert_eq!(en.fmt_currency(-5.0, 2, USD), "-USD5.00");
    assert_eq!(locale("chr").unwrap().fmt_currency(1234.5, 2, USD), "$1,234.50");
}

#[test]
fn suffix_currency() {
    assert_eq!(locale("bs").unwrap().fmt_currency(5.0, 0, BAM), "5,00\u{a0}KM");
    assert_eq!(
        locale("bs").unwrap().fmt_currency(1234.5, 1, EUR),
        "1.234,50\u{a0}€"
    );
    assert_eq!(
        locale("es_US").unwrap().fmt_currency(1234.5, 2, USD),
        "1.234,50\u{a0}$"
    );
    assert_eq!(locale("rwk").unwrap().fmt_currency(3.0, 0, USD), "3.00USD");
}

#[test]
fn bulgarian_currency_is_ungrouped() {
    let bg = locale("bg_BG").unwrap();
    assert_eq!(bg.fmt_currency(1234.5, 2, BGN), "1234,50\u{a0}BGN");
    assert_eq!(bg.fmt_currency(-1234.5, 2, BGN), "-1234,50\u{a0}BGN");
}

#[test]
fn azerbaijani_minus_precedes_space_and_symbol() {
    let az = locale("az_Latn_AZ").unwrap();
    assert_eq!(az.fmt_currency(-1234.0, 0, AZN), "-\u{a0}AZN1.234,00");
    assert_eq!(az.fmt_currency(1234.0, 0, AZN), "\u{a0}AZN1.234,00");
}

#[test]
fn padding_only_raises_to_two_digits() {
    let en = locale("en_NU").unwrap();
    assert_eq!(en.fmt_currency(5.0, 0, USD), "USD5.00");
    assert_eq!(en.fmt_currency(5.5, 1, USD), "USD5.50");
    assert_eq!(en.fmt_currency(5.125, 3, USD), "USD5.125");
}

// =========================================================================
// Accounting Notation
// =========================================================================

#[test]
fn accounting_parentheses() {
    let en = locale("en_NU").unwrap();
    assert_eq!(en.fmt_accounting(-1234.5, 2, USD), "(USD1,234.50)");
    assert_eq!(en.fmt_accounting(1234.5, 2, USD), "USD1,234.50");
    assert_eq!(
        locale("chr").unwrap().fmt_accounting(-1234.5, 2, USD),
        "($1,234.50)"
    );
    assert_eq!(
        locale("saq_KE").unwrap().fmt_accounting(-3.0, 0, USD),
        "(USD3.00)"
    );
}

#[test]
fn bulgarian_accounting_keeps_symbol_outside_parentheses() {
    let bg = locale("bg_BG").unwrap();
    assert_eq!(bg.fmt_accounting(-1234.5, 2, BGN), "(1234,50\u{a0})BGN");
    assert_eq!(bg.fmt_accounting(1234.5, 2, BGN), "1234,50\u{a0}BGN");
}

#[test]
fn catalan_accounting() {
    let ca = locale("ca_IT").unwrap();
    assert_eq!(ca.fmt_accounting(-1234.5, 2, EUR), "(1.234,50\u{a0})EUR");
}

#[test]
fn accounting_without_negative_pattern_matches_currency() {
    let az = locale("az_Latn_AZ").unwrap();
    assert_eq!(
        az.fmt_accounting(-1234.0, 0, AZN),
        az.fmt_currency(-1234.0, 0, AZN)
    );
    let bs = locale("bs").unwrap();
    assert_eq!(bs.fmt_accounting(-2.5, 1, BAM), "-2,50\u{a0}KM");
}

#[test]
fn non_finite_amounts() {
    let en = locale("en_NU").unwrap();
    assert_eq!(en.fmt_currency(f64::INFINITY, 2, USD), "USD∞");
    assert_eq!(en.fmt_accounting(f64::NEG_INFINITY, 2, USD), "(USD∞)");
    assert_eq!(en.fmt_currency(f64::NAN, 2, USD), "NaN");
}
