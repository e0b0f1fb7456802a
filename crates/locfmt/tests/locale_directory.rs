//! Integration tests for locale lookup and descriptor compilation.

use locfmt::PluralCategory::{One, Other};
use locfmt::data::{self, LocaleData};
use locfmt::directory::{available, normalize};
use locfmt::{Locale, LocaleError, locale};

// =========================================================================
// Lookup
// =========================================================================

#[test]
fn every_built_in_locale_is_available() {
    assert_eq!(
        available(),
        [
            "az_Latn_AZ",
            "bg_BG",
            "bs",
            "ca_IT",
            "chr",
            "en_NU",
            "es_US",
            "ksf_CM",
            "kw",
            "rwk",
            "saq_KE",
        ]
    );
    for id in available() {
        assert_eq!(locale(id).unwrap().id(), *id);
    }
}

#[test]
fn lookup_accepts_either_separator_and_any_case() {
    assert_eq!(locale("bg-BG").unwrap().id(), "bg_BG");
    assert_eq!(locale("SAQ_ke").unwrap().id(), "saq_KE");
    assert_eq!(locale("az-Latn-AZ").unwrap().id(), "az_Latn_AZ");
}

#[test]
fn lookup_falls_back_to_less_specific_identifiers() {
    assert_eq!(locale("bs_BA").unwrap().id(), "bs");
    assert_eq!(locale("bs_Latn_BA").unwrap().id(), "bs");
    assert_eq!(locale("kw_GB").unwrap().id(), "kw");
}

#[test]
fn lookup_returns_shared_instances() {
    let first = locale("chr").unwrap();
    let second = locale("CHR").unwrap();
    assert!(std::ptr::eq(first, second));
}

#[test]
fn unknown_locale_suggests_alternatives() {
    let err = locale("en_US").unwrap_err();
    assert_eq!(
        err,
        LocaleError::UnknownLocale {
            id: "en_US".to_string(),
            suggestions: vec!["en_NU".to_string(), "es_US".to_string()],
        }
    );
    assert_eq!(err.to_string(), "unknown locale 'en_US'");

    let LocaleError::UnknownLocale { suggestions, .. } = locale("kx").unwrap_err() else {
        panic!("expected unknown locale");
    };
    assert_eq!(suggestions, vec!["kw"]);

    let LocaleError::UnknownLocale { suggestions, .. } = locale("ksf").unwrap_err() else {
        panic!("expected unknown locale");
    };
    assert_eq!(suggestions[0], "ksf_CM");
}

#[test]
fn malformed_identifiers_are_rejected() {
    assert!(matches!(locale(""), Err(LocaleError::InvalidId { .. })));
    assert!(matches!(locale("   "), Err(LocaleError::InvalidId { .. })));
    assert!(matches!(locale("b@d"), Err(LocaleError::InvalidId { .. })));
}

#[test]
fn normalize_produces_underscore_form() {
    assert_eq!(normalize("ca-it").unwrap(), "ca_IT");
    assert_eq!(normalize("az_latn_az").unwrap(), "az_Latn_AZ");
    assert_eq!(normalize("rwk").unwrap(), "rwk");
}

// =========================================================================
// Compilation
// =========================================================================

#[test]
fn built_in_descriptors_compile() {
    for descriptor in data::ALL {
        let compiled = Locale::new(descriptor).unwrap();
        assert_eq!(compiled.id(), descriptor.id);
        assert_eq!(compiled.data().currency_symbols.len(), 298);
    }
}

#[test]
fn builder_descriptor_compiles_with_defaults() {
    let data = LocaleData::builder()
        .id("xx")
        .plurals_cardinal(&[One, Other])
        .cardinal_rules(&[(One, "i = 1 and v = 0")])
        .build();
    let xx = Locale::new(&data).unwrap();
    assert_eq!(xx.cardinal_plural(1.0, 0), One);
    assert_eq!(xx.cardinal_plural(1.0, 1), Other);
    assert_eq!(xx.fmt_percent(12.0, 0), "12%");
    assert_eq!(xx.fmt_currency(5.0, 0, locfmt::Currency::EUR), "EUR\u{a0}5.00");
    assert!(xx.plurals_ordinal().is_empty());
}

#[test]
fn invalid_rule_is_reported_with_field() {
    let data = LocaleData::builder()
        .id("xx")
        .cardinal_rules(&[(One, "n = = 1")])
        .build();
    let err = Locale::new(&data).unwrap_err();
    assert!(matches!(
        err,
        LocaleError::InvalidData {
            field: "cardinal_rules",
            ..
        }
    ));
    assert!(err.to_string().starts_with("locale 'xx': invalid cardinal_rules:"));
}

#[test]
fn invalid_pattern_is_reported_with_field() {
    let data = LocaleData::builder()
        .id("xx")
        .date_short("d 'de MMMM")
        .build();
    assert!(matches!(
        Locale::new(&data),
        Err(LocaleError::InvalidData {
            field: "date_short",
            ..
        })
    ));
}

#[test]
fn pattern_tables_must_be_complete() {
    let data = LocaleData::builder()
        .id("xx")
        .date_full("EEEE, y-MM-dd")
        .weekdays_wide(&["Sun", "Mon", "Tue"])
        .build();
    assert_eq!(
        Locale::new(&data).unwrap_err(),
        LocaleError::IncompleteTable {
            locale: "xx".to_string(),
            table: "weekdays_wide",
            expected: 7,
            found: 3,
        }
    );
}

#[test]
fn currency_table_must_cover_every_currency() {
    let data = LocaleData::builder()
        .id("xx")
        .currency_symbols(&["$"])
        .build();
    let err = Locale::new(&data).unwrap_err();
    assert_eq!(
        err,
        LocaleError::IncompleteTable {
            locale: "xx".to_string(),
            table: "currency_symbols",
            expected: 298,
            found: 1,
        }
    );
    assert_eq!(
        err.to_string(),
        "locale 'xx': table 'currency_symbols' has 1 entries, expected 298"
    );
}
