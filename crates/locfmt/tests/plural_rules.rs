//! Integration tests for plural category selection.

use locfmt::PluralCategory::{Few, Many, One, Other, Two, Unknown};
use locfmt::{Locale, PluralCategory, data, locale};

fn cardinal(id: &str, n: f64, v: usize) -> PluralCategory {
    locale(id).unwrap().cardinal_plural(n, v)
}

fn ordinal(id: &str, n: f64) -> PluralCategory {
    locale(id).unwrap().ordinal_plural(n, 0)
}

// =========================================================================
// Cardinal Rules
// =========================================================================

#[test]
fn bosnian_cardinal_integers() {
    assert_eq!(cardinal("bs", 1.0, 0), One);
    assert_eq!(cardinal("bs", 21.0, 0), One);
    assert_eq!(cardinal("bs", 11.0, 0), Other);
    assert_eq!(cardinal("bs", 3.0, 0), Few);
    assert_eq!(cardinal("bs", 22.0, 0), Few);
    assert_eq!(cardinal("bs", 13.0, 0), Other);
    assert_eq!(cardinal("bs", 5.0, 0), Other);
}

#[test]
fn bosnian_cardinal_fractions_use_fraction_digits() {
    assert_eq!(cardinal("bs", 1.1, 1), One);
    assert_eq!(cardinal("bs", 2.3, 1), Few);
    assert_eq!(cardinal("bs", 0.5, 1), Other);
    assert_eq!(cardinal("bs", 1.11, 2), Other);
}

#[test]
fn catalan_one_requires_no_visible_fraction() {
    assert_eq!(cardinal("ca_IT", 1.0, 0), One);
    assert_eq!(cardinal("ca_IT", 2.0, 0), Other);
    assert_eq!(cardinal("ca_IT", 1.0, 1), Other);
}

#[test]
fn n_equals_one_ignores_visible_zeros() {
    assert_eq!(cardinal("bg_BG", 1.0, 0), One);
    assert_eq!(cardinal("bg_BG", 1.0, 2), One);
    assert_eq!(cardinal("bg_BG", 1.5, 1), Other);
    assert_eq!(cardinal("es_US", 1.0, 1), One);
    assert_eq!(cardinal("bg_BG", 0.0, 0), Other);
}

#[test]
fn huge_visible_counts_select_without_panicking() {
    let bs = locale("bs").unwrap();
    for v in [65_535, 65_536, usize::MAX] {
        assert_eq!(bs.cardinal_plural(1.5, v), Other);
        assert_eq!(bs.ordinal_plural(1.5, v), Other);
        assert_eq!(bs.range_plural(1.0, 0, 1.5, v), Other);
    }
    assert_eq!(cardinal("bg_BG", 1.0, 70_000), One);
}

#[test]
fn negative_numbers_use_absolute_value() {
    assert_eq!(cardinal("bs", -21.0, 0), One);
    assert_eq!(cardinal("en_NU", -1.0, 0), One);
}

#[test]
fn cornish_has_dual() {
    assert_eq!(cardinal("kw", 1.0, 0), One);
    assert_eq!(cardinal("kw", 2.0, 0), Two);
    assert_eq!(cardinal("kw", 3.0, 0), Other);
}

#[test]
fn locale_without_rules_is_unknown() {
    let ksf = locale("ksf_CM").unwrap();
    assert_eq!(ksf.cardinal_plural(1.0, 0), Unknown);
    assert_eq!(ksf.ordinal_plural(1.0, 0), Unknown);
    assert_eq!(ksf.range_plural(1.0, 0, 2.0, 0), Unknown);
    assert!(ksf.plurals_cardinal().is_empty());
}

// =========================================================================
// Ordinal Rules
// =========================================================================

#[test]
fn english_ordinals() {
    let expected = [
        (1.0, One),
        (2.0, Two),
        (3.0, Few),
        (4.0, Other),
        (11.0, Other),
        (12.0, Other),
        (13.0, Other),
        (21.0, One),
        (22.0, Two),
        (23.0, Few),
        (101.0, One),
        (111.0, Other),
    ];
    for (n, category) in expected {
        assert_eq!(ordinal("en_NU", n), category, "ordinal of {n}");
    }
}

#[test]
fn catalan_ordinals() {
    assert_eq!(ordinal("ca_IT", 1.0), One);
    assert_eq!(ordinal("ca_IT", 3.0), One);
    assert_eq!(ordinal("ca_IT", 2.0), Two);
    assert_eq!(ordinal("ca_IT", 4.0), Few);
    assert_eq!(ordinal("ca_IT", 5.0), Other);
    assert_eq!(ordinal("ca_IT", 11.0), Other);
}

#[test]
fn azerbaijani_ordinals() {
    let expected = [
        (0.0, Many),
        (1.0, One),
        (2.0, One),
        (3.0, Few),
        (4.0, Few),
        (5.0, One),
        (6.0, Many),
        (9.0, Other),
        (10.0, Other),
        (20.0, One),
        (40.0, Many),
        (60.0, Many),
        (100.0, Few),
    ];
    for (n, category) in expected {
        assert_eq!(ordinal("az_Latn_AZ", n), category, "ordinal of {n}");
    }
}

#[test]
fn empty_ordinal_rules_are_always_other() {
    assert_eq!(ordinal("bs", 3.0), Other);
    assert_eq!(ordinal("bg_BG", 1.0), Other);
}

#[test]
fn missing_ordinal_rules_are_unknown() {
    assert_eq!(ordinal("chr", 1.0), Unknown);
    assert_eq!(ordinal("kw", 1.0), Unknown);
}

// =========================================================================
// Ranges
// =========================================================================

#[test]
fn bosnian_ranges_follow_table() {
    let bs = locale("bs").unwrap();
    assert_eq!(bs.range_plural(1.0, 0, 3.0, 0), Few);
    assert_eq!(bs.range_plural(3.0, 0, 5.0, 0), Other);
    assert_eq!(bs.range_plural(5.0, 0, 21.0, 0), One);
}

#[test]
fn range_pairs_missing_from_table_are_other() {
    let bs = locale("bs").unwrap();
    assert_eq!(bs.range_plural(5.0, 0, 7.0, 0), Other);
    let az = locale("az_Latn_AZ").unwrap();
    assert_eq!(az.range_plural(1.0, 0, 1.0, 0), Other);
    assert_eq!(az.range_plural(5.0, 0, 1.0, 0), One);
}

#[test]
fn empty_range_table_is_other_and_missing_is_unknown() {
    assert_eq!(locale("en_NU").unwrap().range_plural(1.0, 0, 2.0, 0), Other);
    assert_eq!(locale("chr").unwrap().range_plural(1.0, 0, 2.0, 0), Unknown);
}

// =========================================================================
// Declarations
// =========================================================================

#[test]
fn declared_categories_cover_evaluations() {
    for descriptor in data::ALL {
        let locale = Locale::new(descriptor).unwrap();
        for i in 0..=1000 {
            let n = f64::from(i);
            let cardinal = locale.cardinal_plural(n, 0);
            assert!(
                cardinal == Other
                    || locale.plurals_cardinal().contains(&cardinal)
                    || (cardinal == Unknown && descriptor.cardinal_rules.is_none()),
                "{}: cardinal {n} gave undeclared {cardinal}",
                locale.id()
            );
            let ordinal = locale.ordinal_plural(n, 0);
            assert!(
                ordinal == Other
                    || locale.plurals_ordinal().contains(&ordinal)
                    || (ordinal == Unknown && descriptor.ordinal_rules.is_none()),
                "{}: ordinal {n} gave undeclared {ordinal}",
                locale.id()
            );
        }
    }
}

#[test]
fn category_names_round_trip_through_strings() {
    for category in [Unknown, One, Two, Few, Many, Other] {
        assert_eq!(category.as_str().parse::<PluralCategory>(), Ok(category));
    }
    assert!("several".parse::<PluralCategory>().is_err());
}
