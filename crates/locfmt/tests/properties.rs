//! Property tests for number formatting and plural selection.

use locfmt::Currency::USD;
use locfmt::directory::available;
use locfmt::locale;
use proptest::prelude::*;

fn amount() -> impl Strategy<Value = f64> {
    -1.0e15..1.0e15
}

fn precision() -> impl Strategy<Value = usize> {
    0usize..8
}

proptest! {
    #[test]
    fn english_number_matches_plain_formatting(n in amount(), v in precision()) {
        let formatted = locale("en_NU").unwrap().fmt_number(n, v);
        prop_assert_eq!(formatted.replace(',', ""), format!("{n:.v$}"));
    }

    #[test]
    fn bosnian_number_matches_plain_formatting(n in amount(), v in precision()) {
        let formatted = locale("bs").unwrap().fmt_number(n, v);
        let plain = formatted.replace('.', "").replace(',', ".");
        prop_assert_eq!(plain, format!("{n:.v$}"));
    }

    #[test]
    fn groups_have_three_digits(n in 0.0..1.0e15, v in precision()) {
        let formatted = locale("en_NU").unwrap().fmt_number(n, v);
        let integer = formatted.split('.').next().unwrap_or_default();
        let groups: Vec<&str> = integer.split(',').collect();
        prop_assert!(!groups[0].is_empty() && groups[0].len() <= 3);
        for group in &groups[1..] {
            prop_assert_eq!(group.len(), 3);
        }
    }

    #[test]
    fn currency_has_at_least_two_fraction_digits(n in amount(), v in precision()) {
        let formatted = locale("en_NU").unwrap().fmt_currency(n, v, USD);
        let (_, fraction) = formatted.rsplit_once('.').unwrap();
        prop_assert_eq!(fraction.len(), v.max(2));
        prop_assert_eq!(formatted.starts_with('-'), n < 0.0);
    }

    #[test]
    fn accounting_differs_only_for_negatives(n in amount(), v in precision()) {
        let en = locale("en_NU").unwrap();
        let currency = en.fmt_currency(n, v, USD);
        let accounting = en.fmt_accounting(n, v, USD);
        if n < 0.0 {
            prop_assert_eq!(
                accounting,
                format!("({})", currency.trim_start_matches('-'))
            );
        } else {
            prop_assert_eq!(accounting, currency);
        }
    }

    #[test]
    fn plural_selection_ignores_sign(n in -1.0e6..1.0e6, v in 0usize..4) {
        for id in available() {
            let locale = locale(id).unwrap();
            prop_assert_eq!(locale.cardinal_plural(n, v), locale.cardinal_plural(-n, v));
            prop_assert_eq!(locale.ordinal_plural(n, v), locale.ordinal_plural(-n, v));
        }
    }

    #[test]
    fn arbitrary_values_never_panic(n in any::<f64>(), v in 0usize..40) {
        for id in available() {
            let locale = locale(id).unwrap();
            let _ = locale.fmt_number(n, v);
            let _ = locale.fmt_percent(n, v);
            let _ = locale.fmt_accounting(n, v, USD);
            let _ = locale.cardinal_plural(n, v);
            let _ = locale.range_plural(n, v, -n, v);
        }
    }
}
