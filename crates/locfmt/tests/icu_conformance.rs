//! Cross-check integer plural selection against ICU4X.

use icu_locale_core::{Locale as IcuLocale, locale};
use icu_plurals::{PluralCategory as IcuCategory, PluralRuleType, PluralRules};
use locfmt::{Locale, PluralCategory};

fn convert(category: IcuCategory) -> PluralCategory {
    match category {
        IcuCategory::Zero => PluralCategory::Zero,
        IcuCategory::One => PluralCategory::One,
        IcuCategory::Two => PluralCategory::Two,
        IcuCategory::Few => PluralCategory::Few,
        IcuCategory::Many => PluralCategory::Many,
        IcuCategory::Other => PluralCategory::Other,
    }
}

fn cardinal(locale: &Locale, n: f64) -> PluralCategory {
    locale.cardinal_plural(n, 0)
}

fn ordinal(locale: &Locale, n: f64) -> PluralCategory {
    locale.ordinal_plural(n, 0)
}

fn compare(
    id: &str,
    icu_locale: IcuLocale,
    rule_type: PluralRuleType,
    select: fn(&Locale, f64) -> PluralCategory,
) {
    let ours = locfmt::locale(id).unwrap();
    let icu = PluralRules::try_new(icu_locale.into(), rule_type.into()).unwrap();
    for i in 0u32..=1000 {
        let expected = convert(icu.category_for(i64::from(i)));
        assert_eq!(select(ours, f64::from(i)), expected, "{id}: {i}");
    }
}

#[test]
fn cardinal_rules_match_icu() {
    compare("bs", locale!("bs"), PluralRuleType::Cardinal, cardinal);
    compare("bg_BG", locale!("bg"), PluralRuleType::Cardinal, cardinal);
    compare("ca_IT", locale!("ca"), PluralRuleType::Cardinal, cardinal);
    compare("en_NU", locale!("en"), PluralRuleType::Cardinal, cardinal);
    compare("es_US", locale!("es"), PluralRuleType::Cardinal, cardinal);
    compare("az_Latn_AZ", locale!("az"), PluralRuleType::Cardinal, cardinal);
}

#[test]
fn ordinal_rules_match_icu() {
    compare("en_NU", locale!("en"), PluralRuleType::Ordinal, ordinal);
    compare("ca_IT", locale!("ca"), PluralRuleType::Ordinal, ordinal);
    compare("az_Latn_AZ", locale!("az"), PluralRuleType::Ordinal, ordinal);
}
