//! Static locale descriptors.
//!
//! Each supported locale is one `const` [`LocaleData`] holding its symbols,
//! plural rules, number and date patterns (CLDR syntax), and name tables.
//! Nothing here is evaluated; [`Locale::new`](crate::Locale::new) compiles a
//! descriptor into a ready-to-use locale.

use bon::Builder;

use crate::types::{Currency, PluralCategory};

mod az_latn_az;
mod bg_bg;
mod bs;
mod ca_it;
mod chr;
mod en_nu;
mod es_us;
mod ksf_cm;
mod kw;
mod rwk;
mod saq_ke;

pub use az_latn_az::AZ_LATN_AZ;
pub use bg_bg::BG_BG;
pub use bs::BS;
pub use ca_it::CA_IT;
pub use chr::CHR;
pub use en_nu::EN_NU;
pub use es_us::ES_US;
pub use ksf_cm::KSF_CM;
pub use kw::KW;
pub use rwk::RWK;
pub use saq_ke::SAQ_KE;

/// Every built-in locale, sorted by identifier.
pub const ALL: &[&LocaleData] = &[
    &AZ_LATN_AZ,
    &BG_BG,
    &BS,
    &CA_IT,
    &CHR,
    &EN_NU,
    &ES_US,
    &KSF_CM,
    &KW,
    &RWK,
    &SAQ_KE,
];

/// Ordered `(category, condition)` plural rules in CLDR syntax.
pub type RuleTable = &'static [(PluralCategory, &'static str)];

/// `(start, end, result)` plural range entries.
pub type RangeTable = &'static [(PluralCategory, PluralCategory, PluralCategory)];

/// Raw, uncompiled description of one locale.
///
/// Empty symbol strings mean "not defined by this locale"; the compiled
/// locale substitutes defaults. Empty name tables mean the locale has no such
/// table. The builder defaults to root-locale symbols and numeric date
/// patterns, so a builder-made locale only needs name tables if its patterns
/// use names.
///
/// # Example
///
/// ```
/// use locfmt::data::LocaleData;
/// use locfmt::{Locale, PluralCategory};
///
/// let data = LocaleData::builder()
///     .id("xx")
///     .cardinal_rules(&[(PluralCategory::One, "n = 1")])
///     .build();
/// let locale = Locale::new(&data).unwrap();
/// assert_eq!(locale.cardinal_plural(1.0, 0), PluralCategory::One);
/// assert_eq!(locale.fmt_number(1234.5, 1), "1,234.5");
/// ```
#[derive(Debug, Clone, Copy, Builder)]
pub struct LocaleData {
    pub id: &'static str,

    #[builder(default = ".")]
    pub decimal: &'static str,
    #[builder(default = ",")]
    pub group: &'static str,
    #[builder(default = "-")]
    pub minus: &'static str,
    #[builder(default = "%")]
    pub percent: &'static str,
    #[builder(default = "‰")]
    pub per_mille: &'static str,
    #[builder(default = "∞")]
    pub infinity: &'static str,
    #[builder(default = ":")]
    pub time_separator: &'static str,

    /// Categories the cardinal rules can produce.
    #[builder(default)]
    pub plurals_cardinal: &'static [PluralCategory],
    /// Categories the ordinal rules can produce.
    #[builder(default)]
    pub plurals_ordinal: &'static [PluralCategory],
    /// Categories the range table can produce.
    #[builder(default)]
    pub plurals_range: &'static [PluralCategory],
    /// `None` when the locale defines no cardinal rules.
    pub cardinal_rules: Option<RuleTable>,
    /// `None` when the locale defines no ordinal rules.
    pub ordinal_rules: Option<RuleTable>,
    /// `None` when the locale defines no range rules.
    pub range_rules: Option<RangeTable>,

    #[builder(default = "#,##0.###")]
    pub number_pattern: &'static str,
    #[builder(default = "#,##0%")]
    pub percent_pattern: &'static str,
    #[builder(default = "¤\u{a0}#,##0.00")]
    pub currency_pattern: &'static str,
    #[builder(default = "¤\u{a0}#,##0.00")]
    pub accounting_pattern: &'static str,

    #[builder(default = "y-MM-dd")]
    pub date_short: &'static str,
    #[builder(default = "y-MM-dd")]
    pub date_medium: &'static str,
    #[builder(default = "y-MM-dd")]
    pub date_long: &'static str,
    #[builder(default = "y-MM-dd")]
    pub date_full: &'static str,
    #[builder(default = "HH:mm")]
    pub time_short: &'static str,
    #[builder(default = "HH:mm:ss")]
    pub time_medium: &'static str,
    #[builder(default = "HH:mm:ss z")]
    pub time_long: &'static str,
    #[builder(default = "HH:mm:ss zzzz")]
    pub time_full: &'static str,

    /// 13 entries; index 0 is an unused sentinel.
    #[builder(default)]
    pub months_abbreviated: &'static [&'static str],
    #[builder(default)]
    pub months_narrow: &'static [&'static str],
    #[builder(default)]
    pub months_wide: &'static [&'static str],
    /// 7 entries starting with Sunday.
    #[builder(default)]
    pub weekdays_abbreviated: &'static [&'static str],
    #[builder(default)]
    pub weekdays_narrow: &'static [&'static str],
    #[builder(default)]
    pub weekdays_short: &'static [&'static str],
    #[builder(default)]
    pub weekdays_wide: &'static [&'static str],
    /// AM, PM.
    #[builder(default)]
    pub periods_abbreviated: &'static [&'static str],
    #[builder(default)]
    pub periods_narrow: &'static [&'static str],
    #[builder(default)]
    pub periods_wide: &'static [&'static str],
    /// Before the common era, common era.
    #[builder(default)]
    pub eras_abbreviated: &'static [&'static str],
    #[builder(default)]
    pub eras_narrow: &'static [&'static str],
    #[builder(default)]
    pub eras_wide: &'static [&'static str],

    /// Zone abbreviation to localized zone name.
    #[builder(default)]
    pub timezones: &'static [(&'static str, &'static str)],
    /// Display symbol per [`Currency`] index. Builder-made descriptors
    /// without a table display ISO codes.
    #[builder(default = Currency::CODES)]
    pub currency_symbols: &'static [&'static str],
}
