//! Compiled locales.
//!
//! [`Locale::new`] turns a static [`LocaleData`] descriptor into a locale
//! whose rules and patterns are parsed and whose name tables are checked
//! against the patterns that read them. After that every operation is a
//! pure `&self` method and the locale can be shared freely between threads.

use std::collections::HashMap;

use tracing::debug;

use crate::data::LocaleData;
use crate::interpreter::datetime::{NameTable, format_datetime, required_tables};
use crate::interpreter::error::LocaleError;
use crate::interpreter::number::{Symbols, format_number};
use crate::interpreter::plural::{PluralRules, range_category};
use crate::parser::{
    DatePattern, NumberPattern, ParseError, parse_date_pattern, parse_number_pattern,
};
use crate::types::{CalendarTime, Currency, PluralCategory};

/// Placeholder shown for `¤` when a custom number pattern gets no currency.
const GENERIC_CURRENCY_SIGN: &str = "¤";

/// Length of a standard date or time format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormatLength {
    Short,
    Medium,
    Long,
    Full,
}

impl FormatLength {
    /// Every length, shortest first.
    pub const ALL: [FormatLength; 4] = [
        FormatLength::Short,
        FormatLength::Medium,
        FormatLength::Long,
        FormatLength::Full,
    ];

    fn index(self) -> usize {
        match self {
            FormatLength::Short => 0,
            FormatLength::Medium => 1,
            FormatLength::Long => 2,
            FormatLength::Full => 3,
        }
    }
}

/// A compiled locale: plural rules, number and date formats, and calendar
/// names for one language and region.
///
/// # Example
///
/// ```
/// use locfmt::{Currency, PluralCategory};
///
/// let bs = locfmt::locale("bs").unwrap();
/// assert_eq!(bs.cardinal_plural(3.0, 0), PluralCategory::Few);
/// assert_eq!(bs.fmt_number(1234.5, 2), "1.234,50");
/// assert_eq!(bs.fmt_currency(5.0, 0, Currency::BAM), "5,00\u{a0}KM");
/// ```
#[derive(Debug, Clone)]
pub struct Locale {
    data: LocaleData,
    symbols: Symbols,
    cardinal: PluralRules,
    ordinal: PluralRules,
    number: NumberPattern,
    percent: NumberPattern,
    currency: NumberPattern,
    accounting: NumberPattern,
    /// Indexed by [`FormatLength`].
    dates: [DatePattern; 4],
    times: [DatePattern; 4],
    timezones: HashMap<&'static str, &'static str>,
}

impl Locale {
    /// Compile a locale descriptor.
    ///
    /// Fails if a rule or pattern does not parse, if a name table read by one
    /// of the locale's date or time patterns is incomplete, or if the
    /// currency symbol table does not cover every [`Currency`].
    pub fn new(data: &LocaleData) -> Result<Self, LocaleError> {
        let data = *data;
        let id = data.id;

        let cardinal =
            PluralRules::compile(data.cardinal_rules).map_err(invalid(id, "cardinal_rules"))?;
        let ordinal =
            PluralRules::compile(data.ordinal_rules).map_err(invalid(id, "ordinal_rules"))?;

        let number_pattern = |field: &'static str, source: &str| {
            parse_number_pattern(source).map_err(invalid(id, field))
        };
        let number = number_pattern("number_pattern", data.number_pattern)?;
        let percent = number_pattern("percent_pattern", data.percent_pattern)?;
        let currency = number_pattern("currency_pattern", data.currency_pattern)?;
        let accounting = number_pattern("accounting_pattern", data.accounting_pattern)?;

        let date_pattern = |field: &'static str, source: &str| {
            let pattern = parse_date_pattern(source).map_err(invalid(id, field))?;
            check_tables(&data, &pattern)?;
            Ok::<_, LocaleError>(pattern)
        };
        let dates = [
            date_pattern("date_short", data.date_short)?,
            date_pattern("date_medium", data.date_medium)?,
            date_pattern("date_long", data.date_long)?,
            date_pattern("date_full", data.date_full)?,
        ];
        let times = [
            date_pattern("time_short", data.time_short)?,
            date_pattern("time_medium", data.time_medium)?,
            date_pattern("time_long", data.time_long)?,
            date_pattern("time_full", data.time_full)?,
        ];

        if data.currency_symbols.len() != Currency::VARIANTS.len() {
            return Err(LocaleError::IncompleteTable {
                locale: id.to_string(),
                table: "currency_symbols",
                expected: Currency::VARIANTS.len(),
                found: data.currency_symbols.len(),
            });
        }

        debug!(
            locale = id,
            cardinal_rules = data.cardinal_rules.map_or(0, <[_]>::len),
            ordinal_rules = data.ordinal_rules.map_or(0, <[_]>::len),
            range_rules = data.range_rules.map_or(0, <[_]>::len),
            "compiled locale"
        );

        Ok(Self {
            symbols: Symbols::from_data(&data),
            cardinal,
            ordinal,
            number,
            percent,
            currency,
            accounting,
            dates,
            times,
            timezones: data.timezones.iter().copied().collect(),
            data,
        })
    }

    // =========================================================================
    // Identity and Symbols
    // =========================================================================

    /// The locale identifier, e.g. `"bg_BG"`.
    pub fn id(&self) -> &'static str {
        self.data.id
    }

    /// The descriptor this locale was compiled from.
    pub fn data(&self) -> &LocaleData {
        &self.data
    }

    /// Number symbols, with defaults applied.
    pub fn symbols(&self) -> &Symbols {
        &self.symbols
    }

    pub fn decimal(&self) -> &'static str {
        self.symbols.decimal
    }

    /// Empty when the locale does not group digits.
    pub fn group(&self) -> &'static str {
        self.symbols.group
    }

    pub fn minus(&self) -> &'static str {
        self.symbols.minus
    }

    pub fn percent(&self) -> &'static str {
        self.symbols.percent
    }

    pub fn per_mille(&self) -> &'static str {
        self.symbols.per_mille
    }

    pub fn infinity(&self) -> &'static str {
        self.symbols.infinity
    }

    pub fn time_separator(&self) -> &'static str {
        self.symbols.time_separator
    }

    // =========================================================================
    // Plural Rules
    // =========================================================================

    /// Categories the cardinal rules can produce.
    pub fn plurals_cardinal(&self) -> &'static [PluralCategory] {
        self.data.plurals_cardinal
    }

    /// Categories the ordinal rules can produce.
    pub fn plurals_ordinal(&self) -> &'static [PluralCategory] {
        self.data.plurals_ordinal
    }

    /// Categories a plural range can produce.
    pub fn plurals_range(&self) -> &'static [PluralCategory] {
        self.data.plurals_range
    }

    /// Cardinal category of `n` shown with `v` fraction digits.
    ///
    /// Returns [`PluralCategory::Unknown`] if the locale has no cardinal
    /// rules.
    pub fn cardinal_plural(&self, n: f64, v: usize) -> PluralCategory {
        self.cardinal.select(n, v)
    }

    /// Ordinal category of `n` shown with `v` fraction digits.
    ///
    /// Returns [`PluralCategory::Unknown`] if the locale has no ordinal rules.
    pub fn ordinal_plural(&self, n: f64, v: usize) -> PluralCategory {
        self.ordinal.select(n, v)
    }

    /// Category of the range `n1`..`n2`, from the cardinal categories of its
    /// endpoints.
    ///
    /// Returns [`PluralCategory::Unknown`] if the locale has no range table,
    /// and [`PluralCategory::Other`] for endpoint pairs the table lacks.
    pub fn range_plural(&self, n1: f64, v1: usize, n2: f64, v2: usize) -> PluralCategory {
        let Some(table) = self.data.range_rules else {
            return PluralCategory::Unknown;
        };
        range_category(
            table,
            self.cardinal_plural(n1, v1),
            self.cardinal_plural(n2, v2),
        )
    }

    // =========================================================================
    // Numbers and Currencies
    // =========================================================================

    /// Format `n` with `v` fraction digits.
    pub fn fmt_number(&self, n: f64, v: usize) -> String {
        format_number(&self.number, &self.symbols, n, v, GENERIC_CURRENCY_SIGN)
    }

    /// Format `n` as a percentage. The value is not scaled.
    pub fn fmt_percent(&self, n: f64, v: usize) -> String {
        format_number(&self.percent, &self.symbols, n, v, GENERIC_CURRENCY_SIGN)
    }

    /// Format an amount of `currency`, padded to the pattern's minimum
    /// fraction digits.
    pub fn fmt_currency(&self, n: f64, v: usize, currency: Currency) -> String {
        format_number(
            &self.currency,
            &self.symbols,
            n,
            v,
            self.currency_symbol(currency),
        )
    }

    /// Format an amount of `currency` in accounting notation.
    pub fn fmt_accounting(&self, n: f64, v: usize, currency: Currency) -> String {
        format_number(
            &self.accounting,
            &self.symbols,
            n,
            v,
            self.currency_symbol(currency),
        )
    }

    /// Format `n` with a CLDR number pattern such as `#,##0.00 ¤`.
    ///
    /// `¤` is replaced by the locale's symbol for `currency`, or left as is
    /// when no currency is given.
    pub fn fmt_number_pattern(
        &self,
        pattern: &str,
        n: f64,
        v: usize,
        currency: Option<Currency>,
    ) -> Result<String, LocaleError> {
        let compiled = parse_number_pattern(pattern).map_err(invalid_pattern(pattern))?;
        let sign = currency.map_or(GENERIC_CURRENCY_SIGN, |c| self.currency_symbol(c));
        Ok(format_number(&compiled, &self.symbols, n, v, sign))
    }

    /// Display symbol of `currency` in this locale.
    pub fn currency_symbol(&self, currency: Currency) -> &'static str {
        self.data.currency_symbols[currency.index()]
    }

    // =========================================================================
    // Dates and Times
    // =========================================================================

    pub fn fmt_date_short(&self, t: &impl CalendarTime) -> String {
        self.fmt_date(FormatLength::Short, t)
    }

    pub fn fmt_date_medium(&self, t: &impl CalendarTime) -> String {
        self.fmt_date(FormatLength::Medium, t)
    }

    pub fn fmt_date_long(&self, t: &impl CalendarTime) -> String {
        self.fmt_date(FormatLength::Long, t)
    }

    pub fn fmt_date_full(&self, t: &impl CalendarTime) -> String {
        self.fmt_date(FormatLength::Full, t)
    }

    pub fn fmt_time_short(&self, t: &impl CalendarTime) -> String {
        self.fmt_time(FormatLength::Short, t)
    }

    pub fn fmt_time_medium(&self, t: &impl CalendarTime) -> String {
        self.fmt_time(FormatLength::Medium, t)
    }

    pub fn fmt_time_long(&self, t: &impl CalendarTime) -> String {
        self.fmt_time(FormatLength::Long, t)
    }

    pub fn fmt_time_full(&self, t: &impl CalendarTime) -> String {
        self.fmt_time(FormatLength::Full, t)
    }

    /// Format the date of `t` at the given length.
    pub fn fmt_date(&self, length: FormatLength, t: &impl CalendarTime) -> String {
        format_datetime(&self.dates[length.index()], self, &t.calendar())
    }

    /// Format the time of day of `t` at the given length.
    pub fn fmt_time(&self, length: FormatLength, t: &impl CalendarTime) -> String {
        format_datetime(&self.times[length.index()], self, &t.calendar())
    }

    /// Format `t` with a CLDR date pattern such as `EEEE, d MMMM y`.
    ///
    /// Fails if the pattern does not parse or reads a name table this locale
    /// lacks.
    pub fn fmt_datetime_pattern(
        &self,
        pattern: &str,
        t: &impl CalendarTime,
    ) -> Result<String, LocaleError> {
        let compiled = parse_date_pattern(pattern).map_err(invalid_pattern(pattern))?;
        check_tables(&self.data, &compiled)?;
        Ok(format_datetime(&compiled, self, &t.calendar()))
    }

    /// Localized name of a zone abbreviation such as `"CET"`.
    pub fn timezone_name(&self, abbreviation: &str) -> Option<&'static str> {
        self.timezones.get(abbreviation).copied()
    }

    // =========================================================================
    // Calendar Names
    // =========================================================================

    /// Abbreviated name of `month` (1 = January).
    ///
    /// # Panics
    ///
    /// Panics if `month` is outside `1..=12` or the locale has no such table.
    pub fn month_abbreviated(&self, month: u32) -> &'static str {
        self.month(NameTable::MonthsAbbreviated, month)
    }

    /// Narrow name of `month` (1 = January).
    ///
    /// # Panics
    ///
    /// Panics if `month` is outside `1..=12` or the locale has no such table.
    pub fn month_narrow(&self, month: u32) -> &'static str {
        self.month(NameTable::MonthsNarrow, month)
    }

    /// Wide name of `month` (1 = January).
    ///
    /// # Panics
    ///
    /// Panics if `month` is outside `1..=12` or the locale has no such table.
    pub fn month_wide(&self, month: u32) -> &'static str {
        self.month(NameTable::MonthsWide, month)
    }

    /// The twelve abbreviated month names, January first.
    ///
    /// # Panics
    ///
    /// Panics if the locale has no such table.
    pub fn months_abbreviated(&self) -> &'static [&'static str] {
        self.months(NameTable::MonthsAbbreviated)
    }

    /// The twelve narrow month names, January first.
    ///
    /// # Panics
    ///
    /// Panics if the locale has no such table.
    pub fn months_narrow(&self) -> &'static [&'static str] {
        self.months(NameTable::MonthsNarrow)
    }

    /// The twelve wide month names, January first.
    ///
    /// # Panics
    ///
    /// Panics if the locale has no such table.
    pub fn months_wide(&self) -> &'static [&'static str] {
        self.months(NameTable::MonthsWide)
    }

    /// Abbreviated name of `weekday` (0 = Sunday).
    ///
    /// # Panics
    ///
    /// Panics if `weekday` is outside `0..=6` or the locale has no such table.
    pub fn weekday_abbreviated(&self, weekday: u32) -> &'static str {
        self.weekday(NameTable::WeekdaysAbbreviated, weekday)
    }

    /// Narrow name of `weekday` (0 = Sunday).
    ///
    /// # Panics
    ///
    /// Panics if `weekday` is outside `0..=6` or the locale has no such table.
    pub fn weekday_narrow(&self, weekday: u32) -> &'static str {
        self.weekday(NameTable::WeekdaysNarrow, weekday)
    }

    /// Short name of `weekday` (0 = Sunday).
    ///
    /// # Panics
    ///
    /// Panics if `weekday` is outside `0..=6` or the locale has no such table.
    pub fn weekday_short(&self, weekday: u32) -> &'static str {
        self.weekday(NameTable::WeekdaysShort, weekday)
    }

    /// Wide name of `weekday` (0 = Sunday).
    ///
    /// # Panics
    ///
    /// Panics if `weekday` is outside `0..=6` or the locale has no such table.
    pub fn weekday_wide(&self, weekday: u32) -> &'static str {
        self.weekday(NameTable::WeekdaysWide, weekday)
    }

    /// # Panics
    ///
    /// Panics if the locale has no such table.
    pub fn weekdays_abbreviated(&self) -> &'static [&'static str] {
        self.table(NameTable::WeekdaysAbbreviated)
    }

    /// # Panics
    ///
    /// Panics if the locale has no such table.
    pub fn weekdays_narrow(&self) -> &'static [&'static str] {
        self.table(NameTable::WeekdaysNarrow)
    }

    /// # Panics
    ///
    /// Panics if the locale has no such table.
    pub fn weekdays_short(&self) -> &'static [&'static str] {
        self.table(NameTable::WeekdaysShort)
    }

    /// # Panics
    ///
    /// Panics if the locale has no such table.
    pub fn weekdays_wide(&self) -> &'static [&'static str] {
        self.table(NameTable::WeekdaysWide)
    }

    /// AM and PM markers.
    ///
    /// # Panics
    ///
    /// Panics if the locale has no such table.
    pub fn periods_abbreviated(&self) -> &'static [&'static str] {
        self.table(NameTable::PeriodsAbbreviated)
    }

    /// # Panics
    ///
    /// Panics if the locale has no such table.
    pub fn periods_narrow(&self) -> &'static [&'static str] {
        self.table(NameTable::PeriodsNarrow)
    }

    /// # Panics
    ///
    /// Panics if the locale has no such table.
    pub fn periods_wide(&self) -> &'static [&'static str] {
        self.table(NameTable::PeriodsWide)
    }

    /// Era names, before the common era first.
    ///
    /// # Panics
    ///
    /// Panics if the locale has no such table.
    pub fn eras_abbreviated(&self) -> &'static [&'static str] {
        self.table(NameTable::ErasAbbreviated)
    }

    /// # Panics
    ///
    /// Panics if the locale has no such table.
    pub fn eras_narrow(&self) -> &'static [&'static str] {
        self.table(NameTable::ErasNarrow)
    }

    /// # Panics
    ///
    /// Panics if the locale has no such table.
    pub fn eras_wide(&self) -> &'static [&'static str] {
        self.table(NameTable::ErasWide)
    }

    /// Entries of a name table, or `None` if the locale lacks it.
    ///
    /// Month tables are returned without their leading sentinel.
    pub fn names(&self, table: NameTable) -> Option<&'static [&'static str]> {
        let entries = table.entries(&self.data);
        if entries.is_empty() {
            return None;
        }
        match table {
            NameTable::MonthsAbbreviated | NameTable::MonthsNarrow | NameTable::MonthsWide => {
                entries.get(1..)
            }
            _ => Some(entries),
        }
    }

    fn table(&self, table: NameTable) -> &'static [&'static str] {
        let entries = table.entries(&self.data);
        assert!(
            !entries.is_empty(),
            "locale '{}' has no {} table",
            self.data.id,
            table.name()
        );
        entries
    }

    fn months(&self, table: NameTable) -> &'static [&'static str] {
        self.table(table).get(1..).unwrap_or_default()
    }

    /// Entry `month` of a month table.
    ///
    /// # Panics
    ///
    /// Panics if `month` is outside `1..=12` or the table is missing.
    pub(crate) fn month(&self, table: NameTable, month: u32) -> &'static str {
        let entries = self.table(table);
        match usize::try_from(month) {
            Ok(index @ 1..=12) if index < entries.len() => entries[index],
            _ => panic!(
                "locale '{}': month {month} out of range for {}",
                self.data.id,
                table.name()
            ),
        }
    }

    /// Entry `weekday` of a weekday table, Sunday being 0.
    ///
    /// # Panics
    ///
    /// Panics if `weekday` is outside `0..=6` or the table is missing.
    pub(crate) fn weekday(&self, table: NameTable, weekday: u32) -> &'static str {
        let entries = self.table(table);
        match usize::try_from(weekday) {
            Ok(index @ 0..=6) if index < entries.len() => entries[index],
            _ => panic!(
                "locale '{}': weekday {weekday} out of range for {}",
                self.data.id,
                table.name()
            ),
        }
    }
}

fn invalid(locale: &'static str, field: &'static str) -> impl Fn(ParseError) -> LocaleError {
    move |source| LocaleError::InvalidData {
        locale: locale.to_string(),
        field,
        source,
    }
}

fn invalid_pattern(pattern: &str) -> impl Fn(ParseError) -> LocaleError + '_ {
    move |source| LocaleError::InvalidPattern {
        pattern: pattern.to_string(),
        source,
    }
}

/// Check that every name table `pattern` reads is complete.
fn check_tables(data: &LocaleData, pattern: &DatePattern) -> Result<(), LocaleError> {
    for table in required_tables(pattern) {
        let found = table.entries(data).len();
        if found != table.expected_len() {
            return Err(LocaleError::IncompleteTable {
                locale: data.id.to_string(),
                table: table.name(),
                expected: table.expected_len(),
                found,
            });
        }
    }
    Ok(())
}
