//! Date and time rendering.
//!
//! A parsed [`DatePattern`] is walked item by item. Numeric fields are
//! printed directly; textual fields read one of the locale's name tables,
//! chosen by field and pattern width through [`NameTable::for_field`].

use std::fmt::Write;

use tracing::trace;

use crate::data::LocaleData;
use crate::interpreter::locale::Locale;
use crate::parser::{DateField, DateItem, DatePattern};
use crate::types::CalendarFields;

/// A calendar name table of a locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NameTable {
    MonthsAbbreviated,
    MonthsNarrow,
    MonthsWide,
    WeekdaysAbbreviated,
    WeekdaysNarrow,
    WeekdaysShort,
    WeekdaysWide,
    PeriodsAbbreviated,
    PeriodsNarrow,
    PeriodsWide,
    ErasAbbreviated,
    ErasNarrow,
    ErasWide,
}

impl NameTable {
    /// Every table, in [`LocaleData`] field order.
    pub const ALL: [NameTable; 13] = [
        NameTable::MonthsAbbreviated,
        NameTable::MonthsNarrow,
        NameTable::MonthsWide,
        NameTable::WeekdaysAbbreviated,
        NameTable::WeekdaysNarrow,
        NameTable::WeekdaysShort,
        NameTable::WeekdaysWide,
        NameTable::PeriodsAbbreviated,
        NameTable::PeriodsNarrow,
        NameTable::PeriodsWide,
        NameTable::ErasAbbreviated,
        NameTable::ErasNarrow,
        NameTable::ErasWide,
    ];

    /// Field name of the table in [`LocaleData`].
    pub fn name(self) -> &'static str {
        match self {
            NameTable::MonthsAbbreviated => "months_abbreviated",
            NameTable::MonthsNarrow => "months_narrow",
            NameTable::MonthsWide => "months_wide",
            NameTable::WeekdaysAbbreviated => "weekdays_abbreviated",
            NameTable::WeekdaysNarrow => "weekdays_narrow",
            NameTable::WeekdaysShort => "weekdays_short",
            NameTable::WeekdaysWide => "weekdays_wide",
            NameTable::PeriodsAbbreviated => "periods_abbreviated",
            NameTable::PeriodsNarrow => "periods_narrow",
            NameTable::PeriodsWide => "periods_wide",
            NameTable::ErasAbbreviated => "eras_abbreviated",
            NameTable::ErasNarrow => "eras_narrow",
            NameTable::ErasWide => "eras_wide",
        }
    }

    /// Number of entries a complete table has. Month tables carry a leading
    /// sentinel.
    pub fn expected_len(self) -> usize {
        match self {
            NameTable::MonthsAbbreviated | NameTable::MonthsNarrow | NameTable::MonthsWide => 13,
            NameTable::WeekdaysAbbreviated
            | NameTable::WeekdaysNarrow
            | NameTable::WeekdaysShort
            | NameTable::WeekdaysWide => 7,
            NameTable::PeriodsAbbreviated
            | NameTable::PeriodsNarrow
            | NameTable::PeriodsWide
            | NameTable::ErasAbbreviated
            | NameTable::ErasNarrow
            | NameTable::ErasWide => 2,
        }
    }

    /// The entries of this table in `data`.
    pub fn entries(self, data: &LocaleData) -> &'static [&'static str] {
        match self {
            NameTable::MonthsAbbreviated => data.months_abbreviated,
            NameTable::MonthsNarrow => data.months_narrow,
            NameTable::MonthsWide => data.months_wide,
            NameTable::WeekdaysAbbreviated => data.weekdays_abbreviated,
            NameTable::WeekdaysNarrow => data.weekdays_narrow,
            NameTable::WeekdaysShort => data.weekdays_short,
            NameTable::WeekdaysWide => data.weekdays_wide,
            NameTable::PeriodsAbbreviated => data.periods_abbreviated,
            NameTable::PeriodsNarrow => data.periods_narrow,
            NameTable::PeriodsWide => data.periods_wide,
            NameTable::ErasAbbreviated => data.eras_abbreviated,
            NameTable::ErasNarrow => data.eras_narrow,
            NameTable::ErasWide => data.eras_wide,
        }
    }

    /// The table a field reads at a pattern width, if the field is textual
    /// at that width.
    pub fn for_field(field: DateField, width: usize) -> Option<NameTable> {
        let table = match (field, width) {
            (DateField::Era, 1..=3) => NameTable::ErasAbbreviated,
            (DateField::Era, 4) => NameTable::ErasWide,
            (DateField::Era, _) => NameTable::ErasNarrow,
            (DateField::Month | DateField::StandaloneMonth, 3) => NameTable::MonthsAbbreviated,
            (DateField::Month | DateField::StandaloneMonth, 4) => NameTable::MonthsWide,
            (DateField::Month | DateField::StandaloneMonth, 5..) => NameTable::MonthsNarrow,
            (DateField::Weekday | DateField::StandaloneWeekday, 1..=3) => {
                NameTable::WeekdaysAbbreviated
            }
            (DateField::Weekday | DateField::StandaloneWeekday, 4) => NameTable::WeekdaysWide,
            (DateField::Weekday | DateField::StandaloneWeekday, 5) => NameTable::WeekdaysNarrow,
            (DateField::Weekday | DateField::StandaloneWeekday, _) => NameTable::WeekdaysShort,
            (DateField::Period, 1..=3) => NameTable::PeriodsAbbreviated,
            (DateField::Period, 4) => NameTable::PeriodsWide,
            (DateField::Period, _) => NameTable::PeriodsNarrow,
            _ => return None,
        };
        Some(table)
    }
}

/// Name tables `pattern` reads, without duplicates.
pub fn required_tables(pattern: &DatePattern) -> Vec<NameTable> {
    let mut tables = Vec::new();
    let textual = pattern.items.iter().filter_map(|item| match *item {
        DateItem::Field { field, width } => NameTable::for_field(field, width),
        _ => None,
    });
    for table in textual {
        if !tables.contains(&table) {
            tables.push(table);
        }
    }
    tables
}

/// Render `fields` through `pattern` with the names and symbols of `locale`.
///
/// Name tables the pattern reads must be complete; [`Locale::new`] checks
/// this for the locale's own patterns.
pub fn format_datetime(
    pattern: &DatePattern,
    locale: &Locale,
    fields: &CalendarFields<'_>,
) -> String {
    let mut out = String::new();
    for item in &pattern.items {
        match item {
            DateItem::Literal(text) => out.push_str(text),
            DateItem::TimeSeparator => out.push_str(locale.time_separator()),
            DateItem::Field { field, width } => {
                push_field(&mut out, locale, fields, *field, *width);
            }
        }
    }
    out
}

fn push_field(
    out: &mut String,
    locale: &Locale,
    fields: &CalendarFields<'_>,
    field: DateField,
    width: usize,
) {
    if let Some(table) = NameTable::for_field(field, width) {
        let name = match field {
            DateField::Era => pick(locale, table, fields.year > 0),
            DateField::Period => pick(locale, table, fields.hour >= 12),
            DateField::Weekday | DateField::StandaloneWeekday => {
                locale.weekday(table, fields.weekday)
            }
            _ => locale.month(table, fields.month),
        };
        out.push_str(name);
        return;
    }

    match field {
        DateField::Year => push_year(out, fields.year, width),
        DateField::Month | DateField::StandaloneMonth => push_numeric(out, fields.month, width),
        DateField::Day => push_numeric(out, fields.day, width),
        DateField::Hour23 => push_numeric(out, fields.hour, width),
        DateField::Hour12 => {
            let hour = match fields.hour % 12 {
                0 => 12,
                hour => hour,
            };
            push_numeric(out, hour, width);
        }
        DateField::Hour11 => push_numeric(out, fields.hour % 12, width),
        DateField::Hour24 => {
            let hour = if fields.hour == 0 { 24 } else { fields.hour };
            push_numeric(out, hour, width);
        }
        DateField::Minute => push_numeric(out, fields.minute, width),
        DateField::Second => push_numeric(out, fields.second, width),
        DateField::Zone => push_zone(out, locale, &fields.zone, width),
        DateField::Era
        | DateField::Weekday
        | DateField::StandaloneWeekday
        | DateField::Period => {}
    }
}

/// First or second entry of a two-entry table (eras, day periods).
fn pick(locale: &Locale, table: NameTable, second: bool) -> &'static str {
    let entries = table.entries(locale.data());
    entries
        .get(usize::from(second))
        .copied()
        .unwrap_or_default()
}

fn push_numeric(out: &mut String, value: u32, width: usize) {
    if width >= 2 {
        let _ = write!(out, "{value:02}");
    } else {
        let _ = write!(out, "{value}");
    }
}

fn push_year(out: &mut String, year: i32, width: usize) {
    let year = year.unsigned_abs();
    let _ = match width {
        1 => write!(out, "{year}"),
        2 if year > 9 => write!(out, "{:02}", year % 100),
        2 => write!(out, "{year}"),
        _ => write!(out, "{year:0width$}"),
    };
}

fn push_zone(out: &mut String, locale: &Locale, zone: &str, width: usize) {
    if width < 4 {
        out.push_str(zone);
        return;
    }
    match locale.timezone_name(zone) {
        Some(name) => out.push_str(name),
        None => {
            trace!(locale = locale.id(), zone, "no localized zone name, using abbreviation");
            out.push_str(zone);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::borrow::Cow;

    use super::*;
    use crate::parser::parse_date_pattern;

    fn fields(year: i32, hour: u32) -> CalendarFields<'static> {
        CalendarFields {
            year,
            month: 3,
            day: 7,
            weekday: 4,
            hour,
            minute: 5,
            second: 9,
            zone: Cow::Borrowed("CET"),
        }
    }

    fn render(pattern: &str, t: &CalendarFields<'_>) -> String {
        let data = LocaleData::builder()
            .id("xx")
            .time_separator(".")
            .months_abbreviated(&[
                "", "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
            ])
            .weekdays_wide(&[
                "Sunday",
                "Monday",
                "Tuesday",
                "Wednesday",
                "Thursday",
                "Friday",
                "Saturday",
            ])
            .periods_abbreviated(&["AM", "PM"])
            .eras_abbreviated(&["BC", "AD"])
            .timezones(&[("CET", "Central European Time")])
            .build();
        let locale = Locale::new(&data).unwrap();
        format_datetime(&parse_date_pattern(pattern).unwrap(), &locale, t)
    }

    #[test]
    fn textual_fields_read_tables() {
        assert_eq!(render("EEEE d MMM y G", &fields(2024, 10)), "Thursday 7 Mar 2024 AD");
        assert_eq!(render("y G", &fields(0, 10)), "0 BC");
    }

    #[test]
    fn colon_uses_locale_separator() {
        assert_eq!(render("HH:mm:ss", &fields(2024, 9)), "09.05.09");
    }

    #[test]
    fn twelve_hour_clock() {
        assert_eq!(render("h a", &fields(2024, 0)), "12 AM");
        assert_eq!(render("h a", &fields(2024, 12)), "12 PM");
        assert_eq!(render("hh a", &fields(2024, 13)), "01 PM");
        assert_eq!(render("K k", &fields(2024, 0)), "0 24");
    }

    #[test]
    fn year_widths() {
        assert_eq!(render("yy", &fields(2024, 0)), "24");
        assert_eq!(render("yy", &fields(2005, 0)), "05");
        assert_eq!(render("yy", &fields(7, 0)), "7");
        assert_eq!(render("yyyy", &fields(987, 0)), "0987");
        assert_eq!(render("y", &fields(-44, 0)), "44");
    }

    #[test]
    fn zone_names_fall_back_to_abbreviation() {
        assert_eq!(render("z", &fields(2024, 0)), "CET");
        assert_eq!(render("zzzz", &fields(2024, 0)), "Central European Time");
        let mut t = fields(2024, 0);
        t.zone = Cow::Borrowed("PDT");
        assert_eq!(render("zzzz", &t), "PDT");
    }

    #[test]
    fn required_tables_are_deduplicated() {
        let pattern = parse_date_pattern("EEEE d MMM, EEEE a").unwrap();
        assert_eq!(
            required_tables(&pattern),
            vec![
                NameTable::WeekdaysWide,
                NameTable::MonthsAbbreviated,
                NameTable::PeriodsAbbreviated,
            ]
        );
        assert!(required_tables(&parse_date_pattern("d.M.yy.").unwrap()).is_empty());
    }

    #[test]
    fn field_widths_choose_tables() {
        assert_eq!(NameTable::for_field(DateField::Month, 2), None);
        assert_eq!(
            NameTable::for_field(DateField::StandaloneMonth, 5),
            Some(NameTable::MonthsNarrow)
        );
        assert_eq!(
            NameTable::for_field(DateField::Weekday, 6),
            Some(NameTable::WeekdaysShort)
        );
        assert_eq!(NameTable::for_field(DateField::Zone, 4), None);
    }
}
