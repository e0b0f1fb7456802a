//! Calendar field extraction for the date/time formatter.
//!
//! The formatter never talks to `chrono` directly. Anything that can report
//! its civil date, wall-clock time and zone abbreviation implements
//! [`CalendarTime`].

use std::borrow::Cow;
use std::fmt::Display;

use chrono::{DateTime, Datelike, NaiveDateTime, TimeZone, Timelike};

/// Calendar fields of a single instant, as seen on a wall clock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarFields<'a> {
    /// Proleptic Gregorian year; `0` is 1 BCE.
    pub year: i32,
    /// Month of the year, `1..=12`.
    pub month: u32,
    /// Day of the month, `1..=31`.
    pub day: u32,
    /// Day of the week, `0` = Sunday through `6` = Saturday.
    pub weekday: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
    /// Zone abbreviation (`"CET"`, `"UTC"`) or offset text (`"+01:00"`).
    pub zone: Cow<'a, str>,
}

/// A timestamp the date/time formatter can read.
pub trait CalendarTime {
    fn calendar(&self) -> CalendarFields<'_>;
}

fn fields_of<'a>(naive: &NaiveDateTime, zone: Cow<'a, str>) -> CalendarFields<'a> {
    CalendarFields {
        year: naive.year(),
        month: naive.month(),
        day: naive.day(),
        weekday: naive.weekday().num_days_from_sunday(),
        hour: naive.hour(),
        minute: naive.minute(),
        second: naive.second(),
        zone,
    }
}

impl CalendarTime for CalendarFields<'_> {
    fn calendar(&self) -> CalendarFields<'_> {
        CalendarFields {
            zone: Cow::Borrowed(self.zone.as_ref()),
            ..*self
        }
    }
}

impl<Tz: TimeZone> CalendarTime for DateTime<Tz>
where
    Tz::Offset: Display,
{
    fn calendar(&self) -> CalendarFields<'_> {
        fields_of(&self.naive_local(), Cow::Owned(self.offset().to_string()))
    }
}

impl CalendarTime for NaiveDateTime {
    fn calendar(&self) -> CalendarFields<'_> {
        fields_of(self, Cow::Borrowed(""))
    }
}

/// A wall-clock time paired with the zone abbreviation in effect.
///
/// Use this when the abbreviation matters (`"CET"`, `"PDT"`) and the
/// timestamp comes from somewhere that only knows offsets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZonedTime {
    pub local: NaiveDateTime,
    pub zone: String,
}

impl ZonedTime {
    pub fn new(local: NaiveDateTime, zone: impl Into<String>) -> Self {
        Self {
            local,
            zone: zone.into(),
        }
    }
}

impl CalendarTime for ZonedTime {
    fn calendar(&self) -> CalendarFields<'_> {
        fields_of(&self.local, Cow::Borrowed(&self.zone))
    }
}

#[cfg(test)]
mod tests {
    use chrono::{FixedOffset, NaiveDate, Utc};

    use super::*;

    fn naive(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, s)
            .unwrap()
    }

    #[test]
    fn weekday_counts_from_sunday() {
        // 2024-03-03 was a Sunday.
        assert_eq!(naive(2024, 3, 3, 0, 0, 0).calendar().weekday, 0);
        assert_eq!(naive(2024, 3, 9, 0, 0, 0).calendar().weekday, 6);
    }

    #[test]
    fn utc_reports_utc_zone() {
        let t = Utc.from_utc_datetime(&naive(2024, 1, 2, 3, 4, 5));
        let fields = t.calendar();
        assert_eq!(fields.zone, "UTC");
        assert_eq!((fields.hour, fields.minute, fields.second), (3, 4, 5));
    }

    #[test]
    fn fixed_offset_uses_local_wall_clock() {
        let offset = FixedOffset::east_opt(3600).unwrap();
        let t = offset.from_utc_datetime(&naive(2024, 1, 1, 23, 30, 0));
        let fields = t.calendar();
        assert_eq!((fields.year, fields.month, fields.day), (2024, 1, 2));
        assert_eq!(fields.hour, 0);
        assert_eq!(fields.zone, "+01:00");
    }

    #[test]
    fn zoned_time_keeps_abbreviation() {
        let t = ZonedTime::new(naive(2024, 7, 1, 12, 0, 0), "CEST");
        assert_eq!(t.calendar().zone, "CEST");
    }
}
