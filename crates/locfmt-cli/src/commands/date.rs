//! Implementation of the `locfmt date` command.

use chrono::{DateTime, FixedOffset, Local};
use clap::{Args, ValueEnum};
use locfmt::{CalendarTime, FormatLength, Locale, ZonedTime};
use serde::Serialize;

use super::{print_json, resolve};
use crate::output::CliError;

/// Standard format length.
#[derive(Debug, Clone, Copy, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Length {
    Short,
    Medium,
    Long,
    Full,
}

impl From<Length> for FormatLength {
    fn from(length: Length) -> Self {
        match length {
            Length::Short => FormatLength::Short,
            Length::Medium => FormatLength::Medium,
            Length::Long => FormatLength::Long,
            Length::Full => FormatLength::Full,
        }
    }
}

/// Arguments for the date command.
#[derive(Debug, Args)]
pub struct DateArgs {
    /// Timestamp in RFC 3339 form. Defaults to the current local time
    #[arg(long)]
    pub at: Option<String>,

    /// Zone abbreviation to display instead of the UTC offset (e.g. CET)
    #[arg(long)]
    pub zone: Option<String>,

    /// Format length
    #[arg(long, value_enum, default_value_t = Length::Medium)]
    pub length: Length,

    /// Format the time of day instead of the date
    #[arg(long, conflicts_with = "pattern")]
    pub time: bool,

    /// Custom CLDR date pattern, e.g. "EEEE, d MMMM y"
    #[arg(long, conflicts_with = "length")]
    pub pattern: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for date results.
#[derive(Debug, Serialize)]
struct DateJson<'a> {
    locale: &'a str,
    timestamp: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    zone: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    length: Option<Length>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pattern: Option<&'a str>,
    formatted: String,
}

/// Run the date command.
pub fn run_date(locale_id: &str, args: &DateArgs) -> Result<i32, CliError> {
    let locale = resolve(locale_id)?;
    let timestamp = match &args.at {
        Some(at) => parse_timestamp(at)?,
        None => Local::now().fixed_offset(),
    };

    let formatted = match &args.zone {
        Some(zone) => render(
            locale,
            args,
            &ZonedTime::new(timestamp.naive_local(), zone.as_str()),
        )?,
        None => render(locale, args, &timestamp)?,
    };

    if args.json {
        print_json(&DateJson {
            locale: locale.id(),
            timestamp: timestamp.to_rfc3339(),
            zone: args.zone.as_deref(),
            length: args.pattern.is_none().then_some(args.length),
            pattern: args.pattern.as_deref(),
            formatted,
        })?;
    } else {
        println!("{formatted}");
    }

    Ok(exitcode::OK)
}

fn parse_timestamp(input: &str) -> Result<DateTime<FixedOffset>, CliError> {
    DateTime::parse_from_rfc3339(input.trim()).map_err(|e| CliError::Timestamp {
        input: input.to_string(),
        message: e.to_string(),
    })
}

fn render(locale: &Locale, args: &DateArgs, t: &impl CalendarTime) -> Result<String, CliError> {
    if let Some(pattern) = &args.pattern {
        return Ok(locale.fmt_datetime_pattern(pattern, t)?);
    }
    let length = FormatLength::from(args.length);
    if args.time {
        Ok(locale.fmt_time(length, t))
    } else {
        Ok(locale.fmt_date(length, t))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(pattern: Option<&str>, time: bool) -> DateArgs {
        DateArgs {
            at: None,
            zone: None,
            length: Length::Long,
            time,
            pattern: pattern.map(str::to_string),
            json: false,
        }
    }

    #[test]
    fn timestamps_keep_their_offset() {
        let t = parse_timestamp("2024-03-07T14:05:09+01:00").unwrap();
        let en = locfmt::locale("en_NU").unwrap();
        assert_eq!(render(en, &args(None, true), &t).unwrap(), "14:05:09 +01:00");
        assert_eq!(render(en, &args(None, false), &t).unwrap(), "7 March 2024");
    }

    #[test]
    fn zone_abbreviation_replaces_offset() {
        let t = parse_timestamp("2024-03-07T14:05:09+01:00").unwrap();
        let zoned = ZonedTime::new(t.naive_local(), "MEZ");
        let en = locfmt::locale("en_NU").unwrap();
        assert_eq!(
            render(en, &args(Some("HH:mm zzzz"), false), &zoned).unwrap(),
            "14:05 Central European Standard Time"
        );
    }

    #[test]
    fn bad_timestamps_are_data_errors() {
        let err = parse_timestamp("yesterday").unwrap_err();
        assert_eq!(err.exit_code(), exitcode::DATAERR);
    }

    #[test]
    fn bad_patterns_are_usage_errors() {
        let t = parse_timestamp("2024-03-07T14:05:09Z").unwrap();
        let en = locfmt::locale("en_NU").unwrap();
        let err = render(en, &args(Some("d Q"), false), &t).unwrap_err();
        assert!(matches!(err, CliError::Pattern { .. }));
        assert_eq!(err.exit_code(), exitcode::USAGE);
    }
}
