//! CLI command implementations.

mod date;
mod locales;
mod names;
mod number;
mod plural;

pub use date::{run_date, DateArgs};
pub use locales::{run_locales, LocalesArgs};
pub use names::{run_names, NamesArgs};
pub use number::{run_number, NumberArgs};
pub use plural::{run_plural, PluralArgs};

use locfmt::Locale;
use serde::Serialize;
use tracing::debug;

use crate::output::CliError;

/// Look up a built-in locale.
fn resolve(id: &str) -> Result<&'static Locale, CliError> {
    let locale = locfmt::locale(id)?;
    debug!(requested = id, resolved = locale.id(), "using locale");
    Ok(locale)
}

/// Parse a decimal number argument.
fn parse_number(input: &str) -> Result<f64, CliError> {
    input.trim().parse::<f64>().map_err(|_| CliError::Number {
        input: input.to_string(),
    })
}

/// Fraction digits written in a number argument: 2 for `"1.50"`.
fn written_fraction_digits(input: &str) -> usize {
    input
        .trim()
        .split_once('.')
        .map_or(0, |(_, fraction)| {
            fraction.chars().take_while(char::is_ascii_digit).count()
        })
}

fn print_json(value: &impl Serialize) -> Result<(), CliError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn written_fraction_digits_counts_after_point() {
        assert_eq!(written_fraction_digits("1.50"), 2);
        assert_eq!(written_fraction_digits("-3"), 0);
        assert_eq!(written_fraction_digits("2.5e3"), 1);
    }

    #[test]
    fn numbers_parse_or_report_input() {
        assert_eq!(parse_number(" -1234.5 ").unwrap(), -1234.5);
        let err = parse_number("1,5").unwrap_err();
        assert!(matches!(err, CliError::Number { input } if input == "1,5"));
    }
}
