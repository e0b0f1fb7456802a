//! Implementation of the `locfmt number` command.

use clap::{Args, ValueEnum};
use locfmt::{Currency, Locale};
use serde::Serialize;

use super::{parse_number, print_json, resolve, written_fraction_digits};
use crate::output::CliError;

/// Standard number format to apply.
#[derive(Debug, Clone, Copy, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Style {
    Number,
    Percent,
    Currency,
    Accounting,
}

/// Arguments for the number command.
#[derive(Debug, Args)]
pub struct NumberArgs {
    /// The number to format
    #[arg(allow_hyphen_values = true)]
    pub number: String,

    /// Fraction digits. Defaults to the digits written in NUMBER
    #[arg(long)]
    pub precision: Option<usize>,

    /// Format style
    #[arg(long, value_enum, default_value_t = Style::Number)]
    pub style: Style,

    /// ISO 4217 currency code (e.g. EUR)
    #[arg(
        long,
        required_if_eq_any([("style", "currency"), ("style", "accounting")])
    )]
    pub currency: Option<String>,

    /// Custom CLDR number pattern, e.g. "#,##0.00 ¤"
    #[arg(long, conflicts_with = "style")]
    pub pattern: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for number results.
#[derive(Debug, Serialize)]
struct NumberJson<'a> {
    locale: &'a str,
    number: f64,
    precision: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    style: Option<Style>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pattern: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    currency: Option<Currency>,
    formatted: String,
}

/// Run the number command.
pub fn run_number(locale_id: &str, args: &NumberArgs) -> Result<i32, CliError> {
    let locale = resolve(locale_id)?;
    let n = parse_number(&args.number)?;
    let v = args
        .precision
        .unwrap_or_else(|| written_fraction_digits(&args.number));
    let currency = args
        .currency
        .as_deref()
        .map(str::parse::<Currency>)
        .transpose()?;

    let formatted = match &args.pattern {
        Some(pattern) => locale.fmt_number_pattern(pattern, n, v, currency)?,
        None => format_style(locale, args.style, n, v, currency)?,
    };

    if args.json {
        print_json(&NumberJson {
            locale: locale.id(),
            number: n,
            precision: v,
            style: args.pattern.is_none().then_some(args.style),
            pattern: args.pattern.as_deref(),
            currency,
            formatted,
        })?;
    } else {
        println!("{formatted}");
    }

    Ok(exitcode::OK)
}

fn format_style(
    locale: &Locale,
    style: Style,
    n: f64,
    v: usize,
    currency: Option<Currency>,
) -> Result<String, CliError> {
    let formatted = match (style, currency) {
        (Style::Number, _) => locale.fmt_number(n, v),
        (Style::Percent, _) => locale.fmt_percent(n, v),
        (Style::Currency, Some(currency)) => locale.fmt_currency(n, v, currency),
        (Style::Accounting, Some(currency)) => locale.fmt_accounting(n, v, currency),
        (Style::Currency | Style::Accounting, None) => {
            return Err(CliError::Usage {
                message: "--currency is required for currency styles".to_string(),
            });
        }
    };
    Ok(formatted)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn styles_use_locale_formats() {
        let bs = locfmt::locale("bs").unwrap();
        let eur = Some(Currency::EUR);
        assert_eq!(
            format_style(bs, Style::Number, 1234.5, 2, None).unwrap(),
            "1.234,50"
        );
        assert_eq!(
            format_style(bs, Style::Currency, 1234.5, 2, eur).unwrap(),
            "1.234,50\u{a0}€"
        );
    }

    #[test]
    fn currency_styles_need_a_currency() {
        let en = locfmt::locale("en_NU").unwrap();
        let err = format_style(en, Style::Accounting, 1.0, 0, None).unwrap_err();
        assert_eq!(err.exit_code(), exitcode::USAGE);
    }
}
