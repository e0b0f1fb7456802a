//! Implementation of the `locfmt plural` command.

use clap::Args;
use locfmt::PluralCategory;
use owo_colors::{OwoColorize, Stream};
use serde::Serialize;

use super::{parse_number, print_json, resolve, written_fraction_digits};
use crate::output::CliError;

/// Arguments for the plural command.
#[derive(Debug, Args)]
pub struct PluralArgs {
    /// The number to classify
    #[arg(allow_hyphen_values = true)]
    pub number: String,

    /// Visible fraction digits. Defaults to the digits written in NUMBER
    #[arg(long)]
    pub visible: Option<usize>,

    /// Use ordinal rules (1st, 2nd, 3rd) instead of cardinal rules
    #[arg(long, conflicts_with = "range_to")]
    pub ordinal: bool,

    /// Classify the range from NUMBER to this value
    #[arg(long, allow_hyphen_values = true)]
    pub range_to: Option<String>,

    /// Visible fraction digits of the range end
    #[arg(long, requires = "range_to")]
    pub visible_to: Option<usize>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "lowercase")]
enum Kind {
    Cardinal,
    Ordinal,
    Range,
}

/// JSON output for plural results.
#[derive(Debug, Serialize)]
struct PluralJson<'a> {
    locale: &'a str,
    kind: Kind,
    number: f64,
    visible: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    range_to: Option<f64>,
    category: PluralCategory,
}

/// Run the plural command.
pub fn run_plural(locale_id: &str, args: &PluralArgs) -> Result<i32, CliError> {
    let locale = resolve(locale_id)?;
    let n = parse_number(&args.number)?;
    let v = args
        .visible
        .unwrap_or_else(|| written_fraction_digits(&args.number));

    let (kind, range_to, category) = match &args.range_to {
        Some(end) => {
            let n2 = parse_number(end)?;
            let v2 = args
                .visible_to
                .unwrap_or_else(|| written_fraction_digits(end));
            (Kind::Range, Some(n2), locale.range_plural(n, v, n2, v2))
        }
        None if args.ordinal => (Kind::Ordinal, None, locale.ordinal_plural(n, v)),
        None => (Kind::Cardinal, None, locale.cardinal_plural(n, v)),
    };

    if args.json {
        print_json(&PluralJson {
            locale: locale.id(),
            kind,
            number: n,
            visible: v,
            range_to,
            category,
        })?;
    } else {
        println!(
            "{}",
            category
                .as_str()
                .if_supports_color(Stream::Stdout, |text| text.bold())
        );
    }

    Ok(exitcode::OK)
}
