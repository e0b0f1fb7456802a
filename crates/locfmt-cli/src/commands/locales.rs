//! Implementation of the `locfmt locales` command.

use clap::Args;
use locfmt::directory::available;
use locfmt::{Locale, PluralCategory, Symbols};
use serde::Serialize;

use super::{print_json, resolve};
use crate::output::table::format_locales_table;
use crate::output::CliError;

/// Arguments for the locales command.
#[derive(Debug, Args)]
pub struct LocalesArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for one locale.
#[derive(Debug, Serialize)]
struct LocaleJson {
    id: &'static str,
    symbols: Symbols,
    cardinal: &'static [PluralCategory],
    ordinal: &'static [PluralCategory],
    range: &'static [PluralCategory],
}

/// Run the locales command.
pub fn run_locales(args: &LocalesArgs) -> Result<i32, CliError> {
    let locales = available()
        .iter()
        .map(|id| resolve(id))
        .collect::<Result<Vec<&Locale>, _>>()?;

    if args.json {
        let json: Vec<LocaleJson> = locales
            .iter()
            .map(|locale| LocaleJson {
                id: locale.id(),
                symbols: *locale.symbols(),
                cardinal: locale.plurals_cardinal(),
                ordinal: locale.plurals_ordinal(),
                range: locale.plurals_range(),
            })
            .collect();
        print_json(&json)?;
    } else {
        println!("{}", format_locales_table(&locales));
    }

    Ok(exitcode::OK)
}
