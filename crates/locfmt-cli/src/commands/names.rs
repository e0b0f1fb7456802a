//! Implementation of the `locfmt names` command.

use clap::Args;
use locfmt::NameTable;
use serde::Serialize;

use super::{print_json, resolve};
use crate::output::table::{format_names_table, NameRow};
use crate::output::CliError;

/// Arguments for the names command.
#[derive(Debug, Args)]
pub struct NamesArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for one name table.
#[derive(Debug, Serialize)]
struct NamesJson {
    table: &'static str,
    entries: Option<&'static [&'static str]>,
}

/// Run the names command.
pub fn run_names(locale_id: &str, args: &NamesArgs) -> Result<i32, CliError> {
    let locale = resolve(locale_id)?;
    let rows: Vec<NameRow> = NameTable::ALL
        .iter()
        .map(|table| NameRow {
            table: table.name(),
            entries: locale.names(*table),
        })
        .collect();

    if args.json {
        let json: Vec<NamesJson> = rows
            .iter()
            .map(|row| NamesJson {
                table: row.table,
                entries: row.entries,
            })
            .collect();
        print_json(&json)?;
    } else {
        println!("{}", format_names_table(&rows));
    }

    Ok(exitcode::OK)
}
