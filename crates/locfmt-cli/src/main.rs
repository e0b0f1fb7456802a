//! `locfmt` CLI entry point.
//!
//! Formats values with the built-in locale data:
//! - `locfmt locales` - List built-in locales and their symbols
//! - `locfmt plural` - Select a plural category
//! - `locfmt number` - Format a number, percentage or currency amount
//! - `locfmt date` - Format a date or time
//! - `locfmt names` - Show month, weekday, period and era names

mod commands;
mod output;

use std::io::stderr;
use std::process::exit;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use commands::{
    run_date, run_locales, run_names, run_number, run_plural, DateArgs, LocalesArgs, NamesArgs,
    NumberArgs, PluralArgs,
};
use tracing_subscriber::EnvFilter;

/// Locale-aware formatting tools.
#[derive(Debug, Parser)]
#[command(name = "locfmt")]
#[command(about = "Locale-aware plural, number, currency and date formatting", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Locale identifier, e.g. bg_BG or az-Latn-AZ
    #[arg(long, env = "LOCFMT_LOCALE", default_value = "en_NU", global = true)]
    pub locale: String,

    /// Color output control
    #[arg(long, value_enum, default_value_t = ColorWhen::Auto, global = true)]
    pub color: ColorWhen,

    /// Log more (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// When to use colored output.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List built-in locales
    Locales(LocalesArgs),
    /// Select the plural category of a number
    Plural(PluralArgs),
    /// Format a number, percentage or currency amount
    Number(NumberArgs),
    /// Format a date or time
    Date(DateArgs),
    /// Show calendar names of the locale
    Names(NamesArgs),
}

/// Set up color output based on user preference.
fn setup_colors(color_when: ColorWhen) {
    match color_when {
        ColorWhen::Auto => {
            // owo-colors checks TTY, NO_COLOR and FORCE_COLOR itself
        }
        ColorWhen::Always => {
            owo_colors::set_override(true);
        }
        ColorWhen::Never => {
            owo_colors::set_override(false);
        }
    }
}

/// Install the stderr log subscriber. `-v` flags take precedence over
/// `RUST_LOG`.
fn setup_logging(verbose: u8) {
    let level = match verbose {
        0 => None,
        1 => Some("info"),
        2 => Some("debug"),
        _ => Some("trace"),
    };
    let filter = match level {
        Some(level) => EnvFilter::new(format!("locfmt={level},locfmt_cli={level}")),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("locfmt=warn")),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(stderr)
        .init();
}

fn main() -> miette::Result<()> {
    let cli = Cli::parse();
    setup_colors(cli.color);
    setup_logging(cli.verbose);

    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .build(),
        )
    }))?;

    let result = match cli.command {
        Commands::Locales(args) => run_locales(&args),
        Commands::Plural(args) => run_plural(&cli.locale, &args),
        Commands::Number(args) => run_number(&cli.locale, &args),
        Commands::Date(args) => run_date(&cli.locale, &args),
        Commands::Names(args) => run_names(&cli.locale, &args),
    };

    match result {
        Ok(code) => exit(code),
        Err(e) => {
            let code = e.exit_code();
            eprintln!("{:?}", miette::Report::new(e));
            exit(code);
        }
    }
}
