//! Miette diagnostics and exit codes for CLI failures.

use locfmt::{LocaleError, ParseError, UnknownCurrency};
use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// A failed command, reported through miette.
///
/// Fields are read by the miette derive macros, not directly by code.
#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    /// The locale is unknown, malformed, or cannot format what was asked.
    #[error("{message}")]
    #[diagnostic(code(locfmt::locale))]
    Locale {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("{message}")]
    #[diagnostic(code(locfmt::currency))]
    Currency {
        message: String,
        #[help]
        help: Option<String>,
    },

    /// A custom number or date pattern did not parse.
    #[error("invalid pattern: {message}")]
    #[diagnostic(code(locfmt::pattern))]
    Pattern {
        #[source_code]
        src: NamedSource<String>,
        #[label("error here")]
        span: SourceSpan,
        message: String,
    },

    #[error("{message}")]
    #[diagnostic(code(locfmt::usage))]
    Usage { message: String },

    #[error("cannot parse '{input}' as a number")]
    #[diagnostic(
        code(locfmt::number),
        help("use '.' as the decimal separator, e.g. 1234.5")
    )]
    Number { input: String },

    #[error("cannot parse '{input}' as a timestamp: {message}")]
    #[diagnostic(
        code(locfmt::timestamp),
        help("use RFC 3339, e.g. 2024-03-07T14:05:00+01:00")
    )]
    Timestamp { input: String, message: String },

    #[error("cannot write JSON output: {0}")]
    #[diagnostic(code(locfmt::output))]
    Json(#[from] serde_json::Error),
}

impl CliError {
    /// Process exit code for this failure.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Locale { .. }
            | CliError::Currency { .. }
            | CliError::Pattern { .. }
            | CliError::Usage { .. } => exitcode::USAGE,
            CliError::Number { .. } | CliError::Timestamp { .. } => exitcode::DATAERR,
            CliError::Json(_) => exitcode::SOFTWARE,
        }
    }

    /// Point at the failing character of a custom pattern.
    pub fn from_pattern_error(pattern: &str, err: &ParseError) -> Self {
        let (column, message) = match err {
            ParseError::Syntax {
                column, message, ..
            } => (*column, message.clone()),
            ParseError::UnexpectedEof { column, .. } => (*column, "unterminated quote".into()),
        };

        // Patterns are single-line; columns count characters from 1.
        let (offset, len) = pattern
            .char_indices()
            .nth(column.saturating_sub(1))
            .map_or((pattern.len(), 0), |(offset, c)| (offset, c.len_utf8()));

        CliError::Pattern {
            src: NamedSource::new("pattern", pattern.to_string()),
            span: (offset, len).into(),
            message,
        }
    }
}

impl From<LocaleError> for CliError {
    fn from(err: LocaleError) -> Self {
        match err {
            LocaleError::InvalidPattern { pattern, source } => {
                CliError::from_pattern_error(&pattern, &source)
            }
            LocaleError::UnknownLocale {
                ref suggestions, ..
            } => CliError::Locale {
                help: did_you_mean(suggestions),
                message: err.to_string(),
            },
            other => CliError::Locale {
                message: other.to_string(),
                help: None,
            },
        }
    }
}

impl From<UnknownCurrency> for CliError {
    fn from(err: UnknownCurrency) -> Self {
        CliError::Currency {
            help: did_you_mean(&err.suggestions),
            message: err.to_string(),
        }
    }
}

fn did_you_mean(suggestions: &[String]) -> Option<String> {
    if suggestions.is_empty() {
        return None;
    }
    Some(format!("did you mean {}?", suggestions.join(", ")))
}
