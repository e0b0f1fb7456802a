//! Error types for locale compilation and lookup.

use thiserror::Error;

use crate::parser::ParseError;

/// Errors raised while compiling or looking up a locale.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocaleError {
    /// No built-in locale matches the requested identifier.
    #[error("unknown locale '{id}'")]
    UnknownLocale { id: String, suggestions: Vec<String> },

    /// The identifier is not a well-formed language tag.
    #[error("invalid locale identifier '{id}': {message}")]
    InvalidId { id: String, message: String },

    /// A rule or pattern in a locale descriptor failed to parse.
    #[error("locale '{locale}': invalid {field}: {source}")]
    InvalidData {
        locale: String,
        field: &'static str,
        #[source]
        source: ParseError,
    },

    /// A name table referenced by a pattern has the wrong number of entries.
    #[error("locale '{locale}': table '{table}' has {found} entries, expected {expected}")]
    IncompleteTable {
        locale: String,
        table: &'static str,
        expected: usize,
        found: usize,
    },

    /// A caller-supplied pattern failed to parse.
    #[error("invalid pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: ParseError,
    },
}
