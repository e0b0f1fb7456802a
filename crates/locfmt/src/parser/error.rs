//! Parse error types for rules and patterns.

use thiserror::Error;

/// Failure to parse a plural rule, number pattern or date pattern.
///
/// Lines and columns are 1-based; columns count characters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A syntax error with location information.
    #[error("syntax error at {line}:{column}: {message}")]
    Syntax {
        line: usize,
        column: usize,
        message: String,
    },

    /// A quoted literal was still open at the end of input.
    #[error("unterminated quote starting at {line}:{column}")]
    UnexpectedEof { line: usize, column: usize },
}
