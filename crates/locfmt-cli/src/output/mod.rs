//! Terminal output: tables and error diagnostics.

pub mod diagnostic;
pub mod table;

pub use diagnostic::CliError;
