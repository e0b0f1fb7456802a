//! Locale compilation and evaluation.
//!
//! A [`Locale`] is compiled once from static [`LocaleData`](crate::data::LocaleData)
//! and then answers plural, number, currency and date/time queries.

mod datetime;
mod error;
mod locale;
mod number;
mod plural;

pub use datetime::NameTable;
pub use error::LocaleError;
pub use locale::{FormatLength, Locale};
pub use number::{MAX_PRECISION, Symbols};
pub use plural::{PluralOperands, PluralRules};
