//! Locale-aware formatting of plural categories, numbers, currency amounts,
//! dates and times, driven by static CLDR-style locale data.
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use locfmt::{Currency, PluralCategory};
//!
//! let bg = locfmt::locale("bg_BG").unwrap();
//! assert_eq!(bg.fmt_number(-1234.5, 1), "-1\u{a0}234,5");
//! assert_eq!(bg.cardinal_plural(1.0, 0), PluralCategory::One);
//! assert_eq!(bg.fmt_accounting(-1234.5, 2, Currency::BGN), "(1234,50\u{a0})BGN");
//!
//! let t = NaiveDate::from_ymd_opt(2024, 3, 7)
//!     .unwrap()
//!     .and_hms_opt(14, 5, 0)
//!     .unwrap();
//! assert_eq!(bg.fmt_time_short(&t), "14:05");
//! ```

pub mod data;
pub mod directory;
pub mod interpreter;
pub mod parser;
mod suggest;
pub mod types;

pub use directory::get as locale;
pub use interpreter::{FormatLength, Locale, LocaleError, NameTable, PluralOperands, Symbols};
pub use parser::ParseError;
pub use types::{
    CalendarFields, CalendarTime, Currency, PluralCategory, UnknownCategory, UnknownCurrency,
    ZonedTime,
};
