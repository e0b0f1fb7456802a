mod calendar;
mod category;
mod currency;

pub use calendar::{CalendarFields, CalendarTime, ZonedTime};
pub use category::{PluralCategory, UnknownCategory};
pub use currency::{Currency, UnknownCurrency};
