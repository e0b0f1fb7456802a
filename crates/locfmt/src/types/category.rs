use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A CLDR plural category.
///
/// `Unknown` is returned by locales that define no rules for an evaluation
/// kind (for example, no ordinal rules). It is a valid answer, not an error.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum PluralCategory {
    Unknown,
    Zero,
    One,
    Two,
    Few,
    Many,
    Other,
}

/// Error returned when a string is not a plural category keyword.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown plural category '{0}'")]
pub struct UnknownCategory(pub String);

impl PluralCategory {
    /// The lowercase CLDR keyword (`"one"`, `"few"`, ...).
    pub fn as_str(self) -> &'static str {
        match self {
            PluralCategory::Unknown => "unknown",
            PluralCategory::Zero => "zero",
            PluralCategory::One => "one",
            PluralCategory::Two => "two",
            PluralCategory::Few => "few",
            PluralCategory::Many => "many",
            PluralCategory::Other => "other",
        }
    }
}

impl fmt::Display for PluralCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PluralCategory {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "unknown" => Ok(PluralCategory::Unknown),
            "zero" => Ok(PluralCategory::Zero),
            "one" => Ok(PluralCategory::One),
            "two" => Ok(PluralCategory::Two),
            "few" => Ok(PluralCategory::Few),
            "many" => Ok(PluralCategory::Many),
            "other" => Ok(PluralCategory::Other),
            _ => Err(UnknownCategory(s.to_string())),
        }
    }
}
