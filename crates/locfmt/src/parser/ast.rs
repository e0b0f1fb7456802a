//! Public AST types for plural rules, number patterns and date patterns.
//!
//! These types are public so tooling can inspect compiled locale data.

// =========================================================================
// Plural Rules
// =========================================================================

/// A plural rule condition: relations joined by `and`, alternatives joined
/// by `or`.
///
/// An empty condition always matches.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Condition {
    pub alternatives: Vec<Vec<Relation>>,
}

/// A single relation such as `i % 100 != 12..14`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relation {
    pub operand: Operand,
    pub modulus: Option<u64>,
    /// `true` for `!=`.
    pub negated: bool,
    pub ranges: Vec<RangeItem>,
}

/// CLDR plural operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand {
    /// Absolute value of the source number.
    N,
    /// Integer digits.
    I,
    /// Number of visible fraction digits, with trailing zeros.
    V,
    /// Number of visible fraction digits, without trailing zeros.
    W,
    /// Visible fraction digits, with trailing zeros.
    F,
    /// Visible fraction digits, without trailing zeros.
    T,
    /// Compact decimal exponent.
    C,
    /// Synonym for `C`.
    E,
}

/// An inclusive range; a single value has `start == end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeItem {
    pub start: u64,
    pub end: u64,
}

// =========================================================================
// Number Patterns
// =========================================================================

/// A parsed number pattern like `#,##0.00 ¤;(#,##0.00 ¤)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberPattern {
    pub digits: DigitLayout,
    pub positive: Affixes,
    /// Explicit negative sub-pattern. Only its affixes are used.
    pub negative: Option<Affixes>,
}

/// Digit layout taken from the positive sub-pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DigitLayout {
    /// Primary grouping size, if the pattern groups.
    pub grouping: Option<usize>,
    pub min_integer: usize,
    pub min_fraction: usize,
}

/// Prefix and suffix of a sub-pattern.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Affixes {
    pub prefix: Vec<AffixToken>,
    pub suffix: Vec<AffixToken>,
}

/// A piece of a prefix or suffix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AffixToken {
    Literal(String),
    /// `-`, replaced by the locale minus sign.
    Minus,
    /// `%`, replaced by the locale percent sign.
    Percent,
    /// `‰`, replaced by the locale per-mille sign.
    PerMille,
    /// `¤`, replaced by the currency symbol.
    Currency,
}

// =========================================================================
// Date Patterns
// =========================================================================

/// A parsed date/time pattern like `EEEE, d. MMMM y.`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatePattern {
    pub items: Vec<DateItem>,
}

/// A segment of a date pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateItem {
    /// Literal text, including quoted text with the quotes removed.
    Literal(String),
    /// `:`, replaced by the locale time separator.
    TimeSeparator,
    /// A calendar field and its pattern width (`MMMM` has width 4).
    Field { field: DateField, width: usize },
}

/// Calendar fields a pattern can reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateField {
    /// `G`
    Era,
    /// `y`
    Year,
    /// `M`
    Month,
    /// `L`
    StandaloneMonth,
    /// `d`
    Day,
    /// `E`
    Weekday,
    /// `c`
    StandaloneWeekday,
    /// `a`
    Period,
    /// `H`, 0 to 23.
    Hour23,
    /// `h`, 1 to 12.
    Hour12,
    /// `K`, 0 to 11.
    Hour11,
    /// `k`, 1 to 24.
    Hour24,
    /// `m`
    Minute,
    /// `s`
    Second,
    /// `z`
    Zone,
}

impl DateField {
    /// Map a pattern letter to its field.
    pub fn from_letter(letter: char) -> Option<DateField> {
        let field = match letter {
            'G' => DateField::Era,
            'y' => DateField::Year,
            'M' => DateField::Month,
            'L' => DateField::StandaloneMonth,
            'd' => DateField::Day,
            'E' => DateField::Weekday,
            'c' => DateField::StandaloneWeekday,
            'a' => DateField::Period,
            'H' => DateField::Hour23,
            'h' => DateField::Hour12,
            'K' => DateField::Hour11,
            'k' => DateField::Hour24,
            'm' => DateField::Minute,
            's' => DateField::Second,
            'z' => DateField::Zone,
            _ => return None,
        };
        Some(field)
    }
}
