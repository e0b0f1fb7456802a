//! Number, percent and currency rendering.
//!
//! The digit core is shared by every style: the absolute value is rendered
//! with the requested fraction digits, digits are assembled least significant
//! first into a buffer with group separators, and the buffer is flipped once.
//! Affixes and minimum-fraction padding come from the compiled pattern.

use std::iter;

use serde::Serialize;

use crate::data::LocaleData;
use crate::parser::{AffixToken, DigitLayout, NumberPattern};

/// Largest number of fraction digits rendered; larger requests are clamped.
pub const MAX_PRECISION: usize = 1000;

/// The number symbols of a compiled locale, with defaults applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Symbols {
    pub decimal: &'static str,
    /// Empty when the locale does not group digits.
    pub group: &'static str,
    pub minus: &'static str,
    pub percent: &'static str,
    pub per_mille: &'static str,
    pub infinity: &'static str,
    pub time_separator: &'static str,
}

impl Symbols {
    /// Read the symbols of `data`, substituting defaults for undefined ones.
    pub fn from_data(data: &LocaleData) -> Self {
        Self {
            decimal: or_default(data.decimal, "."),
            group: data.group,
            minus: or_default(data.minus, "-"),
            percent: data.percent,
            per_mille: data.per_mille,
            infinity: or_default(data.infinity, "∞"),
            time_separator: or_default(data.time_separator, ":"),
        }
    }
}

fn or_default(symbol: &'static str, default: &'static str) -> &'static str {
    if symbol.is_empty() { default } else { symbol }
}

/// Render `n` with `v` fraction digits through `pattern`.
///
/// `currency` replaces `¤` in the affixes. `NaN` renders as `"NaN"` and
/// infinities as the infinity symbol inside the affixes.
pub fn format_number(
    pattern: &NumberPattern,
    symbols: &Symbols,
    n: f64,
    v: usize,
    currency: &str,
) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }

    let negative = n < 0.0;
    let (affixes, implicit_minus) = match (&pattern.negative, negative) {
        (Some(explicit), true) => (explicit, false),
        (None, true) => (&pattern.positive, true),
        (_, false) => (&pattern.positive, false),
    };

    let mut out = String::new();
    if implicit_minus {
        out.push_str(symbols.minus);
    }
    push_affix(&mut out, &affixes.prefix, symbols, currency);
    if n.is_infinite() {
        out.push_str(symbols.infinity);
    } else {
        push_digits(&mut out, pattern.digits, symbols, n.abs(), v);
    }
    push_affix(&mut out, &affixes.suffix, symbols, currency);
    out
}

fn push_affix(out: &mut String, tokens: &[AffixToken], symbols: &Symbols, currency: &str) {
    for token in tokens {
        let text = match token {
            AffixToken::Literal(text) => text.as_str(),
            AffixToken::Minus => symbols.minus,
            AffixToken::Percent => symbols.percent,
            AffixToken::PerMille => symbols.per_mille,
            AffixToken::Currency => currency,
        };
        out.push_str(text);
    }
}

/// Append the digits of the non-negative finite `n`.
fn push_digits(out: &mut String, layout: DigitLayout, symbols: &Symbols, n: f64, v: usize) {
    let precision = v.min(MAX_PRECISION);
    let text = format!("{n:.precision$}");
    let (integer, fraction) = text.split_once('.').unwrap_or((text.as_str(), ""));
    let grouping = layout.grouping.filter(|_| !symbols.group.is_empty());

    let mut buffer: Vec<char> = Vec::with_capacity(text.len() * 2);
    if !fraction.is_empty() {
        buffer.extend(fraction.chars().rev());
        buffer.extend(symbols.decimal.chars().rev());
    }

    let mut integer_digits = integer.chars().rev();
    let width = integer.len().max(layout.min_integer);
    for position in 0..width {
        if position > 0 && grouping.is_some_and(|size| position % size == 0) {
            buffer.extend(symbols.group.chars().rev());
        }
        buffer.push(integer_digits.next().unwrap_or('0'));
    }

    buffer.reverse();
    out.extend(buffer);

    if precision < layout.min_fraction {
        if precision == 0 {
            out.push_str(symbols.decimal);
        }
        out.extend(iter::repeat_n('0', layout.min_fraction - precision));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_number_pattern;

    const ROOT: Symbols = Symbols {
        decimal: ".",
        group: ",",
        minus: "-",
        percent: "%",
        per_mille: "‰",
        infinity: "∞",
        time_separator: ":",
    };

    const COMMA_DECIMAL: Symbols = Symbols {
        decimal: ",",
        group: "\u{a0}",
        ..ROOT
    };

    fn fmt(pattern: &str, symbols: &Symbols, n: f64, v: usize) -> String {
        format_number(&parse_number_pattern(pattern).unwrap(), symbols, n, v, "USD")
    }

    #[test]
    fn groups_integer_digits() {
        assert_eq!(fmt("#,##0.###", &ROOT, 1234.5, 2), "1,234.50");
        assert_eq!(fmt("#,##0.###", &ROOT, 1_234_567.0, 0), "1,234,567");
        assert_eq!(fmt("#,##0.###", &ROOT, 999.0, 0), "999");
    }

    #[test]
    fn multi_byte_symbols_survive_reversal() {
        assert_eq!(
            fmt("#,##0.###", &COMMA_DECIMAL, -1234.5, 1),
            "-1\u{a0}234,5"
        );
    }

    #[test]
    fn empty_group_symbol_disables_grouping() {
        let symbols = Symbols { group: "", ..ROOT };
        assert_eq!(fmt("#,##0.###", &symbols, 1234.0, 0), "1234");
    }

    #[test]
    fn zero_precision_has_no_radix() {
        assert_eq!(fmt("#,##0.###", &ROOT, 2.5, 0), "2");
        assert_eq!(fmt("#,##0.###", &ROOT, 3.5, 0), "4");
    }

    #[test]
    fn negative_zero_has_no_sign() {
        assert_eq!(fmt("#,##0.###", &ROOT, -0.0, 1), "0.0");
    }

    #[test]
    fn minimum_fraction_padding_precedes_suffix() {
        assert_eq!(fmt("#,##0.00\u{a0}¤", &ROOT, 5.0, 0), "5.00\u{a0}USD");
        assert_eq!(fmt("#,##0.00\u{a0}¤", &ROOT, 5.5, 1), "5.50\u{a0}USD");
        assert_eq!(fmt("#,##0.00\u{a0}¤", &ROOT, 5.125, 3), "5.125\u{a0}USD");
    }

    #[test]
    fn explicit_negative_pattern_replaces_minus() {
        assert_eq!(fmt("¤#,##0.00;(¤#,##0.00)", &ROOT, -1234.5, 2), "(USD1,234.50)");
        assert_eq!(fmt("¤#,##0.00;(¤#,##0.00)", &ROOT, 1234.5, 2), "USD1,234.50");
    }

    #[test]
    fn implicit_negative_puts_minus_before_prefix() {
        assert_eq!(fmt("\u{a0}¤#,##0.00", &ROOT, -1.0, 2), "-\u{a0}USD1.00");
    }

    #[test]
    fn percent_has_no_scaling() {
        assert_eq!(fmt("#0\u{a0}%", &ROOT, 12345.0, 0), "12345\u{a0}%");
        let no_glyph = Symbols { percent: "", ..ROOT };
        assert_eq!(fmt("#,##0%", &no_glyph, 50.0, 0), "50");
    }

    #[test]
    fn non_finite_values() {
        assert_eq!(fmt("#,##0.00\u{a0}¤", &ROOT, f64::NAN, 2), "NaN");
        assert_eq!(fmt("#,##0.00\u{a0}¤", &ROOT, f64::INFINITY, 2), "∞\u{a0}USD");
        assert_eq!(fmt("#,##0.###", &ROOT, f64::NEG_INFINITY, 2), "-∞");
    }

    #[test]
    fn minimum_integer_digits_are_zero_padded() {
        assert_eq!(fmt("#,#00.#", &ROOT, 5.0, 0), "05");
    }

    #[test]
    fn precision_is_clamped() {
        let text = fmt("#0.###", &ROOT, 1.0, usize::MAX);
        assert_eq!(text.len(), 2 + MAX_PRECISION);
    }

    #[test]
    fn defaults_replace_undefined_symbols() {
        let data = LocaleData::builder()
            .id("xx")
            .decimal("")
            .group("")
            .minus("")
            .infinity("")
            .time_separator("")
            .build();
        let symbols = Symbols::from_data(&data);
        assert_eq!(symbols.decimal, ".");
        assert_eq!(symbols.group, "");
        assert_eq!(symbols.minus, "-");
        assert_eq!(symbols.infinity, "∞");
        assert_eq!(symbols.time_separator, ":");
    }
}
