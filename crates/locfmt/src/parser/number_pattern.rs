//! CLDR number pattern parser.
//!
//! Parses patterns such as `#,##0.###`, `#0 %`, `¤#,##0.00` and
//! `¤#,##0.00;(¤#,##0.00)`.

use winnow::combinator::{alt, delimited, opt, preceded, repeat};
use winnow::error::{ContextError, ErrMode};
use winnow::prelude::*;
use winnow::token::{none_of, take_while};

use super::ast::{AffixToken, Affixes, DigitLayout, NumberPattern};
use super::error::ParseError;
use super::parse_complete;

/// Parse a number pattern with an optional `;`-separated negative sub-pattern.
///
/// The digit layout (grouping, minimum integer and fraction digits) comes from
/// the positive sub-pattern; only the affixes of the negative one are kept.
pub fn parse_number_pattern(input: &str) -> Result<NumberPattern, ParseError> {
    parse_complete(input, pattern)
}

fn pattern(input: &mut &str) -> ModalResult<NumberPattern> {
    let (positive, digits) = sub_pattern(input)?;
    let negative = opt(preceded(';', sub_pattern)).parse_next(input)?;
    Ok(NumberPattern {
        digits,
        positive,
        negative: negative.map(|(affixes, _)| affixes),
    })
}

fn sub_pattern(input: &mut &str) -> ModalResult<(Affixes, DigitLayout)> {
    let prefix = affix(input)?;
    let digits = digit_layout(input)?;
    let suffix = affix(input)?;
    Ok((Affixes { prefix, suffix }, digits))
}

/// Parse the numeric core (`#,##0.00`) into a digit layout.
fn digit_layout(input: &mut &str) -> ModalResult<DigitLayout> {
    let body: &str =
        take_while(1.., |c: char| matches!(c, '#' | '0' | ',' | '.')).parse_next(input)?;
    let (integer, fraction) = match body.split_once('.') {
        Some((integer, fraction)) => (integer, fraction),
        None => (body, ""),
    };
    if fraction.contains(['.', ',']) || !integer.contains(['#', '0']) {
        return Err(ErrMode::Backtrack(ContextError::new()));
    }
    let grouping = integer
        .rfind(',')
        .map(|pos| integer.len() - pos - 1)
        .filter(|&size| size > 0);
    if integer.contains(',') && grouping.is_none() {
        return Err(ErrMode::Backtrack(ContextError::new()));
    }
    Ok(DigitLayout {
        grouping,
        min_integer: integer.chars().filter(|&c| c == '0').count(),
        min_fraction: fraction.chars().filter(|&c| c == '0').count(),
    })
}

/// Parse a prefix or suffix.
fn affix(input: &mut &str) -> ModalResult<Vec<AffixToken>> {
    let tokens: Vec<AffixToken> = repeat(0.., affix_token).parse_next(input)?;
    Ok(merge_literals(tokens))
}

fn affix_token(input: &mut &str) -> ModalResult<AffixToken> {
    alt((
        '¤'.value(AffixToken::Currency),
        '%'.value(AffixToken::Percent),
        '‰'.value(AffixToken::PerMille),
        '-'.value(AffixToken::Minus),
        quoted.map(AffixToken::Literal),
        none_of(('0'..='9', ['#', ',', '.', ';', '\'', '@']))
            .map(|c: char| AffixToken::Literal(c.to_string())),
    ))
    .parse_next(input)
}

/// Parse a quoted literal: `'text'`, with `''` standing for a single quote
/// both inside and outside quoted text.
pub(super) fn quoted(input: &mut &str) -> ModalResult<String> {
    alt((
        "''".value(String::from("'")),
        delimited('\'', quoted_text, '\''),
    ))
    .parse_next(input)
}

fn quoted_text(input: &mut &str) -> ModalResult<String> {
    repeat(
        1..,
        alt(("''".value("'"), take_while(1.., |c: char| c != '\''))),
    )
    .parse_next(input)
}

/// Merge adjacent literal tokens.
fn merge_literals(tokens: Vec<AffixToken>) -> Vec<AffixToken> {
    let mut result = Vec::with_capacity(tokens.len());

    for token in tokens {
        match token {
            AffixToken::Literal(text) => {
                if let Some(AffixToken::Literal(prev)) = result.last_mut() {
                    prev.push_str(&text);
                } else {
                    result.push(AffixToken::Literal(text));
                }
            }
            other => result.push(other),
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn literal(s: &str) -> AffixToken {
        AffixToken::Literal(s.to_string())
    }

    #[test]
    fn decimal_pattern_groups_by_three() {
        let pattern = parse_number_pattern("#,##0.###").unwrap();
        assert_eq!(
            pattern.digits,
            DigitLayout {
                grouping: Some(3),
                min_integer: 1,
                min_fraction: 0,
            }
        );
        assert_eq!(pattern.positive, Affixes::default());
        assert_eq!(pattern.negative, None);
    }

    #[test]
    fn ungrouped_pattern_has_no_grouping() {
        let pattern = parse_number_pattern("#0.00").unwrap();
        assert_eq!(pattern.digits.grouping, None);
        assert_eq!(pattern.digits.min_fraction, 2);
    }

    #[test]
    fn currency_suffix_with_no_break_space() {
        let pattern = parse_number_pattern("#,##0.00\u{a0}¤").unwrap();
        assert!(pattern.positive.prefix.is_empty());
        assert_eq!(
            pattern.positive.suffix,
            vec![literal("\u{a0}"), AffixToken::Currency]
        );
    }

    #[test]
    fn accounting_negative_sub_pattern_keeps_affixes() {
        let pattern = parse_number_pattern("¤#,##0.00;(¤#,##0.00)").unwrap();
        assert_eq!(pattern.positive.prefix, vec![AffixToken::Currency]);
        let negative = pattern.negative.unwrap();
        assert_eq!(negative.prefix, vec![literal("("), AffixToken::Currency]);
        assert_eq!(negative.suffix, vec![literal(")")]);
    }

    #[test]
    fn percent_and_per_mille_tokens() {
        let pattern = parse_number_pattern("#0\u{a0}%").unwrap();
        assert_eq!(
            pattern.positive.suffix,
            vec![literal("\u{a0}"), AffixToken::Percent]
        );
        let pattern = parse_number_pattern("#0‰").unwrap();
        assert_eq!(pattern.positive.suffix, vec![AffixToken::PerMille]);
    }

    #[test]
    fn quoted_literals_are_unwrapped() {
        let pattern = parse_number_pattern("'#'#0' pcs'").unwrap();
        assert_eq!(pattern.positive.prefix, vec![literal("#")]);
        assert_eq!(pattern.positive.suffix, vec![literal(" pcs")]);
    }

    #[test]
    fn doubled_quote_inside_quoted_text() {
        let pattern = parse_number_pattern("#0' o''clock'").unwrap();
        assert_eq!(pattern.positive.suffix, vec![literal(" o'clock")]);
        let pattern = parse_number_pattern("'''n'#0").unwrap();
        assert_eq!(pattern.positive.prefix, vec![literal("'n")]);
    }

    #[test]
    fn explicit_minus_in_negative_pattern() {
        let pattern = parse_number_pattern("#0;#0-").unwrap();
        assert_eq!(pattern.negative.unwrap().suffix, vec![AffixToken::Minus]);
    }

    #[test]
    fn missing_digits_is_an_error() {
        assert!(parse_number_pattern("¤").is_err());
        assert!(parse_number_pattern("#,##0.0,0").is_err());
    }

    #[test]
    fn unterminated_quote_is_reported() {
        assert_eq!(
            parse_number_pattern("#0'abc"),
            Err(ParseError::UnexpectedEof { line: 1, column: 3 })
        );
    }
}
