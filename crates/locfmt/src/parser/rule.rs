//! CLDR plural rule parser.
//!
//! Grammar (the subset used by CLDR plural data):
//!
//! ```text
//! rule       = condition? samples?
//! condition  = and ('or' and)*
//! and        = relation ('and' relation)*
//! relation   = operand ('%' modulus)? ('=' | '!=') range_list
//! modulus    = value, nonzero
//! range_list = (value | value '..' value) (',' ...)*
//! samples    = '@' ...
//! ```

use winnow::ascii::digit1;
use winnow::combinator::{alt, opt, preceded, separated};
use winnow::prelude::*;
use winnow::token::{one_of, rest};

use super::ast::{Condition, Operand, RangeItem, Relation};
use super::error::ParseError;
use super::{parse_complete, ws};

/// Parse a plural rule condition such as `v = 0 and i % 10 = 1`.
///
/// Trailing `@integer`/`@decimal` sample lists are accepted and discarded.
/// An empty rule parses to a condition that always matches.
pub fn parse_plural_rule(input: &str) -> Result<Condition, ParseError> {
    parse_complete(input, rule)
}

fn rule(input: &mut &str) -> ModalResult<Condition> {
    ws(input)?;
    let alternatives = if input.is_empty() || input.starts_with('@') {
        Vec::new()
    } else {
        separated(1.., and_condition, or_keyword).parse_next(input)?
    };
    ws(input)?;
    let _ = opt(samples).parse_next(input)?;
    Ok(Condition { alternatives })
}

fn and_condition(input: &mut &str) -> ModalResult<Vec<Relation>> {
    separated(1.., relation, and_keyword).parse_next(input)
}

fn or_keyword(input: &mut &str) -> ModalResult<()> {
    (ws, "or", ws).void().parse_next(input)
}

fn and_keyword(input: &mut &str) -> ModalResult<()> {
    (ws, "and", ws).void().parse_next(input)
}

/// Parse a relation: `i % 100 != 12..14`
fn relation(input: &mut &str) -> ModalResult<Relation> {
    let operand = operand(input)?;
    ws(input)?;
    let modulus = opt(preceded(('%', ws), value.verify(|m: &u64| *m > 0))).parse_next(input)?;
    ws(input)?;
    let negated = alt(("!=".value(true), "=".value(false))).parse_next(input)?;
    ws(input)?;
    let ranges = separated(1.., range_item, (ws, ',', ws)).parse_next(input)?;
    Ok(Relation {
        operand,
        modulus,
        negated,
        ranges,
    })
}

fn operand(input: &mut &str) -> ModalResult<Operand> {
    one_of(['n', 'i', 'v', 'w', 'f', 't', 'c', 'e'])
        .map(|c: char| match c {
            'n' => Operand::N,
            'i' => Operand::I,
            'v' => Operand::V,
            'w' => Operand::W,
            'f' => Operand::F,
            't' => Operand::T,
            'c' => Operand::C,
            _ => Operand::E,
        })
        .parse_next(input)
}

/// Parse `value` or `value..value`.
fn range_item(input: &mut &str) -> ModalResult<RangeItem> {
    (value, opt(preceded("..", value)))
        .verify(|(start, end): &(u64, Option<u64>)| end.is_none_or(|end| *start <= end))
        .map(|(start, end)| RangeItem {
            start,
            end: end.unwrap_or(start),
        })
        .parse_next(input)
}

fn value(input: &mut &str) -> ModalResult<u64> {
    digit1.try_map(str::parse::<u64>).parse_next(input)
}

fn samples<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    preceded('@', rest).parse_next(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single(
        operand: Operand,
        modulus: Option<u64>,
        negated: bool,
        ranges: &[(u64, u64)],
    ) -> Relation {
        Relation {
            operand,
            modulus,
            negated,
            ranges: ranges
                .iter()
                .map(|&(start, end)| RangeItem { start, end })
                .collect(),
        }
    }

    #[test]
    fn parses_simple_equality() {
        let condition = parse_plural_rule("n = 1").unwrap();
        assert_eq!(
            condition.alternatives,
            vec![vec![single(Operand::N, None, false, &[(1, 1)])]]
        );
    }

    #[test]
    fn parses_modulus_ranges_and_lists() {
        let condition = parse_plural_rule("i % 10 = 2..4 and i % 100 != 12..14").unwrap();
        assert_eq!(
            condition.alternatives,
            vec![vec![
                single(Operand::I, Some(10), false, &[(2, 4)]),
                single(Operand::I, Some(100), true, &[(12, 14)]),
            ]]
        );

        let condition = parse_plural_rule("i % 10 = 1,2,5 or i % 100 = 20,50").unwrap();
        assert_eq!(condition.alternatives.len(), 2);
        assert_eq!(condition.alternatives[0][0].ranges.len(), 3);
    }

    #[test]
    fn and_binds_tighter_than_or() {
        let condition =
            parse_plural_rule("v = 0 and i % 10 = 1 or f % 10 = 1 and f % 100 != 11").unwrap();
        assert_eq!(condition.alternatives.len(), 2);
        assert_eq!(condition.alternatives[0].len(), 2);
        assert_eq!(condition.alternatives[1].len(), 2);
    }

    #[test]
    fn compact_spacing_is_accepted() {
        let condition = parse_plural_rule("i%10=1").unwrap();
        assert_eq!(
            condition.alternatives,
            vec![vec![single(Operand::I, Some(10), false, &[(1, 1)])]]
        );
    }

    #[test]
    fn samples_are_ignored() {
        let condition = parse_plural_rule("n = 1 @integer 1 @decimal 1.0, 1.00").unwrap();
        assert_eq!(condition.alternatives.len(), 1);

        let other = parse_plural_rule(" @integer 0, 2~16, 100, 1000").unwrap();
        assert!(other.alternatives.is_empty());
    }

    #[test]
    fn empty_rule_always_matches() {
        assert_eq!(parse_plural_rule("").unwrap(), Condition::default());
    }

    #[test]
    fn reversed_range_is_rejected() {
        assert!(parse_plural_rule("n = 4..2").is_err());
    }

    #[test]
    fn zero_modulus_is_rejected() {
        assert!(parse_plural_rule("i % 0 = 1").is_err());
    }

    #[test]
    fn unknown_operand_reports_position() {
        let err = parse_plural_rule("n = 1 and x = 2").unwrap_err();
        match err {
            ParseError::Syntax { line, column, .. } => {
                assert_eq!(line, 1);
                assert!(column > 1);
            }
            other @ ParseError::UnexpectedEof { .. } => panic!("unexpected error: {other:?}"),
        }
    }
}
