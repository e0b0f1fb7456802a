//! CLDR plural rule evaluation.
//!
//! A number is reduced to its plural operands once, then each rule condition
//! of the locale is tested in order. The first matching rule names the
//! category; when none matches the category is `Other`.

use super::number::MAX_PRECISION;
use crate::data::{RangeTable, RuleTable};
use crate::parser::{Condition, Operand, ParseError, Relation, parse_plural_rule};
use crate::types::PluralCategory;

/// Most fraction digits kept in the `f` and `t` operands. Longer fractions
/// keep their leading digits.
const MAX_FRACTION_DIGITS: usize = 19;

/// The operands of a number as seen by CLDR plural rules.
///
/// `v` is the number of visible fraction digits the caller intends to show,
/// so `1` and `1.0` (`v = 1`) can select different categories.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PluralOperands {
    /// Absolute value.
    pub n: f64,
    /// Integer digits of `n`.
    pub i: u64,
    /// Visible fraction digit count, with trailing zeros.
    pub v: u64,
    /// Visible fraction digit count, without trailing zeros.
    pub w: u64,
    /// Visible fraction digits, with trailing zeros.
    pub f: u64,
    /// Visible fraction digits, without trailing zeros.
    pub t: u64,
}

impl PluralOperands {
    /// Compute operands for `n` shown with `v` fraction digits.
    ///
    /// Non-finite numbers have no integer or fraction digits.
    pub fn new(n: f64, v: usize) -> Self {
        let n = n.abs();
        if !n.is_finite() {
            return Self {
                n,
                i: 0,
                v: to_u64(v),
                w: 0,
                f: 0,
                t: 0,
            };
        }

        let integer = n.trunc();
        let fraction = if v == 0 {
            String::new()
        } else {
            // "0.xyz", or "1.00" when the fraction rounds up.
            let shown = v.min(MAX_PRECISION);
            let text = format!("{:.shown$}", n - integer);
            let digits = text.get(2..).unwrap_or_default();
            digits.chars().take(MAX_FRACTION_DIGITS).collect()
        };
        let trimmed = fraction.trim_end_matches('0');

        Self {
            n,
            i: float_to_u64(integer),
            v: to_u64(v),
            w: to_u64(trimmed.len()),
            f: fraction.parse().unwrap_or(0),
            t: trimmed.parse().unwrap_or(0),
        }
    }

    /// Value of an integer operand. `c` and `e` are always zero.
    fn integer(&self, operand: Operand) -> u64 {
        match operand {
            Operand::I => self.i,
            Operand::V => self.v,
            Operand::W => self.w,
            Operand::F => self.f,
            Operand::T => self.t,
            Operand::C | Operand::E => 0,
            Operand::N => float_to_u64(self.n),
        }
    }
}

/// Saturates at the bounds of `u64`.
fn float_to_u64(value: f64) -> u64 {
    value as u64
}

fn to_u64(value: usize) -> u64 {
    u64::try_from(value).unwrap_or(u64::MAX)
}

fn to_f64(value: u64) -> f64 {
    value as f64
}

/// Test a condition against a number's operands.
pub fn matches(condition: &Condition, operands: &PluralOperands) -> bool {
    condition.alternatives.is_empty()
        || condition
            .alternatives
            .iter()
            .any(|relations| relations.iter().all(|r| relation_holds(r, operands)))
}

fn relation_holds(relation: &Relation, operands: &PluralOperands) -> bool {
    let in_range = if relation.operand == Operand::N {
        let value = match relation.modulus {
            Some(m) => operands.n % to_f64(m),
            None => operands.n,
        };
        // `n` only equals integers, so 1.5 is never in `1..2`.
        value.fract() == 0.0
            && relation
                .ranges
                .iter()
                .any(|r| value >= to_f64(r.start) && value <= to_f64(r.end))
    } else {
        let value = operands.integer(relation.operand);
        let value = match relation.modulus {
            Some(m) => value.checked_rem(m),
            None => Some(value),
        };
        let Some(value) = value else {
            return false;
        };
        relation
            .ranges
            .iter()
            .any(|r| (r.start..=r.end).contains(&value))
    };
    in_range != relation.negated
}

/// A compiled, ordered set of plural rules for one rule type.
#[derive(Debug, Clone, PartialEq)]
pub struct PluralRules {
    /// `None` when the locale defines no rules of this type.
    rules: Option<Vec<(PluralCategory, Condition)>>,
}

impl PluralRules {
    /// Parse every condition in `table`.
    pub fn compile(table: Option<RuleTable>) -> Result<Self, ParseError> {
        let rules = table
            .map(|table| {
                table
                    .iter()
                    .map(|&(category, source)| Ok((category, parse_plural_rule(source)?)))
                    .collect::<Result<Vec<_>, ParseError>>()
            })
            .transpose()?;
        Ok(Self { rules })
    }

    /// Whether the locale defines rules of this type at all.
    pub fn is_defined(&self) -> bool {
        self.rules.is_some()
    }

    /// Select the category for `n` shown with `v` fraction digits.
    ///
    /// Returns `Unknown` when no rules are defined.
    pub fn select(&self, n: f64, v: usize) -> PluralCategory {
        let Some(rules) = &self.rules else {
            return PluralCategory::Unknown;
        };
        let operands = PluralOperands::new(n, v);
        rules
            .iter()
            .find(|(_, condition)| matches(condition, &operands))
            .map_or(PluralCategory::Other, |&(category, _)| category)
    }
}

/// Look up the category of a range from the categories of its endpoints.
///
/// Pairs missing from the table fall back to `Other`.
pub fn range_category(
    table: RangeTable,
    start: PluralCategory,
    end: PluralCategory,
) -> PluralCategory {
    table
        .iter()
        .find(|&&(s, e, _)| s == start && e == end)
        .map_or(PluralCategory::Other, |&(_, _, result)| result)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rules(table: RuleTable) -> PluralRules {
        PluralRules::compile(Some(table)).unwrap()
    }

    #[test]
    fn operands_of_integer() {
        let ops = PluralOperands::new(-21.0, 0);
        assert_eq!((ops.n, ops.i, ops.v, ops.w, ops.f, ops.t), (21.0, 21, 0, 0, 0, 0));
    }

    #[test]
    fn operands_keep_visible_trailing_zeros() {
        let ops = PluralOperands::new(1.5, 2);
        assert_eq!((ops.i, ops.v, ops.w, ops.f, ops.t), (1, 2, 1, 50, 5));
    }

    #[test]
    fn operands_round_to_visible_digits() {
        let ops = PluralOperands::new(1.236, 2);
        assert_eq!((ops.f, ops.t, ops.w), (24, 24, 2));
    }

    #[test]
    fn long_fractions_keep_leading_digits() {
        let ops = PluralOperands::new(1.5, 20);
        assert_eq!((ops.i, ops.v, ops.w), (1, 20, 1));
        assert_eq!((ops.f, ops.t), (5_000_000_000_000_000_000, 5));
    }

    #[test]
    fn huge_visible_counts_do_not_overflow_formatting() {
        for v in [65_536, usize::MAX] {
            let ops = PluralOperands::new(1.5, v);
            assert_eq!(ops.v, to_u64(v));
            assert_eq!((ops.i, ops.w, ops.t), (1, 1, 5));
        }
    }

    #[test]
    fn operands_of_non_finite_numbers() {
        let ops = PluralOperands::new(f64::NAN, 2);
        assert_eq!((ops.i, ops.f, ops.t, ops.w), (0, 0, 0, 0));
        let ops = PluralOperands::new(f64::NEG_INFINITY, 0);
        assert!(ops.n.is_infinite() && ops.n > 0.0);
    }

    #[test]
    fn n_matches_only_integers() {
        let one = rules(&[(PluralCategory::One, "n = 1")]);
        assert_eq!(one.select(1.0, 0), PluralCategory::One);
        assert_eq!(one.select(1.0, 2), PluralCategory::One);
        assert_eq!(one.select(1.5, 1), PluralCategory::Other);

        let range = rules(&[(PluralCategory::Few, "n = 2..4")]);
        assert_eq!(range.select(3.0, 0), PluralCategory::Few);
        assert_eq!(range.select(3.5, 1), PluralCategory::Other);
    }

    #[test]
    fn n_modulus_uses_float_remainder() {
        let few = rules(&[(PluralCategory::Few, "n % 10 = 3..4")]);
        assert_eq!(few.select(23.0, 0), PluralCategory::Few);
        assert_eq!(few.select(23.5, 1), PluralCategory::Other);
    }

    #[test]
    fn first_matching_rule_wins() {
        let table = rules(&[
            (PluralCategory::One, "i = 1"),
            (PluralCategory::Few, "i = 1..4"),
        ]);
        assert_eq!(table.select(1.0, 0), PluralCategory::One);
        assert_eq!(table.select(3.0, 0), PluralCategory::Few);
        assert_eq!(table.select(7.0, 0), PluralCategory::Other);
    }

    #[test]
    fn negated_relation() {
        let one = rules(&[(PluralCategory::One, "i % 10 = 1 and i % 100 != 11")]);
        assert_eq!(one.select(21.0, 0), PluralCategory::One);
        assert_eq!(one.select(11.0, 0), PluralCategory::Other);
    }

    #[test]
    fn empty_condition_always_matches() {
        let table = rules(&[(PluralCategory::Many, "@integer 1, 2")]);
        assert_eq!(table.select(42.0, 0), PluralCategory::Many);
    }

    #[test]
    fn missing_rules_are_unknown() {
        let none = PluralRules::compile(None).unwrap();
        assert!(!none.is_defined());
        assert_eq!(none.select(1.0, 0), PluralCategory::Unknown);

        let empty = rules(&[]);
        assert!(empty.is_defined());
        assert_eq!(empty.select(1.0, 0), PluralCategory::Other);
    }

    #[test]
    fn invalid_rule_fails_to_compile() {
        assert!(PluralRules::compile(Some(&[(PluralCategory::One, "n == 1")])).is_err());
    }

    #[test]
    fn range_lookup_falls_back_to_other() {
        let table: RangeTable = &[(PluralCategory::One, PluralCategory::Few, PluralCategory::Few)];
        assert_eq!(
            range_category(table, PluralCategory::One, PluralCategory::Few),
            PluralCategory::Few
        );
        assert_eq!(
            range_category(table, PluralCategory::Few, PluralCategory::One),
            PluralCategory::Other
        );
    }
}
