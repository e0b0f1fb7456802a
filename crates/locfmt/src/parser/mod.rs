//! Parsers for CLDR plural rules, number patterns and date patterns.
//!
//! Locale data stores rules and patterns in CLDR syntax. They are parsed once
//! when a locale is compiled and evaluated by the interpreter afterwards.

pub mod ast;
pub mod error;
mod date_pattern;
mod number_pattern;
mod rule;

pub use ast::{
    AffixToken, Affixes, Condition, DateField, DateItem, DatePattern, DigitLayout, NumberPattern,
    Operand, RangeItem, Relation,
};
pub use date_pattern::parse_date_pattern;
pub use error::ParseError;
pub use number_pattern::parse_number_pattern;
pub use rule::parse_plural_rule;

use winnow::prelude::*;
use winnow::token::take_while;

/// Run `parser` over all of `input`, converting failures and leftovers into
/// a positioned [`ParseError`].
fn parse_complete<T>(
    input: &str,
    mut parser: impl FnMut(&mut &str) -> ModalResult<T>,
) -> Result<T, ParseError> {
    let mut remaining = input;
    match parser(&mut remaining) {
        Ok(value) if remaining.is_empty() => Ok(value),
        Ok(_) => {
            let (line, column) = calculate_position(input, remaining);
            if remaining.starts_with('\'') && !remaining[1..].contains('\'') {
                return Err(ParseError::UnexpectedEof { line, column });
            }
            Err(ParseError::Syntax {
                line,
                column,
                message: format!(
                    "unexpected character: '{}'",
                    remaining.chars().next().unwrap_or('?')
                ),
            })
        }
        Err(e) => {
            let (line, column) = calculate_position(input, remaining);
            Err(ParseError::Syntax {
                line,
                column,
                message: format!("parse error: {e}"),
            })
        }
    }
}

/// Calculate line and column from original input and remaining input.
fn calculate_position(original: &str, remaining: &str) -> (usize, usize) {
    let consumed = original.len() - remaining.len();
    let consumed_str = &original[..consumed];
    let line = consumed_str.chars().filter(|&c| c == '\n').count() + 1;
    let column = match consumed_str.rfind('\n') {
        Some(pos) => consumed_str[pos + 1..].chars().count() + 1,
        None => consumed_str.chars().count() + 1,
    };
    (line, column)
}

/// Skip ASCII whitespace.
fn ws(input: &mut &str) -> ModalResult<()> {
    take_while(0.., |c: char| c.is_ascii_whitespace())
        .void()
        .parse_next(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_counts_characters_not_bytes() {
        let input = "¤¤x";
        let remaining = &input["¤¤".len()..];
        assert_eq!(calculate_position(input, remaining), (1, 3));
    }

    #[test]
    fn position_tracks_lines() {
        let input = "ab\ncd";
        assert_eq!(calculate_position(input, &input[4..]), (2, 2));
    }
}
