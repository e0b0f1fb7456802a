//! CLDR date/time pattern parser.

use winnow::combinator::{alt, repeat};
use winnow::error::{ContextError, ErrMode};
use winnow::prelude::*;
use winnow::token::{none_of, one_of, take_while};

use super::ast::{DateField, DateItem, DatePattern};
use super::error::ParseError;
use super::number_pattern::quoted;
use super::parse_complete;

/// Parse a date/time pattern such as `EEEE, d 'de' MMMM 'de' y`.
///
/// Runs of the same letter form one field (`MMMM` is the month at width 4).
/// `:` becomes the locale time separator. Letters that are not a supported
/// field are rejected; other characters are literal text.
pub fn parse_date_pattern(input: &str) -> Result<DatePattern, ParseError> {
    parse_complete(input, pattern)
}

fn pattern(input: &mut &str) -> ModalResult<DatePattern> {
    let items: Vec<DateItem> = repeat(0.., item).parse_next(input)?;
    Ok(DatePattern {
        items: merge_literals(items),
    })
}

fn item(input: &mut &str) -> ModalResult<DateItem> {
    alt((
        ':'.value(DateItem::TimeSeparator),
        quoted.map(DateItem::Literal),
        field,
        none_of(|c: char| c.is_ascii_alphabetic() || c == '\'')
            .map(|c: char| DateItem::Literal(c.to_string())),
    ))
    .parse_next(input)
}

/// Parse a run of one field letter.
fn field(input: &mut &str) -> ModalResult<DateItem> {
    let letter = one_of(|c: char| c.is_ascii_alphabetic()).parse_next(input)?;
    let Some(field) = DateField::from_letter(letter) else {
        return Err(ErrMode::Backtrack(ContextError::new()));
    };
    let run: &str = take_while(0.., |c: char| c == letter).parse_next(input)?;
    Ok(DateItem::Field {
        field,
        width: 1 + run.len(),
    })
}

/// Merge adjacent literal items.
fn merge_literals(items: Vec<DateItem>) -> Vec<DateItem> {
    let mut result = Vec::with_capacity(items.len());

    for item in items {
        match item {
            DateItem::Literal(text) => {
                if let Some(DateItem::Literal(prev)) = result.last_mut() {
                    prev.push_str(&text);
                } else {
                    result.push(DateItem::Literal(text));
                }
            }
            other => result.push(other),
        }
    }

    result
}
