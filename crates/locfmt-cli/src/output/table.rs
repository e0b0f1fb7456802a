//! Table formatting utilities for CLI output.

use comfy_table::{presets, ContentArrangement, Table};
use locfmt::{Locale, PluralCategory};

/// Shown for a symbol or list the locale leaves undefined.
const NONE: &str = "(none)";

/// Make whitespace symbols readable in a table cell.
pub fn visible(symbol: &str) -> String {
    match symbol {
        "" => NONE.to_string(),
        "\u{a0}" => "NBSP".to_string(),
        "\u{202f}" => "NNBSP".to_string(),
        " " => "SPACE".to_string(),
        other => other.to_string(),
    }
}

fn categories(categories: &[PluralCategory]) -> String {
    if categories.is_empty() {
        return NONE.to_string();
    }
    categories
        .iter()
        .copied()
        .map(PluralCategory::as_str)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Format symbols and declared plural categories of each locale.
pub fn format_locales_table(locales: &[&Locale]) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_BORDERS_ONLY);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        "Locale", "Decimal", "Group", "Minus", "Percent", "Cardinal", "Ordinal",
    ]);

    for locale in locales {
        table.add_row(vec![
            locale.id().to_string(),
            visible(locale.decimal()),
            visible(locale.group()),
            visible(locale.minus()),
            visible(locale.percent()),
            categories(locale.plurals_cardinal()),
            categories(locale.plurals_ordinal()),
        ]);
    }

    table
}

/// Entries of one calendar name table; `None` if the locale lacks it.
pub struct NameRow {
    pub table: &'static str,
    pub entries: Option<&'static [&'static str]>,
}

/// Format calendar name tables, one row per table.
pub fn format_names_table(rows: &[NameRow]) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_BORDERS_ONLY);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Table", "Entries"]);

    for row in rows {
        let entries = row
            .entries
            .map_or_else(|| NONE.to_string(), |entries| entries.join(", "));
        table.add_row(vec![row.table.to_string(), entries]);
    }

    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whitespace_symbols_are_named() {
        assert_eq!(visible("\u{a0}"), "NBSP");
        assert_eq!(visible(""), "(none)");
        assert_eq!(visible(","), ",");
    }

    #[test]
    fn locales_table_lists_symbols() {
        let bg = locfmt::locale("bg_BG").unwrap();
        let rendered = format_locales_table(&[bg]).to_string();
        assert!(rendered.contains("bg_BG"));
        assert!(rendered.contains("NBSP"));
        assert!(rendered.contains("one other"));
    }

    #[test]
    fn missing_name_tables_are_marked() {
        let rows = [
            NameRow {
                table: "months_narrow",
                entries: None,
            },
            NameRow {
                table: "periods_wide",
                entries: Some(&["am", "pm"]),
            },
        ];
        let rendered = format_names_table(&rows).to_string();
        assert!(rendered.contains("(none)"));
        assert!(rendered.contains("am, pm"));
    }
}
