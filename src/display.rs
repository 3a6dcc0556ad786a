//! Console rendering module for csvsift
//!
//! This module formats tables for human consumption on the terminal:
//! a left-aligned, pipe-separated layout whose column widths fit the widest
//! cell, with optional row-count truncation, plus the frequency report
//! printer used by the count option.
//!
//! Rendering is generic over `io::Write` so the layout logic can be tested
//! against in-memory buffers; thin wrappers print to stdout.

use std::io::{self, Write};

use crate::table::Table;

/// Render a table as an aligned text table
///
/// Each column is as wide as its header or its longest cell, whichever is
/// larger, measured over the full table rather than just the displayed rows.
/// A dash rule matching the header line length separates the header from the
/// data. When `limit` is smaller than the row count, only the first `limit`
/// rows are shown, followed by a one-line summary of how many rows were
/// omitted. A table with no data rows prints a single notice instead.
pub fn render<W: Write>(table: &Table, limit: Option<usize>, out: &mut W) -> io::Result<()> {
    if table.row_count() == 0 {
        writeln!(out, "No data to display")?;
        return Ok(());
    }

    let widths = column_widths(table);

    // Header line and separator rule
    let header = table
        .columns()
        .iter()
        .zip(widths.iter().copied())
        .map(|(col, width)| format!("{col:<width$}"))
        .collect::<Vec<_>>()
        .join(" | ");
    writeln!(out, "{header}")?;
    writeln!(out, "{}", "-".repeat(header.chars().count()))?;

    // Data rows, truncated at the limit
    let total = table.row_count();
    for (i, row) in table.rows().iter().enumerate() {
        if let Some(limit) = limit {
            if i >= limit {
                writeln!(out)?;
                writeln!(out, "... and {} more rows", total - limit)?;
                break;
            }
        }

        let line = table
            .columns()
            .iter()
            .zip(widths.iter().copied())
            .map(|(col, width)| format!("{:<width$}", table.cell(row, col)))
            .collect::<Vec<_>>()
            .join(" | ");
        writeln!(out, "{line}")?;
    }

    Ok(())
}

/// Render a table to stdout
pub fn print_table(table: &Table, limit: Option<usize>) -> io::Result<()> {
    render(table, limit, &mut io::stdout().lock())
}

/// Render a frequency report, most frequent value first
///
/// Entries with equal counts keep the order they arrive in, which for
/// `Table::count_values` output is first-seen order.
pub fn render_value_counts<W: Write>(
    column: &str,
    counts: &[(String, usize)],
    out: &mut W,
) -> io::Result<()> {
    let mut sorted = counts.to_vec();
    sorted.sort_by(|a, b| b.1.cmp(&a.1));

    writeln!(out)?;
    writeln!(out, "Value counts for column '{column}':")?;
    for (value, count) in &sorted {
        writeln!(out, "  {value}: {count}")?;
    }

    Ok(())
}

/// Render a frequency report to stdout
pub fn print_value_counts(column: &str, counts: &[(String, usize)]) -> io::Result<()> {
    render_value_counts(column, counts, &mut io::stdout().lock())
}

/// Display width of each column: the wider of the header and the widest cell
fn column_widths(table: &Table) -> Vec<usize> {
    table
        .columns()
        .iter()
        .enumerate()
        .map(|(idx, col)| {
            let widest_cell = table
                .rows()
                .iter()
                .map(|row| row[idx].chars().count())
                .max()
                .unwrap_or(0);
            col.chars().count().max(widest_cell)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_table() -> Table {
        let mut table = Table::new(vec!["id".to_string(), "name".to_string()]);
        table.push_row(vec!["1".to_string(), "Alice".to_string()]);
        table.push_row(vec!["2".to_string(), "Bob".to_string()]);
        table.push_row(vec!["3".to_string(), "Charlie".to_string()]);
        table
    }

    fn render_to_string(table: &Table, limit: Option<usize>) -> String {
        let mut buf = Vec::new();
        render(table, limit, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_render_aligns_columns_to_widest_cell() {
        let output = render_to_string(&sample_table(), None);
        let lines: Vec<&str> = output.lines().collect();

        // "name" column width is driven by "Charlie" (7 chars)
        assert_eq!(lines[0], "id | name   ");
        assert_eq!(lines[1], "------------");
        assert_eq!(lines[2], "1  | Alice  ");
        assert_eq!(lines[3], "2  | Bob    ");
        assert_eq!(lines[4], "3  | Charlie");
    }

    #[test]
    fn test_render_separator_matches_header_length() {
        let output = render_to_string(&sample_table(), None);
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines[0].chars().count(), lines[1].chars().count());
        assert!(lines[1].chars().all(|c| c == '-'));
    }

    #[test]
    fn test_render_limit_truncates_and_summarizes() {
        let output = render_to_string(&sample_table(), Some(2));

        assert!(output.contains("Alice"));
        assert!(output.contains("Bob"));
        assert!(!output.contains("Charlie"));
        assert!(output.contains("... and 1 more rows"));
    }

    #[test]
    fn test_render_limit_larger_than_table_shows_everything() {
        let output = render_to_string(&sample_table(), Some(10));

        assert!(output.contains("Charlie"));
        assert!(!output.contains("more rows"));
    }

    #[test]
    fn test_render_empty_table_prints_notice_only() {
        let table = Table::new(vec!["a".to_string(), "b".to_string()]);
        let output = render_to_string(&table, None);
        assert_eq!(output, "No data to display\n");
    }

    #[test]
    fn test_render_widths_scan_rows_beyond_the_limit() {
        let mut table = Table::new(vec!["v".to_string()]);
        table.push_row(vec!["a".to_string()]);
        table.push_row(vec!["wwwwwwwwww".to_string()]);

        // The hidden second row still sets the column width
        let output = render_to_string(&table, Some(1));
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines[0], "v         ");
        assert_eq!(lines[2], "a         ");
    }

    #[test]
    fn test_value_counts_sorted_by_descending_count() {
        let counts = vec![
            ("red".to_string(), 1),
            ("blue".to_string(), 3),
            ("green".to_string(), 2),
        ];

        let mut buf = Vec::new();
        render_value_counts("color", &counts, &mut buf).unwrap();
        let output = String::from_utf8(buf).unwrap();

        let expected = "\nValue counts for column 'color':\n  blue: 3\n  green: 2\n  red: 1\n";
        assert_eq!(output, expected);
    }

    #[test]
    fn test_value_counts_ties_keep_incoming_order() {
        let counts = vec![
            ("first".to_string(), 2),
            ("second".to_string(), 2),
            ("third".to_string(), 5),
        ];

        let mut buf = Vec::new();
        render_value_counts("c", &counts, &mut buf).unwrap();
        let output = String::from_utf8(buf).unwrap();

        let third = output.find("third").unwrap();
        let first = output.find("first").unwrap();
        let second = output.find("second").unwrap();
        assert!(third < first && first < second);
    }
}
