//! Table module for csvsift
//!
//! This module provides the in-memory table representation for the csvsift
//! utility. It handles data storage and the pure transform operations:
//!
//! - In-memory text storage with column name mapping
//! - Row filtering by exact cell equality
//! - Column projection in caller-specified order
//! - Stable lexicographic sorting with optional reversal
//! - Frequency counting over a single column
//!
//! Every cell is text. Transforms never mutate a table in place; each one
//! returns a new `Table` value, leaving the source untouched.

use std::collections::HashMap;

/// Represents a row in a table
pub type Row = Vec<String>;

/// Represents an in-memory table of text records
///
/// A table is an ordered sequence of rows sharing a nominal column set.
/// Column order is stable and reflects the source header; it determines the
/// default header order when the table is written back out. Looking up a
/// column a row doesn't have always yields the empty string rather than
/// failing, so transforms are total over any column name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    /// Column names in header order
    columns: Vec<String>,

    /// Map of column names to their indices
    column_map: HashMap<String, usize>,

    /// Rows of data, each exactly `columns.len()` cells wide
    rows: Vec<Row>,
}

impl Table {
    /// Create a new empty table with the given columns
    pub fn new(columns: Vec<String>) -> Self {
        let column_map = columns
            .iter()
            .enumerate()
            .map(|(i, name)| (name.clone(), i))
            .collect();

        Table {
            columns,
            column_map,
            rows: Vec::new(),
        }
    }

    /// Get the columns of the table
    ///
    /// Returns a slice containing all column names in header order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Get the column count
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Get the rows of the table
    ///
    /// Returns a slice containing all rows. Each row is a vector of cell
    /// strings in column order. This provides read-only access to the table
    /// data for rendering or serialization.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Get the row count
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Get the index of a column by name
    ///
    /// # Arguments
    /// * `name` - The name of the column to look up
    ///
    /// # Returns
    /// * `Some(usize)` with the column index if found
    /// * `None` if no column with that name exists
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.column_map.get(name).copied()
    }

    /// Get a row's cell value for a named column
    ///
    /// Missing columns resolve to the empty string. This single rule is what
    /// keeps every transform total: filtering, sorting, or projecting on an
    /// unknown column degrades gracefully instead of failing.
    ///
    /// # Arguments
    /// * `row` - A row borrowed from this table
    /// * `column` - The column name to look up
    pub fn cell<'a>(&self, row: &'a Row, column: &str) -> &'a str {
        self.column_index(column)
            .and_then(|idx| row.get(idx))
            .map(String::as_str)
            .unwrap_or("")
    }

    /// Add a row to the table, normalizing its width
    ///
    /// Rows shorter than the column list are padded with empty strings;
    /// rows longer than the column list have the excess cells dropped.
    /// This is the only entry point for row data, so every stored row is
    /// exactly as wide as the column list.
    ///
    /// # Arguments
    /// * `row` - Vector of cell values to add as a new row
    pub fn push_row(&mut self, mut row: Row) {
        row.resize(self.columns.len(), String::new());
        self.rows.push(row);
    }

    /// Create a new table with only the rows matching an equality test
    ///
    /// Keeps the rows whose cell at `column` equals `value` exactly, using
    /// case-sensitive string comparison. Rows missing the column compare as
    /// the empty string, so they are kept only when `value` is itself empty.
    /// Row order is preserved.
    ///
    /// # Arguments
    /// * `column` - Column to compare
    /// * `value` - Value each kept row must have in that column
    ///
    /// # Returns
    /// * A new table containing only the matching rows
    pub fn filter_eq(&self, column: &str, value: &str) -> Self {
        let mut result = Table::new(self.columns.clone());

        for row in &self.rows {
            if self.cell(row, column) == value {
                result.rows.push(row.clone());
            }
        }

        result
    }

    /// Create a new table with only the specified columns
    ///
    /// Projects the table to exactly the requested columns, in the requested
    /// order. Names that don't exist in the source produce empty-string
    /// cells rather than an error.
    ///
    /// # Arguments
    /// * `columns` - Column names to keep, in output order
    ///
    /// # Returns
    /// * A new table whose rows contain one cell per requested column
    pub fn select_columns(&self, columns: &[String]) -> Self {
        let mut result = Table::new(columns.to_vec());

        for row in &self.rows {
            let projected: Row = columns
                .iter()
                .map(|col| self.cell(row, col).to_string())
                .collect();
            result.rows.push(projected);
        }

        result
    }

    /// Create a new table sorted by the named column
    ///
    /// The comparison is lexicographic on the cell text; there is no numeric
    /// coercion. The sort is stable, so rows with equal keys keep their
    /// original relative order in both directions. A missing column sorts
    /// every row as the empty string, leaving the input order unchanged.
    ///
    /// # Arguments
    /// * `column` - Column to sort by
    /// * `reverse` - Sort in descending order when set
    ///
    /// # Returns
    /// * A new table with the same columns and reordered rows
    pub fn sort_by(&self, column: &str, reverse: bool) -> Self {
        let mut result = Table::new(self.columns.clone());

        let mut sorted_rows = self.rows.clone();
        sorted_rows.sort_by(|row_a, row_b| {
            let key_a = self.cell(row_a, column);
            let key_b = self.cell(row_b, column);
            // Reverse the comparison, not the result order, so ties stay stable
            if reverse {
                key_b.cmp(key_a)
            } else {
                key_a.cmp(key_b)
            }
        });

        result.rows = sorted_rows;
        result
    }

    /// Count occurrences of each distinct value in a column
    ///
    /// Scans the named column and returns (value, count) pairs in order of
    /// first appearance. Rows missing the column count under the empty
    /// string. This is a read-only report: the table itself is unchanged and
    /// flows onward to output untouched.
    ///
    /// # Arguments
    /// * `column` - Column whose values are counted
    ///
    /// # Returns
    /// * Pairs of distinct cell value and occurrence count; the counts sum
    ///   to the table's row count
    pub fn count_values(&self, column: &str) -> Vec<(String, usize)> {
        let mut order: Vec<String> = Vec::new();
        let mut counts: HashMap<String, usize> = HashMap::new();

        for row in &self.rows {
            let value = self.cell(row, column);
            if !counts.contains_key(value) {
                order.push(value.to_string());
            }
            *counts.entry(value.to_string()).or_insert(0) += 1;
        }

        order
            .into_iter()
            .map(|value| {
                let count = counts[&value];
                (value, count)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Build the sample table used across the transform tests
    fn sample_table() -> Table {
        let mut table = Table::new(vec!["a".to_string(), "b".to_string()]);
        table.push_row(vec!["1".to_string(), "x".to_string()]);
        table.push_row(vec!["2".to_string(), "y".to_string()]);
        table.push_row(vec!["1".to_string(), "z".to_string()]);
        table
    }

    #[test]
    fn test_filter_eq_keeps_matching_rows_in_order() {
        let table = sample_table();
        let filtered = table.filter_eq("a", "1");

        assert_eq!(filtered.row_count(), 2);
        assert_eq!(filtered.rows()[0], vec!["1", "x"]);
        assert_eq!(filtered.rows()[1], vec!["1", "z"]);
        // Source table is untouched
        assert_eq!(table.row_count(), 3);
    }

    #[test]
    fn test_filter_eq_missing_column_matches_empty_value() {
        let table = sample_table();

        // Missing column compares as empty string, so nothing matches "1"
        assert_eq!(table.filter_eq("nope", "1").row_count(), 0);
        // but everything matches the empty string
        assert_eq!(table.filter_eq("nope", "").row_count(), 3);
    }

    #[test]
    fn test_select_columns_projects_in_requested_order() {
        let table = sample_table();
        let projected = table.select_columns(&["b".to_string(), "a".to_string()]);

        assert_eq!(projected.columns(), &["b", "a"]);
        assert_eq!(projected.rows()[0], vec!["x", "1"]);
        assert_eq!(projected.rows()[2], vec!["z", "1"]);
    }

    #[test]
    fn test_select_columns_unknown_column_yields_empty_cells() {
        let table = sample_table();
        let projected = table.select_columns(&["a".to_string(), "missing".to_string()]);

        assert_eq!(projected.columns(), &["a", "missing"]);
        for row in projected.rows() {
            assert_eq!(row[1], "");
        }
    }

    #[test]
    fn test_sort_by_is_lexicographic_not_numeric() {
        let mut table = Table::new(vec!["n".to_string()]);
        table.push_row(vec!["10".to_string()]);
        table.push_row(vec!["9".to_string()]);
        table.push_row(vec!["100".to_string()]);

        let sorted = table.sort_by("n", false);
        let values: Vec<&str> = sorted.rows().iter().map(|r| r[0].as_str()).collect();
        assert_eq!(values, vec!["10", "100", "9"]);
    }

    #[test]
    fn test_sort_by_reverse() {
        let table = sample_table();
        let sorted = table.sort_by("b", true);

        assert_eq!(sorted.rows()[0], vec!["1", "z"]);
        assert_eq!(sorted.rows()[1], vec!["2", "y"]);
        assert_eq!(sorted.rows()[2], vec!["1", "x"]);
    }

    #[test]
    fn test_sort_by_is_stable_on_ties() {
        let table = sample_table();

        // Both rows with a = "1" tie; they must keep input order either way
        let ascending = table.sort_by("a", false);
        assert_eq!(ascending.rows()[0], vec!["1", "x"]);
        assert_eq!(ascending.rows()[1], vec!["1", "z"]);

        let descending = table.sort_by("a", true);
        assert_eq!(descending.rows()[0], vec!["2", "y"]);
        assert_eq!(descending.rows()[1], vec!["1", "x"]);
        assert_eq!(descending.rows()[2], vec!["1", "z"]);
    }

    #[test]
    fn test_sort_by_missing_column_preserves_order() {
        let table = sample_table();
        let sorted = table.sort_by("missing", false);
        assert_eq!(sorted.rows(), table.rows());
    }

    #[test]
    fn test_count_values_in_first_seen_order() {
        let table = sample_table();
        let counts = table.count_values("a");

        assert_eq!(counts, vec![("1".to_string(), 2), ("2".to_string(), 1)]);

        let total: usize = counts.iter().map(|(_, n)| n).sum();
        assert_eq!(total, table.row_count());
    }

    #[test]
    fn test_count_values_missing_column_counts_empty_key() {
        let table = sample_table();
        let counts = table.count_values("missing");
        assert_eq!(counts, vec![("".to_string(), 3)]);
    }

    #[test]
    fn test_push_row_normalizes_ragged_rows() {
        let mut table = Table::new(vec!["a".to_string(), "b".to_string()]);
        // Short row is padded
        table.push_row(vec!["1".to_string()]);
        // Long row drops the excess
        table.push_row(vec!["2".to_string(), "y".to_string(), "extra".to_string()]);

        assert_eq!(table.rows()[0], vec!["1", ""]);
        assert_eq!(table.rows()[1], vec!["2", "y"]);
    }

    #[test]
    fn test_cell_lookup_defaults_to_empty_string() {
        let table = sample_table();
        let row = &table.rows()[0];

        assert_eq!(table.cell(row, "a"), "1");
        assert_eq!(table.cell(row, "does-not-exist"), "");
    }
}
