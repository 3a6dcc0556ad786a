//! Configuration module for csvsift
//!
//! This module provides a centralized configuration structure for the application.
//! It handles global settings that are passed down through the application rather
//! than using global state or passing individual settings.

use std::path::{Path, PathBuf};

use crate::cli::CsvSiftArgs;

/// Application configuration
///
/// This struct encapsulates all settings for one invocation of the pipeline.
/// It is created at startup from the parsed arguments and passed to the
/// components that need configuration. This approach avoids global mutable
/// state and makes dependencies explicit.
///
/// Each pipeline field is independently optional: a `None` means that stage
/// is skipped entirely.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Path of the input file
    input: PathBuf,

    /// Optional path to write results to instead of the console
    output: Option<PathBuf>,

    /// Field delimiter for both reading and writing
    delimiter: String,

    /// Optional equality filter as a (column, value) pair
    filter: Option<(String, String)>,

    /// Optional column projection list, already split and trimmed
    select: Option<Vec<String>>,

    /// Optional sort column
    sort: Option<String>,

    /// Whether to sort in descending order
    reverse: bool,

    /// Optional column to build a frequency report for
    count: Option<String>,

    /// Optional cap on console-displayed rows
    limit: Option<usize>,

    /// Whether to show verbose output
    verbose: bool,
}

impl AppConfig {
    /// Build the application configuration from parsed command-line arguments
    ///
    /// Argument text is normalized here so the rest of the program never
    /// re-parses it: the two-token `--filter` list becomes a (column, value)
    /// pair and the comma-separated `--select` string becomes a vector of
    /// trimmed column names.
    pub fn from_args(args: &CsvSiftArgs) -> Self {
        let filter = args.filter.as_ref().and_then(|pair| match pair.as_slice() {
            [column, value] => Some((column.clone(), value.clone())),
            _ => None,
        });

        let select = args.select.as_ref().map(|spec| {
            spec.split(',')
                .map(|col| col.trim().to_string())
                .collect::<Vec<_>>()
        });

        Self {
            input: args.input.clone(),
            output: args.output.clone(),
            delimiter: args.delimiter.clone(),
            filter,
            select,
            sort: args.sort.clone(),
            reverse: args.reverse,
            count: args.count.clone(),
            limit: args.limit,
            verbose: args.verbose,
        }
    }

    /// Get the input file path
    pub fn input(&self) -> &Path {
        &self.input
    }

    /// Get the output file path, if writing to a file
    pub fn output(&self) -> Option<&Path> {
        self.output.as_deref()
    }

    /// Get the field delimiter
    pub fn delimiter(&self) -> &str {
        &self.delimiter
    }

    /// Get the equality filter as a (column, value) pair
    pub fn filter(&self) -> Option<(&str, &str)> {
        self.filter
            .as_ref()
            .map(|(column, value)| (column.as_str(), value.as_str()))
    }

    /// Get the column projection list
    pub fn select(&self) -> Option<&[String]> {
        self.select.as_deref()
    }

    /// Get the sort column
    pub fn sort(&self) -> Option<&str> {
        self.sort.as_deref()
    }

    /// Get whether to sort in descending order
    pub fn reverse(&self) -> bool {
        self.reverse
    }

    /// Get the frequency report column
    pub fn count(&self) -> Option<&str> {
        self.count.as_deref()
    }

    /// Get the console row limit
    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    /// Get the verbose flag
    pub fn verbose(&self) -> bool {
        self.verbose
    }
}
