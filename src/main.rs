//! csvsift - a command-line utility for processing delimited files
//!
//! This tool loads one delimited file into memory as a table, applies a
//! linear pipeline of optional transformations, and emits the result either
//! back to a delimited file or as an aligned table on the console.
//!
//! # Overview
//!
//! csvsift is designed for quick one-shot inspection and reshaping of
//! delimited data from the command line, without a database, a schema, or a
//! query language. Every option names exactly one pipeline stage; stages
//! that aren't requested are skipped.
//!
//! # Core Functionality
//!
//! - **File Handling**: Load and save delimited files with custom separators
//! - **Filtering**: Keep rows where a column equals a value
//! - **Projection**: Select a subset of columns in a chosen order
//! - **Sorting**: Stable lexicographic sort, ascending or descending
//! - **Counting**: Frequency report over one column
//! - **Display**: Aligned console table with optional row limit
//!
//! # Program Flow
//!
//! 1. Parse command-line arguments
//! 2. Load the input file into an in-memory table (failure is fatal)
//! 3. Apply filter, select, and sort in that fixed order
//! 4. Print the frequency report if requested
//! 5. Write the result to a file, or render it to the console
//! 6. Print the total row count

mod cli;
mod config;
mod csv_handler;
mod display;
mod error;
mod table;

use std::process::ExitCode;

use anyhow::{Context, Result};
use config::AppConfig;
use table::Table;

/// Main entry point for the csvsift utility
///
/// The flow is strictly linear. Only a failure to read the input aborts the
/// run (exit status 1); a failure to write the output file is reported and
/// the run still completes, so the total row count is always printed for a
/// readable input. Diagnostics go to stdout as plain text.
fn main() -> ExitCode {
    // Step 1: Parse command-line arguments and build the configuration
    let args = match cli::parse_args() {
        Ok(args) => args,
        Err(err) => {
            println!("Error parsing arguments: {err}");
            return ExitCode::from(1);
        }
    };

    let config = AppConfig::from_args(&args);

    if config.verbose() {
        println!("Running in verbose mode");
        println!("Arguments: {args:?}");
    }

    // Step 2: Load the input file; this is the only fatal failure path
    let table = match load_input(&config) {
        Ok(table) => table,
        Err(err) => {
            println!("Error reading CSV file: {err:#}");
            return ExitCode::from(1);
        }
    };

    if config.verbose() {
        println!(
            "Loaded {} rows, {} columns from {}",
            table.row_count(),
            table.column_count(),
            config.input().display()
        );
    }

    // Step 3: Apply the transform pipeline in its fixed order
    let table = run_pipeline(&config, table);

    // Step 4: Frequency report, a side report that leaves the table as-is
    if let Some(column) = config.count() {
        let counts = table.count_values(column);
        if let Err(err) = display::print_value_counts(column, &counts) {
            println!("Error writing to console: {err}");
        }
    }

    // Step 5: Emit the result to a file or the console
    if let Some(path) = config.output() {
        // A write failure is reported but doesn't abort the run
        match csv_handler::save_table(path, &table, None, config.delimiter()) {
            Ok(()) => println!("Data written to {}", path.display()),
            Err(err) => println!("Error writing CSV file: {err}"),
        }
    } else {
        println!();
        println!("Data from {}:", config.input().display());
        if let Err(err) = display::print_table(&table, config.limit()) {
            println!("Error writing to console: {err}");
        }
    }

    // Step 6: Final row count of the table that was emitted
    println!();
    println!("Total rows: {}", table.row_count());

    ExitCode::SUCCESS
}

/// Load the input table according to the configuration
fn load_input(config: &AppConfig) -> Result<Table> {
    csv_handler::load_table(config.input(), config.delimiter())
        .with_context(|| format!("failed to load {}", config.input().display()))
}

/// Apply the requested transforms in the fixed pipeline order
///
/// Order is filter, then select, then sort. Each stage consumes the previous
/// table and produces a new one; stages that weren't requested pass the
/// table through untouched. Sorting on a column the projection dropped
/// compares empty strings, which leaves the row order unchanged.
fn run_pipeline(config: &AppConfig, mut table: Table) -> Table {
    if let Some((column, value)) = config.filter() {
        table = table.filter_eq(column, value);
        if config.verbose() {
            println!(
                "Filter '{column}' == '{value}' kept {} rows",
                table.row_count()
            );
        }
    }

    if let Some(columns) = config.select() {
        table = table.select_columns(columns);
        if config.verbose() {
            println!("Selected {} columns", table.column_count());
        }
    }

    if let Some(column) = config.sort() {
        table = table.sort_by(column, config.reverse());
        if config.verbose() {
            let direction = if config.reverse() {
                "descending"
            } else {
                "ascending"
            };
            println!("Sorted by '{column}' {direction}");
        }
    }

    table
}
