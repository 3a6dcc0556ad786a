//! Error handling for csvsift
//!
//! This module defines custom error types for the csvsift application.
//! It categorizes the failure modes of loading, transforming, and saving
//! delimited files, supports error propagation, and supplies helpful
//! error messages to users.
//!
//! The module uses thiserror to minimize boilerplate code and create
//! a consistent error handling approach throughout the codebase.

use thiserror::Error;

/// CsvSiftError represents all possible errors that can occur in the csvsift application
///
/// This enum covers the error conditions that can arise during:
/// - File I/O operations
/// - Delimited file parsing and writing
/// - Delimiter validation
///
/// Each variant includes a descriptive error message to help users understand
/// and troubleshoot problems. Conditions like unknown column names are not
/// errors at all: they degrade to empty-string cells by design of the data
/// model, so no variants exist for them.
#[derive(Error, Debug)]
pub enum CsvSiftError {
    /// Error during file system operations (reading/writing files)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Error while parsing or writing delimited file data
    #[error("File parsing error: {0}")]
    Csv(#[from] csv::Error),

    /// Error for delimiter strings that don't name a single character
    #[error("Invalid delimiter: {0}. Must be a single character.")]
    InvalidDelimiter(String),

    /// Error when writing a table with no columns and no explicit field list
    #[error("No header columns to write: table is empty and no field list was given")]
    NoHeaderColumns,
}

/// Result type alias for operations that can produce a CsvSiftError
///
/// This type alias simplifies function signatures and error handling throughout the codebase.
/// It represents either a successful result of type `T` or a `CsvSiftError`.
pub type CsvSiftResult<T> = std::result::Result<T, CsvSiftError>;
