//! Delimited file handling module for csvsift
//!
//! This module handles loading delimited text files into in-memory tables
//! and saving tables back to delimited files. It provides functionality for:
//!
//! - Loading files with the first line as the header row
//! - Custom single-character delimiters with a \t escape for tabs
//! - Normalizing ragged data lines against the header width
//! - Writing a header line followed by one line per record
//!
//! The module uses buffered I/O for efficiency and the csv crate for
//! standard quoting behavior in both directions. File handles live inside
//! the load/save functions, so they are released on every exit path.

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use crate::error::{CsvSiftError, CsvSiftResult};
use crate::table::Table;

/// Convert a delimiter string to the single byte the csv crate expects
///
/// Accepts any single-character delimiter, plus the literal two-character
/// escape `\t` for tab. Anything else is rejected before a file is touched.
///
/// # Arguments
/// * `delimiter` - Delimiter string from the command line
///
/// # Returns
/// * `Ok(u8)` - The delimiter byte
/// * `Err` - If the string doesn't name a single character
pub fn delimiter_byte(delimiter: &str) -> CsvSiftResult<u8> {
    if delimiter.len() == 1 {
        Ok(delimiter.as_bytes()[0])
    } else if delimiter == "\\t" {
        Ok(b'\t')
    } else {
        Err(CsvSiftError::InvalidDelimiter(delimiter.to_string()))
    }
}

/// Load a delimited file into an in-memory table
///
/// Parses the file with the first line as column headers; every subsequent
/// line becomes one row keyed by those headers. All cells are read as text
/// with no type inference. The reader runs in flexible mode so data lines
/// with the wrong field count reach the table's normalization rule (pad
/// short rows, drop excess fields) instead of failing the load.
///
/// # Arguments
/// * `path` - Path of the file to read
/// * `delimiter` - Field delimiter string
///
/// # Returns
/// * `Ok(Table)` - The successfully loaded table
/// * `Err` - If the delimiter is invalid, the file can't be opened, or the
///   contents can't be decoded
pub fn load_table(path: &Path, delimiter: &str) -> CsvSiftResult<Table> {
    let delim = delimiter_byte(delimiter)?;

    // Open the file
    let file = File::open(path)?;
    let reader = BufReader::new(file);

    // Create a CSV reader with the custom delimiter
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .delimiter(delim)
        .flexible(true)
        .from_reader(reader);

    // Get headers
    let headers = csv_reader
        .headers()
        .map_err(CsvSiftError::Csv)?
        .iter()
        .map(|s| s.to_string())
        .collect::<Vec<_>>();

    // Create a new table
    let mut table = Table::new(headers);

    // Read rows
    for result in csv_reader.records() {
        let record = result.map_err(CsvSiftError::Csv)?;

        let row = record.iter().map(|field| field.to_string()).collect();
        table.push_row(row);
    }

    Ok(table)
}

/// Save a table to a delimited file
///
/// Writes a header line followed by one line per record. The header comes
/// from the explicit field list when one is given, otherwise from the
/// table's own column order. Cells for fields a row doesn't have are written
/// as empty strings.
///
/// # Arguments
/// * `path` - Path of the file to write
/// * `table` - The table to serialize
/// * `fields` - Optional explicit header field list
/// * `delimiter` - Field delimiter string
///
/// # Returns
/// * `Ok(())` if the table was successfully written
/// * `Err` if the delimiter is invalid, there are no header columns to
///   derive, or an open/write failure occurs
pub fn save_table(
    path: &Path,
    table: &Table,
    fields: Option<&[String]>,
    delimiter: &str,
) -> CsvSiftResult<()> {
    let delim = delimiter_byte(delimiter)?;

    // Header fields come from the caller or from the table's column order
    let fields = match fields {
        Some(fields) => fields,
        None => table.columns(),
    };
    if fields.is_empty() {
        return Err(CsvSiftError::NoHeaderColumns);
    }

    // Open the file for writing
    let file = File::create(path)?;
    let writer = BufWriter::new(file);

    // Create a CSV writer with the custom delimiter
    let mut csv_writer = csv::WriterBuilder::new()
        .delimiter(delim)
        .from_writer(writer);

    // Write headers
    csv_writer.write_record(fields).map_err(CsvSiftError::Csv)?;

    // Write rows
    for row in table.rows() {
        let record: Vec<&str> = fields.iter().map(|field| table.cell(row, field)).collect();

        csv_writer.write_record(&record).map_err(CsvSiftError::Csv)?;
    }

    // Flush and finish
    csv_writer.flush()?;

    Ok(())
}
