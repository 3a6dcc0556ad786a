//! CLI argument parsing module for csvsift
//!
//! This module handles parsing command-line arguments using the clap crate.
//! It defines the command-line interface structure and behavior for the
//! application, enabling users to specify the input file, the transformation
//! pipeline, and the output destination.
//!
//! Key features of the CLI:
//! - A single positional input file per invocation
//! - Independently optional pipeline stages (filter, select, sort, count)
//! - Console output by default, file output with -o/--output
//! - Diagnostic output control via the --verbose flag

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments for csvsift
///
/// This struct represents all configurable aspects of the application through
/// command-line parameters. It is automatically populated by clap based on
/// the provided arguments.
///
/// Each pipeline option is independently optional and affects only the stage
/// it names; omitting all of them passes the input through unchanged.
#[derive(Parser, Debug)]
#[clap(
    author,
    version,
    about = "Filter, project, sort and summarize delimited files"
)]
pub struct CsvSiftArgs {
    /// Input delimited file to process
    ///
    /// The first line is read as the header row and supplies the column
    /// names used by all other options.
    #[clap(help = "Input delimited file")]
    pub input: PathBuf,

    /// Write the result to a file instead of the console
    ///
    /// The output uses the same delimiter as the input. When this option is
    /// absent the result is rendered as an aligned table on stdout.
    #[clap(short, long, help = "Write result to PATH instead of the console")]
    pub output: Option<PathBuf>,

    /// Field delimiter for both reading and writing
    ///
    /// Must be a single character; \t is accepted as an escape for tab.
    /// Example: -d ';' for semicolon-separated files.
    #[clap(
        short,
        long,
        default_value = ",",
        help = "Field delimiter (default: ,)"
    )]
    pub delimiter: String,

    /// Keep only rows where COLUMN equals VALUE
    ///
    /// The comparison is exact, case-sensitive string equality. Rows missing
    /// the column compare as the empty string.
    #[clap(
        long,
        num_args = 2,
        value_names = ["COLUMN", "VALUE"],
        help = "Keep rows where COLUMN equals VALUE"
    )]
    pub filter: Option<Vec<String>>,

    /// Select only the named columns, comma-separated
    ///
    /// Columns appear in the output in the order given here. Names that
    /// don't exist in the input produce empty-string cells.
    /// Example: --select name,age
    #[clap(long, help = "Select only the named columns (comma-separated)")]
    pub select: Option<String>,

    /// Sort rows by the named column
    ///
    /// The sort is a stable lexicographic comparison of the cell text;
    /// there is no numeric coercion.
    #[clap(long, help = "Sort by column", value_name = "COLUMN")]
    pub sort: Option<String>,

    /// Reverse the sort order
    ///
    /// Only meaningful together with --sort.
    #[clap(long, help = "Reverse sort order")]
    pub reverse: bool,

    /// Print a frequency report for the named column
    ///
    /// The report counts distinct values in the column after the other
    /// transforms have been applied and is sorted by descending count.
    /// It does not change the data flowing to the output.
    #[clap(long, help = "Count values in a column", value_name = "COLUMN")]
    pub count: Option<String>,

    /// Cap the number of rows displayed on the console
    ///
    /// Rows beyond the limit are summarized in a single trailer line.
    /// Ignored when writing to a file.
    #[clap(long, help = "Limit output rows", value_name = "N")]
    pub limit: Option<usize>,

    /// Enable verbose diagnostic output
    ///
    /// When enabled, shows the parsed arguments and row counts after
    /// loading and after each pipeline stage.
    #[clap(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

/// Parse command-line arguments into the CsvSiftArgs structure
///
/// This function uses clap to handle argument parsing, validation, and help text generation.
/// It automatically generates usage information, handles errors for missing required arguments,
/// and properly validates supported options.
///
/// # Returns
/// * `Ok(CsvSiftArgs)` - Command-line arguments successfully parsed
/// * `Err` - Error during argument parsing (handled by clap, usually results in help text display)
pub fn parse_args() -> Result<CsvSiftArgs> {
    Ok(CsvSiftArgs::parse())
}
