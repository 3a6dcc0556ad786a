//! Csvsift library crate
//!
//! This is the library component of csvsift, containing all the core
//! functionality for a command-line utility that processes delimited files.
//! The library provides:
//!
//! - Delimited file loading and saving with custom field separators
//! - An in-memory text table with header-derived column names
//! - Pure transforms: equality filtering, column projection, stable sorting
//! - Frequency counting over a single column
//! - Aligned console rendering with optional row-count truncation
//!
//! The library is designed to be small and predictable: every cell is text,
//! transforms return new tables instead of mutating, and unknown column
//! names degrade to empty strings rather than errors.

pub mod cli;
pub mod config;
pub mod csv_handler;
pub mod display;
pub mod error;
pub mod table;
