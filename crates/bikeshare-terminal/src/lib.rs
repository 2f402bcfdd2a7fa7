//! Terminal output formatting for bikeshare
//!
//! This crate provides table and JSON formatting for trip statistics
//! and raw row display.

pub mod output;

pub use output::{JsonFormatter, ReportFormatter, Section, TableFormatter, get_formatter};
