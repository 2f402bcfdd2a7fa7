//! CLI interface for bikeshare
//!
//! Without a subcommand the tool runs interactively, prompting for a city
//! and an optional month or day filter. The `report` and `raw` subcommands
//! take the same selections as flags and print without prompting.
//!
//! # Example
//!
//! ```bash
//! # Interactive session reading CSV files from ./data
//! bikeshare --data-dir ./data
//!
//! # All reports for Chicago trips on Mondays in March, as JSON
//! bikeshare report --city chicago --month mar --day mon --json
//!
//! # First 20 raw rows for Washington
//! bikeshare raw --city washington --rows 20
//! ```

use crate::error::Result;
use bikeshare_core::filters::TripFilter;
use bikeshare_core::normalize::{normalize_city, normalize_day, normalize_month};
use bikeshare_core::types::City;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Explore US bike share trip data
#[derive(Parser, Debug, Clone)]
#[command(name = "bikeshare")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Directory containing chicago.csv, new_york_city.csv and washington.csv
    #[arg(long, short = 'd', default_value = ".", global = true)]
    pub data_dir: PathBuf,

    /// Output reports as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Show informational and debug logging on stderr
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Do not print how long each report section took
    #[arg(long, global = true)]
    pub no_timing: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Arguments for the one-shot report
#[derive(Args, Debug, Clone)]
pub struct ReportArgs {
    /// City to analyze (chicago, new york, nyc, washington)
    #[arg(long, short = 'c')]
    pub city: String,

    /// Only include trips starting in this month (january..june, jan, 1..6)
    #[arg(long, short = 'm')]
    pub month: Option<String>,

    /// Only include trips starting on this day (monday, mon, mo, ...)
    #[arg(long)]
    pub day: Option<String>,
}

impl ReportArgs {
    /// Normalize the flags into a city and filter
    pub fn selection(&self) -> Result<(City, TripFilter)> {
        let city = normalize_city(&self.city)?;
        let mut filter = TripFilter::new();
        if let Some(month) = &self.month {
            filter = filter.with_month(normalize_month(month)?);
        }
        if let Some(day) = &self.day {
            filter = filter.with_day(normalize_day(day)?);
        }
        Ok((city, filter))
    }
}

/// Arguments for printing raw rows
#[derive(Args, Debug, Clone)]
pub struct RawArgs {
    /// City whose raw data to print
    #[arg(long, short = 'c')]
    pub city: String,

    /// Number of rows to print
    #[arg(long, short = 'n', default_value_t = crate::pager::PAGE_SIZE)]
    pub rows: usize,
}

/// Available commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Print every report for one selection without prompting
    Report(ReportArgs),
    /// Print the first rows of a city's unfiltered data
    Raw(RawArgs),
}
