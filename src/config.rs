//! Runtime configuration derived from command-line arguments

use crate::cli::Cli;
use crate::error::{BikeshareError, Result};
use std::path::PathBuf;
use tracing::debug;

/// Settings shared by every command
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding the city CSV files
    pub data_dir: PathBuf,
    /// Emit JSON instead of tables
    pub json: bool,
    /// Show a spinner while loading data
    pub show_progress: bool,
    /// Print how long each report section took
    pub show_timing: bool,
}

impl Config {
    /// Build and validate the configuration from parsed CLI arguments
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        Self::resolve(cli, is_terminal::is_terminal(std::io::stdout()))
    }

    fn resolve(cli: &Cli, stdout_is_terminal: bool) -> Result<Self> {
        if !cli.data_dir.is_dir() {
            return Err(BikeshareError::Config(format!(
                "data directory '{}' does not exist",
                cli.data_dir.display()
            )));
        }

        let config = Self {
            data_dir: cli.data_dir.clone(),
            json: cli.json,
            show_progress: !cli.json && stdout_is_terminal,
            show_timing: !cli.json && !cli.no_timing,
        };
        debug!("Using configuration: {:?}", config);
        Ok(config)
    }
}
