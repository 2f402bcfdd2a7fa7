//! Error types for bikeshare
//!
//! This module defines the error types used throughout the bikeshare crates.
//! All errors are derived from `thiserror` for convenient error handling
//! and automatic `From` implementations.
//!
//! # Example
//!
//! ```
//! use bikeshare_core::error::{BikeshareError, Result};
//!
//! fn example_function() -> Result<()> {
//!     // This will automatically convert io::Error to BikeshareError
//!     let _file = std::fs::read_to_string("nonexistent.txt")?;
//!     Ok(())
//! }
//! ```

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

use crate::types::City;

/// The kind of user input being normalized
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputCategory {
    City,
    FilterMode,
    Month,
    Day,
}

impl InputCategory {
    /// User-facing message printed when input of this kind is rejected
    pub fn message(&self) -> &'static str {
        match self {
            InputCategory::City => {
                "The city you selected is not valid, please restart the program and try again"
            }
            InputCategory::FilterMode => {
                "The filter criteria you entered did not match one of the options (month, day, none), please restart the program and try again"
            }
            InputCategory::Month => {
                "The month you selected is not valid, please restart the program and try again"
            }
            InputCategory::Day => {
                "The day of the week you selected is not valid, please restart the program and try again"
            }
        }
    }
}

impl fmt::Display for InputCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputCategory::City => write!(f, "city"),
            InputCategory::FilterMode => write!(f, "filter mode"),
            InputCategory::Month => write!(f, "month"),
            InputCategory::Day => write!(f, "day of week"),
        }
    }
}

/// Main error type for bikeshare operations
#[derive(Error, Debug)]
pub enum BikeshareError {
    /// User input did not match any known alias
    #[error("{}", .category.message())]
    InvalidInput {
        /// What kind of value was expected
        category: InputCategory,
        /// The text the user typed
        input: String,
    },

    /// Backing table for a city is missing or unreadable
    #[error("Trip data for {city} is unavailable at {}: {source}", .path.display())]
    DataUnavailable {
        city: City,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A record could not be parsed
    #[error("Malformed record in {} at line {line}: {error}", .file.display())]
    MalformedRecord {
        /// The file containing the record
        file: PathBuf,
        /// 1-based line number, 0 when unknown
        line: u64,
        /// The error message
        error: String,
    },

    /// A statistic was requested over zero matching records
    #[error("No data for this selection ({statistic})")]
    EmptyResult { statistic: &'static str },

    /// Console input ended before a selection was made
    #[error("Input closed before a selection was made")]
    InputClosed,

    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl BikeshareError {
    /// Build an `InvalidInput` error for the given category
    pub fn invalid_input(category: InputCategory, input: impl Into<String>) -> Self {
        Self::InvalidInput {
            category,
            input: input.into(),
        }
    }

    /// Whether this error only means a statistic had nothing to work on
    pub fn is_empty_result(&self) -> bool {
        matches!(self, Self::EmptyResult { .. })
    }
}

/// Convenience type alias for Results in bikeshare
pub type Result<T> = std::result::Result<T, BikeshareError>;
