//! Core types, errors, and filters for bikeshare
//!
//! This crate provides the foundational types, error handling, input
//! normalization and trip filtering used by all other bikeshare crates.

pub mod error;
pub mod filters;
pub mod normalize;
pub mod report_types;
pub mod types;

#[cfg(test)]
pub mod test_utils;

// Re-export commonly used types
pub use error::{BikeshareError, InputCategory, Result};
pub use filters::TripFilter;
pub use types::{City, FilterMode, RawTable, Trip, TripTable};
