//! CSV trip data loading for bikeshare
//!
//! This crate reads the per-city trip exports and produces trip tables with
//! derived calendar fields, as well as raw string tables for display.

pub mod data_loader;

pub use data_loader::{DataLoader, parse_timestamp};
