//! bikeshare - Explore US bike share trip data from local CSV files
//!
//! This library provides functionality to:
//! - Load trip records for Chicago, New York City and Washington
//! - Filter trips by month (January to June) or day of week
//! - Compute time, station, duration and user statistics
//! - Drive an interactive prompt session or one-shot reports
//!
//! # Examples
//!
//! ```no_run
//! use bikeshare::statistics::{station_stats, time_stats};
//! use bikeshare_core::{City, TripFilter};
//! use bikeshare_data::DataLoader;
//! use chrono::Month;
//!
//! fn main() -> bikeshare::Result<()> {
//!     let loader = DataLoader::new("./data");
//!     let filter = TripFilter::new().with_month(Month::March);
//!     let trips = loader.load_filtered(City::Chicago, &filter)?;
//!
//!     let times = time_stats(&trips)?;
//!     let stations = station_stats(&trips)?;
//!     println!("{} / {}", times.popular_hour, stations.popular_trip);
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod controller;
pub mod pager;
pub mod statistics;

pub use bikeshare_core::error;

// Re-export commonly used types
pub use error::{BikeshareError, Result};
