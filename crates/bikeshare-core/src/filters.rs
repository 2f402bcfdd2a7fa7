//! Filtering module for trip tables
//!
//! This module narrows a trip table down to a calendar month and/or a day of
//! the week. Both selectors are optional; an unset selector does not filter
//! on that axis.
//!
//! # Examples
//!
//! ```
//! use bikeshare_core::filters::TripFilter;
//! use chrono::{Month, Weekday};
//!
//! // Mondays in March
//! let filter = TripFilter::new()
//!     .with_month(Month::March)
//!     .with_day(Weekday::Mon);
//! assert!(!filter.is_unfiltered());
//! ```

use crate::normalize::{day_index, month_index};
use crate::types::{Trip, TripTable};
use chrono::{Month, Weekday};
use std::fmt;
use tracing::debug;

/// Filter criteria for trip tables
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TripFilter {
    /// Month selector
    pub month: Option<Month>,
    /// Day-of-week selector
    pub day: Option<Weekday>,
}

impl TripFilter {
    /// Create a new filter with no restrictions
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the month selector
    pub fn with_month(mut self, month: Month) -> Self {
        self.month = Some(month);
        self
    }

    /// Set the day-of-week selector
    pub fn with_day(mut self, day: Weekday) -> Self {
        self.day = Some(day);
        self
    }

    /// Whether neither selector is set
    pub fn is_unfiltered(&self) -> bool {
        self.month.is_none() && self.day.is_none()
    }

    /// Check if a trip passes the filter
    pub fn matches(&self, trip: &Trip) -> bool {
        if let Some(month) = self.month {
            if trip.month() != month_index(month) {
                return false;
            }
        }

        if let Some(day) = self.day {
            if trip.day_index() != day_index(day) {
                return false;
            }
        }

        true
    }

    /// Apply the filter, keeping matching trips in their original order
    pub fn apply(&self, table: &TripTable) -> TripTable {
        TripTable::new(
            table.city,
            table
                .iter()
                .filter(|trip| self.matches(trip))
                .cloned()
                .collect(),
        )
    }

    /// Apply the filter to an owned table without cloning trips
    pub fn apply_owned(&self, mut table: TripTable) -> TripTable {
        let before = table.len();
        table.trips.retain(|trip| self.matches(trip));
        debug!("Filter ({}) kept {} of {} trips", self, table.len(), before);
        table
    }
}

impl fmt::Display for TripFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.month, self.day) {
            (None, None) => write!(f, "no filter"),
            (Some(month), None) => write!(f, "month: {}", month.name()),
            (None, Some(day)) => write!(f, "day: {}", crate::types::weekday_name(day)),
            (Some(month), Some(day)) => write!(
                f,
                "month: {}, day: {}",
                month.name(),
                crate::types::weekday_name(day)
            ),
        }
    }
}
