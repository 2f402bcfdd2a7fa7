//! Shared test utilities for unit tests
//!
//! Integration tests (in tests/) cannot access this module because it's
//! marked with #[cfg(test)]; they carry their own fixtures in
//! tests/common/mod.rs.

use crate::types::Trip;
use chrono::NaiveDateTime;

/// Parse a `YYYY-MM-DD HH:MM:SS` timestamp
pub fn timestamp(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").expect("valid test timestamp")
}

/// Builder for creating test Trip instances
pub struct TripBuilder {
    start: NaiveDateTime,
    start_station: String,
    end_station: String,
    duration_secs: f64,
    user_type: Option<String>,
    gender: Option<String>,
    birth_year: Option<i32>,
}

impl TripBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self {
            start: timestamp("2017-01-02 08:00:00"),
            start_station: "Station A".to_string(),
            end_station: "Station B".to_string(),
            duration_secs: 600.0,
            user_type: Some("Subscriber".to_string()),
            gender: None,
            birth_year: None,
        }
    }

    pub fn start(mut self, ts: &str) -> Self {
        self.start = timestamp(ts);
        self
    }

    pub fn stations(mut self, start: &str, end: &str) -> Self {
        self.start_station = start.to_string();
        self.end_station = end.to_string();
        self
    }

    #[allow(dead_code)]
    pub fn duration(mut self, secs: f64) -> Self {
        self.duration_secs = secs;
        self
    }

    #[allow(dead_code)]
    pub fn demographics(mut self, gender: Option<&str>, birth_year: Option<i32>) -> Self {
        self.gender = gender.map(str::to_string);
        self.birth_year = birth_year;
        self
    }

    pub fn build(self) -> Trip {
        let end = self.start + chrono::Duration::seconds(self.duration_secs as i64);
        Trip::new(
            self.start,
            end,
            self.start_station,
            self.end_station,
            self.duration_secs,
        )
        .with_user_type(self.user_type)
        .with_demographics(self.gender, self.birth_year)
    }
}

impl Default for TripBuilder {
    fn default() -> Self {
        Self::new()
    }
}
