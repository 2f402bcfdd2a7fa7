//! Core domain types for bikeshare
//!
//! This module contains the fundamental types used throughout the bikeshare
//! crates: the supported cities, the filter modes a user can pick, individual
//! trip records with their derived calendar fields, and the tables that hold
//! them.

use chrono::{Datelike, Month, NaiveDateTime, Timelike, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Cities with trip data available
///
/// # Examples
/// ```
/// use bikeshare_core::types::City;
///
/// assert_eq!(City::NewYorkCity.file_name(), "new_york_city.csv");
/// assert!(!City::Washington.has_demographics());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum City {
    Chicago,
    NewYorkCity,
    Washington,
}

impl City {
    /// Canonical key of the city
    pub fn key(&self) -> &'static str {
        match self {
            City::Chicago => "chicago",
            City::NewYorkCity => "new_york_city",
            City::Washington => "washington",
        }
    }

    /// Name of the CSV file backing this city
    pub fn file_name(&self) -> &'static str {
        match self {
            City::Chicago => "chicago.csv",
            City::NewYorkCity => "new_york_city.csv",
            City::Washington => "washington.csv",
        }
    }

    /// Human-readable city name
    pub fn display_name(&self) -> &'static str {
        match self {
            City::Chicago => "Chicago",
            City::NewYorkCity => "New York City",
            City::Washington => "Washington",
        }
    }

    /// Whether the city's data carries gender and birth year columns
    pub fn has_demographics(&self) -> bool {
        !matches!(self, City::Washington)
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// How the user wants the data narrowed down
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterMode {
    Month,
    Day,
    None,
}

/// Full English name for a weekday
pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Full English name for a month number (1-12)
pub fn month_name(month: u32) -> &'static str {
    u8::try_from(month)
        .ok()
        .and_then(|m| Month::try_from(m).ok())
        .map(|m| m.name())
        .unwrap_or("Unknown")
}

/// A single bike rental
///
/// The calendar fields (`month`, `weekday`, `start_hour`) are derived from
/// the start timestamp when the trip is constructed and cannot change
/// afterwards.
///
/// # Examples
/// ```
/// use bikeshare_core::types::Trip;
/// use chrono::{NaiveDate, Weekday};
///
/// let start = NaiveDate::from_ymd_opt(2017, 6, 5).unwrap().and_hms_opt(8, 15, 0).unwrap();
/// let trip = Trip::new(start, start, "Canal St", "Clark St", 300.0);
///
/// assert_eq!(trip.month(), 6);
/// assert_eq!(trip.weekday(), Weekday::Mon);
/// assert_eq!(trip.day_index(), 0);
/// assert_eq!(trip.start_hour(), 8);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Trip {
    start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    pub start_station: String,
    pub end_station: String,
    /// Trip length in seconds
    pub duration_secs: f64,
    pub user_type: Option<String>,
    pub gender: Option<String>,
    pub birth_year: Option<i32>,
    month: u32,
    weekday: Weekday,
    start_hour: u32,
}

impl Trip {
    /// Create a trip and derive its calendar fields from `start_time`
    pub fn new(
        start_time: NaiveDateTime,
        end_time: NaiveDateTime,
        start_station: impl Into<String>,
        end_station: impl Into<String>,
        duration_secs: f64,
    ) -> Self {
        Self {
            start_time,
            end_time,
            start_station: start_station.into(),
            end_station: end_station.into(),
            duration_secs,
            user_type: None,
            gender: None,
            birth_year: None,
            month: start_time.month(),
            weekday: start_time.weekday(),
            start_hour: start_time.hour(),
        }
    }

    /// Set the rider category
    pub fn with_user_type(mut self, user_type: Option<String>) -> Self {
        self.user_type = user_type;
        self
    }

    /// Set the rider gender and birth year
    pub fn with_demographics(mut self, gender: Option<String>, birth_year: Option<i32>) -> Self {
        self.gender = gender;
        self.birth_year = birth_year;
        self
    }

    /// When the rental began
    pub fn start_time(&self) -> NaiveDateTime {
        self.start_time
    }

    /// Month of the start timestamp (1-12)
    pub fn month(&self) -> u32 {
        self.month
    }

    /// Day of week of the start timestamp
    pub fn weekday(&self) -> Weekday {
        self.weekday
    }

    /// Day of week as 0 (Monday) through 6 (Sunday)
    pub fn day_index(&self) -> u32 {
        crate::normalize::day_index(self.weekday)
    }

    /// Hour of the start timestamp (0-23)
    pub fn start_hour(&self) -> u32 {
        self.start_hour
    }

    /// Key identifying the start/end station combination
    pub fn route(&self) -> String {
        format!("{} to {}", self.start_station, self.end_station)
    }
}

/// Ordered trips for one city
#[derive(Debug, Clone, PartialEq)]
pub struct TripTable {
    pub city: City,
    pub trips: Vec<Trip>,
}

impl TripTable {
    /// Create a table from already parsed trips
    pub fn new(city: City, trips: Vec<Trip>) -> Self {
        Self { city, trips }
    }

    pub fn len(&self) -> usize {
        self.trips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trips.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Trip> {
        self.trips.iter()
    }
}

/// Unparsed rows of a city's file, used for raw display
///
/// The leading index column of the source file is not included.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
