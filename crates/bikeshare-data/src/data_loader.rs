//! Data loader module for reading city trip tables
//!
//! Each supported city is backed by one CSV file in the data directory
//! (`chicago.csv`, `new_york_city.csv`, `washington.csv`). The files start
//! with an unnamed index column which is discarded on load.
//!
//! # Examples
//!
//! ```no_run
//! use bikeshare_data::data_loader::DataLoader;
//! use bikeshare_core::types::City;
//! use chrono::Month;
//!
//! # fn example() -> bikeshare_core::Result<()> {
//! let loader = DataLoader::new("./data");
//!
//! // Only trips that started in March
//! let table = loader.load(City::Chicago, Some(Month::March), None)?;
//! println!("{} trips", table.len());
//! # Ok(())
//! # }
//! ```

use bikeshare_core::error::{BikeshareError, Result};
use bikeshare_core::filters::TripFilter;
use bikeshare_core::types::{City, RawTable, Trip, TripTable};
use chrono::{Month, NaiveDateTime, Weekday};
use indicatif::{ProgressBar, ProgressStyle};
use serde::Deserialize;
use std::fs::File;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Timestamp layouts found in the published trip exports
const TIMESTAMP_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
];

/// One row as it appears in a city file
///
/// Washington has no `Gender` or `Birth Year` columns, hence the defaults.
#[derive(Debug, Deserialize)]
struct CsvTrip {
    #[serde(rename = "Start Time")]
    start_time: String,
    #[serde(rename = "End Time")]
    end_time: String,
    #[serde(rename = "Trip Duration")]
    trip_duration: f64,
    #[serde(rename = "Start Station")]
    start_station: String,
    #[serde(rename = "End Station")]
    end_station: String,
    #[serde(rename = "User Type", default)]
    user_type: Option<String>,
    #[serde(rename = "Gender", default)]
    gender: Option<String>,
    #[serde(rename = "Birth Year", default)]
    birth_year: Option<f64>,
}

/// Parse a trip start or end timestamp
pub fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    TIMESTAMP_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
}

/// Loader for city trip tables
///
/// The DataLoader resolves cities to files inside a data directory and turns
/// their rows into trips with derived calendar fields.
#[derive(Debug, Clone)]
pub struct DataLoader {
    /// Directory holding the city CSV files
    data_dir: PathBuf,
    /// Whether to show a spinner while reading
    show_progress: bool,
}

impl DataLoader {
    /// Create a loader reading from `data_dir`
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            show_progress: false,
        }
    }

    /// Enable or disable the loading spinner
    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    /// Directory the loader reads from
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Path of the file backing `city`
    pub fn path_for(&self, city: City) -> PathBuf {
        self.data_dir.join(city.file_name())
    }

    /// Load a city's trips, keeping only those matching the selectors
    pub fn load(
        &self,
        city: City,
        month: Option<Month>,
        day: Option<Weekday>,
    ) -> Result<TripTable> {
        let filter = TripFilter { month, day };
        self.load_filtered(city, &filter)
    }

    /// Load a city's trips, keeping only those matching `filter`
    pub fn load_filtered(&self, city: City, filter: &TripFilter) -> Result<TripTable> {
        let started = Instant::now();
        let table = self.load_all(city)?;
        let total = table.len();
        let table = filter.apply_owned(table);

        info!(
            "Loaded {} trips for {} ({} after {}) in {:.3}s",
            total,
            city,
            table.len(),
            filter,
            started.elapsed().as_secs_f64()
        );
        Ok(table)
    }

    /// Load every trip for a city
    pub fn load_all(&self, city: City) -> Result<TripTable> {
        let path = self.path_for(city);
        debug!("Reading trips from {}", path.display());

        let mut reader = self.open(city, &path)?;
        let headers = reader
            .headers()
            .map_err(|e| csv_error(&path, e))?
            .clone();

        let progress = self.spinner(city);
        let mut trips = Vec::new();
        let mut record = csv::StringRecord::new();

        while reader
            .read_record(&mut record)
            .map_err(|e| csv_error(&path, e))?
        {
            let line = record.position().map(|p| p.line()).unwrap_or_default();
            let row: CsvTrip = record
                .deserialize(Some(&headers))
                .map_err(|e| malformed(&path, line, e.to_string()))?;
            trips.push(convert_row(row, city, &path, line)?);

            if let Some(pb) = &progress {
                if trips.len() % 10_000 == 0 {
                    pb.set_message(format!("Loading {} ({} trips)", city, trips.len()));
                }
            }
        }

        if let Some(pb) = progress {
            pb.finish_and_clear();
        }

        Ok(TripTable::new(city, trips))
    }

    /// Load a city's file as plain strings, without the leading index column
    pub fn load_raw(&self, city: City) -> Result<RawTable> {
        let path = self.path_for(city);
        debug!("Reading raw rows from {}", path.display());

        let mut reader = self.open(city, &path)?;
        let headers: Vec<String> = reader
            .headers()
            .map_err(|e| csv_error(&path, e))?
            .iter()
            .skip(1)
            .map(str::to_string)
            .collect();

        let mut rows: Vec<Vec<String>> = Vec::new();
        for record in reader.records() {
            let record = record.map_err(|e| csv_error(&path, e))?;
            rows.push(record.iter().skip(1).map(str::to_string).collect());
        }

        debug!("Read {} raw rows for {}", rows.len(), city);
        Ok(RawTable { headers, rows })
    }

    fn open(&self, city: City, path: &Path) -> Result<csv::Reader<File>> {
        let file = File::open(path).map_err(|source| BikeshareError::DataUnavailable {
            city,
            path: path.to_path_buf(),
            source,
        })?;
        Ok(csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(false)
            .from_reader(file))
    }

    fn spinner(&self, city: City) -> Option<ProgressBar> {
        if !self.show_progress {
            return None;
        }
        let pb = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}") {
            pb.set_style(style);
        }
        pb.set_message(format!("Loading {city}"));
        pb.enable_steady_tick(Duration::from_millis(100));
        Some(pb)
    }
}

fn convert_row(row: CsvTrip, city: City, path: &Path, line: u64) -> Result<Trip> {
    let start_time = parse_timestamp(&row.start_time).ok_or_else(|| {
        malformed(path, line, format!("invalid Start Time '{}'", row.start_time))
    })?;
    let end_time = parse_timestamp(&row.end_time)
        .ok_or_else(|| malformed(path, line, format!("invalid End Time '{}'", row.end_time)))?;

    if !row.trip_duration.is_finite() || row.trip_duration < 0.0 {
        return Err(malformed(
            path,
            line,
            format!("invalid Trip Duration '{}'", row.trip_duration),
        ));
    }

    let trip = Trip::new(
        start_time,
        end_time,
        row.start_station,
        row.end_station,
        row.trip_duration,
    )
    .with_user_type(non_blank(row.user_type));

    if !city.has_demographics() {
        return Ok(trip);
    }

    let birth_year = row
        .birth_year
        .map(|year| {
            if year.is_finite() && year.fract() == 0.0 {
                Ok(year as i32)
            } else {
                Err(malformed(path, line, format!("invalid Birth Year '{year}'")))
            }
        })
        .transpose()?;

    Ok(trip.with_demographics(non_blank(row.gender), birth_year))
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn malformed(path: &Path, line: u64, error: String) -> BikeshareError {
    BikeshareError::MalformedRecord {
        file: path.to_path_buf(),
        line,
        error,
    }
}

fn csv_error(path: &Path, err: csv::Error) -> BikeshareError {
    let line = err.position().map(|p| p.line()).unwrap_or_default();
    malformed(path, line, err.to_string())
}
