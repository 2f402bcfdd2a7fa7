//! Statistics engine for trip tables
//!
//! Each routine takes an already filtered [`TripTable`] and summarizes one
//! aspect of it. All of them refuse to work on an empty table and return
//! [`BikeshareError::EmptyResult`] instead, since a mode, minimum or mean of
//! nothing is undefined.
//!
//! Modes are computed with an explicit linear scan: when several values share
//! the highest count, the one encountered first in the table wins.
//!
//! # Examples
//!
//! ```no_run
//! use bikeshare::statistics::{station_stats, time_stats};
//! use bikeshare_core::types::City;
//! use bikeshare_data::DataLoader;
//!
//! # fn example() -> bikeshare::Result<()> {
//! let table = DataLoader::new(".").load(City::Chicago, None, None)?;
//!
//! let times = time_stats(&table)?;
//! let stations = station_stats(&table)?;
//! println!("Busiest hour: {}", times.popular_hour);
//! println!("Busiest route: {}", stations.popular_trip);
//! # Ok(())
//! # }
//! ```

use bikeshare_core::error::{BikeshareError, Result};
use bikeshare_core::report_types::{
    BirthYearStats, Demographics, DurationParts, DurationStats, StationStats, TimeStats,
    UserStats, ValueCount,
};
use bikeshare_core::types::TripTable;
use std::collections::HashMap;
use std::hash::Hash;
use tracing::debug;

/// Count occurrences of each value, keeping first-seen order
fn tally<T, I>(values: I) -> Vec<(T, usize)>
where
    T: Eq + Hash + Clone,
    I: IntoIterator<Item = T>,
{
    let mut positions: HashMap<T, usize> = HashMap::new();
    let mut counts: Vec<(T, usize)> = Vec::new();

    for value in values {
        match positions.get(&value) {
            Some(&index) => counts[index].1 += 1,
            None => {
                positions.insert(value.clone(), counts.len());
                counts.push((value, 1));
            }
        }
    }

    counts
}

/// Most frequent value; ties go to the value encountered first
///
/// # Examples
/// ```
/// use bikeshare::statistics::mode;
///
/// assert_eq!(mode(vec![3, 1, 1, 3, 2]), Some(3));
/// assert_eq!(mode(Vec::<u32>::new()), None);
/// ```
pub fn mode<T, I>(values: I) -> Option<T>
where
    T: Eq + Hash + Clone,
    I: IntoIterator<Item = T>,
{
    let mut best: Option<(T, usize)> = None;
    for (value, count) in tally(values) {
        if best.as_ref().is_none_or(|(_, top)| count > *top) {
            best = Some((value, count));
        }
    }
    best.map(|(value, _)| value)
}

/// Occurrences per value, most frequent first, ties in first-seen order
pub fn value_counts<I>(values: I) -> Vec<ValueCount>
where
    I: IntoIterator<Item = String>,
{
    let mut counts = tally(values);
    // Stable sort keeps first-seen order among equal counts
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
        .into_iter()
        .map(|(value, count)| ValueCount { value, count })
        .collect()
}

fn ensure_not_empty(table: &TripTable, statistic: &'static str) -> Result<()> {
    if table.is_empty() {
        debug!("{} requested over an empty selection", statistic);
        return Err(BikeshareError::EmptyResult { statistic });
    }
    Ok(())
}

fn empty(statistic: &'static str) -> BikeshareError {
    BikeshareError::EmptyResult { statistic }
}

/// Most frequent month, day of week and start hour
pub fn time_stats(table: &TripTable) -> Result<TimeStats> {
    const NAME: &str = "time stats";
    ensure_not_empty(table, NAME)?;

    Ok(TimeStats {
        popular_month: mode(table.iter().map(|t| t.month())).ok_or_else(|| empty(NAME))?,
        popular_day: mode(table.iter().map(|t| t.weekday())).ok_or_else(|| empty(NAME))?,
        popular_hour: mode(table.iter().map(|t| t.start_hour())).ok_or_else(|| empty(NAME))?,
    })
}

/// Most popular start station, end station and start/end combination
pub fn station_stats(table: &TripTable) -> Result<StationStats> {
    const NAME: &str = "station stats";
    ensure_not_empty(table, NAME)?;

    Ok(StationStats {
        popular_start_station: mode(table.iter().map(|t| t.start_station.as_str()))
            .ok_or_else(|| empty(NAME))?
            .to_string(),
        popular_end_station: mode(table.iter().map(|t| t.end_station.as_str()))
            .ok_or_else(|| empty(NAME))?
            .to_string(),
        popular_trip: mode(table.iter().map(|t| t.route())).ok_or_else(|| empty(NAME))?,
    })
}

/// Total and average trip duration
pub fn trip_duration_stats(table: &TripTable) -> Result<DurationStats> {
    ensure_not_empty(table, "trip duration stats")?;

    let total_seconds: f64 = table.iter().map(|t| t.duration_secs).sum();
    let mean_seconds = total_seconds / table.len() as f64;

    Ok(DurationStats {
        total_seconds,
        mean_seconds,
        total: DurationParts::from_fractional(total_seconds),
        mean: DurationParts::from_fractional(mean_seconds),
    })
}

/// Rider counts by type and, where the city records it, by gender and birth year
///
/// Gender and birth year are never read for cities without those columns.
pub fn user_stats(table: &TripTable) -> Result<UserStats> {
    ensure_not_empty(table, "user stats")?;

    let user_types = value_counts(table.iter().filter_map(|t| t.user_type.clone()));

    let demographics = if table.city.has_demographics() {
        Some(demographics(table))
    } else {
        debug!("Skipping gender and birth year for {}", table.city);
        None
    };

    Ok(UserStats {
        user_types,
        demographics,
    })
}

fn demographics(table: &TripTable) -> Demographics {
    let genders = value_counts(table.iter().filter_map(|t| t.gender.clone()));

    let years: Vec<i32> = table.iter().filter_map(|t| t.birth_year).collect();
    let birth_years = match (
        years.iter().min(),
        years.iter().max(),
        mode(years.iter().copied()),
    ) {
        (Some(&earliest), Some(&most_recent), Some(most_common)) => Some(BirthYearStats {
            earliest,
            most_recent,
            most_common,
        }),
        _ => None,
    };

    Demographics {
        genders,
        birth_years,
    }
}
