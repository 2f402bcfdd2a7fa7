//! Report types shared between the statistics engine and the formatters

use chrono::Weekday;
use serde::Serialize;

const SECONDS_PER_MINUTE: u64 = 60;
const SECONDS_PER_HOUR: u64 = 3_600;
const SECONDS_PER_DAY: u64 = 86_400;

/// Most frequent times of travel
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimeStats {
    /// Most common month (1-12)
    pub popular_month: u32,
    /// Most common day of week
    pub popular_day: Weekday,
    /// Most common start hour (0-23)
    pub popular_hour: u32,
}

/// Most popular stations and trip
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StationStats {
    pub popular_start_station: String,
    pub popular_end_station: String,
    /// Most common "<start> to <end>" combination
    pub popular_trip: String,
}

/// A span of whole seconds broken into calendar units
///
/// Days are not rolled up into larger units.
///
/// # Examples
/// ```
/// use bikeshare_core::report_types::DurationParts;
///
/// let parts = DurationParts::from_seconds(3785);
/// assert_eq!((parts.days, parts.hours, parts.minutes, parts.seconds), (0, 1, 3, 5));
/// assert_eq!(parts.total_seconds(), 3785);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct DurationParts {
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl DurationParts {
    /// Decompose a whole number of seconds
    pub fn from_seconds(total: u64) -> Self {
        Self {
            days: total / SECONDS_PER_DAY,
            hours: total % SECONDS_PER_DAY / SECONDS_PER_HOUR,
            minutes: total % SECONDS_PER_HOUR / SECONDS_PER_MINUTE,
            seconds: total % SECONDS_PER_MINUTE,
        }
    }

    /// Decompose a fractional number of seconds, truncating the fraction
    pub fn from_fractional(total: f64) -> Self {
        if total.is_finite() && total > 0.0 {
            Self::from_seconds(total.trunc() as u64)
        } else {
            Self::default()
        }
    }

    /// Reassemble the parts into seconds
    pub fn total_seconds(&self) -> u64 {
        self.days * SECONDS_PER_DAY
            + self.hours * SECONDS_PER_HOUR
            + self.minutes * SECONDS_PER_MINUTE
            + self.seconds
    }

    /// Whole minutes including those carried into hours and days
    pub fn total_minutes(&self) -> u64 {
        self.total_seconds() / SECONDS_PER_MINUTE
    }
}

/// Trip duration aggregates
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DurationStats {
    /// Sum of all trip durations in seconds
    pub total_seconds: f64,
    /// Arithmetic mean of trip durations in seconds
    pub mean_seconds: f64,
    pub total: DurationParts,
    pub mean: DurationParts,
}

/// Number of trips sharing one category value
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValueCount {
    pub value: String,
    pub count: usize,
}

/// Earliest, most recent and most common birth year
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BirthYearStats {
    pub earliest: i32,
    pub most_recent: i32,
    pub most_common: i32,
}

/// Gender and birth year breakdown, only for cities that record them
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Demographics {
    pub genders: Vec<ValueCount>,
    /// `None` when no trip in the selection has a birth year
    pub birth_years: Option<BirthYearStats>,
}

/// Rider statistics
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserStats {
    pub user_types: Vec<ValueCount>,
    /// `None` for cities without gender/birth year data
    pub demographics: Option<Demographics>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duration_decomposition() {
        let parts = DurationParts::from_seconds(90_061);
        assert_eq!(parts.days, 1);
        assert_eq!(parts.hours, 1);
        assert_eq!(parts.minutes, 1);
        assert_eq!(parts.seconds, 1);
        assert_eq!(parts.total_seconds(), 90_061);
    }

    #[test]
    fn test_days_do_not_roll_over() {
        let parts = DurationParts::from_seconds(400 * 86_400);
        assert_eq!(parts.days, 400);
        assert_eq!(parts.hours, 0);
    }

    #[test]
    fn test_fractional_seconds_truncate() {
        let parts = DurationParts::from_fractional(1261.67);
        assert_eq!(parts.minutes, 21);
        assert_eq!(parts.seconds, 1);
        assert_eq!(DurationParts::from_fractional(59.999).seconds, 59);
        assert_eq!(DurationParts::from_fractional(-3.0), DurationParts::default());
        assert_eq!(DurationParts::from_fractional(f64::NAN), DurationParts::default());
    }

    #[test]
    fn test_total_minutes() {
        let parts = DurationParts::from_seconds(2 * 3_600 + 5 * 60 + 9);
        assert_eq!(parts.minutes, 5);
        assert_eq!(parts.total_minutes(), 125);
    }
}
