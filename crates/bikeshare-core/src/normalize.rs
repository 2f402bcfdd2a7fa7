//! Normalization of free-form user input
//!
//! Every accepted spelling lives in a static alias table. Input is trimmed,
//! lower-cased and has its internal whitespace collapsed before lookup, so
//! `" New  York "` and `"new york"` resolve the same way.
//!
//! # Examples
//!
//! ```
//! use bikeshare_core::normalize::{normalize_city, normalize_month};
//! use bikeshare_core::types::City;
//! use chrono::Month;
//!
//! assert_eq!(normalize_city("NYC").unwrap(), City::NewYorkCity);
//! assert_eq!(normalize_month("03").unwrap(), Month::March);
//! assert!(normalize_month("july").is_err());
//! ```

use crate::error::{BikeshareError, InputCategory, Result};
use crate::types::{City, FilterMode};
use chrono::{Month, Weekday};

const CITY_ALIASES: &[(&str, City)] = &[
    ("chicago", City::Chicago),
    ("new york", City::NewYorkCity),
    ("new york city", City::NewYorkCity),
    ("nyc", City::NewYorkCity),
    ("washington", City::Washington),
];

const FILTER_MODE_ALIASES: &[(&str, FilterMode)] = &[
    ("month", FilterMode::Month),
    ("mon", FilterMode::Month),
    ("day", FilterMode::Day),
    ("none", FilterMode::None),
    ("not at all", FilterMode::None),
];

/// Only the first half of the year is present in the source data
const MONTH_ALIASES: &[(&str, Month)] = &[
    ("january", Month::January),
    ("jan", Month::January),
    ("1", Month::January),
    ("february", Month::February),
    ("feb", Month::February),
    ("2", Month::February),
    ("march", Month::March),
    ("mar", Month::March),
    ("3", Month::March),
    ("april", Month::April),
    ("apr", Month::April),
    ("4", Month::April),
    ("may", Month::May),
    ("5", Month::May),
    ("june", Month::June),
    ("jun", Month::June),
    ("6", Month::June),
];

const DAY_ALIASES: &[(&str, Weekday)] = &[
    ("monday", Weekday::Mon),
    ("mon", Weekday::Mon),
    ("mo", Weekday::Mon),
    ("tuesday", Weekday::Tue),
    ("tue", Weekday::Tue),
    ("tues", Weekday::Tue),
    ("tu", Weekday::Tue),
    ("wednesday", Weekday::Wed),
    ("wed", Weekday::Wed),
    ("we", Weekday::Wed),
    ("thursday", Weekday::Thu),
    ("thu", Weekday::Thu),
    ("thur", Weekday::Thu),
    ("th", Weekday::Thu),
    ("friday", Weekday::Fri),
    ("fri", Weekday::Fri),
    ("fr", Weekday::Fri),
    ("saturday", Weekday::Sat),
    ("sat", Weekday::Sat),
    ("sa", Weekday::Sat),
    ("sunday", Weekday::Sun),
    ("sun", Weekday::Sun),
    ("su", Weekday::Sun),
];

/// Lower-case, trim, and collapse runs of whitespace to a single space
fn canonical_text(input: &str) -> String {
    input
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

fn lookup<T: Copy>(table: &[(&str, T)], key: &str) -> Option<T> {
    table
        .iter()
        .find(|(alias, _)| *alias == key)
        .map(|(_, value)| *value)
}

/// Resolve a city name or alias
pub fn normalize_city(input: &str) -> Result<City> {
    lookup(CITY_ALIASES, &canonical_text(input))
        .ok_or_else(|| BikeshareError::invalid_input(InputCategory::City, input))
}

/// Resolve how the user wants to filter the data
pub fn normalize_filter_mode(input: &str) -> Result<FilterMode> {
    lookup(FILTER_MODE_ALIASES, &canonical_text(input))
        .ok_or_else(|| BikeshareError::invalid_input(InputCategory::FilterMode, input))
}

/// Resolve a month name, abbreviation or number (January through June)
pub fn normalize_month(input: &str) -> Result<Month> {
    let text = canonical_text(input);
    lookup(MONTH_ALIASES, text.trim_start_matches('0'))
        .ok_or_else(|| BikeshareError::invalid_input(InputCategory::Month, input))
}

/// Resolve a day name, abbreviation or two-letter code
pub fn normalize_day(input: &str) -> Result<Weekday> {
    lookup(DAY_ALIASES, &canonical_text(input))
        .ok_or_else(|| BikeshareError::invalid_input(InputCategory::Day, input))
}

/// Position of a supported month in the January..June ordering (1-6)
pub fn month_index(month: Month) -> u32 {
    month.number_from_month()
}

/// Position of a day in the Monday..Sunday ordering (0-6)
pub fn day_index(day: Weekday) -> u32 {
    day.num_days_from_monday()
}
