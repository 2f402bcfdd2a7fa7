//! Output formatting module for bikeshare
//!
//! This module provides formatters for displaying trip statistics in different formats:
//! - Table format for human-readable terminal output
//! - JSON format for machine-readable output and integration with other tools
//!
//! # Examples
//!
//! ```
//! use bikeshare_terminal::output::get_formatter;
//! use bikeshare_core::report_types::StationStats;
//!
//! let stats = StationStats {
//!     popular_start_station: "Streeter Dr & Grand Ave".to_string(),
//!     popular_end_station: "Lake Shore Dr & Monroe St".to_string(),
//!     popular_trip: "Lake Shore Dr & Monroe St to Streeter Dr & Grand Ave".to_string(),
//! };
//!
//! // Table formatter for human-readable output
//! let formatter = get_formatter(false);
//! assert!(formatter.format_station_stats(&stats).contains("Streeter Dr & Grand Ave"));
//!
//! // JSON formatter for machine-readable output
//! let json_formatter = get_formatter(true);
//! assert!(json_formatter.format_station_stats(&stats).contains("\"popular_trip\""));
//! ```

use bikeshare_core::filters::TripFilter;
use bikeshare_core::report_types::{
    DurationParts, DurationStats, StationStats, TimeStats, UserStats, ValueCount,
};
use bikeshare_core::types::{City, month_name, weekday_name};
use colored::Colorize;
use prettytable::{Cell, Row, Table, format, row};
use serde_json::{Map, Value, json};
use std::time::Duration;

/// Width of the rule printed after each report section
const RULE_WIDTH: usize = 60;

/// Report sections in the order they are shown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Time,
    Station,
    Duration,
    User,
}

impl Section {
    /// All sections in display order
    pub const ALL: [Section; 4] = [
        Section::Time,
        Section::Station,
        Section::Duration,
        Section::User,
    ];

    /// Heading printed while the section is computed
    pub fn title(&self) -> &'static str {
        match self {
            Section::Time => "Calculating The Most Frequent Times of Travel...",
            Section::Station => "Calculating The Most Popular Stations and Trip...",
            Section::Duration => "Calculating Trip Duration...",
            Section::User => "Calculating User Stats...",
        }
    }

    /// Stable identifier used in JSON output
    pub fn key(&self) -> &'static str {
        match self {
            Section::Time => "time_stats",
            Section::Station => "station_stats",
            Section::Duration => "trip_duration_stats",
            Section::User => "user_stats",
        }
    }
}

/// Render a total duration as `D days H hours M minutes S seconds`
pub fn format_total_duration(parts: &DurationParts) -> String {
    format!(
        "{} days {} hours {} minutes {} seconds",
        parts.days, parts.hours, parts.minutes, parts.seconds
    )
}

/// Render an average duration as `M minutes S seconds`
///
/// Hours and days are folded into the minute count.
pub fn format_mean_duration(parts: &DurationParts) -> String {
    format!("{} minutes {} seconds", parts.total_minutes(), parts.seconds)
}

/// Trait for output formatters
///
/// Every method returns the complete text to print; an empty string means
/// the formatter has nothing to show for that element.
pub trait ReportFormatter {
    /// Summary of what is being reported on
    fn format_selection(&self, city: City, filter: &TripFilter, trips: usize) -> String;

    /// Heading shown before a section is computed
    fn format_section_start(&self, section: Section) -> String;

    /// Closing lines of a section, with the time it took when known
    fn format_section_end(&self, elapsed: Option<Duration>) -> String;

    fn format_time_stats(&self, stats: &TimeStats) -> String;

    fn format_station_stats(&self, stats: &StationStats) -> String;

    fn format_duration_stats(&self, stats: &DurationStats) -> String;

    fn format_user_stats(&self, stats: &UserStats) -> String;

    /// Shown in place of a section when the selection has no trips
    fn format_no_data(&self, section: Section) -> String;

    /// A window of raw rows starting at row index `start`
    fn format_raw_rows(&self, headers: &[String], start: usize, rows: &[Vec<String>]) -> String;
}

/// Table formatter for human-readable output
///
/// Produces ASCII tables suitable for terminal display. Counts are formatted
/// with thousands separators.
#[derive(Debug, Default)]
pub struct TableFormatter;

impl TableFormatter {
    /// Create a new TableFormatter
    pub fn new() -> Self {
        Self
    }

    /// Format a number with thousands separators
    fn format_number(n: usize) -> String {
        let s = n.to_string();
        let mut result = String::new();

        for (count, ch) in s.chars().rev().enumerate() {
            if count > 0 && count % 3 == 0 {
                result.push(',');
            }
            result.push(ch);
        }

        result.chars().rev().collect()
    }

    fn statistic_table() -> Table {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_NO_LINESEP_WITH_TITLE);
        table.set_titles(row![b -> "Statistic", b -> "Value"]);
        table
    }

    fn counts_table(label: &str, counts: &[ValueCount]) -> Table {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_NO_LINESEP_WITH_TITLE);
        table.set_titles(row![b -> label, b -> "Count"]);
        for entry in counts {
            table.add_row(row![entry.value, r -> Self::format_number(entry.count)]);
        }
        table
    }
}

impl ReportFormatter for TableFormatter {
    fn format_selection(&self, city: City, filter: &TripFilter, trips: usize) -> String {
        format!(
            "\n{} trips for {} ({})",
            Self::format_number(trips),
            city.display_name().bold(),
            filter
        )
    }

    fn format_section_start(&self, section: Section) -> String {
        format!("\n{}\n", section.title().bold())
    }

    fn format_section_end(&self, elapsed: Option<Duration>) -> String {
        let rule = "*".repeat(RULE_WIDTH);
        match elapsed {
            Some(elapsed) => format!(
                "\nThis took {:.4} seconds.\n{}",
                elapsed.as_secs_f64(),
                rule
            ),
            None => rule,
        }
    }

    fn format_time_stats(&self, stats: &TimeStats) -> String {
        let mut table = Self::statistic_table();
        table.add_row(row![
            "Most common month",
            month_name(stats.popular_month)
        ]);
        table.add_row(row!["Most common day", weekday_name(stats.popular_day)]);
        table.add_row(row![
            "Most common start hour",
            stats.popular_hour.to_string()
        ]);
        table.to_string()
    }

    fn format_station_stats(&self, stats: &StationStats) -> String {
        let mut table = Self::statistic_table();
        table.add_row(row![
            "Most popular start station",
            stats.popular_start_station
        ]);
        table.add_row(row!["Most popular end station", stats.popular_end_station]);
        table.add_row(row!["Most common trip", stats.popular_trip]);
        table.to_string()
    }

    fn format_duration_stats(&self, stats: &DurationStats) -> String {
        let mut table = Self::statistic_table();
        table.add_row(row![
            "Total travel time",
            format_total_duration(&stats.total)
        ]);
        table.add_row(row![
            "Average trip length",
            format_mean_duration(&stats.mean)
        ]);
        table.to_string()
    }

    fn format_user_stats(&self, stats: &UserStats) -> String {
        let mut output = Self::counts_table("User Type", &stats.user_types).to_string();

        if let Some(demographics) = &stats.demographics {
            output.push('\n');
            output.push_str(&Self::counts_table("Gender", &demographics.genders).to_string());

            let mut table = Self::statistic_table();
            match &demographics.birth_years {
                Some(years) => {
                    table.add_row(row!["Earliest birth year", years.earliest.to_string()]);
                    table.add_row(row![
                        "Most recent birth year",
                        years.most_recent.to_string()
                    ]);
                    table.add_row(row![
                        "Most common birth year",
                        years.most_common.to_string()
                    ]);
                }
                None => {
                    table.add_row(row!["Birth year", "not recorded"]);
                }
            }
            output.push('\n');
            output.push_str(&table.to_string());
        }

        output
    }

    fn format_no_data(&self, _section: Section) -> String {
        "No data for this selection.".yellow().to_string()
    }

    fn format_raw_rows(&self, headers: &[String], start: usize, rows: &[Vec<String>]) -> String {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_NO_LINESEP_WITH_TITLE);

        let mut titles = vec![Cell::new("")];
        titles.extend(headers.iter().map(|h| Cell::new(h).style_spec("b")));
        table.set_titles(Row::new(titles));

        for (offset, values) in rows.iter().enumerate() {
            let mut cells = vec![Cell::new(&(start + offset).to_string()).style_spec("r")];
            cells.extend(values.iter().map(|v| Cell::new(v)));
            table.add_row(Row::new(cells));
        }

        table.to_string()
    }
}

/// JSON formatter for machine-readable output
#[derive(Debug, Default)]
pub struct JsonFormatter;

impl JsonFormatter {
    fn render(value: Value) -> String {
        serde_json::to_string_pretty(&value).unwrap_or_else(|_| value.to_string())
    }

    fn counts(counts: &[ValueCount]) -> Value {
        Value::Array(
            counts
                .iter()
                .map(|c| json!({ "value": c.value, "count": c.count }))
                .collect(),
        )
    }
}

impl ReportFormatter for JsonFormatter {
    fn format_selection(&self, city: City, filter: &TripFilter, trips: usize) -> String {
        Self::render(json!({
            "city": city.key(),
            "month": filter.month.map(|m| m.number_from_month()),
            "day": filter.day.map(|d| d.num_days_from_monday()),
            "trips": trips,
        }))
    }

    fn format_section_start(&self, _section: Section) -> String {
        String::new()
    }

    fn format_section_end(&self, _elapsed: Option<Duration>) -> String {
        String::new()
    }

    fn format_time_stats(&self, stats: &TimeStats) -> String {
        Self::render(json!({
            "section": Section::Time.key(),
            "popular_month": stats.popular_month,
            "popular_month_name": month_name(stats.popular_month),
            "popular_day": stats.popular_day.num_days_from_monday(),
            "popular_day_name": weekday_name(stats.popular_day),
            "popular_hour": stats.popular_hour,
        }))
    }

    fn format_station_stats(&self, stats: &StationStats) -> String {
        Self::render(json!({
            "section": Section::Station.key(),
            "popular_start_station": stats.popular_start_station,
            "popular_end_station": stats.popular_end_station,
            "popular_trip": stats.popular_trip,
        }))
    }

    fn format_duration_stats(&self, stats: &DurationStats) -> String {
        Self::render(json!({
            "section": Section::Duration.key(),
            "total_seconds": stats.total_seconds,
            "mean_seconds": stats.mean_seconds,
            "total": format_total_duration(&stats.total),
            "mean": format_mean_duration(&stats.mean),
        }))
    }

    fn format_user_stats(&self, stats: &UserStats) -> String {
        let mut output = json!({
            "section": Section::User.key(),
            "user_types": Self::counts(&stats.user_types),
        });

        if let Some(demographics) = &stats.demographics {
            output["genders"] = Self::counts(&demographics.genders);
            output["birth_years"] = match &demographics.birth_years {
                Some(years) => json!({
                    "earliest": years.earliest,
                    "most_recent": years.most_recent,
                    "most_common": years.most_common,
                }),
                None => Value::Null,
            };
        }

        Self::render(output)
    }

    fn format_no_data(&self, section: Section) -> String {
        Self::render(json!({
            "section": section.key(),
            "error": "no data for this selection",
        }))
    }

    fn format_raw_rows(&self, headers: &[String], start: usize, rows: &[Vec<String>]) -> String {
        let rows: Vec<Value> = rows
            .iter()
            .enumerate()
            .map(|(offset, values)| {
                let mut object = Map::new();
                object.insert("index".to_string(), json!(start + offset));
                for (header, value) in headers.iter().zip(values) {
                    object.insert(header.clone(), json!(value));
                }
                Value::Object(object)
            })
            .collect();
        Self::render(Value::Array(rows))
    }
}

/// Factory function to get the appropriate formatter
pub fn get_formatter(json: bool) -> Box<dyn ReportFormatter> {
    if json {
        Box::new(JsonFormatter)
    } else {
        Box::new(TableFormatter::new())
    }
}
