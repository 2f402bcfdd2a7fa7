//! Interactive controller
//!
//! Drives one session: ask for a city and filter, load the trips, print every
//! report, offer the raw rows five at a time, then ask whether to start over.
//! Input and output are generic so sessions can be scripted in tests.

use crate::error::{BikeshareError, Result};
use crate::pager::RawPager;
use crate::statistics::{station_stats, time_stats, trip_duration_stats, user_stats};
use bikeshare_core::filters::TripFilter;
use bikeshare_core::normalize::{
    normalize_city, normalize_day, normalize_filter_mode, normalize_month,
};
use bikeshare_core::types::{City, FilterMode, TripTable};
use bikeshare_data::DataLoader;
use bikeshare_terminal::output::{ReportFormatter, Section};
use std::io::{BufRead, Write};
use std::time::Instant;
use tracing::{debug, info};

pub const WELCOME: &str = "Welcome to the bikeshare data repository!\n";
pub const CITY_PROMPT: &str = "Would you like to see data for Chicago, New York, or Washington? --> ";
pub const FILTER_PROMPT: &str = "Would you like to filter the data by month, day, or not at all? (Type 'none' for not at all) --> ";
pub const MONTH_PROMPT: &str = "Which month - January, February, March, April, May, or June? --> ";
pub const DAY_PROMPT: &str = "Which day - Mon, Tue, Wed, Thu, Fri, Sat, or Sun? --> ";
pub const RAW_PROMPT: &str =
    "\nWould you like to display the raw unfiltered data used for these calculations? Enter yes or no.\n";
pub const MORE_PROMPT: &str = "\nWould you like to see the next 5 rows of raw data? Enter yes or no.\n";
pub const RESTART_PROMPT: &str = "\nWould you like to restart? Enter yes or no.\n";

/// Anything but an explicit "no" keeps the raw rows coming
fn wants_more(answer: Option<&str>) -> bool {
    answer.is_some_and(|a| !a.eq_ignore_ascii_case("no"))
}

/// Only an explicit "yes" restarts
fn wants_restart(answer: Option<&str>) -> bool {
    answer.is_some_and(|a| a.eq_ignore_ascii_case("yes"))
}

fn emit<W: Write>(out: &mut W, text: &str) -> Result<()> {
    if !text.is_empty() {
        writeln!(out, "{text}")?;
    }
    Ok(())
}

fn write_section<W, T>(
    out: &mut W,
    formatter: &dyn ReportFormatter,
    section: Section,
    show_timing: bool,
    compute: impl FnOnce() -> Result<T>,
    render: impl FnOnce(&T) -> String,
) -> Result<()>
where
    W: Write,
{
    emit(out, &formatter.format_section_start(section))?;
    let started = Instant::now();

    match compute() {
        Ok(stats) => emit(out, &render(&stats))?,
        Err(err) if err.is_empty_result() => {
            debug!("{}", err);
            emit(out, &formatter.format_no_data(section))?;
        }
        Err(err) => return Err(err),
    }

    let elapsed = show_timing.then(|| started.elapsed());
    emit(out, &formatter.format_section_end(elapsed))
}

/// Print the selection summary followed by all four report sections
pub fn write_report<W: Write>(
    out: &mut W,
    formatter: &dyn ReportFormatter,
    table: &TripTable,
    filter: &TripFilter,
    show_timing: bool,
) -> Result<()> {
    emit(out, &formatter.format_selection(table.city, filter, table.len()))?;

    write_section(
        out,
        formatter,
        Section::Time,
        show_timing,
        || time_stats(table),
        |s| formatter.format_time_stats(s),
    )?;
    write_section(
        out,
        formatter,
        Section::Station,
        show_timing,
        || station_stats(table),
        |s| formatter.format_station_stats(s),
    )?;
    write_section(
        out,
        formatter,
        Section::Duration,
        show_timing,
        || trip_duration_stats(table),
        |s| formatter.format_duration_stats(s),
    )?;
    write_section(
        out,
        formatter,
        Section::User,
        show_timing,
        || user_stats(table),
        |s| formatter.format_user_stats(s),
    )?;

    out.flush()?;
    Ok(())
}

/// Interactive session over arbitrary input and output streams
pub struct Controller<R, W> {
    input: R,
    output: W,
    loader: DataLoader,
    formatter: Box<dyn ReportFormatter>,
    show_timing: bool,
}

impl<R: BufRead, W: Write> Controller<R, W> {
    /// Create a controller reading answers from `input` and printing to `output`
    pub fn new(input: R, output: W, loader: DataLoader, formatter: Box<dyn ReportFormatter>) -> Self {
        Self {
            input,
            output,
            loader,
            formatter,
            show_timing: true,
        }
    }

    /// Enable or disable per-section timing lines
    pub fn with_timing(mut self, show_timing: bool) -> Self {
        self.show_timing = show_timing;
        self
    }

    /// Give back the output stream, mainly for inspecting scripted sessions
    pub fn into_output(self) -> W {
        self.output
    }

    /// Run sessions until the user declines to restart
    pub fn run(&mut self) -> Result<()> {
        write!(self.output, "{WELCOME}")?;

        loop {
            let (city, filter) = self.get_filters()?;
            let table = self.loader.load_filtered(city, &filter)?;
            write_report(
                &mut self.output,
                self.formatter.as_ref(),
                &table,
                &filter,
                self.show_timing,
            )?;
            self.show_raw_data(city)?;

            let answer = self.prompt(RESTART_PROMPT)?;
            if !wants_restart(answer.as_deref()) {
                info!("Session finished");
                return Ok(());
            }
            debug!("Restarting session");
        }
    }

    /// Ask for the city and the optional month or day filter
    pub fn get_filters(&mut self) -> Result<(City, TripFilter)> {
        let city = normalize_city(&self.prompt_selection(CITY_PROMPT)?)?;

        let filter = match normalize_filter_mode(&self.prompt_selection(FILTER_PROMPT)?)? {
            FilterMode::Month => {
                TripFilter::new().with_month(normalize_month(&self.prompt_selection(MONTH_PROMPT)?)?)
            }
            FilterMode::Day => {
                TripFilter::new().with_day(normalize_day(&self.prompt_selection(DAY_PROMPT)?)?)
            }
            FilterMode::None => TripFilter::new(),
        };

        info!("Selected {} with {}", city, filter);
        Ok((city, filter))
    }

    /// Offer the city's unfiltered rows, five at a time
    pub fn show_raw_data(&mut self, city: City) -> Result<()> {
        let answer = self.prompt(RAW_PROMPT)?;
        if !wants_more(answer.as_deref()) {
            return Ok(());
        }

        let raw = self.loader.load_raw(city)?;
        if raw.is_empty() {
            writeln!(self.output, "No raw data to display.")?;
            return Ok(());
        }

        let mut pager = RawPager::new(&raw.rows);
        while let Some(page) = pager.next() {
            let text = self
                .formatter
                .format_raw_rows(&raw.headers, page.start, page.rows);
            emit(&mut self.output, &text)?;

            if !pager.has_more() {
                debug!("Reached the end of the raw data at row {}", page.end());
                break;
            }
            let answer = self.prompt(MORE_PROMPT)?;
            if !wants_more(answer.as_deref()) {
                break;
            }
        }

        Ok(())
    }

    /// Print `text` and read one line; `None` once input is exhausted
    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        write!(self.output, "{text}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn prompt_selection(&mut self, text: &str) -> Result<String> {
        self.prompt(text)?.ok_or(BikeshareError::InputClosed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bikeshare_terminal::output::get_formatter;
    use chrono::{Month, Weekday};
    use std::io::Cursor;
    use tempfile::TempDir;

    const HEADER: &str =
        ",Start Time,End Time,Trip Duration,Start Station,End Station,User Type,Gender,Birth Year";

    fn fixture(rows: usize) -> TempDir {
        let dir = TempDir::new().unwrap();
        let mut lines = vec![HEADER.to_string()];
        for i in 0..rows {
            lines.push(format!(
                "{i},2017-06-0{} 0{}:00:00,2017-06-0{} 0{}:10:00,600,Station {i},Lake St,Subscriber,Female,1990.0",
                1 + i % 9,
                i % 10,
                1 + i % 9,
                i % 10
            ));
        }
        std::fs::write(dir.path().join("chicago.csv"), lines.join("\n")).unwrap();
        dir
    }

    fn session(dir: &TempDir, answers: &str) -> (Result<()>, String) {
        let mut controller = Controller::new(
            Cursor::new(answers.to_string()),
            Vec::new(),
            DataLoader::new(dir.path()),
            get_formatter(false),
        )
        .with_timing(false);
        let result = controller.run();
        let output = String::from_utf8(controller.into_output()).unwrap();
        (result, output)
    }

    #[test]
    fn test_answer_rules() {
        assert!(wants_more(Some("yes")));
        assert!(wants_more(Some("sure")));
        assert!(!wants_more(Some("NO")));
        assert!(!wants_more(None));
        // Padded answers are not an exact "no"
        assert!(wants_more(Some(" no")));

        assert!(wants_restart(Some("Yes")));
        assert!(!wants_restart(Some("y")));
        assert!(!wants_restart(Some(" yes ")));
        assert!(!wants_restart(None));
    }

    #[test]
    fn test_get_filters_by_month() {
        let dir = fixture(1);
        let mut controller = Controller::new(
            Cursor::new("Chicago\nmonth\n03\n"),
            Vec::new(),
            DataLoader::new(dir.path()),
            get_formatter(false),
        );
        let (city, filter) = controller.get_filters().unwrap();
        assert_eq!(city, City::Chicago);
        assert_eq!(filter, TripFilter::new().with_month(Month::March));

        let output = String::from_utf8(controller.into_output()).unwrap();
        assert!(output.contains(CITY_PROMPT));
        assert!(output.contains(MONTH_PROMPT));
        assert!(!output.contains(DAY_PROMPT));
    }

    #[test]
    fn test_get_filters_by_day_and_none() {
        let dir = fixture(1);
        let mut controller = Controller::new(
            Cursor::new("nyc\nday\nsu\nwashington\nnot at all\n"),
            Vec::new(),
            DataLoader::new(dir.path()),
            get_formatter(false),
        );
        let (city, filter) = controller.get_filters().unwrap();
        assert_eq!(city, City::NewYorkCity);
        assert_eq!(filter.day, Some(Weekday::Sun));

        let (city, filter) = controller.get_filters().unwrap();
        assert_eq!(city, City::Washington);
        assert!(filter.is_unfiltered());
    }

    #[test]
    fn test_invalid_city_stops_the_session() {
        let dir = fixture(3);
        let (result, output) = session(&dir, "boston\n");
        assert!(matches!(
            result,
            Err(BikeshareError::InvalidInput { .. })
        ));
        assert!(!output.contains(FILTER_PROMPT));
    }

    #[test]
    fn test_full_session_without_raw_data() {
        let dir = fixture(3);
        let (result, output) = session(&dir, "chicago\nnone\nno\nno\n");
        result.unwrap();

        assert!(output.starts_with(WELCOME));
        for section in Section::ALL {
            assert!(output.contains(section.title()), "{}", section.title());
        }
        assert!(output.contains("Lake St"));
        assert!(output.contains(RESTART_PROMPT));
        assert!(!output.contains("This took"));
    }

    #[test]
    fn test_empty_selection_reports_no_data() {
        let dir = fixture(3);
        let (result, output) = session(&dir, "chicago\nmonth\njanuary\nno\nno\n");
        result.unwrap();
        assert_eq!(output.matches("No data for this selection.").count(), 4);
    }

    #[test]
    fn test_raw_data_paging_stops_at_end() {
        let dir = fixture(12);
        let (result, output) = session(&dir, "chicago\nnone\nyes\nyes\nyes\nno\n");
        result.unwrap();

        // Windows [0-4], [5-9], [10-11]; no prompt after the last one
        assert_eq!(output.matches(MORE_PROMPT).count(), 2);
        assert!(output.contains("Station 11"));
    }

    #[test]
    fn test_raw_data_paging_stops_on_no() {
        let dir = fixture(12);
        let (result, output) = session(&dir, "chicago\nnone\nyes\nno\nno\n");
        result.unwrap();

        assert_eq!(output.matches(MORE_PROMPT).count(), 1);
        assert!(output.contains("Station 4"));
        assert!(!output.contains("Station 5"));
    }

    #[test]
    fn test_restart_loops() {
        let dir = fixture(3);
        let (result, output) = session(&dir, "chicago\nnone\nno\nYES\nchicago\nday\nthu\nno\nno\n");
        result.unwrap();
        assert_eq!(output.matches(CITY_PROMPT).count(), 2);
        assert_eq!(output.matches(RESTART_PROMPT).count(), 2);
    }

    #[test]
    fn test_padded_yes_does_not_restart() {
        let dir = fixture(3);
        let (result, output) = session(&dir, "chicago\nnone\nno\n yes \nchicago\nnone\nno\nno\n");
        result.unwrap();
        assert_eq!(output.matches(CITY_PROMPT).count(), 1);
    }

    #[test]
    fn test_input_closed_at_selection() {
        let dir = fixture(3);
        let (result, _) = session(&dir, "chicago\n");
        assert!(matches!(result, Err(BikeshareError::InputClosed)));
    }

    #[test]
    fn test_input_closed_at_yes_no_ends_quietly() {
        let dir = fixture(3);
        let (result, output) = session(&dir, "chicago\nnone\n");
        result.unwrap();
        assert!(output.contains(RESTART_PROMPT));
    }
}
