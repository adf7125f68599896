use crate::errors::{AppError, AppResult};
use chrono::{Datelike, Duration, NaiveDate};

pub const DATE_FMT: &str = "%Y-%m-%d";

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Parse a strict `YYYY-MM-DD` date.
pub fn parse_date(text: &str) -> AppResult<NaiveDate> {
    let t = text.trim();
    // reject "2024-1-5": chrono would accept it
    if t.len() != 10 {
        return Err(AppError::InvalidDate(text.to_string()));
    }
    NaiveDate::parse_from_str(t, DATE_FMT).map_err(|_| AppError::InvalidDate(text.to_string()))
}

pub fn parse_optional_date(input: Option<&String>) -> AppResult<Option<NaiveDate>> {
    input.map(|s| parse_date(s)).transpose()
}

/// Monday on or before `d`.
pub fn start_of_week(d: NaiveDate) -> NaiveDate {
    let weekday = d.weekday().num_days_from_monday();
    d - Duration::days(i64::from(weekday))
}

/// Sunday of the week containing `d`.
pub fn end_of_week(d: NaiveDate) -> NaiveDate {
    start_of_week(d) + Duration::days(6)
}

/// ISO-8601 week identifier, e.g. `2024-W01`.
pub fn iso_week_key(d: NaiveDate) -> String {
    let iw = d.iso_week();
    format!("{}-W{:02}", iw.year(), iw.week())
}

/// The seven dates Monday..=Sunday of the week containing `d`.
pub fn week_dates(d: NaiveDate) -> Vec<NaiveDate> {
    let monday = start_of_week(d);
    (0..7).map(|i| monday + Duration::days(i)).collect()
}

pub fn weekday_str(d: NaiveDate) -> &'static str {
    match d.weekday() {
        chrono::Weekday::Mon => "Mon",
        chrono::Weekday::Tue => "Tue",
        chrono::Weekday::Wed => "Wed",
        chrono::Weekday::Thu => "Thu",
        chrono::Weekday::Fri => "Fri",
        chrono::Weekday::Sat => "Sat",
        chrono::Weekday::Sun => "Sun",
    }
}
