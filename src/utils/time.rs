//! Time utilities: parsing HH:MM, worked-duration computation, hour conversion.

use crate::errors::{AppError, AppResult};
use chrono::{Duration, NaiveTime};

pub const TIME_FMT: &str = "%H:%M";

/// Lunch break applied when the caller does not give one.
pub const DEFAULT_LUNCH_MINUTES: u32 = 30;

/// Parse a strict `HH:MM` time of day.
pub fn parse_time_of_day(text: &str) -> AppResult<NaiveTime> {
    let t = text.trim();
    // chrono accepts single-digit hours; the stored format does not.
    if t.len() != 5 {
        return Err(AppError::InvalidTime(text.to_string()));
    }
    NaiveTime::parse_from_str(t, TIME_FMT).map_err(|_| AppError::InvalidTime(text.to_string()))
}

pub fn parse_optional_time(input: Option<&String>) -> AppResult<Option<NaiveTime>> {
    input.map(|s| parse_time_of_day(s)).transpose()
}

/// Worked time between two `HH:MM` strings minus the lunch break.
///
/// `lunch_minutes` falls back to [`DEFAULT_LUNCH_MINUTES`] when `None`.
pub fn compute_worked_duration(
    start: &str,
    end: &str,
    lunch_minutes: Option<u32>,
) -> AppResult<Duration> {
    let start = parse_time_of_day(start)?;
    let end = parse_time_of_day(end)?;
    worked_duration(start, end, lunch_minutes)
}

/// Same as [`compute_worked_duration`] on already parsed times.
pub fn worked_duration(
    start: NaiveTime,
    end: NaiveTime,
    lunch_minutes: Option<u32>,
) -> AppResult<Duration> {
    if end <= start {
        return Err(AppError::EndNotAfterStart {
            start: start.format(TIME_FMT).to_string(),
            end: end.format(TIME_FMT).to_string(),
        });
    }

    let raw = end - start;
    let lunch = lunch_minutes.unwrap_or(DEFAULT_LUNCH_MINUTES);
    let worked = raw - Duration::minutes(i64::from(lunch));

    if worked < Duration::zero() {
        return Err(AppError::LunchExceedsSpan {
            lunch,
            span: raw.num_minutes(),
        });
    }

    Ok(worked)
}

/// Seconds / 3600, rounded to two decimals.
pub fn duration_to_hours(d: Duration) -> f64 {
    let hours = d.num_seconds() as f64 / 3600.0;
    (hours * 100.0).round() / 100.0
}

pub fn minutes_to_hours(mins: i64) -> f64 {
    duration_to_hours(Duration::minutes(mins))
}

/// Upper bound for a daily target: one full day.
pub const MAX_DAILY_MINUTES: i64 = 24 * 60;

/// Parse a target duration such as `8h`, `7h30m` or `450m` into minutes.
///
/// Anything above [`MAX_DAILY_MINUTES`] is rejected.
pub fn parse_duration_text(text: &str) -> AppResult<i64> {
    let s = text.trim().to_lowercase();
    let err = || AppError::InvalidDuration(text.to_string());

    if s.is_empty() {
        return Err(err());
    }

    let (hours, rest) = match s.split_once('h') {
        Some((h, rest)) => (h.parse::<i64>().map_err(|_| err())?, rest),
        None => (0, s.as_str()),
    };

    let minutes = if rest.is_empty() {
        0
    } else {
        rest.strip_suffix('m')
            .ok_or_else(err)?
            .parse::<i64>()
            .map_err(|_| err())?
    };

    if hours < 0 || minutes < 0 {
        return Err(err());
    }

    hours
        .checked_mul(60)
        .and_then(|h| h.checked_add(minutes))
        .filter(|total| *total <= MAX_DAILY_MINUTES)
        .ok_or_else(err)
}
