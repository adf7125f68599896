use crate::db::{Entry, EntryStore};
use crate::errors::{AppError, AppResult};
use crate::utils::date::{end_of_week, iso_week_key, start_of_week, week_dates};
use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct DayTotal {
    pub date: NaiveDate,
    pub entries: Vec<Entry>,
    pub worked_minutes: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct WeekSummary {
    pub key: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub days: Vec<DayTotal>,
    pub total_minutes: i64,
    pub expected_minutes: i64,
    pub surplus_minutes: i64,
}

impl WeekSummary {
    pub fn days_worked(&self) -> usize {
        self.days.iter().filter(|d| !d.entries.is_empty()).count()
    }
}

pub struct WeekLogic;

impl WeekLogic {
    /// Totals for the Monday..Sunday week containing `date`.
    ///
    /// Only days with at least one entry count towards the expected time.
    pub fn summary(
        store: &EntryStore,
        date: NaiveDate,
        daily_target_minutes: i64,
    ) -> AppResult<WeekSummary> {
        let start = start_of_week(date);
        let end = end_of_week(date);
        let entries = store.list_between(start, end)?;

        let days: Vec<DayTotal> = week_dates(date)
            .into_iter()
            .map(|d| {
                let day_entries: Vec<Entry> =
                    entries.iter().filter(|e| e.work_date == d).cloned().collect();
                let worked_minutes = day_entries.iter().map(|e| e.worked_minutes).sum();
                DayTotal {
                    date: d,
                    entries: day_entries,
                    worked_minutes,
                }
            })
            .collect();

        let total_minutes: i64 = days.iter().map(|d| d.worked_minutes).sum();
        let worked_days = days.iter().filter(|d| !d.entries.is_empty()).count() as i64;
        let expected_minutes = worked_days
            .checked_mul(daily_target_minutes)
            .ok_or_else(|| AppError::InvalidDuration(format!("{daily_target_minutes}m")))?;

        Ok(WeekSummary {
            key: iso_week_key(date),
            start,
            end,
            days,
            total_minutes,
            expected_minutes,
            surplus_minutes: total_minutes - expected_minutes,
        })
    }
}
