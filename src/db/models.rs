//! Row models for the `entries` and `log` tables, plus the partial update.

use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;

/// One recorded workday span.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    pub id: i64,
    pub work_date: NaiveDate,
    #[serde(serialize_with = "ser_hhmm")]
    pub start_time: NaiveTime,
    #[serde(serialize_with = "ser_hhmm")]
    pub end_time: NaiveTime,
    pub lunch_minutes: u32,
    pub worked_minutes: i64,
}

fn ser_hhmm<S: serde::Serializer>(t: &NaiveTime, s: S) -> Result<S::Ok, S::Error> {
    s.collect_str(&t.format(crate::utils::time::TIME_FMT))
}

/// Columns to change on an existing entry. Unset fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryUpdate {
    pub work_date: Option<NaiveDate>,
    pub start_time: Option<NaiveTime>,
    pub end_time: Option<NaiveTime>,
    pub lunch_minutes: Option<u32>,
    pub worked_minutes: Option<i64>,
}

impl EntryUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn work_date(mut self, d: NaiveDate) -> Self {
        self.work_date = Some(d);
        self
    }

    pub fn start_time(mut self, t: NaiveTime) -> Self {
        self.start_time = Some(t);
        self
    }

    pub fn end_time(mut self, t: NaiveTime) -> Self {
        self.end_time = Some(t);
        self
    }

    pub fn lunch_minutes(mut self, m: u32) -> Self {
        self.lunch_minutes = Some(m);
        self
    }

    pub fn worked_minutes(mut self, m: i64) -> Self {
        self.worked_minutes = Some(m);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.work_date.is_none()
            && self.start_time.is_none()
            && self.end_time.is_none()
            && self.lunch_minutes.is_none()
            && self.worked_minutes.is_none()
    }
}

/// A row of the internal audit log.
#[derive(Debug, Clone)]
pub struct LogLine {
    pub id: i64,
    pub date: String,
    pub operation: String,
    pub target: String,
    pub message: String,
}
