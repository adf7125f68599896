//! Entry store: the persistence boundary for work time entries.
//!
//! Every call opens its own connection to the configured file and closes it
//! before returning. Writes run in their own transaction.

use crate::db::initialize::init_db;
use crate::db::log::ttlog_quiet;
use crate::db::models::{Entry, EntryUpdate, LogLine};
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::AppResult;
use crate::ui::messages::warning;
use chrono::{NaiveDate, NaiveTime};
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct EntryStore {
    path: PathBuf,
}

impl EntryStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn open(&self) -> AppResult<DbPool> {
        DbPool::open(&self.path)
    }

    /// Create the schema if missing. Idempotent.
    pub fn init(&self) -> AppResult<()> {
        self.open()?.with_tx(|tx| init_db(tx))
    }

    /// Insert a new entry and return its id.
    ///
    /// Values are stored as given: checking that `end > start` and that
    /// `worked_minutes` is consistent belongs to the caller.
    pub fn add(
        &self,
        date: NaiveDate,
        start: NaiveTime,
        end: NaiveTime,
        lunch_minutes: u32,
        worked_minutes: i64,
    ) -> AppResult<i64> {
        self.open()?.with_tx(|tx| {
            queries::insert_entry(tx, date, start, end, lunch_minutes, worked_minutes)
        })
    }

    pub fn get(&self, id: i64) -> AppResult<Option<Entry>> {
        let pool = self.open()?;
        queries::load_entry(&pool.conn, id)
    }

    /// Entries of one day, oldest id first.
    pub fn list_by_date(&self, date: NaiveDate) -> AppResult<Vec<Entry>> {
        let pool = self.open()?;
        queries::load_entries_by_date(&pool.conn, date)
    }

    /// Entries with `start <= work_date <= end`, by date then id.
    pub fn list_between(&self, start: NaiveDate, end: NaiveDate) -> AppResult<Vec<Entry>> {
        let pool = self.open()?;
        queries::load_entries_between(&pool.conn, start, end)
    }

    /// Returns the number of removed rows (0 or 1).
    pub fn delete(&self, id: i64) -> AppResult<usize> {
        self.open()?.with_tx(|tx| queries::delete_entry(tx, id))
    }

    /// Apply a partial update. An empty update returns 0 without opening
    /// the database.
    pub fn edit(&self, id: i64, update: &EntryUpdate) -> AppResult<usize> {
        if update.is_empty() {
            return Ok(0);
        }
        self.open()?.with_tx(|tx| queries::update_entry(tx, id, update))
    }

    /// Best-effort audit line: failures only print a warning.
    pub fn log_quiet(&self, operation: &str, target: &str, message: &str) {
        match self.open() {
            Ok(pool) => ttlog_quiet(&pool.conn, operation, target, message),
            Err(e) => warning(format!("Failed to write internal log: {}", e)),
        }
    }

    pub fn load_log(&self) -> AppResult<Vec<LogLine>> {
        let pool = self.open()?;
        queries::load_log(&pool.conn)
    }
}
