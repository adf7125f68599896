//! Unified application error type.
//! Store, core logic, utilities and CLI handlers all return AppError so the
//! binary has a single place where failures are reported.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // ---------------------------
    // Format errors (malformed text input)
    // ---------------------------
    #[error("Invalid date format: {0} (expected YYYY-MM-DD)")]
    InvalidDate(String),

    #[error("Invalid time format: {0} (expected HH:MM)")]
    InvalidTime(String),

    #[error("Invalid duration: {0} (expected e.g. 8h, 7h30m or 450m)")]
    InvalidDuration(String),

    // ---------------------------
    // Validation errors
    // ---------------------------
    #[error("End time {end} must be after start time {start}")]
    EndNotAfterStart { start: String, end: String },

    #[error("Lunch break of {lunch} min exceeds the worked span of {span} min")]
    LunchExceedsSpan { lunch: u32, span: i64 },

    // ---------------------------
    // Logic errors
    // ---------------------------
    #[error("No entry with id {0}")]
    EntryNotFound(i64),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

impl AppError {
    /// Malformed date, time or duration text.
    pub fn is_format_error(&self) -> bool {
        matches!(
            self,
            AppError::InvalidDate(_) | AppError::InvalidTime(_) | AppError::InvalidDuration(_)
        )
    }

    /// Well-formed input that describes an impossible work span.
    pub fn is_validation_error(&self) -> bool {
        matches!(
            self,
            AppError::EndNotAfterStart { .. } | AppError::LunchExceedsSpan { .. }
        )
    }
}

pub type AppResult<T> = Result<T, AppError>;
