use crate::errors::AppResult;
use rusqlite::Connection;

/// Ensure the `entries` table and its date index exist.
fn ensure_entries_table(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS entries (
            id             INTEGER PRIMARY KEY AUTOINCREMENT,
            work_date      TEXT NOT NULL,
            start_time     TEXT NOT NULL,
            end_time       TEXT NOT NULL,
            lunch_minutes  INTEGER NOT NULL,
            worked_minutes INTEGER NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_entries_date ON entries(work_date);
        "#,
    )?;
    Ok(())
}

/// Ensure the internal `log` table exists.
fn ensure_log_table(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Initialize the database schema. Safe to call repeatedly.
pub fn init_db(conn: &Connection) -> AppResult<()> {
    ensure_entries_table(conn)?;
    ensure_log_table(conn)?;
    Ok(())
}
