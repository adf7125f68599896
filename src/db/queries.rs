use crate::db::models::{Entry, EntryUpdate, LogLine};
use crate::errors::{AppError, AppResult};
use crate::utils::date::DATE_FMT;
use crate::utils::time::TIME_FMT;
use chrono::{NaiveDate, NaiveTime};
use rusqlite::types::Value;
use rusqlite::{Connection, OptionalExtension, Result, Row, params, params_from_iter};

const ENTRY_COLUMNS: &str =
    "id, work_date, start_time, end_time, lunch_minutes, worked_minutes";

fn conversion_error(idx: usize, err: AppError) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(idx, rusqlite::types::Type::Text, Box::new(err))
}

pub fn map_row(row: &Row) -> Result<Entry> {
    let date_str: String = row.get("work_date")?;
    let start_str: String = row.get("start_time")?;
    let end_str: String = row.get("end_time")?;

    let work_date = NaiveDate::parse_from_str(&date_str, DATE_FMT)
        .map_err(|_| conversion_error(1, AppError::InvalidDate(date_str.clone())))?;

    let start_time = NaiveTime::parse_from_str(&start_str, TIME_FMT)
        .map_err(|_| conversion_error(2, AppError::InvalidTime(start_str.clone())))?;

    let end_time = NaiveTime::parse_from_str(&end_str, TIME_FMT)
        .map_err(|_| conversion_error(3, AppError::InvalidTime(end_str.clone())))?;

    Ok(Entry {
        id: row.get("id")?,
        work_date,
        start_time,
        end_time,
        lunch_minutes: row.get("lunch_minutes")?,
        worked_minutes: row.get("worked_minutes")?,
    })
}

pub fn insert_entry(
    conn: &Connection,
    date: NaiveDate,
    start: NaiveTime,
    end: NaiveTime,
    lunch_minutes: u32,
    worked_minutes: i64,
) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO entries (work_date, start_time, end_time, lunch_minutes, worked_minutes)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            date.format(DATE_FMT).to_string(),
            start.format(TIME_FMT).to_string(),
            end.format(TIME_FMT).to_string(),
            lunch_minutes,
            worked_minutes,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn load_entry(conn: &Connection, id: i64) -> AppResult<Option<Entry>> {
    let entry = conn
        .query_row(
            &format!("SELECT {ENTRY_COLUMNS} FROM entries WHERE id = ?1"),
            [id],
            map_row,
        )
        .optional()?;
    Ok(entry)
}

pub fn load_entries_by_date(conn: &Connection, date: NaiveDate) -> AppResult<Vec<Entry>> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {ENTRY_COLUMNS} FROM entries
         WHERE work_date = ?1
         ORDER BY id ASC"
    ))?;

    let rows = stmt.query_map([date.format(DATE_FMT).to_string()], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn load_entries_between(
    conn: &Connection,
    start: NaiveDate,
    end: NaiveDate,
) -> AppResult<Vec<Entry>> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {ENTRY_COLUMNS} FROM entries
         WHERE work_date BETWEEN ?1 AND ?2
         ORDER BY work_date ASC, id ASC"
    ))?;

    let rows = stmt.query_map(
        params![
            start.format(DATE_FMT).to_string(),
            end.format(DATE_FMT).to_string()
        ],
        map_row,
    )?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn delete_entry(conn: &Connection, id: i64) -> AppResult<usize> {
    let n = conn.execute("DELETE FROM entries WHERE id = ?1", [id])?;
    Ok(n)
}

/// Update only the columns set in `upd`. Column names are fixed here,
/// never taken from the caller.
pub fn update_entry(conn: &Connection, id: i64, upd: &EntryUpdate) -> AppResult<usize> {
    let mut sets: Vec<&'static str> = Vec::new();
    let mut values: Vec<Value> = Vec::new();

    if let Some(d) = upd.work_date {
        sets.push("work_date = ?");
        values.push(Value::Text(d.format(DATE_FMT).to_string()));
    }
    if let Some(t) = upd.start_time {
        sets.push("start_time = ?");
        values.push(Value::Text(t.format(TIME_FMT).to_string()));
    }
    if let Some(t) = upd.end_time {
        sets.push("end_time = ?");
        values.push(Value::Text(t.format(TIME_FMT).to_string()));
    }
    if let Some(m) = upd.lunch_minutes {
        sets.push("lunch_minutes = ?");
        values.push(Value::Integer(i64::from(m)));
    }
    if let Some(m) = upd.worked_minutes {
        sets.push("worked_minutes = ?");
        values.push(Value::Integer(m));
    }

    if sets.is_empty() {
        return Ok(0);
    }

    values.push(Value::Integer(id));
    let sql = format!("UPDATE entries SET {} WHERE id = ?", sets.join(", "));
    let n = conn.execute(&sql, params_from_iter(values))?;
    Ok(n)
}

pub fn load_log(conn: &Connection) -> AppResult<Vec<LogLine>> {
    let mut stmt =
        conn.prepare("SELECT id, date, operation, target, message FROM log ORDER BY id ASC")?;

    let rows = stmt.query_map([], |row| {
        Ok(LogLine {
            id: row.get(0)?,
            date: row.get(1)?,
            operation: row.get(2)?,
            target: row.get::<_, Option<String>>(3)?.unwrap_or_default(),
            message: row.get(4)?,
        })
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}
