use crate::db::{Entry, EntryStore};
use crate::errors::AppResult;
use crate::utils::date::parse_date;
use crate::utils::time::{parse_time_of_day, worked_duration};

pub struct AddLogic;

impl AddLogic {
    /// Validate a workday span and store it.
    ///
    /// Text is parsed and the worked minutes computed before the store is
    /// touched, so invalid input never reaches the database.
    pub fn apply(
        store: &EntryStore,
        date: &str,
        start: &str,
        end: &str,
        lunch: Option<u32>,
    ) -> AppResult<Entry> {
        let work_date = parse_date(date)?;
        let start_time = parse_time_of_day(start)?;
        let end_time = parse_time_of_day(end)?;

        let worked = worked_duration(start_time, end_time, lunch)?;
        let lunch_minutes = lunch.unwrap_or(crate::utils::time::DEFAULT_LUNCH_MINUTES);
        let worked_minutes = worked.num_minutes();

        let id = store.add(work_date, start_time, end_time, lunch_minutes, worked_minutes)?;

        store.log_quiet(
            "add",
            &format!("{} #{}", work_date, id),
            &format!(
                "{}-{} lunch={} worked={}",
                start_time.format("%H:%M"),
                end_time.format("%H:%M"),
                lunch_minutes,
                worked_minutes
            ),
        );

        Ok(Entry {
            id,
            work_date,
            start_time,
            end_time,
            lunch_minutes,
            worked_minutes,
        })
    }
}
