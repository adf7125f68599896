use crate::db::{EntryStore, EntryUpdate};
use crate::errors::{AppError, AppResult};
use crate::utils::date::parse_optional_date;
use crate::utils::time::{parse_optional_time, worked_duration};

/// Text fields a user may change on an existing entry.
#[derive(Debug, Default, Clone)]
pub struct EntryChanges {
    pub date: Option<String>,
    pub start: Option<String>,
    pub end: Option<String>,
    pub lunch: Option<u32>,
}

impl EntryChanges {
    pub fn is_empty(&self) -> bool {
        self.date.is_none() && self.start.is_none() && self.end.is_none() && self.lunch.is_none()
    }
}

pub struct EditLogic;

impl EditLogic {
    /// Merge `changes` into entry `id`, re-check the span and recompute the
    /// worked minutes. Returns the number of rows updated.
    pub fn apply(store: &EntryStore, id: i64, changes: &EntryChanges) -> AppResult<usize> {
        if changes.is_empty() {
            return Ok(0);
        }

        let current = store.get(id)?.ok_or(AppError::EntryNotFound(id))?;

        let date = parse_optional_date(changes.date.as_ref())?;
        let start = parse_optional_time(changes.start.as_ref())?;
        let end = parse_optional_time(changes.end.as_ref())?;

        let new_start = start.unwrap_or(current.start_time);
        let new_end = end.unwrap_or(current.end_time);
        let new_lunch = changes.lunch.unwrap_or(current.lunch_minutes);

        let worked = worked_duration(new_start, new_end, Some(new_lunch))?.num_minutes();

        let mut update = EntryUpdate::new();
        if let Some(d) = date {
            update = update.work_date(d);
        }
        if let Some(t) = start {
            update = update.start_time(t);
        }
        if let Some(t) = end {
            update = update.end_time(t);
        }
        if let Some(m) = changes.lunch {
            update = update.lunch_minutes(m);
        }
        if worked != current.worked_minutes {
            update = update.worked_minutes(worked);
        }

        let n = store.edit(id, &update)?;

        if n > 0 {
            store.log_quiet(
                "edit",
                &format!("#{}", id),
                &format!("{:?} worked={}", changes, worked),
            );
        }

        Ok(n)
    }
}
