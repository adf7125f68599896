use crate::db::EntryStore;
use crate::errors::AppResult;
use crate::utils::mins2readable;

pub struct DeleteLogic;

impl DeleteLogic {
    /// Delete one entry by id. Returns 0 when it did not exist.
    pub fn apply(store: &EntryStore, id: i64) -> AppResult<usize> {
        let before = store.get(id)?;
        let n = store.delete(id)?;

        if let Some(e) = before.filter(|_| n > 0) {
            store.log_quiet(
                "del",
                &format!("{} #{}", e.work_date, id),
                &format!(
                    "{}-{} worked={}",
                    e.start_time.format("%H:%M"),
                    e.end_time.format("%H:%M"),
                    mins2readable(e.worked_minutes, false, true)
                ),
            );
        }

        Ok(n)
    }
}
