use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::AddLogic;
use crate::db::EntryStore;
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::mins2readable;
use crate::utils::time::minutes_to_hours;

/// Record a new workday entry.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        date,
        start,
        end,
        lunch,
    } = cmd
    {
        let store = EntryStore::new(&cfg.database);
        let lunch = Some(lunch.unwrap_or(cfg.default_lunch_minutes));

        let entry = AddLogic::apply(&store, date, start, end, lunch)?;

        success(format!(
            "Entry #{} added for {}: {} ({:.2} h)",
            entry.id,
            entry.work_date,
            mins2readable(entry.worked_minutes, false, false),
            minutes_to_hours(entry.worked_minutes)
        ));
    }

    Ok(())
}
