use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::{EditLogic, EntryChanges};
use crate::db::EntryStore;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Edit {
        id,
        date,
        start,
        end,
        lunch,
    } = cmd
    {
        let changes = EntryChanges {
            date: date.clone(),
            start: start.clone(),
            end: end.clone(),
            lunch: *lunch,
        };

        if changes.is_empty() {
            warning("Nothing to change: pass --date, --start, --end or --lunch.");
            return Ok(());
        }

        let store = EntryStore::new(&cfg.database);
        EditLogic::apply(&store, *id, &changes)?;

        success(format!("Entry #{} updated.", id));
    }
    Ok(())
}
