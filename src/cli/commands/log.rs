use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::LogLogic;
use crate::db::EntryStore;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Log { print } = cmd
        && *print
    {
        LogLogic::print_log(&EntryStore::new(&cfg.database))?;
    }
    Ok(())
}
