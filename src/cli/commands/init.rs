use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::EntryStore;
use crate::errors::AppResult;
use crate::ui::messages::success;
use std::path::PathBuf;

/// Handle the `init` command
///
/// Writes the configuration file (skipped with `--test`) and creates the
/// database schema.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let db_path = if cli.test {
        PathBuf::from(&cfg.database)
    } else {
        let p = Config::init_all(cli.db.as_deref())?;
        success(format!("Config file: {}", Config::config_file().display()));
        p
    };

    if let Some(parent) = db_path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }

    let store = EntryStore::new(&db_path);
    store.init()?;
    store.log_quiet(
        "init",
        "",
        &format!("Database initialized at {}", db_path.display()),
    );

    success(format!("Database initialized at {}", db_path.display()));
    Ok(())
}
