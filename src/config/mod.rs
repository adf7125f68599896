use crate::errors::{AppError, AppResult};
use crate::utils::path::resolve_in;
use crate::utils::time::{DEFAULT_LUNCH_MINUTES, parse_duration_text};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_database")]
    pub database: String,
    #[serde(default = "default_lunch")]
    pub default_lunch_minutes: u32,
    #[serde(default = "default_daily_target")]
    pub daily_target: String,
}

fn default_database() -> String {
    Config::database_file().to_string_lossy().to_string()
}
fn default_lunch() -> u32 {
    DEFAULT_LUNCH_MINUTES
}
fn default_daily_target() -> String {
    "8h".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: default_database(),
            default_lunch_minutes: default_lunch(),
            daily_target: default_daily_target(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("workhours")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".workhours")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("workhours.conf")
    }

    /// Return the default path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("workHours.db")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)
            .map_err(|e| AppError::Config(format!("cannot read {}: {}", path.display(), e)))?;
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("cannot parse {}: {}", path.display(), e)))
    }

    /// Daily target in minutes, parsed from `daily_target`.
    pub fn daily_target_minutes(&self) -> AppResult<i64> {
        parse_duration_text(&self.daily_target)
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(self).map_err(|e| AppError::Config(e.to_string()))
    }

    /// Create the config directory and file. Returns the database path the
    /// written config points to.
    pub fn init_all(custom_db: Option<&str>) -> AppResult<PathBuf> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let db_path = match custom_db {
            Some(name) => resolve_in(&dir, name),
            None => Self::database_file(),
        };

        let config = Config {
            database: db_path.to_string_lossy().to_string(),
            ..Config::default()
        };

        fs::write(Self::config_file(), config.to_yaml()?)?;

        Ok(db_path)
    }
}
