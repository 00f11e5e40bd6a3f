use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

pub mod migrate; // use submodule at src/config/migrate.rs

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_database")]
    pub database: String,
    #[serde(default = "default_gap_threshold")]
    pub gap_threshold_days: i64,
    #[serde(default = "default_min_history")]
    pub min_history_days: i64,
    #[serde(default = "default_full_history")]
    pub full_history_days: i64,
    #[serde(default = "default_date_format")]
    pub date_format: String,
    #[serde(default = "default_separator_char")]
    pub separator_char: String,
}

fn default_database() -> String {
    Config::database_file().to_string_lossy().to_string()
}
fn default_gap_threshold() -> i64 {
    30
}
fn default_min_history() -> i64 {
    730
}
fn default_full_history() -> i64 {
    3650
}
fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}
fn default_separator_char() -> String {
    "-".to_string()
}

/// Keys every config file is expected to carry (see `config --check`).
pub const CONFIG_KEYS: [&str; 6] = [
    "database",
    "gap_threshold_days",
    "min_history_days",
    "full_history_days",
    "date_format",
    "separator_char",
];

impl Default for Config {
    fn default() -> Self {
        Self {
            database: default_database(),
            gap_threshold_days: default_gap_threshold(),
            min_history_days: default_min_history(),
            full_history_days: default_full_history(),
            date_format: default_date_format(),
            separator_char: default_separator_char(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rworkhistory")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".rworkhistory")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rworkhistory.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("rworkhistory.sqlite")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&path).map_err(|_| AppError::ConfigLoad)?;
        let cfg = serde_yaml::from_str(&content)?;
        Ok(cfg)
    }

    /// First character of `separator_char`, `-` when empty
    pub fn separator(&self) -> char {
        self.separator_char.chars().next().unwrap_or('-')
    }

    pub fn save(&self) -> AppResult<()> {
        let yaml = serde_yaml::to_string(self)?;
        let mut file = fs::File::create(Self::config_file()).map_err(|_| AppError::ConfigSave)?;
        file.write_all(yaml.as_bytes())
            .map_err(|_| AppError::ConfigSave)?;
        Ok(())
    }

    /// Initialize configuration and database files.
    /// Returns the database path that was set up.
    pub fn init_all(custom_name: Option<String>, is_test: bool) -> AppResult<PathBuf> {
        let dir = Self::config_dir();

        // DB name: user provided or default
        let db_path = if let Some(name) = custom_name {
            let p = std::path::Path::new(&name);
            if p.is_absolute() {
                p.to_path_buf()
            } else {
                dir.join(p)
            }
        } else {
            dir.join("rworkhistory.sqlite")
        };

        let config = Config {
            database: db_path.to_string_lossy().to_string(),
            ..Config::default()
        };

        // Write config file
        if !is_test {
            fs::create_dir_all(&dir)?;
            config.save()?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        if let Some(parent) = db_path.parent() {
            fs::create_dir_all(parent)?;
        }

        // Create empty DB file if not exists
        if !db_path.exists() {
            fs::File::create(&db_path)?;
        }

        println!("✅ Database:    {:?}", db_path);

        Ok(db_path)
    }
}
