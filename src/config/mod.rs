use crate::errors::AppResult;
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_database")]
    pub database: String,
    /// Default export file name when `export` gets no `--file`.
    #[serde(default = "default_export_file")]
    pub export_file: String,
    /// Keyword highlighted in listings and offered as the default exclusion.
    #[serde(default = "default_exclude_keyword")]
    pub exclude_keyword: String,
}

fn default_database() -> String {
    Config::database_file().to_string_lossy().to_string()
}
fn default_export_file() -> String {
    "timesheet.xlsx".to_string()
}
fn default_exclude_keyword() -> String {
    "bongkar".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: default_database(),
            export_file: default_export_file(),
            exclude_keyword: default_exclude_keyword(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory (`~/.shiftsheet`)
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".shiftsheet")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("shiftsheet.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("shiftsheet.sqlite")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if path.exists() {
            let content = fs::read_to_string(&path)?;
            Ok(serde_yaml::from_str(&content)?)
        } else {
            Ok(Self::default())
        }
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Initialize configuration and database files.
    ///
    /// `custom_db` may be absolute, `~/…`, or a bare name placed in the config
    /// directory. In test mode no config file is written.
    pub fn init_all(custom_db: Option<&str>, is_test: bool) -> AppResult<Self> {
        let dir = Self::config_dir();

        let db_path = match custom_db {
            Some(name) => {
                let p = expand_tilde(name);
                if p.is_absolute() { p } else { dir.join(p) }
            }
            None => Self::database_file(),
        };

        let config = Config {
            database: db_path.to_string_lossy().to_string(),
            ..Self::default()
        };

        if !is_test {
            fs::create_dir_all(&dir)?;
            fs::write(Self::config_file(), config.to_yaml()?)?;
        }

        if let Some(parent) = db_path.parent() {
            fs::create_dir_all(parent)?;
        }

        Ok(config)
    }
}
