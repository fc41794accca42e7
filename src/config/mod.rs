use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::errors::{AppError, AppResult};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default = "default_data_file")]
    pub data_file: String,
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    #[serde(default = "default_upcoming_days")]
    pub upcoming_days: i64,
    #[serde(default)]
    pub static_dir: Option<String>,
    #[serde(default = "default_task_template")]
    pub task_template: Vec<String>,
}

fn default_data_file() -> String {
    Config::data_file_path().to_string_lossy().to_string()
}
fn default_host() -> String {
    "127.0.0.1".to_string()
}
fn default_port() -> u16 {
    5000
}
fn default_page_size() -> usize {
    10
}
fn default_upcoming_days() -> i64 {
    7
}

/// Checklist every new hire starts with.
pub fn default_task_template() -> Vec<String> {
    [
        "Sign employment contract",
        "Complete HR paperwork",
        "Set up workstation",
        "Create email and accounts",
        "Security and compliance training",
        "Meet the team",
        "First week check-in with manager",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            host: default_host(),
            port: default_port(),
            page_size: default_page_size(),
            upcoming_days: default_upcoming_days(),
            static_dir: None,
            task_template: default_task_template(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("hronboard")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".hronboard")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("hronboard.conf")
    }

    /// Return the default path of the JSON data file
    pub fn data_file_path() -> PathBuf {
        Self::config_dir().join("db.json")
    }

    /// Load configuration from file, or return defaults if not found.
    ///
    /// `PORT` in the environment overrides the configured port.
    pub fn load() -> AppResult<Self> {
        let mut cfg = Self::load_from(&Self::config_file())?;
        if let Ok(port) = env::var("PORT") {
            cfg.port = port
                .trim()
                .parse()
                .map_err(|_| AppError::Config(format!("invalid PORT value '{port}'")))?;
        }
        Ok(cfg)
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }
        let content = fs::read_to_string(path)?;
        if content.trim().is_empty() {
            return Ok(Config::default());
        }
        let cfg: Config = serde_yaml::from_str(&content)?;
        cfg.check()?;
        Ok(cfg)
    }

    /// Reject values the rest of the app cannot work with.
    pub fn check(&self) -> AppResult<()> {
        if self.page_size == 0 {
            return Err(AppError::Config("page_size must be greater than 0".into()));
        }
        if self.upcoming_days < 0 {
            return Err(AppError::Config("upcoming_days must not be negative".into()));
        }
        if self.data_file.trim().is_empty() {
            return Err(AppError::Config("data_file must not be empty".into()));
        }
        Ok(())
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Initialize configuration and data files.
    ///
    /// A relative `custom_data` name is placed inside the config directory.
    /// In test mode the config file is left untouched.
    pub fn init_all(custom_data: Option<String>, is_test: bool) -> AppResult<Config> {
        let dir = Self::config_dir();

        let data_path = match custom_data {
            Some(name) => {
                let p = Path::new(&name);
                if p.is_absolute() {
                    p.to_path_buf()
                } else {
                    dir.join(p)
                }
            }
            None => Self::data_file_path(),
        };

        let config = Config {
            data_file: data_path.to_string_lossy().to_string(),
            ..Config::default()
        };

        if !is_test {
            fs::create_dir_all(&dir)?;
            let yaml = config.to_yaml()?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
        }

        Ok(config)
    }
}
