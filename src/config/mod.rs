use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Root of the character site (profile and calendar pages)
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Prefix for site-relative store links found on detail pages
    #[serde(default = "default_store_site_url")]
    pub store_site_url: String,
    #[serde(default = "default_calendar_year")]
    pub calendar_year: i32,
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
    /// Chain name stripped from store names
    #[serde(default = "default_store_prefix")]
    pub store_prefix: String,
    /// Keys of characters that are not Biccame musume
    #[serde(default = "default_excluded_keys")]
    pub excluded_keys: Vec<String>,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "https://biccame.jp".to_string()
}
fn default_store_site_url() -> String {
    "http://www.biccamera.co.jp".to_string()
}
fn default_calendar_year() -> i32 {
    2025
}
fn default_output_dir() -> String {
    ".".to_string()
}
fn default_store_prefix() -> String {
    "ビックカメラ".to_string()
}
fn default_excluded_keys() -> Vec<String> {
    ["biccamera", "naisen", "bicsim", "oeraitan"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}
fn default_user_agent() -> String {
    format!("rbiccame/{}", env!("CARGO_PKG_VERSION"))
}
fn default_timeout_secs() -> u64 {
    30
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            store_site_url: default_store_site_url(),
            calendar_year: default_calendar_year(),
            output_dir: default_output_dir(),
            store_prefix: default_store_prefix(),
            excluded_keys: default_excluded_keys(),
            user_agent: default_user_agent(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rbiccame")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".rbiccame")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rbiccame.conf")
    }

    /// Load configuration from `path`; a missing file means defaults
    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "no configuration file, using defaults");
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| {
            AppError::Config(format!("cannot read {}: {e}", path.display()))
        })?;

        // an empty file is a valid "all defaults" configuration
        if content.trim().is_empty() {
            return Ok(Config::default());
        }

        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("cannot parse {}: {e}", path.display())))
    }

    /// Output directory with `~/` expanded
    pub fn output_path(&self) -> PathBuf {
        expand_tilde(&self.output_dir)
    }

    /// Write the default configuration to `path` unless a file is already there.
    /// Returns `true` when a new file was created.
    pub fn init_at(path: &Path) -> AppResult<bool> {
        if path.exists() {
            return Ok(false);
        }

        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }

        let yaml = serde_yaml::to_string(&Config::default())?;
        let mut file = fs::File::create(path)?;
        file.write_all(yaml.as_bytes())?;

        Ok(true)
    }
}
