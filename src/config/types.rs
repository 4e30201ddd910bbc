use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub application: ApplicationConfig,
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Application identity shown in every window title.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Display name (e.g., "Lexicon Manager").
    #[serde(default = "default_app_name")]
    pub name: String,
    /// Version string shown after the name (e.g., "2019.1").
    #[serde(default = "default_app_version")]
    pub version: String,
}

/// Where the lexicon store lives.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Path to the JSON store file.
    #[serde(default = "default_store_path")]
    pub path: PathBuf,
}

/// Log file placement and verbosity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Directory receiving one log file per launch.
    #[serde(default = "default_log_dir")]
    pub dir: PathBuf,
    /// File name prefix; the launch timestamp is appended.
    #[serde(default = "default_log_prefix")]
    pub file_prefix: String,
    /// Default filter level: "trace", "debug", "info", "warn" or "error".
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl ApplicationConfig {
    /// Window title prefix, e.g. `"Lexicon Manager 2019.1 - "`.
    pub fn title_prefix(&self) -> String {
        format!("{} {} - ", self.name, self.version)
    }
}

fn data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("lexicon-manager")
}

fn default_app_name() -> String {
    "Lexicon Manager".to_string()
}

fn default_app_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

fn default_store_path() -> PathBuf {
    data_dir().join("lexicon.json")
}

fn default_log_dir() -> PathBuf {
    data_dir().join("logs")
}

fn default_log_prefix() -> String {
    "LegacyLexicon".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            name: default_app_name(),
            version: default_app_version(),
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: default_store_path(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            dir: default_log_dir(),
            file_prefix: default_log_prefix(),
            level: default_log_level(),
        }
    }
}
