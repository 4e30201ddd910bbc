//! File-based tracing setup.
//!
//! The terminal belongs to the UI, so log output always goes to a file.

use std::fs::{self, OpenOptions};
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use chrono::{DateTime, Local};
use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

/// Log file for a launch at `now`: `{dir}/{prefix}_{YYYYMMDD}_{HHMM}.log`.
pub fn log_file_path(config: &LoggingConfig, now: DateTime<Local>) -> PathBuf {
    config.dir.join(format!(
        "{}_{}.log",
        config.file_prefix,
        now.format("%Y%m%d_%H%M")
    ))
}

/// Install the global subscriber. `RUST_LOG` overrides the configured level.
///
/// Returns the file being written to.
pub fn init_tracing(config: &LoggingConfig) -> io::Result<PathBuf> {
    let path = log_file_path(config, Local::now());
    fs::create_dir_all(&config.dir)?;
    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_ansi(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(io::Error::other)?;

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn file_name_carries_prefix_and_timestamp() {
        let config = LoggingConfig {
            dir: PathBuf::from("/var/log/lexicon"),
            file_prefix: "LegacyLexicon".to_string(),
            level: "info".to_string(),
        };
        let now = Local.with_ymd_and_hms(2019, 3, 7, 9, 5, 0).unwrap();
        assert_eq!(
            log_file_path(&config, now),
            PathBuf::from("/var/log/lexicon/LegacyLexicon_20190307_0905.log")
        );
    }
}
