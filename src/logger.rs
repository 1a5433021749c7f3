//! Logging setup
//!
//! Routes the `log` facade through a `fern` dispatcher. Lines are stamped with the
//! crate's own `yyyy-MM-dd HH:mm:ss.SSS` layout.

use crate::config::LoggingConfig;
use crate::constants::{APP_DIR_NAME, LOG_FILE_NAME};
use crate::format::format_date_time_default;
use anyhow::{Context, Result};
use chrono::{Local, NaiveDateTime};
use std::fmt;
use std::path::PathBuf;

/// Install the global logger described by `config`.
///
/// Does nothing when logging is disabled. Fails if a logger is already installed.
pub fn init(config: &LoggingConfig) -> Result<()> {
    if !config.enabled {
        return Ok(());
    }

    let dispatch = fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "{}",
                format_record(Local::now().naive_local(), record.level(), record.target(), message)
            ))
        })
        .level(config.level_filter()?);

    let dispatch = match resolve_log_file(config) {
        Some(path) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
            }
            let file = fern::log_file(&path)
                .with_context(|| format!("Failed to open log file: {}", path.display()))?;
            dispatch.chain(file)
        }
        None => dispatch.chain(std::io::stderr()),
    };

    dispatch
        .apply()
        .map_err(|e| anyhow::anyhow!("Failed to install logger: {}", e))?;

    log::debug!("Logging initialized at level {}", config.level);
    Ok(())
}

/// Default log file location under the platform data directory.
pub fn get_log_file_path() -> Result<PathBuf> {
    dirs::data_local_dir()
        .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))
        .map(|dir| dir.join(APP_DIR_NAME).join(LOG_FILE_NAME))
}

fn resolve_log_file(config: &LoggingConfig) -> Option<PathBuf> {
    config.file.clone().or_else(|| get_log_file_path().ok())
}

/// Render one log line.
pub fn format_record(timestamp: NaiveDateTime, level: log::Level, target: &str, message: &fmt::Arguments) -> String {
    format!("[{} {:<5} {}] {}", format_date_time_default(timestamp), level, target, message)
}
