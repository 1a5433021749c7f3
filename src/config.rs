//! Configuration management for chronokit
//!
//! This module handles loading, parsing, and validation of configuration files.

use crate::constants::{APP_DIR_NAME, CONFIG_FILE_NAME, DEFAULT_LOG_LEVEL, LOCAL_CONFIG_FILE};
use crate::pattern::{DateTimePattern, Layout, PatternTable};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    pub patterns: PatternsConfig,
    pub logging: LoggingConfig,
}

/// Pattern configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PatternsConfig {
    /// Pattern used when formatting or parsing a date without an explicit pattern
    pub default_date: DateTimePattern,
    /// Pattern used when formatting or parsing a date-time without an explicit pattern
    pub default_date_time: DateTimePattern,
    /// Map of pattern identifier -> replacement template
    pub overrides: BTreeMap<String, String>,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    /// Enable logging
    pub enabled: bool,
    /// Minimum level: "error", "warn", "info", "debug" or "trace"
    pub level: String,
    /// Log file path; stderr when unset and no data directory is available
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

impl Default for PatternsConfig {
    fn default() -> Self {
        Self {
            default_date: DateTimePattern::LongDate,
            default_date_time: DateTimePattern::LongDateTime,
            overrides: BTreeMap::new(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            level: DEFAULT_LOG_LEVEL.to_string(),
            file: None,
        }
    }
}

impl PatternsConfig {
    /// Build the pattern table from the configured overrides
    pub fn table(&self) -> Result<PatternTable> {
        let mut table = PatternTable::new();
        for (id, template) in &self.overrides {
            let pattern: DateTimePattern = id
                .parse()
                .with_context(|| format!("Invalid key in [patterns.overrides]: '{}'", id))?;
            table.set(pattern, template.clone());
        }
        table.validate().context("Invalid template in [patterns.overrides]")?;
        Ok(table)
    }

    /// Layout for the configured default date pattern
    pub fn date_layout(&self) -> Result<Layout> {
        Ok(self.table()?.layout(self.default_date)?)
    }

    /// Layout for the configured default date-time pattern
    pub fn date_time_layout(&self) -> Result<Layout> {
        Ok(self.table()?.layout(self.default_date_time)?)
    }
}

impl LoggingConfig {
    pub fn level_filter(&self) -> Result<log::LevelFilter> {
        self.level
            .parse()
            .map_err(|e| anyhow::anyhow!("Invalid log level '{}': {}", self.level, e))
    }
}

impl Config {
    /// Load configuration from file or return defaults
    pub fn load() -> Result<Self> {
        let config_path = Self::find_config_file()?;

        if let Some(path) = config_path {
            Self::load_from_file(&path)
        } else {
            log::debug!("No configuration file found, using defaults");
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;

        config
            .validate()
            .with_context(|| format!("Invalid config file: {}", path.as_ref().display()))?;
        log::debug!("Loaded configuration from {}", path.as_ref().display());
        Ok(config)
    }

    /// Find configuration file in order of precedence
    fn find_config_file() -> Result<Option<PathBuf>> {
        // 1. Check current directory
        let current_dir_config = PathBuf::from(LOCAL_CONFIG_FILE);
        if current_dir_config.exists() {
            return Ok(Some(current_dir_config));
        }

        // 2. Check XDG config directory
        if let Ok(xdg_config) = Self::get_default_config_path() {
            if xdg_config.exists() {
                return Ok(Some(xdg_config));
            }
        }

        Ok(None)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        let table = self.patterns.table()?;

        let date_layout = table.layout(self.patterns.default_date)?;
        if date_layout.has_time() {
            anyhow::bail!(
                "default_date '{}' uses template '{}', which contains time fields",
                self.patterns.default_date,
                date_layout
            );
        }

        table.layout(self.patterns.default_date_time)?;

        self.logging.level_filter()?;

        Ok(())
    }

    /// Generate default configuration file
    pub fn generate_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
        let config = Self::default();
        let toml_content = toml::to_string_pretty(&config).context("Failed to serialize default config")?;

        let header = format!(
            "# chronokit configuration file\n# Generated on {}\n\n",
            crate::format::format_date_default(chrono::Local::now().date_naive())
        );

        let full_content = header + &toml_content;

        // Ensure the parent directory exists
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
        }

        std::fs::write(&path, full_content)
            .with_context(|| format!("Failed to write config file: {}", path.as_ref().display()))?;

        log::info!("Generated default configuration file: {}", path.as_ref().display());
        Ok(())
    }

    /// Get the XDG config directory path
    pub fn get_xdg_config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
            .map(|dir| dir.join(APP_DIR_NAME))
    }

    /// Get the default config file path
    pub fn get_default_config_path() -> Result<PathBuf> {
        Ok(Self::get_xdg_config_dir()?.join(CONFIG_FILE_NAME))
    }
}
