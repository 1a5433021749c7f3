//! Constants used throughout the crate
//!
//! File names, directory names and clock-boundary spacings live here so the
//! config, logger and predicate modules agree on them.

// Configuration
pub const APP_DIR_NAME: &str = "chronokit";
pub const LOCAL_CONFIG_FILE: &str = "chronokit.toml";
pub const CONFIG_FILE_NAME: &str = "config.toml";

// Logging
pub const LOG_FILE_NAME: &str = "chronokit.log";
pub const DEFAULT_LOG_LEVEL: &str = "info";

// Clock boundaries, in minutes
pub const FIVE_MINUTES: u32 = 5;
pub const QUARTER_HOUR: u32 = 15;
pub const HALF_HOUR: u32 = 30;
pub const FULL_HOUR: u32 = 60;
