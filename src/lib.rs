//! chronokit - date/time formatting, parsing and comparison helpers
//!
//! This library wraps `chrono` with a set of named format patterns and small,
//! stateless helpers: formatting and parsing with an explicit pattern, converting
//! wall-clock values to instants, measuring intervals, and answering calendar
//! questions such as "is this a leap year".
//!
//! # Modules
//!
//! * [`pattern`] - Named patterns, compiled layouts and the pattern table
//! * [`expand`] - Compact timestamp expansion (`20190101000000666` → `2019-01-01 00:00:00.666`)
//! * [`format`] - Formatting and parsing
//! * [`convert`] - Wall-clock ⇄ instant conversions
//! * [`period`] - Interval lengths
//! * [`predicate`] - Calendar and clock predicates
//! * [`config`] - Application configuration management

/// Configuration module for pattern defaults and logging
pub mod config;

/// Crate constants and default values
pub mod constants;

/// Conversions between wall-clock date-times and instants
pub mod convert;

/// Error types
pub mod error;

/// Compact timestamp expansion
pub mod expand;

/// Formatting and parsing helpers
pub mod format;

/// Logging setup
pub mod logger;

/// Interval lengths between dates and date-times
pub mod period;

/// Named patterns and compiled layouts
pub mod pattern;

/// Calendar and clock predicates
pub mod predicate;

pub use error::{DateTimeError, Result};
pub use expand::expand_compact;
pub use pattern::{DateTimePattern, Layout, PatternTable};
pub use period::PeriodUnit;
pub use predicate::ClockBoundary;
