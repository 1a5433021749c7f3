//! Error types for date/time operations.

/// Errors returned by the formatting, parsing and conversion helpers.
#[derive(Debug, thiserror::Error)]
pub enum DateTimeError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Invalid pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },

    #[error("Pattern '{pattern}' needs time fields that a date does not have")]
    UnsupportedField { pattern: String },

    #[error("Failed to parse '{input}' with pattern '{pattern}': {source}")]
    Parse {
        input: String,
        pattern: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("Value out of range: {0}")]
    OutOfRange(String),

    #[error("Unknown pattern identifier: {0}")]
    UnknownPattern(String),
}

pub type Result<T> = std::result::Result<T, DateTimeError>;
