//! Conversions between wall-clock date-times and instants
//!
//! Wall-clock values are read in the system local time zone unless a zone is
//! passed in.

use crate::error::{DateTimeError, Result};
use chrono::{DateTime, Local, NaiveDateTime, TimeZone};
use std::time::SystemTime;

/// Attach a time zone to a wall-clock date-time.
///
/// An ambiguous wall-clock time (clocks turned back) resolves to the earlier instant.
///
/// # Errors
/// * `OutOfRange` - the wall-clock time falls in a gap (clocks turned forward)
pub fn to_zoned<Tz: TimeZone>(value: NaiveDateTime, tz: &Tz) -> Result<DateTime<Tz>> {
    tz.from_local_datetime(&value)
        .earliest()
        .ok_or_else(|| DateTimeError::OutOfRange(format!("{} does not exist in the target time zone", value)))
}

/// Attach the system local time zone to a wall-clock date-time.
pub fn to_local_instant(value: NaiveDateTime) -> Result<DateTime<Local>> {
    to_zoned(value, &Local)
}

/// Local wall-clock reading of an instant.
pub fn from_instant<Tz: TimeZone>(instant: DateTime<Tz>) -> NaiveDateTime {
    instant.with_timezone(&Local).naive_local()
}

pub fn to_system_time(value: NaiveDateTime) -> Result<SystemTime> {
    Ok(SystemTime::from(to_local_instant(value)?))
}

pub fn from_system_time(time: SystemTime) -> NaiveDateTime {
    DateTime::<Local>::from(time).naive_local()
}

/// Milliseconds since the Unix epoch for a local wall-clock date-time.
pub fn to_epoch_millis(value: NaiveDateTime) -> Result<i64> {
    Ok(to_local_instant(value)?.timestamp_millis())
}

/// Local wall-clock date-time for milliseconds since the Unix epoch.
///
/// # Errors
/// * `OutOfRange` - the value is outside the range chrono can represent
pub fn from_epoch_millis(millis: i64) -> Result<NaiveDateTime> {
    Local
        .timestamp_millis_opt(millis)
        .single()
        .map(|dt| dt.naive_local())
        .ok_or_else(|| DateTimeError::OutOfRange(format!("{} ms since the epoch", millis)))
}
