//! Signed interval lengths between two values
//!
//! Every function measures `end - start`. Calendar units count complete units only,
//! so 2019-11-06 to 2019-12-05 is zero months.

use crate::error::DateTimeError;
use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime};
use std::fmt;
use std::str::FromStr;

const NANOS_PER_SECOND: i64 = 1_000_000_000;
const NANOS_PER_MILLI: i64 = 1_000_000;
const DAYS_PER_WEEK: i64 = 7;
const MONTHS_PER_YEAR: i64 = 12;

/// Unit for [`period_between`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PeriodUnit {
    Millis,
    Seconds,
    Days,
    Weeks,
    Months,
    Years,
}

impl PeriodUnit {
    pub const ALL: [PeriodUnit; 6] = [
        Self::Millis,
        Self::Seconds,
        Self::Days,
        Self::Weeks,
        Self::Months,
        Self::Years,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Self::Millis => "millis",
            Self::Seconds => "seconds",
            Self::Days => "days",
            Self::Weeks => "weeks",
            Self::Months => "months",
            Self::Years => "years",
        }
    }
}

impl fmt::Display for PeriodUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PeriodUnit {
    type Err = DateTimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|unit| unit.name() == s)
            .ok_or_else(|| DateTimeError::InvalidArgument(format!("unknown period unit '{}'", s)))
    }
}

/// Split a duration into whole seconds (floored) and a non-negative nanosecond part.
fn floor_parts(delta: Duration) -> (i64, i64) {
    let secs = delta.num_seconds();
    let nanos = i64::from(delta.subsec_nanos());
    if nanos < 0 {
        (secs - 1, nanos + NANOS_PER_SECOND)
    } else {
        (secs, nanos)
    }
}

pub fn period_millis(start: NaiveDateTime, end: NaiveDateTime) -> i64 {
    let (secs, nanos) = floor_parts(end - start);
    secs * 1000 + nanos / NANOS_PER_MILLI
}

pub fn period_seconds(start: NaiveDateTime, end: NaiveDateTime) -> i64 {
    floor_parts(end - start).0
}

pub fn period_days(start: NaiveDate, end: NaiveDate) -> i64 {
    (end - start).num_days()
}

pub fn period_weeks(start: NaiveDate, end: NaiveDate) -> i64 {
    period_days(start, end) / DAYS_PER_WEEK
}

/// Complete months between two dates.
pub fn period_months(start: NaiveDate, end: NaiveDate) -> i64 {
    // Month index and day packed so that one division drops the incomplete month.
    let packed = |d: NaiveDate| (i64::from(d.year()) * MONTHS_PER_YEAR + i64::from(d.month0())) * 32 + i64::from(d.day());
    (packed(end) - packed(start)) / 32
}

pub fn period_years(start: NaiveDate, end: NaiveDate) -> i64 {
    period_months(start, end) / MONTHS_PER_YEAR
}

/// Interval in the requested unit. Calendar units use the date parts only.
pub fn period_between(start: NaiveDateTime, end: NaiveDateTime, unit: PeriodUnit) -> i64 {
    match unit {
        PeriodUnit::Millis => period_millis(start, end),
        PeriodUnit::Seconds => period_seconds(start, end),
        PeriodUnit::Days => period_days(start.date(), end.date()),
        PeriodUnit::Weeks => period_weeks(start.date(), end.date()),
        PeriodUnit::Months => period_months(start.date(), end.date()),
        PeriodUnit::Years => period_years(start.date(), end.date()),
    }
}
