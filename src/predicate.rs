//! Calendar and clock predicates

use crate::constants::{FIVE_MINUTES, FULL_HOUR, HALF_HOUR, QUARTER_HOUR};
use chrono::{Datelike, Local, NaiveDate, NaiveDateTime, Timelike};

/// True when `date` is the current local date.
pub fn is_today(date: NaiveDate) -> bool {
    is_today_at(date, Local::now().date_naive())
}

pub fn is_today_at(date: NaiveDate, today: NaiveDate) -> bool {
    date == today
}

pub fn is_leap_year(date: NaiveDate) -> bool {
    NaiveDate::from_ymd_opt(date.year(), 2, 29).is_some()
}

/// True when both date-times fall on the same calendar day.
pub fn is_same_day(a: NaiveDateTime, b: NaiveDateTime) -> bool {
    is_same_date(a.date(), b.date())
}

pub fn is_same_date(a: NaiveDate, b: NaiveDate) -> bool {
    a == b
}

/// Like [`is_same_day`], but a missing side is never the same day.
pub fn is_same_day_opt(a: Option<NaiveDateTime>, b: Option<NaiveDateTime>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => is_same_day(a, b),
        _ => false,
    }
}

/// Minute marks within an hour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClockBoundary {
    FiveMinutes,
    QuarterHour,
    HalfHour,
    FullHour,
}

impl ClockBoundary {
    /// Spacing of the boundary in minutes.
    pub const fn minutes(self) -> u32 {
        match self {
            Self::FiveMinutes => FIVE_MINUTES,
            Self::QuarterHour => QUARTER_HOUR,
            Self::HalfHour => HALF_HOUR,
            Self::FullHour => FULL_HOUR,
        }
    }
}

/// True when the minute of `value` is a multiple of the boundary spacing.
/// Seconds are ignored, so 09:45:30 is on a quarter hour.
pub fn is_on_boundary(value: NaiveDateTime, boundary: ClockBoundary) -> bool {
    value.minute() % boundary.minutes() == 0
}

pub fn is_five_minute(value: NaiveDateTime) -> bool {
    is_on_boundary(value, ClockBoundary::FiveMinutes)
}

pub fn is_quarter(value: NaiveDateTime) -> bool {
    is_on_boundary(value, ClockBoundary::QuarterHour)
}

pub fn is_half_hour(value: NaiveDateTime) -> bool {
    is_on_boundary(value, ClockBoundary::HalfHour)
}

pub fn is_full_clock(value: NaiveDateTime) -> bool {
    is_on_boundary(value, ClockBoundary::FullHour)
}
