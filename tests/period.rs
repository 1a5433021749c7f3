use chrono::{NaiveDate, NaiveDateTime};
use chronokit::period::*;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32, ms: u32) -> NaiveDateTime {
    date(y, m, d).and_hms_milli_opt(h, min, s, ms).unwrap()
}

#[test]
fn test_period_millis() {
    let start = at(2019, 11, 6, 17, 45, 0, 100);
    let end = at(2019, 11, 6, 17, 45, 0, 200);
    assert_eq!(period_millis(start, end), 100);
    assert_eq!(period_millis(end, start), -100);
}

#[test]
fn test_period_seconds() {
    let start = at(2019, 11, 6, 17, 45, 0, 0);
    let end = at(2019, 11, 6, 17, 45, 20, 0);
    assert_eq!(period_seconds(start, end), 20);
    assert_eq!(period_seconds(end, start), -20);
}

#[test]
fn test_period_seconds_floors_negative_fractions() {
    let start = at(2019, 11, 6, 17, 45, 1, 500);
    let end = at(2019, 11, 6, 17, 45, 0, 0);
    assert_eq!(period_seconds(start, end), -2);
    assert_eq!(period_millis(start, end), -1500);
}

#[test]
fn test_period_days() {
    assert_eq!(period_days(date(2019, 11, 6), date(2019, 11, 7)), 1);
    assert_eq!(period_days(date(2019, 11, 7), date(2019, 11, 6)), -1);
    assert_eq!(period_days(date(2020, 1, 1), date(2021, 1, 1)), 366);
}

#[test]
fn test_period_weeks() {
    assert_eq!(period_weeks(date(2019, 11, 6), date(2019, 12, 13)), 5);
    assert_eq!(period_weeks(date(2019, 11, 6), date(2019, 11, 12)), 0);
    assert_eq!(period_weeks(date(2019, 12, 13), date(2019, 11, 6)), -5);
}

#[test]
fn test_period_months_counts_complete_months() {
    assert_eq!(period_months(date(2019, 11, 6), date(2019, 12, 7)), 1);
    assert_eq!(period_months(date(2019, 11, 6), date(2019, 12, 6)), 1);
    assert_eq!(period_months(date(2019, 11, 6), date(2019, 12, 5)), 0);
    assert_eq!(period_months(date(2019, 12, 7), date(2019, 11, 6)), -1);
    assert_eq!(period_months(date(2019, 1, 31), date(2019, 2, 28)), 0);
}

#[test]
fn test_period_years() {
    assert_eq!(period_years(date(2019, 11, 6), date(2020, 11, 6)), 1);
    assert_eq!(period_years(date(2019, 11, 6), date(2020, 11, 5)), 0);
    assert_eq!(period_years(date(2020, 2, 29), date(2024, 2, 29)), 4);
    assert_eq!(period_years(date(2020, 11, 6), date(2019, 11, 6)), -1);
}

#[test]
fn test_period_between_units() {
    let start = at(2019, 11, 6, 23, 0, 0, 0);
    let end = at(2019, 11, 7, 1, 0, 0, 0);
    assert_eq!(period_between(start, end, PeriodUnit::Seconds), 7200);
    assert_eq!(period_between(start, end, PeriodUnit::Millis), 7_200_000);
    // Calendar units look at the dates only
    assert_eq!(period_between(start, end, PeriodUnit::Days), 1);
    assert_eq!(period_between(start, end, PeriodUnit::Weeks), 0);
    assert_eq!(period_between(start, end, PeriodUnit::Months), 0);
    assert_eq!(period_between(start, end, PeriodUnit::Years), 0);
}

#[test]
fn test_period_unit_names() {
    for unit in PeriodUnit::ALL {
        assert_eq!(unit.to_string().parse::<PeriodUnit>().unwrap(), unit);
    }
    assert!("fortnights".parse::<PeriodUnit>().is_err());
}
