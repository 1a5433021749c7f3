//! Formatting and parsing of dates and date-times
//!
//! Every helper takes its [`Layout`] explicitly. The `*_default` variants use
//! `yyyy-MM-dd` for dates and `yyyy-MM-dd HH:mm:ss.SSS` for date-times.

use crate::error::{DateTimeError, Result};
use crate::expand::expand_compact;
use crate::pattern::{DateTimePattern, Layout};
use chrono::format::{parse, Parsed, StrftimeItems};
use chrono::{Local, NaiveDate, NaiveDateTime};
use std::fmt::Write;

/// Format a date.
///
/// # Errors
/// * `UnsupportedField` - the layout contains hour, minute, second or millisecond fields
pub fn format_date(date: NaiveDate, layout: &Layout) -> Result<String> {
    if layout.has_time() {
        return Err(unsupported(layout));
    }
    let mut out = String::with_capacity(layout.template().len());
    write!(out, "{}", date.format(layout.strftime())).map_err(|_| unsupported(layout))?;
    Ok(out)
}

/// Format a date with `yyyy-MM-dd`.
pub fn format_date_default(date: NaiveDate) -> String {
    date.format(DateTimePattern::LongDate.layout().strftime()).to_string()
}

/// Format a date-time. A date-time has every field a layout can name, so this
/// cannot fail.
pub fn format_date_time(value: NaiveDateTime, layout: &Layout) -> String {
    value.format(layout.strftime()).to_string()
}

/// Format a date-time with `yyyy-MM-dd HH:mm:ss.SSS`.
pub fn format_date_time_default(value: NaiveDateTime) -> String {
    format_date_time(value, &DateTimePattern::LongDateTime.layout())
}

/// Format the current local date.
pub fn current_date_string(layout: &Layout) -> Result<String> {
    format_date(Local::now().date_naive(), layout)
}

/// Format the current local date-time.
pub fn current_date_time_string(layout: &Layout) -> String {
    format_date_time(Local::now().naive_local(), layout)
}

/// Parse a date.
///
/// Layouts without a day field, such as `yyyyMM`, resolve to the first day of
/// the month.
///
/// # Errors
/// * `InvalidArgument` - `text` is empty
/// * `Parse` - `text` does not match the layout or is not a real calendar date
pub fn parse_date(text: &str, layout: &Layout) -> Result<NaiveDate> {
    require_text(text)?;

    let mut parsed = Parsed::new();
    parse(&mut parsed, text, StrftimeItems::new(layout.strftime())).map_err(|e| parse_error(text, layout, e))?;
    if !layout.fields().day {
        parsed.set_day(1).map_err(|e| parse_error(text, layout, e))?;
    }
    parsed.to_naive_date().map_err(|e| parse_error(text, layout, e))
}

/// Parse a date with `yyyy-MM-dd`.
pub fn parse_date_default(text: &str) -> Result<NaiveDate> {
    parse_date(text, &DateTimePattern::LongDate.layout())
}

/// Parse a date-time.
///
/// Text in the compact `yyyyMMddHHmmssSSS` layout is expanded to
/// `yyyy-MM-dd HH:mm:ss.SSS` first and parsed in that form. Seconds and
/// milliseconds default to zero when the layout omits them.
///
/// # Errors
/// * `InvalidArgument` - `text` is empty
/// * `Parse` - `text` does not match the layout or is not a real date-time
pub fn parse_date_time(text: &str, layout: &Layout) -> Result<NaiveDateTime> {
    require_text(text)?;

    if layout.is_compact_millis() {
        let expanded = expand_compact(text);
        log::debug!("Expanded compact timestamp '{}' to '{}'", text, expanded);
        let long = DateTimePattern::LongDateTime.layout();
        return NaiveDateTime::parse_from_str(&expanded, long.strftime()).map_err(|e| parse_error(text, layout, e));
    }

    NaiveDateTime::parse_from_str(text, layout.strftime()).map_err(|e| parse_error(text, layout, e))
}

/// Parse a date-time with `yyyy-MM-dd HH:mm:ss.SSS`.
pub fn parse_date_time_default(text: &str) -> Result<NaiveDateTime> {
    parse_date_time(text, &DateTimePattern::LongDateTime.layout())
}

fn require_text(text: &str) -> Result<()> {
    if text.is_empty() {
        return Err(DateTimeError::InvalidArgument("text must not be empty".to_string()));
    }
    Ok(())
}

fn parse_error(text: &str, layout: &Layout, source: chrono::ParseError) -> DateTimeError {
    DateTimeError::Parse {
        input: text.to_string(),
        pattern: layout.template().to_string(),
        source,
    }
}

fn unsupported(layout: &Layout) -> DateTimeError {
    DateTimeError::UnsupportedField {
        pattern: layout.template().to_string(),
    }
}
