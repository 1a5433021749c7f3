//! Compact timestamp expansion
//!
//! Rewrites a digits-only timestamp such as `20190101000000666` into the punctuated
//! form `2019-01-01 00:00:00.666` that the `yyyy-MM-dd HH:mm:ss.SSS` layout parses.
//! Digits are not validated here; a bad calendar date fails later, in the parser.

use crate::pattern::DateTimePattern;

/// Width of the year field.
const YEAR_LEN: usize = 4;

/// Length of `yyyyMMdd`.
const DATE_LEN: usize = DateTimePattern::ShortDate.template().len();

/// Length of `yyyyMMddHHmmss`.
const DATE_TIME_SECOND_LEN: usize = DateTimePattern::ShortDateTimeSecond.template().len();

/// Insert separators into a compact timestamp.
///
/// A separator may follow each odd index except the last one: `-` after the month and
/// before the day, a space after the day, `:` between clock fields and `.` before the
/// fraction. Inputs of other lengths get the same positional treatment.
///
/// ```
/// use chronokit::expand::expand_compact;
///
/// assert_eq!(expand_compact("20190101000000666"), "2019-01-01 00:00:00.666");
/// assert_eq!(expand_compact("20190101"), "2019-01-01");
/// ```
pub fn expand_compact(compact: &str) -> String {
    let chars: Vec<char> = compact.chars().collect();
    let last = chars.len().saturating_sub(1);
    let mut expanded = String::with_capacity(compact.len() + 6);

    for (i, &c) in chars.iter().enumerate() {
        expanded.push(c);
        if i % 2 == 0 || i == last {
            continue;
        }
        if let Some(sep) = separator_after(i) {
            expanded.push(sep);
        }
    }

    expanded
}

fn separator_after(i: usize) -> Option<char> {
    if i >= YEAR_LEN - 1 && i < DATE_LEN - 1 {
        Some('-')
    } else if i == DATE_LEN - 1 {
        Some(' ')
    } else if i > DATE_LEN - 1 && i < DATE_TIME_SECOND_LEN - 1 {
        Some(':')
    } else if i == DATE_TIME_SECOND_LEN - 1 {
        Some('.')
    } else {
        None
    }
}
