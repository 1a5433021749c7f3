//! Named date/time patterns and their compiled layouts
//!
//! Templates use the `yyyy MM dd HH mm ss SSS` letter convention. A template is compiled
//! once into a [`Layout`], which carries the equivalent chrono strftime string and is
//! passed explicitly to every formatting and parsing helper.

use crate::error::{DateTimeError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Identifier of a built-in pattern template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DateTimePattern {
    LongDateMonth,
    LongDate,
    EnDateMonth,
    EnDate,
    ShortDateMonth,
    ShortDate,
    LongDateTimeSecond,
    LongDateTimeMinute,
    LongDateTime,
    EnDateTimeSecond,
    EnDateTimeMinute,
    EnDateTime,
    ShortDateTimeSecond,
    ShortDateTimeMinute,
    ShortDateTime,
}

impl DateTimePattern {
    pub const ALL: [DateTimePattern; 15] = [
        Self::LongDateMonth,
        Self::LongDate,
        Self::EnDateMonth,
        Self::EnDate,
        Self::ShortDateMonth,
        Self::ShortDate,
        Self::LongDateTimeSecond,
        Self::LongDateTimeMinute,
        Self::LongDateTime,
        Self::EnDateTimeSecond,
        Self::EnDateTimeMinute,
        Self::EnDateTime,
        Self::ShortDateTimeSecond,
        Self::ShortDateTimeMinute,
        Self::ShortDateTime,
    ];

    /// The identifier used in configuration files and on the command line.
    pub const fn id(self) -> &'static str {
        match self {
            Self::LongDateMonth => "long-date-month",
            Self::LongDate => "long-date",
            Self::EnDateMonth => "en-date-month",
            Self::EnDate => "en-date",
            Self::ShortDateMonth => "short-date-month",
            Self::ShortDate => "short-date",
            Self::LongDateTimeSecond => "long-date-time-second",
            Self::LongDateTimeMinute => "long-date-time-minute",
            Self::LongDateTime => "long-date-time",
            Self::EnDateTimeSecond => "en-date-time-second",
            Self::EnDateTimeMinute => "en-date-time-minute",
            Self::EnDateTime => "en-date-time",
            Self::ShortDateTimeSecond => "short-date-time-second",
            Self::ShortDateTimeMinute => "short-date-time-minute",
            Self::ShortDateTime => "short-date-time",
        }
    }

    /// The literal template text.
    pub const fn template(self) -> &'static str {
        match self {
            Self::LongDateMonth => "yyyy-MM",
            Self::LongDate => "yyyy-MM-dd",
            Self::EnDateMonth => "yyyy/MM",
            Self::EnDate => "yyyy/MM/dd",
            Self::ShortDateMonth => "yyyyMM",
            Self::ShortDate => "yyyyMMdd",
            Self::LongDateTimeSecond => "yyyy-MM-dd HH:mm:ss",
            Self::LongDateTimeMinute => "yyyy-MM-dd HH:mm",
            Self::LongDateTime => "yyyy-MM-dd HH:mm:ss.SSS",
            Self::EnDateTimeSecond => "yyyy/MM/dd HH:mm:ss",
            Self::EnDateTimeMinute => "yyyy/MM/dd HH:mm",
            Self::EnDateTime => "yyyy/MM/dd HH:mm:ss.SSS",
            Self::ShortDateTimeSecond => "yyyyMMddHHmmss",
            Self::ShortDateTimeMinute => "yyyyMMddHHmm",
            Self::ShortDateTime => "yyyyMMddHHmmssSSS",
        }
    }

    fn strftime(self) -> &'static str {
        match self {
            Self::LongDateMonth => "%Y-%m",
            Self::LongDate => "%Y-%m-%d",
            Self::EnDateMonth => "%Y/%m",
            Self::EnDate => "%Y/%m/%d",
            Self::ShortDateMonth => "%Y%m",
            Self::ShortDate => "%Y%m%d",
            Self::LongDateTimeSecond => "%Y-%m-%d %H:%M:%S",
            Self::LongDateTimeMinute => "%Y-%m-%d %H:%M",
            Self::LongDateTime => "%Y-%m-%d %H:%M:%S.%3f",
            Self::EnDateTimeSecond => "%Y/%m/%d %H:%M:%S",
            Self::EnDateTimeMinute => "%Y/%m/%d %H:%M",
            Self::EnDateTime => "%Y/%m/%d %H:%M:%S.%3f",
            Self::ShortDateTimeSecond => "%Y%m%d%H%M%S",
            Self::ShortDateTimeMinute => "%Y%m%d%H%M",
            Self::ShortDateTime => "%Y%m%d%H%M%S%3f",
        }
    }

    /// Compiled layout for this pattern.
    pub fn layout(self) -> Layout {
        let strftime = self.strftime();
        Layout {
            template: self.template().to_string(),
            strftime: strftime.to_string(),
            fields: Fields::of_strftime(strftime),
        }
    }

    /// Whether the template contains any time-of-day field.
    pub fn has_time(self) -> bool {
        Fields::of_strftime(self.strftime()).has_time()
    }
}

impl fmt::Display for DateTimePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for DateTimePattern {
    type Err = DateTimeError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|p| p.id() == s)
            .ok_or_else(|| DateTimeError::UnknownPattern(s.to_string()))
    }
}

impl From<DateTimePattern> for Layout {
    fn from(pattern: DateTimePattern) -> Self {
        pattern.layout()
    }
}

/// Which calendar and clock fields a layout contains.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Fields {
    pub year: bool,
    pub month: bool,
    pub day: bool,
    pub hour: bool,
    pub minute: bool,
    pub second: bool,
    pub millis: bool,
}

impl Fields {
    fn of_strftime(strftime: &str) -> Self {
        let mut fields = Self::default();
        let mut chars = strftime.chars();
        while let Some(c) = chars.next() {
            if c != '%' {
                continue;
            }
            match chars.next() {
                Some('Y') => fields.year = true,
                Some('m') => fields.month = true,
                Some('d') => fields.day = true,
                Some('H') => fields.hour = true,
                Some('M') => fields.minute = true,
                Some('S') => fields.second = true,
                Some('3') => {
                    chars.next();
                    fields.millis = true;
                }
                _ => {}
            }
        }
        fields
    }

    pub fn has_time(&self) -> bool {
        self.hour || self.minute || self.second || self.millis
    }
}

/// A compiled pattern template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    template: String,
    strftime: String,
    fields: Fields,
}

impl Layout {
    /// Compile a template such as `dd.MM.yyyy HH:mm`.
    ///
    /// Supported letter runs are `yyyy`, `MM`, `dd`, `HH`, `mm`, `ss` and `SSS`. Text in
    /// single quotes is copied literally and `''` stands for one quote. Every other
    /// non-letter character is a literal.
    pub fn compile(template: &str) -> Result<Self> {
        if template.is_empty() {
            return Err(DateTimeError::InvalidArgument("pattern must not be empty".to_string()));
        }

        let chars: Vec<char> = template.chars().collect();
        let mut strftime = String::with_capacity(template.len() * 2);
        let mut i = 0;

        while i < chars.len() {
            let c = chars[i];

            if c == '\'' {
                if chars.get(i + 1) == Some(&'\'') {
                    strftime.push('\'');
                    i += 2;
                    continue;
                }
                i += 1;
                loop {
                    match (chars.get(i), chars.get(i + 1)) {
                        (None, _) => {
                            return Err(invalid_pattern(template, "unterminated quoted literal".to_string()));
                        }
                        // '' inside a quoted run is one quote
                        (Some('\''), Some('\'')) => {
                            strftime.push('\'');
                            i += 2;
                        }
                        (Some('\''), _) => {
                            i += 1;
                            break;
                        }
                        (Some(&literal), _) => {
                            push_literal(&mut strftime, literal);
                            i += 1;
                        }
                    }
                }
                continue;
            }

            if c.is_ascii_alphabetic() {
                let run = chars[i..].iter().take_while(|&&ch| ch == c).count();
                let spec = match (c, run) {
                    ('y', 4) => "%Y",
                    ('M', 2) => "%m",
                    ('d', 2) => "%d",
                    ('H', 2) => "%H",
                    ('m', 2) => "%M",
                    ('s', 2) => "%S",
                    ('S', 3) => "%3f",
                    _ => {
                        let field: String = chars[i..i + run].iter().collect();
                        return Err(invalid_pattern(template, format!("unsupported field '{}'", field)));
                    }
                };
                strftime.push_str(spec);
                i += run;
                continue;
            }

            push_literal(&mut strftime, c);
            i += 1;
        }

        let fields = Fields::of_strftime(&strftime);
        Ok(Self {
            template: template.to_string(),
            strftime,
            fields,
        })
    }

    pub fn template(&self) -> &str {
        &self.template
    }

    /// The equivalent chrono strftime string.
    pub fn strftime(&self) -> &str {
        &self.strftime
    }

    pub fn fields(&self) -> Fields {
        self.fields
    }

    pub fn has_time(&self) -> bool {
        self.fields.has_time()
    }

    /// True when this layout is the compact millisecond template `yyyyMMddHHmmssSSS`.
    pub fn is_compact_millis(&self) -> bool {
        self.template == DateTimePattern::ShortDateTime.template()
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.template)
    }
}

impl FromStr for Layout {
    type Err = DateTimeError;

    fn from_str(s: &str) -> Result<Self> {
        Self::compile(s)
    }
}

fn push_literal(strftime: &mut String, c: char) {
    if c == '%' {
        strftime.push_str("%%");
    } else {
        strftime.push(c);
    }
}

fn invalid_pattern(template: &str, reason: String) -> DateTimeError {
    DateTimeError::InvalidPattern {
        pattern: template.to_string(),
        reason,
    }
}

/// Mapping from pattern identifiers to template text.
///
/// Identifiers without an override resolve to their built-in template.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatternTable {
    overrides: BTreeMap<DateTimePattern, String>,
}

impl PatternTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the template for one identifier.
    pub fn set(&mut self, pattern: DateTimePattern, template: impl Into<String>) {
        self.overrides.insert(pattern, template.into());
    }

    pub fn with_override(mut self, pattern: DateTimePattern, template: impl Into<String>) -> Self {
        self.set(pattern, template);
        self
    }

    pub fn template(&self, pattern: DateTimePattern) -> &str {
        self.overrides
            .get(&pattern)
            .map(String::as_str)
            .unwrap_or_else(|| pattern.template())
    }

    pub fn is_overridden(&self, pattern: DateTimePattern) -> bool {
        self.overrides.contains_key(&pattern)
    }

    pub fn layout(&self, pattern: DateTimePattern) -> Result<Layout> {
        match self.overrides.get(&pattern) {
            Some(template) => Layout::compile(template),
            None => Ok(pattern.layout()),
        }
    }

    /// Every identifier with its effective template, in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (DateTimePattern, &str)> + '_ {
        DateTimePattern::ALL.iter().map(move |&p| (p, self.template(p)))
    }

    /// Check that every override compiles.
    pub fn validate(&self) -> Result<()> {
        for template in self.overrides.values() {
            Layout::compile(template)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_layouts_match_compiled_templates() {
        for pattern in DateTimePattern::ALL {
            let compiled = Layout::compile(pattern.template()).unwrap();
            assert_eq!(compiled, pattern.layout(), "{}", pattern);
        }
    }

    #[test]
    fn test_quoted_literals() {
        let layout = Layout::compile("yyyy'T'HH 'at' mm''").unwrap();
        assert_eq!(layout.strftime(), "%YT%H at %M'");
    }

    #[test]
    fn test_percent_is_escaped() {
        let layout = Layout::compile("dd%").unwrap();
        assert_eq!(layout.strftime(), "%d%%");
    }

    #[test]
    fn test_unterminated_quote() {
        assert!(matches!(
            Layout::compile("yyyy 'oops"),
            Err(DateTimeError::InvalidPattern { .. })
        ));
    }

    #[test]
    fn test_fields_detection() {
        let fields = DateTimePattern::LongDateTime.layout().fields();
        assert!(fields.year && fields.month && fields.day);
        assert!(fields.hour && fields.minute && fields.second && fields.millis);

        let fields = DateTimePattern::ShortDateMonth.layout().fields();
        assert!(fields.year && fields.month);
        assert!(!fields.day);
        assert!(!fields.has_time());
    }
}
