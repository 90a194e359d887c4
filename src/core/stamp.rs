//! Date and time tokens embedded in file names
//!
//! Stardate names its transcripts like `Stardate Log 2025-01-15 at 09.30.00.txt`.
//! The date token may appear anywhere in the name; the first match wins.

use std::sync::LazyLock;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use regex::Regex;

use crate::consts::DATE_FORMAT;

/// `YYYY-MM-DD`, ASCII digits only
static DATE_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]{4}-[0-9]{2}-[0-9]{2}").expect("valid date pattern"));

/// `at HH.MM.SS`, as written by the Stardate app
static TIME_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"at ([0-9]{2})\.([0-9]{2})\.([0-9]{2})").expect("valid time pattern")
});

/// A `YYYY-MM-DD` shaped substring of a file name. Not yet validated as a
/// calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct DateToken<'a> {
    pub(crate) raw: &'a str,
    /// Byte offset just past the token
    pub(crate) end: usize,
}

impl DateToken<'_> {
    /// `None` for shapes that are not calendar dates, e.g. `2025-13-01`
    pub(crate) fn to_date(self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.raw, DATE_FORMAT).ok()
    }
}

/// First `YYYY-MM-DD` shaped token in `name`.
pub(crate) fn find_date_token(name: &str) -> Option<DateToken<'_>> {
    DATE_TOKEN.find(name).map(|m| DateToken {
        raw: m.as_str(),
        end: m.end(),
    })
}

/// First `at HH.MM.SS` token at or after byte offset `from`. Out-of-range
/// values (e.g. `at 25.00.00`) yield `None`.
pub(crate) fn find_time_token(name: &str, from: usize) -> Option<NaiveTime> {
    let caps = TIME_TOKEN.captures(name.get(from..)?)?;
    let field = |i: usize| caps.get(i)?.as_str().parse::<u32>().ok();
    NaiveTime::from_hms_opt(field(1)?, field(2)?, field(3)?)
}

/// Full timestamp of a dated file name: the date token combined with the time
/// token that follows it, or midnight when there is none.
pub(crate) fn file_timestamp(name: &str) -> Option<NaiveDateTime> {
    let token = find_date_token(name)?;
    let date = token.to_date()?;
    let time = find_time_token(name, token.end).unwrap_or(NaiveTime::MIN);
    Some(date.and_time(time))
}
