//! Types shared between the selector and the layers around it

use std::path::PathBuf;

use chrono::{NaiveDate, NaiveDateTime};

use super::stamp::file_timestamp;
use super::window::TimeWindow;

/// Direction of the file-name sort
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) enum SortOrder {
    /// Oldest first (default)
    #[default]
    Asc,
    /// Newest first
    Desc,
}

/// Everything the selector needs, passed in explicitly
#[derive(Debug, Clone, Copy)]
pub(crate) struct SelectOptions {
    /// Start of the current day; ages are counted from here
    pub(crate) reference_day: NaiveDate,
    /// `None` selects every dated file
    pub(crate) window: Option<TimeWindow>,
    pub(crate) order: SortOrder,
}

/// A file whose name carries a valid date
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct DatedFile {
    pub(crate) path: PathBuf,
    pub(crate) name: String,
    pub(crate) date: NaiveDate,
    /// Calendar days between the reference day and `date`; negative for future files
    pub(crate) age_days: i64,
}

impl DatedFile {
    /// Date plus the `HH.MM.SS` token of the name, midnight when absent
    pub(crate) fn timestamp(&self) -> NaiveDateTime {
        file_timestamp(&self.name).unwrap_or_else(|| self.date.and_time(chrono::NaiveTime::MIN))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SkipReason {
    /// No `YYYY-MM-DD` token in the name
    Undated,
    /// A date-shaped token that is not a calendar date
    MalformedDate(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SkippedFile {
    pub(crate) name: String,
    pub(crate) reason: SkipReason,
}

/// Ordered matches plus the names that could not be dated.
/// Files outside the window are neither selected nor skipped.
#[derive(Debug, Default, PartialEq, Eq)]
pub(crate) struct Selection {
    pub(crate) files: Vec<DatedFile>,
    pub(crate) skipped: Vec<SkippedFile>,
}
