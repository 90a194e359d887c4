//! Core module - time-range parsing, file-name dating and selection

mod selector;
mod stamp;
mod types;
mod window;

pub(crate) use selector::select_files;
pub(crate) use types::{SelectOptions, SkipReason, SortOrder};
pub(crate) use window::{TimeWindow, parse_time_range};
