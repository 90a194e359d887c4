//! Time-window file selection
//!
//! Files are ordered by their raw name, not by the parsed date. For Stardate
//! transcripts (`Stardate Log YYYY-MM-DD at HH.MM.SS.txt`) the date sits at a
//! fixed position behind a constant prefix with zero-padded fields, so lexical
//! order is chronological order. Names that put the date elsewhere, or mix
//! prefixes, sort by name and may come out of date order.

use std::path::Path;

use super::stamp::find_date_token;
use super::types::{DatedFile, SelectOptions, Selection, SkipReason, SkippedFile, SortOrder};

/// Pick the dated files in `names` that fall inside the window and sort them.
///
/// Pure: the result depends only on the arguments. Undated and malformed
/// names are reported in `Selection::skipped` and never fail the call.
pub(crate) fn select_files<I, S>(dir: &Path, names: I, options: &SelectOptions) -> Selection
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut selection = Selection::default();

    for name in names {
        let name = name.as_ref();
        let Some(token) = find_date_token(name) else {
            selection.skipped.push(SkippedFile {
                name: name.to_string(),
                reason: SkipReason::Undated,
            });
            continue;
        };
        let Some(date) = token.to_date() else {
            selection.skipped.push(SkippedFile {
                name: name.to_string(),
                reason: SkipReason::MalformedDate(token.raw.to_string()),
            });
            continue;
        };

        // Both sides are plain dates, so this is a whole calendar-day difference
        let age_days = (options.reference_day - date).num_days();
        if let Some(window) = options.window
            && !window.admits(age_days)
        {
            continue;
        }

        selection.files.push(DatedFile {
            path: dir.join(name),
            name: name.to_string(),
            date,
            age_days,
        });
    }

    sort_by_name(&mut selection.files, options.order);
    selection
}

fn sort_by_name(files: &mut [DatedFile], order: SortOrder) {
    match order {
        SortOrder::Asc => files.sort_by(|a, b| a.name.cmp(&b.name)),
        SortOrder::Desc => files.sort_by(|a, b| b.name.cmp(&a.name)),
    }
}
