use std::io::Write;
use std::path::Path;

use crate::core::SortOrder;

/// Print the full path of every entry, sorted by name
pub(crate) fn print_listing<W: Write>(
    out: &mut W,
    dir: &Path,
    names: &[String],
    order: SortOrder,
) -> std::io::Result<()> {
    let mut sorted: Vec<&String> = names.iter().collect();
    match order {
        SortOrder::Asc => sorted.sort(),
        SortOrder::Desc => sorted.sort_by(|a, b| b.cmp(a)),
    }
    for name in sorted {
        writeln!(out, "{}", dir.join(name).display())?;
    }
    out.flush()
}
