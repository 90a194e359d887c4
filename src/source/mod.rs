//! Transcript directory access
//!
//! Resolves where Stardate keeps its transcriptions and performs the only
//! filesystem I/O of a run: existence check, listing and reading.

mod dir;
mod resolve;

pub(crate) use dir::TranscriptDir;
pub(crate) use resolve::{DirOrigin, resolve_directory};
