mod listing;
mod transcript;

pub(crate) use listing::print_listing;
pub(crate) use transcript::{Transcript, print_transcripts};
