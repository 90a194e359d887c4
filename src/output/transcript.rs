use std::io::Write;

use chrono::NaiveDateTime;

use crate::consts::TIMESTAMP_FORMAT;

/// A selected file's content, ready to print
#[derive(Debug, Clone)]
pub(crate) struct Transcript {
    pub(crate) timestamp: NaiveDateTime,
    pub(crate) content: String,
}

/// Print each transcript, optionally preceded by `[YYYY-MM-DD HH:MM:SS]`,
/// followed by a blank-line separator.
pub(crate) fn print_transcripts<W: Write>(
    out: &mut W,
    transcripts: &[Transcript],
    metadata: bool,
) -> std::io::Result<()> {
    for transcript in transcripts {
        if metadata {
            writeln!(out, "[{}]", transcript.timestamp.format(TIMESTAMP_FORMAT))?;
        }
        writeln!(out, "{}", transcript.content)?;
        writeln!(out, "\n\n")?;
    }
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn transcript(content: &str, h: u32, m: u32, s: u32) -> Transcript {
        Transcript {
            timestamp: NaiveDate::from_ymd_opt(2025, 1, 15)
                .unwrap()
                .and_hms_opt(h, m, s)
                .unwrap(),
            content: content.to_string(),
        }
    }

    fn render(transcripts: &[Transcript], metadata: bool) -> String {
        let mut buf = Vec::new();
        print_transcripts(&mut buf, transcripts, metadata).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn plain_output_separates_files() {
        let out = render(&[transcript("one", 0, 0, 0), transcript("two", 0, 0, 0)], false);
        assert_eq!(out, "one\n\n\n\ntwo\n\n\n\n");
    }

    #[test]
    fn metadata_line_precedes_content() {
        let out = render(&[transcript("Captain's log", 9, 5, 7)], true);
        assert_eq!(out, "[2025-01-15 09:05:07]\nCaptain's log\n\n\n\n");
    }

    #[test]
    fn nothing_selected_prints_nothing() {
        assert_eq!(render(&[], true), "");
    }
}
