use std::io::Write;
use std::path::PathBuf;

use crate::cli::Cli;
use crate::config::Config;
use crate::core::{SelectOptions, SkipReason, SortOrder, TimeWindow, select_files};
use crate::error::AppError;
use crate::output::{Transcript, print_listing, print_transcripts};
use crate::source::{TranscriptDir, resolve_directory};
use crate::utils::debug_log;

/// What a run prints
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Mode {
    /// Contents of the selected files
    Transcripts,
    /// The resolved directory
    Path,
    /// Every entry of the directory
    List,
}

/// Explicit configuration for one run. Built at the CLI boundary, so nothing
/// below this point looks at globals, the environment or the clock.
#[derive(Debug, Clone)]
pub(crate) struct RunSettings {
    pub(crate) directory: PathBuf,
    pub(crate) reference_day: chrono::NaiveDate,
    pub(crate) window: Option<TimeWindow>,
    pub(crate) order: SortOrder,
    pub(crate) metadata: bool,
    pub(crate) mode: Mode,
}

impl RunSettings {
    /// Resolve everything the CLI and config leave open. The time range is
    /// parsed here, before any filesystem access.
    pub(crate) fn from_cli(cli: &Cli, config: &Config) -> Result<Self, AppError> {
        let window = cli.window()?;
        let reference_day = cli.reference_day()?;
        let (directory, origin) = resolve_directory(config);
        debug_log!("Directory ({:?}): {}", origin, directory.display());

        let mode = if cli.path {
            Mode::Path
        } else if cli.ls {
            Mode::List
        } else {
            Mode::Transcripts
        };

        Ok(Self {
            directory,
            reference_day,
            window,
            order: cli.sort_order(),
            metadata: cli.metadata,
            mode,
        })
    }
}

pub(crate) fn run(settings: &RunSettings) -> Result<(), AppError> {
    let stdout = std::io::stdout();
    run_with(settings, &mut stdout.lock())
}

/// Execute a run, writing to `out`. Nothing is written when an error occurs.
pub(crate) fn run_with<W: Write>(settings: &RunSettings, out: &mut W) -> Result<(), AppError> {
    let dir = TranscriptDir::open(&settings.directory)?;

    match settings.mode {
        Mode::Path => {
            writeln!(out, "{}", dir.path().display())?;
            return Ok(());
        }
        Mode::List => {
            let names = dir.file_names()?;
            print_listing(out, dir.path(), &names, settings.order)?;
            return Ok(());
        }
        Mode::Transcripts => {}
    }

    let transcripts = load_transcripts(&dir, settings)?;
    print_transcripts(out, &transcripts, settings.metadata)?;
    Ok(())
}

/// Select and read every matching file. Any read failure aborts the whole run.
fn load_transcripts(
    dir: &TranscriptDir,
    settings: &RunSettings,
) -> Result<Vec<Transcript>, AppError> {
    let names = dir.file_names()?;
    let options = SelectOptions {
        reference_day: settings.reference_day,
        window: settings.window,
        order: settings.order,
    };
    debug_log!(
        "Reference day {}, window {}",
        settings.reference_day,
        settings
            .window
            .map_or_else(|| "none".to_string(), |w| format!("{} days", w.num_days()))
    );

    let selection = select_files(dir.path(), &names, &options);
    for skipped in &selection.skipped {
        match &skipped.reason {
            SkipReason::Undated => debug_log!("Skipped {} (no date)", skipped.name),
            SkipReason::MalformedDate(raw) => {
                debug_log!("Skipped {} (invalid date {})", skipped.name, raw)
            }
        }
    }
    for file in &selection.files {
        debug_log!("Selected {} (age {} days)", file.name, file.age_days);
    }
    debug_log!(
        "Selected {} of {} files",
        selection.files.len(),
        names.len()
    );

    selection
        .files
        .iter()
        .map(|file| -> Result<Transcript, AppError> {
            Ok(Transcript {
                timestamp: file.timestamp(),
                content: dir.read(&file.path)?,
            })
        })
        .collect()
}
