/// Standard date format used throughout the codebase: "2025-01-15"
pub(crate) const DATE_FORMAT: &str = "%Y-%m-%d";

/// Format of the `--metadata` annotation line: "2025-01-15 09:30:00"
pub(crate) const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Environment variable that overrides the transcription directory
pub(crate) const DIR_ENV: &str = "STARDATE_DIR";

/// Path segments of the Stardate app's iCloud folder, relative to the home directory
pub(crate) const DEFAULT_DIR_SEGMENTS: &[&str] = &[
    "Library",
    "Mobile Documents",
    "iCloud~com~deanputney~Stardate",
    "Documents",
    "Transcriptions",
];
