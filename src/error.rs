use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error("Invalid time format \"{input}\". Use '1d', '7d', or '1w'")]
    InvalidTimeFormat { input: String },

    #[error("Invalid date \"{input}\" (expected YYYYMMDD or YYYY-MM-DD)")]
    InvalidDate { input: String },

    #[error("Directory not found: {}", path.display())]
    DirectoryNotFound { path: PathBuf },

    #[error("Failed to list {}: {source}", path.display())]
    ListDirectory {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to read {}: {source}", path.display())]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_error_display_time_format() {
        let e = AppError::InvalidTimeFormat {
            input: "1m".to_string(),
        };
        assert_eq!(
            e.to_string(),
            r#"Invalid time format "1m". Use '1d', '7d', or '1w'"#
        );
    }

    #[test]
    fn app_error_display_date() {
        let e = AppError::InvalidDate {
            input: "abc".to_string(),
        };
        assert_eq!(
            e.to_string(),
            r#"Invalid date "abc" (expected YYYYMMDD or YYYY-MM-DD)"#
        );
    }

    #[test]
    fn app_error_display_directory_not_found() {
        let e = AppError::DirectoryNotFound {
            path: PathBuf::from("/nowhere/Transcriptions"),
        };
        assert_eq!(e.to_string(), "Directory not found: /nowhere/Transcriptions");
    }

    #[test]
    fn app_error_display_file_read_includes_cause() {
        let e = AppError::FileRead {
            path: PathBuf::from("/tmp/a.txt"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(e.to_string(), "Failed to read /tmp/a.txt: denied");
    }

    #[test]
    fn app_error_from_io_error() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let app: AppError = io.into();
        assert_eq!(app.to_string(), "Failed to write output: pipe closed");
    }
}
