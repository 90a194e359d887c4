use std::fs;
use std::path::{Path, PathBuf};

use crate::error::AppError;
use crate::utils::debug_log;

/// A transcription directory known to exist at open time
#[derive(Debug, Clone)]
pub(crate) struct TranscriptDir {
    path: PathBuf,
}

impl TranscriptDir {
    pub(crate) fn open(path: impl Into<PathBuf>) -> Result<Self, AppError> {
        let path = path.into();
        if !path.is_dir() {
            return Err(AppError::DirectoryNotFound { path });
        }
        Ok(Self { path })
    }

    pub(crate) fn path(&self) -> &Path {
        &self.path
    }

    /// Names of all entries, in the order the OS returns them.
    /// Names that are not valid UTF-8 are left out.
    pub(crate) fn file_names(&self) -> Result<Vec<String>, AppError> {
        let list_err = |source| AppError::ListDirectory {
            path: self.path.clone(),
            source,
        };

        let mut names = Vec::new();
        for entry in fs::read_dir(&self.path).map_err(list_err)? {
            let entry = entry.map_err(list_err)?;
            match entry.file_name().into_string() {
                Ok(name) => names.push(name),
                Err(raw) => debug_log!("Ignoring non UTF-8 file name {:?}", raw),
            }
        }
        Ok(names)
    }

    /// Read a whole file as text. The handle is closed before returning.
    pub(crate) fn read(&self, path: &Path) -> Result<String, AppError> {
        fs::read_to_string(path).map_err(|source| AppError::FileRead {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_missing_directory_fails() {
        let tmp = tempfile::tempdir().unwrap();
        let missing = tmp.path().join("Transcriptions");
        let err = TranscriptDir::open(&missing).unwrap_err();
        assert!(matches!(err, AppError::DirectoryNotFound { ref path } if *path == missing));
    }

    #[test]
    fn open_regular_file_fails() {
        let tmp = tempfile::tempdir().unwrap();
        let file = tmp.path().join("not-a-dir.txt");
        fs::write(&file, "x").unwrap();
        assert!(TranscriptDir::open(&file).is_err());
    }

    #[test]
    fn empty_directory_lists_nothing() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = TranscriptDir::open(tmp.path()).unwrap();
        assert!(dir.file_names().unwrap().is_empty());
    }

    #[test]
    fn lists_all_names() {
        let tmp = tempfile::tempdir().unwrap();
        fs::write(tmp.path().join("Stardate Log 2025-01-01 at 10.00.00.txt"), "a").unwrap();
        fs::write(tmp.path().join("notes.txt"), "b").unwrap();
        let dir = TranscriptDir::open(tmp.path()).unwrap();
        let mut names = dir.file_names().unwrap();
        names.sort();
        assert_eq!(
            names,
            vec!["Stardate Log 2025-01-01 at 10.00.00.txt", "notes.txt"]
        );
    }

    #[test]
    fn reads_file_content() {
        let tmp = tempfile::tempdir().unwrap();
        let file = tmp.path().join("a.txt");
        fs::write(&file, "Captain's log").unwrap();
        let dir = TranscriptDir::open(tmp.path()).unwrap();
        assert_eq!(dir.read(&file).unwrap(), "Captain's log");
    }

    #[test]
    fn read_missing_file_is_file_read_error() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = TranscriptDir::open(tmp.path()).unwrap();
        let err = dir.read(&tmp.path().join("gone.txt")).unwrap_err();
        assert!(matches!(err, AppError::FileRead { .. }));
    }

    #[test]
    fn read_non_utf8_file_is_file_read_error() {
        let tmp = tempfile::tempdir().unwrap();
        let file = tmp.path().join("bin.txt");
        fs::write(&file, [0xff, 0xfe, 0x00]).unwrap();
        let dir = TranscriptDir::open(tmp.path()).unwrap();
        assert!(matches!(dir.read(&file), Err(AppError::FileRead { .. })));
    }
}
