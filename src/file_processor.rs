//! Read, transform and rewrite a single file in place.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, SpliceError};

/// Whether a processed file is written back
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WriteMode {
    /// Overwrite the file when the transformation changed it
    #[default]
    Write,
    /// Only report whether the file would change
    Check,
}

/// Result of processing one file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileOutcome {
    pub path: PathBuf,
    /// The transformed content differs from what is on disk
    pub changed: bool,
}

/// Apply `transform` to the whole content of `path`.
///
/// In [`WriteMode::Write`] the file is overwritten (and truncated) only if the
/// content changed, so unchanged files keep their modification time.
pub fn process_file<F>(path: &Path, mode: WriteMode, transform: F) -> Result<FileOutcome>
where
    F: FnOnce(&str) -> Result<String>,
{
    let original = fs::read_to_string(path).map_err(|e| SpliceError::io(path, e))?;
    let updated = transform(&original)?;
    let changed = updated != original;

    if changed && mode == WriteMode::Write {
        fs::write(path, &updated).map_err(|e| SpliceError::io(path, e))?;
        log::debug!("Wrote {} ({} bytes)", path.display(), updated.len());
    } else {
        log::debug!(
            "{} {}",
            if changed { "Would update" } else { "Unchanged" },
            path.display()
        );
    }

    Ok(FileOutcome {
        path: path.to_path_buf(),
        changed,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_write_mode_overwrites_and_truncates() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("index.html");
        fs::write(&path, "a long original body\n").unwrap();

        let outcome = process_file(&path, WriteMode::Write, |_| Ok("short\n".to_string())).unwrap();

        assert!(outcome.changed);
        assert_eq!(fs::read_to_string(&path).unwrap(), "short\n");
    }

    #[test]
    fn test_check_mode_does_not_write() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("README.md");
        fs::write(&path, "before\n").unwrap();

        let outcome = process_file(&path, WriteMode::Check, |_| Ok("after\n".to_string())).unwrap();

        assert!(outcome.changed);
        assert_eq!(fs::read_to_string(&path).unwrap(), "before\n");
    }

    #[test]
    fn test_unchanged_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("README.md");
        fs::write(&path, "same\n").unwrap();

        let outcome = process_file(&path, WriteMode::Write, |s| Ok(s.to_string())).unwrap();
        assert!(!outcome.changed);
        assert_eq!(outcome.path, path);
    }

    #[test]
    fn test_transform_error_leaves_file_alone() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("README.md");
        fs::write(&path, "keep\n").unwrap();

        let result = process_file(&path, WriteMode::Write, |_| {
            Err(SpliceError::MissingFragment { name: "x".to_string() })
        });

        assert!(result.is_err());
        assert_eq!(fs::read_to_string(&path).unwrap(), "keep\n");
    }

    #[test]
    fn test_missing_file() {
        let dir = tempdir().unwrap();
        let err = process_file(&dir.path().join("gone.md"), WriteMode::Write, |s| Ok(s.to_string())).unwrap_err();
        assert!(matches!(err, SpliceError::Io { .. }));
    }
}
