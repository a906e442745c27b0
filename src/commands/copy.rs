//! Handler for the `copy` command.

use anyhow::Context;
use std::path::{Path, PathBuf};

use mdsplice_lib::{FileOutcome, WriteMode, copy_fragments};

/// Copy the fragments of `source` into each of `targets`.
pub fn handle_copy(source: &Path, targets: &[PathBuf], mode: WriteMode) -> anyhow::Result<Vec<FileOutcome>> {
    copy_fragments(source, targets, mode)
        .with_context(|| format!("Failed to copy fragments from {}", source.display()))
}
