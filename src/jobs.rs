//! The two splice jobs, applied to files on disk.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::error::{Result, SpliceError};
use crate::file_processor::{FileOutcome, WriteMode, process_file};
use crate::fragments::extract_fragments;
use crate::language::LanguageTable;
use crate::splice::{FsCodeSource, inject_code, substitute_fragments};

/// Inject fenced code blocks into every file of `files`.
///
/// Files named by begin markers are read relative to `code_root`. The run
/// stops at the first error; files processed before it keep their changes.
pub fn inject_files(
    files: &[PathBuf],
    code_root: &Path,
    languages: &LanguageTable,
    mode: WriteMode,
) -> Result<Vec<FileOutcome>> {
    let code = FsCodeSource::new(code_root);
    files
        .iter()
        .map(|file| {
            log::info!("Injecting code into {}", file.display());
            process_file(file, mode, |content| inject_code(content, languages, &code))
        })
        .collect()
}

/// Capture the fragments of `source` and substitute them into every target.
pub fn copy_fragments(source: &Path, targets: &[PathBuf], mode: WriteMode) -> Result<Vec<FileOutcome>> {
    let rendered = fs::read_to_string(source).map_err(|e| SpliceError::io(source, e))?;
    let fragments = extract_fragments(&rendered)?;
    log::info!("Captured {} fragment(s) from {}", fragments.len(), source.display());

    targets
        .iter()
        .map(|target| process_file(target, mode, |content| substitute_fragments(content, &fragments)))
        .collect()
}

/// Run every job of `config`: inject jobs first, then copy jobs.
///
/// `cwd` is the code root for inject jobs that do not name one.
pub fn run_config(config: &Config, cwd: &Path, mode: WriteMode) -> Result<Vec<FileOutcome>> {
    let languages = LanguageTable::with_overrides(&config.languages);
    let mut outcomes = Vec::new();

    for job in &config.inject {
        let code_root = config.code_root_for(job, cwd);
        outcomes.extend(inject_files(&job.files, code_root, &languages, mode)?);
    }

    for job in &config.copy {
        outcomes.extend(copy_fragments(&job.source, &job.targets, mode)?);
    }

    Ok(outcomes)
}
