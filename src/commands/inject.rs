//! Handler for the `inject` command.

use anyhow::Context;
use std::env;
use std::path::{Path, PathBuf};

use mdsplice_lib::config::Config;
use mdsplice_lib::{FileOutcome, LanguageTable, WriteMode, inject_files};

/// Inject fenced code blocks into `files`.
///
/// A config file, when present, contributes extra languages and a default
/// code root; `--code-root` takes precedence over it.
pub fn handle_inject(
    files: &[PathBuf],
    code_root: Option<&Path>,
    config_path: Option<&Path>,
    mode: WriteMode,
) -> anyhow::Result<Vec<FileOutcome>> {
    let cwd = env::current_dir().context("Failed to determine the current directory")?;
    let config = Config::load_with_discovery(config_path, &cwd)?
        .map(|(_, config)| config)
        .unwrap_or_default();

    let languages = LanguageTable::with_overrides(&config.languages);
    let code_root = code_root
        .map(Path::to_path_buf)
        .or_else(|| config.code_root.clone())
        .unwrap_or(cwd);
    log::debug!("Resolving code files against {}", code_root.display());

    inject_files(files, &code_root, &languages, mode).context("Code injection failed")
}
