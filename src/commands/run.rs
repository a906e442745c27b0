//! Handler for the `run` command, also used when no subcommand is given.

use anyhow::{Context, bail};
use std::env;
use std::path::Path;

use mdsplice_lib::config::{CONFIG_FILES, Config};
use mdsplice_lib::{FileOutcome, WriteMode, run_config};

/// Run every job of the discovered (or given) configuration file.
pub fn handle_run(config_path: Option<&Path>, mode: WriteMode) -> anyhow::Result<Vec<FileOutcome>> {
    let cwd = env::current_dir().context("Failed to determine the current directory")?;

    let Some((path, config)) = Config::load_with_discovery(config_path, &cwd)? else {
        bail!(
            "No configuration file found ({}) in {} or its parents; run `mdsplice init` to create one",
            CONFIG_FILES.join(", "),
            cwd.display()
        );
    };

    if config.has_no_jobs() {
        log::warn!("{} defines no [[inject]] or [[copy]] jobs", path.display());
    }

    // Marker paths without a configured code root are relative to the config file
    let config_dir = path.parent().unwrap_or(cwd.as_path()).to_path_buf();

    run_config(&config, &config_dir, mode).with_context(|| format!("Failed to run jobs from {}", path.display()))
}
