//! Handler for the `init` command.

use colored::*;
use std::path::Path;

use mdsplice_lib::config::{self, ConfigError};
use mdsplice_lib::exit_codes::exit;

/// Write a commented default config file to `path` (or `.mdsplice.toml`).
pub fn handle_init(path: Option<&Path>) {
    let path = path.unwrap_or_else(|| Path::new(config::DEFAULT_CONFIG_FILE));

    match config::create_default_config(path) {
        Ok(()) => {
            println!("Created default configuration file: {}", path.display());
        }
        Err(ConfigError::FileExists { path }) => {
            eprintln!(
                "{}: Configuration file already exists at {}",
                "Error".red().bold(),
                path.display()
            );
            exit::tool_error();
        }
        Err(e) => {
            eprintln!("{}: Failed to create configuration file: {}", "Error".red().bold(), e);
            exit::tool_error();
        }
    }
}
