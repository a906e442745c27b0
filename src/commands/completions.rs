//! Handler for the `completions` command.

use clap::{CommandFactory, ValueEnum};
use clap_complete::{Shell, generate};
use colored::*;
use std::io::stdout;

use mdsplice_lib::exit_codes::exit;

/// Print a completion script for `shell`, or for the shell named by `$SHELL`.
pub fn handle_completions(shell: Option<Shell>, list: bool) {
    if list {
        println!("Available shells:");
        for shell in Shell::value_variants() {
            println!("  {shell}");
        }
        return;
    }

    let Some(shell) = shell.or_else(Shell::from_env) else {
        eprintln!("{}: Could not detect shell from $SHELL", "Error".red().bold());
        eprintln!("Name one explicitly, e.g. `mdsplice completions bash`, or see `mdsplice completions --list`");
        exit::tool_error();
    };

    log::debug!("Generating {shell} completions");
    generate(shell, &mut crate::Cli::command(), "mdsplice", &mut stdout());
}
