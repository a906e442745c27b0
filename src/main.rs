use clap::{Parser, Subcommand};
use clap_complete::Shell;
use colored::*;
use std::path::PathBuf;
use std::time::Instant;

use mdsplice_lib::exit_codes::exit;
use mdsplice_lib::{FileOutcome, WriteMode};

mod commands;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file path (default: nearest .mdsplice.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Report files that would change without writing them
    #[arg(long, global = true, default_value = "false")]
    check: bool,

    /// Show detailed output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Quiet mode
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    /// Command to run (default: run)
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run every job from the configuration file
    Run,
    /// Inject example source files as fenced code blocks
    Inject {
        /// Markdown files containing `<!-- begin FILE -->` markers
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Directory that file names in markers are relative to
        #[arg(long)]
        code_root: Option<PathBuf>,
    },
    /// Copy pre-rendered fragments into templates
    Copy {
        /// Rendered file to capture fragments from
        #[arg(long = "from", value_name = "SOURCE")]
        source: PathBuf,

        /// Templates whose spans are replaced
        #[arg(required = true)]
        targets: Vec<PathBuf>,
    },
    /// Initialize a new configuration file
    Init,
    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for (detected from $SHELL if omitted)
        shell: Option<Shell>,

        /// List available shells
        #[arg(long)]
        list: bool,
    },
}

fn init_logging(cli: &Cli) {
    let mut builder = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    builder.format_timestamp(None);
    if cli.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    } else if cli.quiet {
        builder.filter_level(log::LevelFilter::Error);
    }
    builder.init();
}

// Print one status line per file and a summary
fn print_results(cli: &Cli, outcomes: &[FileOutcome], mode: WriteMode, duration_ms: u128) {
    if cli.quiet {
        return;
    }

    for outcome in outcomes {
        match (outcome.changed, mode) {
            (true, WriteMode::Write) => println!("{} {}", "Updated:".green().bold(), outcome.path.display()),
            (true, WriteMode::Check) => println!("{} {}", "Would update:".yellow().bold(), outcome.path.display()),
            (false, _) if cli.verbose => println!("{} {}", "Unchanged:".dimmed(), outcome.path.display()),
            (false, _) => {}
        }
    }

    let changed = outcomes.iter().filter(|o| o.changed).count();
    let file_text = if outcomes.len() == 1 { "file" } else { "files" };

    match mode {
        WriteMode::Check if changed > 0 => println!(
            "\n{} {}/{} {} out of date ({}ms)",
            "Stale:".yellow().bold(),
            changed,
            outcomes.len(),
            file_text,
            duration_ms
        ),
        WriteMode::Check => println!(
            "\n{} {} {} up to date ({}ms)",
            "Success:".green().bold(),
            outcomes.len(),
            file_text,
            duration_ms
        ),
        WriteMode::Write => println!(
            "\n{} Spliced {} {}, {} updated ({}ms)",
            "Success:".green().bold(),
            outcomes.len(),
            file_text,
            changed,
            duration_ms
        ),
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(&cli);

    let start = Instant::now();
    let mode = if cli.check { WriteMode::Check } else { WriteMode::Write };
    let config = cli.config.as_deref();

    let result = match &cli.command {
        None | Some(Commands::Run) => commands::run::handle_run(config, mode),
        Some(Commands::Inject { files, code_root }) => {
            commands::inject::handle_inject(files, code_root.as_deref(), config, mode)
        }
        Some(Commands::Copy { source, targets }) => commands::copy::handle_copy(source, targets, mode),
        Some(Commands::Init) => {
            commands::init::handle_init(config);
            return;
        }
        Some(Commands::Completions { shell, list }) => {
            commands::completions::handle_completions(*shell, *list);
            return;
        }
    };

    match result {
        Ok(outcomes) => {
            print_results(&cli, &outcomes, mode, start.elapsed().as_millis());
            if mode == WriteMode::Check && outcomes.iter().any(|o| o.changed) {
                exit::changes_needed();
            }
        }
        Err(e) => {
            eprintln!("{}: {:#}", "Error".red().bold(), e);
            exit::tool_error();
        }
    }
}
