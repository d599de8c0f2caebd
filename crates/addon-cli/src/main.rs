//! Classic Addon Manager CLI
//!
//! Inspects addon dependency graphs: what an addon needs, in which order it
//! would be installed, and whether its dependency chain is healthy.

mod cli;
mod commands;
mod context;
mod error;

use clap::{CommandFactory, Parser};
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};
use context::AddonContext;
use error::{CliError, Result};

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose)?;

    let Some(cmd) = cli.command.clone() else {
        println!("{} Classic Addon Manager CLI", "addons".green().bold());
        println!();
        println!("Run {} for available commands.", "addons --help".cyan());
        return Ok(());
    };

    execute_command(&cli, cmd)
}

fn execute_command(cli: &Cli, cmd: Commands) -> Result<()> {
    let load = || -> Result<AddonContext> {
        let cwd = std::env::current_dir()?;
        AddonContext::load(cli, &cwd)
    };

    match cmd {
        Commands::Resolve { name, json } => commands::run_resolve(&load()?, &name, json),
        Commands::Plan { name, json } => commands::run_plan(&load()?, &name, json),
        Commands::Check { name } => commands::run_check(&load()?, &name),
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "addons", &mut std::io::stdout());
            Ok(())
        }
    }
}

/// Log to stderr. `RUST_LOG` wins; otherwise errors only, or debug with
/// `--verbose`.
fn init_tracing(verbose: bool) -> Result<()> {
    let default = if verbose { "debug" } else { "error" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(verbose)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| CliError::Logging(e.to_string()))?;
    if verbose {
        tracing::debug!("Verbose mode enabled");
    }
    Ok(())
}
