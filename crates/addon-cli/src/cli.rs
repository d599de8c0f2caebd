//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// Classic Addon Manager - Inspect addon dependencies before installing
#[derive(Parser, Debug)]
#[command(name = "addons")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Settings file (defaults to ./addons.toml)
    #[arg(long, global = true, env = "ADDONS_CONFIG")]
    pub config: Option<PathBuf>,

    /// JSON addon catalog, overrides the settings file
    #[arg(long, global = true, env = "ADDONS_CATALOG")]
    pub catalog: Option<PathBuf>,

    /// Game addon directory containing addons.txt, overrides the settings file
    #[arg(long, global = true, env = "ADDONS_DIR")]
    pub addon_dir: Option<PathBuf>,

    /// Maximum dependency depth, overrides the settings file
    #[arg(long, global = true)]
    pub max_depth: Option<usize>,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Show every addon the given addon depends on, directly or transitively
    Resolve {
        /// Addon name as listed in the catalog
        name: String,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Show the order in which dependencies would be installed
    ///
    /// Deepest dependencies come first; installed ones are skipped.
    Plan {
        /// Addon name as listed in the catalog
        name: String,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Exit with an error if the addon has circular, too deep or missing
    /// dependencies
    Check {
        /// Addon name as listed in the catalog
        name: String,
    },

    /// Generate shell completions
    ///
    /// Examples:
    ///   addons completions bash > ~/.local/share/bash-completion/completions/addons
    ///   addons completions zsh > ~/.zfunc/_addons
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
