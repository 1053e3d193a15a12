//! Command-line argument definitions.

use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;

/// WikiMap - infobox field relationship graphs
#[derive(Parser, Debug)]
#[command(name = "wikimap", version)]
#[command(about = "Build infobox field graphs and report component statistics", long_about = None)]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Logging verbosity: -v (info), -vv (debug), -vvv (trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Arguments shared by commands that load a mapping file.
#[derive(Args, Debug, Clone)]
pub struct GraphArgs {
    /// JSON file of field mappings
    pub mappings: PathBuf,

    /// Fail on mappings whose field names clean to nothing
    #[arg(long)]
    pub strict: bool,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show node, edge, and component-size statistics
    Stats {
        #[command(flatten)]
        graph: GraphArgs,

        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// List the components with exactly SIZE fields
    Components {
        #[command(flatten)]
        graph: GraphArgs,

        /// Component size to select
        #[arg(short, long)]
        size: usize,

        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Print the cleaned form of each field name
    Clean {
        /// Raw field names
        #[arg(required = true)]
        names: Vec<String>,
    },
    /// Configuration file operations
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config subcommands.
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Print the resolved config file path
    Path,
    /// Print the effective configuration as TOML
    Show,
    /// Write a default config file
    Init {
        /// Where to write (defaults to the resolved path)
        #[arg(long)]
        file: Option<String>,

        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },
}
