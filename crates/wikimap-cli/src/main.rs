//! WikiMap CLI
//!
//! Builds infobox field graphs from mapping files and reports on them.

#![warn(clippy::all)]
#![forbid(unsafe_code)]

use anyhow::{Context, Result};
use clap::Parser;
use wikimap_cli::logging::init_logging;
use wikimap_cli::{Cli, Command};
use wikimap_core::WikimapConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // `config` subcommands must work even when the file is broken.
    let log_level = match WikimapConfig::load(cli.config.as_deref()) {
        Ok(config) => config.log_level,
        Err(e) if matches!(cli.command, Command::Config { .. }) => {
            eprintln!("warning: {e}");
            WikimapConfig::default().log_level
        }
        Err(e) => return Err(e).context("failed to load configuration"),
    };
    init_logging(cli.verbose, &log_level);

    let stdout = std::io::stdout();
    wikimap_cli::run(&cli, &mut stdout.lock())?;
    Ok(())
}
