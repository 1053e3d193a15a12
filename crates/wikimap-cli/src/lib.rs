//! # wikimap-cli
//!
//! Command-line tools for WikiMap field graphs:
//! - Component statistics for a mapping file
//! - Listing components of a given size
//! - Cleaning field names
//! - Config file helpers

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod commands;
pub mod config_handlers;
pub mod error;
pub mod logging;

pub use cli::{Cli, Command, ConfigAction, GraphArgs};
pub use commands::run;
pub use error::{Error, Result};
