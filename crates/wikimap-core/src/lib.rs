//! WikiMap Core: shared types, errors, and configuration.
//!
//! This crate provides the foundational types used across all WikiMap crates.
//! It has no internal WikiMap dependencies (dependency level 0).
//!
//! # Modules
//!
//! - [`error`]: Error types and Result alias
//! - [`record`]: De-duplicating field records (`add_to_field`)
//! - [`config`]: TOML configuration loading

pub mod config;
pub mod error;
pub mod record;

// Re-export key types at crate root for convenience
pub use config::{CleanerConfig, WikimapConfig};
pub use error::{Error, Result};
pub use record::{FieldRecord, add_to_field};
