//! Error types for wikimap-cli

use thiserror::Error;

/// Result type alias for wikimap-cli operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in wikimap-cli
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Error from wikimap-core
    #[error("Core error: {0}")]
    Core(#[from] wikimap_core::Error),

    /// Writing command output failed
    #[error("Output error: {0}")]
    Output(#[from] std::io::Error),

    /// JSON rendering failed
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
