//! Error types for wikimap-core

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type alias for wikimap-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in wikimap-core
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Filesystem error, with the path that caused it.
    #[error("I/O error at {}: {source}", path.display())]
    Io {
        /// Path being read or written.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// Input could not be parsed.
    #[error("Parse error: {0}")]
    Parse(String),

    /// Configuration is missing or invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A lookup by ID found nothing.
    #[error("{kind} not found: {id}")]
    NotFound {
        /// What was being looked up (e.g. "node").
        kind: &'static str,
        /// The ID that was requested.
        id: String,
    },
}

impl Error {
    /// Wraps an I/O error with the path it occurred on.
    pub fn io_with_path(source: std::io::Error, path: impl AsRef<Path>) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Creates a parse error.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    /// Creates a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Creates a not-found error.
    pub fn not_found(kind: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            kind,
            id: id.into(),
        }
    }

    /// Returns `true` for `NotFound` errors.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
