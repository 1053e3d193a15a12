//! GraphBuilder for constructing field graphs from mapping files.
//!
//! A mapping file is a JSON array of field mappings:
//!
//! ```json
//! [
//!   {"infobox": "Infobox person", "from": "Birth_place", "to": "Place of birth"},
//!   {"infobox": "Infobox person", "from": "Born", "to": "Birth date"}
//! ]
//! ```
//!
//! Each mapping is folded into the graph with [`WikiMap::add_mapping`], so
//! both field names are cleaned and annotated with their raw spelling and
//! source infobox.

use crate::WikiMap;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use wikimap_content::FieldCleaner;
use wikimap_core::{Error, Result};

// ============================================================================
// Builder configuration types
// ============================================================================

/// Options for handling unusable mappings during graph building.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ErrorHandling {
    /// Stop on the first unusable mapping.
    #[default]
    FailFast,
    /// Log, record, and skip unusable mappings.
    Skip,
}

/// A mapping that could not be applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildError {
    /// Position of the mapping in the input array.
    pub index: usize,
    /// Error message.
    pub message: String,
}

/// One field mapping, as read from the mapping file.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldMapping {
    /// Infobox template the mapping was observed in.
    pub infobox: String,
    /// Raw name of the first field.
    pub from: String,
    /// Raw name of the second field.
    pub to: String,
}

impl FieldMapping {
    /// Creates a mapping.
    pub fn new(
        infobox: impl Into<String>,
        from: impl Into<String>,
        to: impl Into<String>,
    ) -> Self {
        Self {
            infobox: infobox.into(),
            from: from.into(),
            to: to.into(),
        }
    }
}

/// Statistics from a graph build operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildStats {
    /// Mappings read from the input.
    pub mappings_read: usize,
    /// New edges added to the graph.
    pub edges_created: usize,
    /// Mappings whose edge already existed.
    pub duplicate_mappings: usize,
    /// Mappings skipped because a field name cleaned to nothing.
    pub mappings_skipped: usize,
    /// Details of skipped mappings.
    pub errors: Vec<BuildError>,
}

// ============================================================================
// GraphBuilder
// ============================================================================

/// Builder for constructing a [`WikiMap`] from a mapping file.
#[derive(Clone, Debug, Default)]
pub struct GraphBuilder {
    mappings_path: Option<PathBuf>,
    cleaner: FieldCleaner,
    error_handling: ErrorHandling,
}

impl GraphBuilder {
    /// Creates a new builder with the default cleaner.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the mapping file path.
    pub fn with_mappings_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.mappings_path = Some(path.into());
        self
    }

    /// Sets the cleaner applied to field names.
    pub fn with_cleaner(mut self, cleaner: FieldCleaner) -> Self {
        self.cleaner = cleaner;
        self
    }

    /// Sets the error handling strategy.
    pub fn with_error_handling(mut self, handling: ErrorHandling) -> Self {
        self.error_handling = handling;
        self
    }

    /// Loads the mapping file and builds the graph.
    pub fn build(self) -> Result<(WikiMap, BuildStats)> {
        let path = self
            .mappings_path
            .as_ref()
            .ok_or_else(|| Error::config("Mappings path not set. Use with_mappings_path() first."))?;

        let mappings = load_mappings(path)?;
        debug!("Loaded {} mappings from {}", mappings.len(), path.display());
        self.build_from_mappings(mappings)
    }

    /// Builds the graph from already-loaded mappings.
    pub fn build_from_mappings(
        self,
        mappings: impl IntoIterator<Item = FieldMapping>,
    ) -> Result<(WikiMap, BuildStats)> {
        let mut graph = WikiMap::new().with_cleaner(self.cleaner.clone());
        let mut stats = BuildStats::default();

        for (index, mapping) in mappings.into_iter().enumerate() {
            stats.mappings_read += 1;
            let edges_before = graph.edge_count();

            if !graph.add_mapping(&mapping.infobox, &mapping.from, &mapping.to) {
                let message = format!(
                    "mapping {index} ({:?} <-> {:?}) has a field name that is empty after cleaning",
                    mapping.from, mapping.to
                );
                match self.error_handling {
                    ErrorHandling::FailFast => return Err(Error::parse(message)),
                    ErrorHandling::Skip => {
                        warn!("Skipping {message}");
                        stats.mappings_skipped += 1;
                        stats.errors.push(BuildError { index, message });
                        continue;
                    }
                }
            }

            if graph.edge_count() > edges_before {
                stats.edges_created += 1;
            } else {
                stats.duplicate_mappings += 1;
            }
        }

        debug!(
            "Built graph: {} nodes, {} edges ({} duplicates, {} skipped)",
            graph.node_count(),
            graph.edge_count(),
            stats.duplicate_mappings,
            stats.mappings_skipped
        );
        Ok((graph, stats))
    }
}

// ============================================================================
// Helper functions
// ============================================================================

/// Load field mappings from a JSON file.
pub fn load_mappings(path: &Path) -> Result<Vec<FieldMapping>> {
    let json = std::fs::read_to_string(path).map_err(|e| Error::io_with_path(e, path))?;
    parse_mappings(&json)
}

/// Parse field mappings from a JSON string.
pub fn parse_mappings(json: &str) -> Result<Vec<FieldMapping>> {
    serde_json::from_str(json).map_err(|e| Error::parse(format!("Failed to parse mappings: {e}")))
}

// ============================================================================
// Tests
// ============================================================================
