//! Infobox field relationship graph.
//!
//! A [`WikiMap`] is an undirected graph whose nodes are cleaned infobox field
//! names. An edge says two fields were mapped onto each other. Connected
//! components group every spelling and synonym of a field.
//!
//! # Modules
//!
//! - [`types`]: [`WikiMap`] and [`FieldNode`]
//! - [`algorithms`]: Connected components and graph statistics
//! - [`builder`]: Build a graph from a JSON file of field mappings
//!
//! # Example
//!
//! ```rust
//! use wikimap_graph::WikiMap;
//!
//! let mut map = WikiMap::new();
//! map.add_edge("A", "B");
//! map.add_edge("A", "C");
//! map.add_edge("M", "N");
//!
//! let mut lengths = map.connected_component_lengths();
//! lengths.sort();
//! assert_eq!(lengths, vec![2, 3]);
//! ```

pub mod algorithms;
pub mod builder;
pub mod types;

pub use algorithms::{GraphStats, compute_stats};
pub use builder::{BuildError, BuildStats, ErrorHandling, FieldMapping, GraphBuilder};
pub use types::{FieldNode, INFOBOXES, RENDERINGS, WikiMap};
