//! Core graph types for WikiMap.
//!
//! [`WikiMap`] wraps a petgraph `UnGraph` with a label lookup table. Nodes
//! are created on demand by edge insertion, and each node carries a
//! [`FieldRecord`] of attributes (raw renderings, source infoboxes).

use log::warn;
use petgraph::graph::{NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};
use wikimap_content::FieldCleaner;
use wikimap_core::{Error, FieldRecord, Result};

/// Attribute key for the raw spellings of a field.
pub const RENDERINGS: &str = "renderings";

/// Attribute key for the infoboxes a field appeared in.
pub const INFOBOXES: &str = "infoboxes";

// ============================================================================
// FieldNode struct
// ============================================================================

/// A node in the field graph.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldNode {
    /// Cleaned field name; unique within a graph.
    pub label: String,
    /// Per-node attributes (see [`RENDERINGS`], [`INFOBOXES`]).
    #[serde(default)]
    pub attributes: FieldRecord,
}

impl FieldNode {
    /// Creates a node with no attributes.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            attributes: FieldRecord::new(),
        }
    }

    /// Raw spellings recorded for this field.
    pub fn renderings(&self) -> &[String] {
        self.attributes.get(RENDERINGS).unwrap_or_default()
    }

    /// Infoboxes this field was seen in.
    pub fn infoboxes(&self) -> &[String] {
        self.attributes.get(INFOBOXES).unwrap_or_default()
    }
}

// ============================================================================
// WikiMap struct
// ============================================================================

/// Undirected graph of infobox fields.
///
/// Equality is structural: same node labels and same undirected edges.
/// Node attributes are not compared.
#[derive(Clone, Debug, Default)]
pub struct WikiMap {
    graph: UnGraph<FieldNode, ()>,
    node_indices: HashMap<String, NodeIndex>,
    cleaner: FieldCleaner,
}

impl WikiMap {
    /// Creates an empty graph with the default cleaner.
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses `cleaner` for [`add_uncleaned`](Self::add_uncleaned) and
    /// [`add_mapping`](Self::add_mapping).
    pub fn with_cleaner(mut self, cleaner: FieldCleaner) -> Self {
        self.cleaner = cleaner;
        self
    }

    /// The cleaner applied to raw field names.
    pub fn cleaner(&self) -> &FieldCleaner {
        &self.cleaner
    }

    /// The underlying petgraph graph.
    pub fn graph(&self) -> &UnGraph<FieldNode, ()> {
        &self.graph
    }

    /// Returns the number of nodes.
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Returns the number of edges.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Checks if a node exists.
    pub fn contains_node(&self, label: &str) -> bool {
        self.node_indices.contains_key(label)
    }

    /// Gets a node by label.
    pub fn get_node(&self, label: &str) -> Option<&FieldNode> {
        self.get_index(label).map(|idx| &self.graph[idx])
    }

    /// Gets the petgraph NodeIndex for a label.
    pub fn get_index(&self, label: &str) -> Option<NodeIndex> {
        self.node_indices.get(label).copied()
    }

    /// Node labels in insertion order.
    pub fn node_labels(&self) -> impl Iterator<Item = &str> {
        self.graph.node_weights().map(|n| n.label.as_str())
    }

    /// Returns an iterator over all nodes, in insertion order.
    pub fn iter_nodes(&self) -> impl Iterator<Item = &FieldNode> {
        self.graph.node_weights()
    }

    /// Checks whether `u` and `v` are adjacent.
    pub fn has_edge(&self, u: &str, v: &str) -> bool {
        match (self.get_index(u), self.get_index(v)) {
            (Some(a), Some(b)) => self.graph.find_edge(a, b).is_some(),
            _ => false,
        }
    }

    /// Undirected edges as label pairs, each ordered `(min, max)`.
    pub fn edge_pairs(&self) -> BTreeSet<(String, String)> {
        self.graph
            .edge_references()
            .map(|e| {
                let a = self.graph[e.source()].label.clone();
                let b = self.graph[e.target()].label.clone();
                if a <= b { (a, b) } else { (b, a) }
            })
            .collect()
    }

    // ========================================================================
    // Mutation
    // ========================================================================

    /// Add a node by label.
    ///
    /// If the label already exists, returns its existing index.
    pub fn add_node(&mut self, label: impl Into<String>) -> NodeIndex {
        self.insert_node(FieldNode::new(label))
    }

    /// Add a node with its attributes, keeping an existing node untouched.
    pub(crate) fn insert_node(&mut self, node: FieldNode) -> NodeIndex {
        if let Some(&existing_idx) = self.node_indices.get(&node.label) {
            return existing_idx;
        }
        let label = node.label.clone();
        let idx = self.graph.add_node(node);
        self.node_indices.insert(label, idx);
        idx
    }

    /// Add an edge between existing nodes without a duplicate check.
    pub(crate) fn insert_edge(&mut self, a: NodeIndex, b: NodeIndex) {
        self.graph.add_edge(a, b, ());
    }

    /// Add an undirected edge, creating either endpoint if needed.
    ///
    /// Returns `false` when the edge was already present.
    pub fn add_edge(&mut self, u: impl Into<String>, v: impl Into<String>) -> bool {
        let a = self.add_node(u);
        let b = self.add_node(v);
        if self.graph.find_edge(a, b).is_some() {
            return false;
        }
        self.graph.add_edge(a, b, ());
        true
    }

    /// Record a raw spelling for `label`, creating the node if needed.
    pub fn add_rendering(&mut self, label: impl Into<String>, raw: impl Into<String>) {
        let idx = self.add_node(label);
        self.graph[idx].attributes.add(RENDERINGS, raw);
    }

    /// Record that `label` appeared in `infobox`, creating the node if needed.
    pub fn add_infobox(&mut self, label: impl Into<String>, infobox: impl Into<String>) {
        let idx = self.add_node(label);
        self.graph[idx].attributes.add(INFOBOXES, infobox);
    }

    /// Clean `raw` and record it as a rendering of the cleaned node.
    ///
    /// Returns the cleaned label, or `None` if nothing is left after cleaning.
    pub fn add_uncleaned(&mut self, raw: &str) -> Option<String> {
        let label = self.cleaner.clean(raw);
        if label.is_empty() {
            warn!("Field name {raw:?} is empty after cleaning; ignored");
            return None;
        }
        self.add_rendering(label.clone(), raw);
        Some(label)
    }

    /// Record that `infobox` maps raw field `raw_a` onto raw field `raw_b`.
    ///
    /// Both names are cleaned, joined by an edge, and annotated with their
    /// raw spelling and the infobox. Names that clean to the same label get
    /// their annotations but no self-loop. Returns `false` (and changes
    /// nothing) if either name is empty after cleaning.
    pub fn add_mapping(&mut self, infobox: &str, raw_a: &str, raw_b: &str) -> bool {
        let a = self.cleaner.clean(raw_a);
        let b = self.cleaner.clean(raw_b);
        if a.is_empty() || b.is_empty() {
            warn!("Mapping {raw_a:?} <-> {raw_b:?} in {infobox:?} has an empty field name");
            return false;
        }

        if a != b {
            self.add_edge(a.clone(), b.clone());
        }
        for (label, raw) in [(a, raw_a), (b, raw_b)] {
            self.add_rendering(label.clone(), raw);
            self.add_infobox(label, infobox);
        }
        true
    }

    // ========================================================================
    // Attribute queries
    // ========================================================================

    fn require_node(&self, label: &str) -> Result<&FieldNode> {
        self.get_node(label)
            .ok_or_else(|| Error::not_found("node", label))
    }

    /// Raw spellings recorded for `label`.
    pub fn renderings_of_graph_node(&self, label: &str) -> Result<Vec<String>> {
        Ok(self.require_node(label)?.renderings().to_vec())
    }

    /// Infoboxes `label` appeared in.
    pub fn infoboxes_of_graph_node(&self, label: &str) -> Result<Vec<String>> {
        Ok(self.require_node(label)?.infoboxes().to_vec())
    }

    /// Sorted union of every node's infoboxes.
    pub fn infoboxes_of_graph(&self) -> Vec<String> {
        self.iter_nodes()
            .flat_map(|n| n.infoboxes().iter().cloned())
            .collect::<BTreeSet<String>>()
            .into_iter()
            .collect()
    }
}

impl PartialEq for WikiMap {
    fn eq(&self, other: &Self) -> bool {
        self.node_count() == other.node_count()
            && self.edge_count() == other.edge_count()
            && self.node_labels().all(|l| other.contains_node(l))
            && self.edge_pairs() == other.edge_pairs()
    }
}

impl Eq for WikiMap {}

impl<U, V> FromIterator<(U, V)> for WikiMap
where
    U: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (U, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (u, v) in iter {
            map.add_edge(u, v);
        }
        map
    }
}

// ============================================================================
// Tests
// ============================================================================
