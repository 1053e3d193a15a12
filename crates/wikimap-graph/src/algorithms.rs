//! Connected-component analysis for field graphs.
//!
//! Provides:
//! - Component discovery (breadth-first, nodes visited in insertion order)
//! - Component sizes and size histograms
//! - Size-filtered component subgraphs
//! - Aggregate graph statistics
//!
//! Components are recomputed on every call; nothing is cached.

use crate::WikiMap;
use log::debug;
use petgraph::graph::NodeIndex;
use petgraph::visit::{Bfs, EdgeRef, VisitMap, Visitable};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap, VecDeque};
use wikimap_core::{Error, Result};

// ============================================================================
// Result types
// ============================================================================

/// Summary statistics for a field graph.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphStats {
    /// Number of fields (nodes).
    pub node_count: usize,
    /// Number of mappings (edges).
    pub edge_count: usize,
    /// Number of connected components.
    pub component_count: usize,
    /// Size of the largest component (0 for an empty graph).
    pub largest_component: usize,
    /// Component size → number of components with that size.
    pub size_counts: BTreeMap<usize, usize>,
}

// ============================================================================
// Algorithms
// ============================================================================

/// Node indices of every component, in discovery order.
///
/// One visit map is shared by every traversal, so discovery is O(V + E).
fn component_indices(map: &WikiMap) -> Vec<Vec<NodeIndex>> {
    let graph = map.graph();
    let mut bfs = Bfs {
        stack: VecDeque::new(),
        discovered: graph.visit_map(),
    };
    let mut components = Vec::new();

    for start in graph.node_indices() {
        if !bfs.discovered.visit(start) {
            continue;
        }
        bfs.stack.push_back(start);
        let mut members = Vec::new();
        while let Some(idx) = bfs.next(graph) {
            members.push(idx);
        }
        components.push(members);
    }

    debug!(
        "Found {} components across {} nodes",
        components.len(),
        graph.node_count()
    );
    components
}

/// Build the subgraph induced by `members`, carrying node attributes.
///
/// Only edges incident to `members` are visited.
fn induced_subgraph(map: &WikiMap, members: &[NodeIndex]) -> WikiMap {
    let graph = map.graph();

    let mut sub = WikiMap::new().with_cleaner(map.cleaner().clone());
    let remap: HashMap<NodeIndex, NodeIndex> = members
        .iter()
        .map(|&idx| (idx, sub.insert_node(graph[idx].clone())))
        .collect();

    for &idx in members {
        for edge in graph.edges(idx) {
            // undirected: `edges(idx)` reports `idx` as the source
            let other = edge.target();
            if idx > other {
                continue;
            }
            if let Some(&b) = remap.get(&other) {
                sub.insert_edge(remap[&idx], b);
            }
        }
    }
    sub
}

/// Compute summary statistics for a graph.
pub fn compute_stats(map: &WikiMap) -> GraphStats {
    let lengths = map.connected_component_lengths();
    GraphStats {
        node_count: map.node_count(),
        edge_count: map.edge_count(),
        component_count: lengths.len(),
        largest_component: lengths.iter().copied().max().unwrap_or(0),
        size_counts: size_histogram(&lengths),
    }
}

fn size_histogram(lengths: &[usize]) -> BTreeMap<usize, usize> {
    let mut counts = BTreeMap::new();
    for &len in lengths {
        *counts.entry(len).or_insert(0) += 1;
    }
    counts
}

// ============================================================================
// Component methods on WikiMap
// ============================================================================

impl WikiMap {
    /// All connected components as subgraphs, in discovery order.
    pub fn connected_components(&self) -> Vec<WikiMap> {
        component_indices(self)
            .iter()
            .map(|members| induced_subgraph(self, members))
            .collect()
    }

    /// Node count of every connected component.
    pub fn connected_component_lengths(&self) -> Vec<usize> {
        component_indices(self).iter().map(Vec::len).collect()
    }

    /// Component size → number of components of that size.
    pub fn connected_component_statistics(&self) -> BTreeMap<usize, usize> {
        size_histogram(&self.connected_component_lengths())
    }

    /// Components with exactly `size` nodes. Empty if none match.
    pub fn connected_components_with_size(&self, size: usize) -> Vec<WikiMap> {
        component_indices(self)
            .iter()
            .filter(|members| members.len() == size)
            .map(|members| induced_subgraph(self, members))
            .collect()
    }

    /// The component containing `label`.
    pub fn component_of(&self, label: &str) -> Result<WikiMap> {
        let start = self
            .get_index(label)
            .ok_or_else(|| Error::not_found("node", label))?;

        let graph = self.graph();
        let mut members = Vec::new();
        let mut bfs = Bfs::new(graph, start);
        while let Some(idx) = bfs.next(graph) {
            members.push(idx);
        }
        Ok(induced_subgraph(self, &members))
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// Four-node, two three-node, and one two-node component.
    fn create_test_graph() -> WikiMap {
        let mut map = WikiMap::new();

        // four node group
        map.add_edge("A", "B");
        map.add_edge("A", "C");
        map.add_edge("D", "C");

        // three node group
        map.add_edge("Y", "X");
        map.add_edge("Z", "X");

        // three node group (another)
        map.add_edge("alpha", "beta");
        map.add_edge("alpha", "gamma");

        // two node group
        map.add_edge("M", "N");

        map
    }

    // ------------------------------------------------------------------------
    // Component size tests
    // ------------------------------------------------------------------------

    #[test]
    fn test_connected_component_lengths() {
        let map = create_test_graph();
        let mut lengths = map.connected_component_lengths();
        lengths.sort_unstable();
        assert_eq!(lengths, vec![2, 3, 3, 4]);
    }

    #[test]
    fn test_connected_component_lengths_discovery_order() {
        let map = create_test_graph();
        assert_eq!(map.connected_component_lengths(), vec![4, 3, 3, 2]);
    }

    #[test]
    fn test_connected_component_statistics() {
        let map = create_test_graph();
        let stats = map.connected_component_statistics();
        assert_eq!(stats, BTreeMap::from([(2, 1), (3, 2), (4, 1)]));
    }

    #[test]
    fn test_components_empty_graph() {
        let map = WikiMap::new();
        assert!(map.connected_component_lengths().is_empty());
        assert!(map.connected_component_statistics().is_empty());
        assert!(map.connected_components().is_empty());
    }

    #[test]
    fn test_isolated_node_is_its_own_component() {
        let mut map = create_test_graph();
        map.add_node("lonely");
        assert_eq!(map.connected_component_statistics().get(&1), Some(&1));
    }

    #[test]
    fn test_self_loop_does_not_change_components() {
        let mut map = create_test_graph();
        map.add_edge("M", "M");
        let mut lengths = map.connected_component_lengths();
        lengths.sort_unstable();
        assert_eq!(lengths, vec![2, 3, 3, 4]);
    }

    #[test]
    fn test_duplicate_edges_leave_components_unchanged() {
        let mut map = create_test_graph();
        let before = map.connected_component_statistics();
        map.add_edge("A", "B");
        map.add_edge("B", "A");
        map.add_edge("M", "N");
        assert_eq!(map.connected_component_statistics(), before);
        assert_eq!(map.edge_count(), 8);
    }

    // ------------------------------------------------------------------------
    // Size-filtered components
    // ------------------------------------------------------------------------

    #[test]
    fn test_connected_components_with_size() {
        let map = create_test_graph();

        let expected_three1: WikiMap = [("Y", "X"), ("Z", "X")].into_iter().collect();
        let expected_three2: WikiMap =
            [("alpha", "beta"), ("alpha", "gamma")].into_iter().collect();
        let expected_four: WikiMap = [("A", "B"), ("A", "C"), ("D", "C")].into_iter().collect();

        let threes = map.connected_components_with_size(3);
        assert_eq!(threes.len(), 2);
        assert!(threes.contains(&expected_three1));
        assert!(threes.contains(&expected_three2));

        let fours = map.connected_components_with_size(4);
        assert_eq!(fours.len(), 1);
        assert_eq!(fours[0], expected_four);
    }

    #[test]
    fn test_connected_components_with_size_no_match() {
        let map = create_test_graph();
        assert!(map.connected_components_with_size(7).is_empty());
        assert!(map.connected_components_with_size(0).is_empty());
    }

    #[test]
    fn test_component_subgraph_keeps_attributes() {
        let mut map = WikiMap::new();
        map.add_mapping("Infobox person", "Born", "Birth date");
        map.add_mapping("Infobox ship", "Builder", "Shipyard");

        let component = map.component_of("born").unwrap();
        assert_eq!(component.node_count(), 2);
        assert_eq!(component.edge_count(), 1);
        assert_eq!(component.infoboxes_of_graph(), vec!["Infobox person"]);
        assert_eq!(
            component.renderings_of_graph_node("birth date").unwrap(),
            vec!["Birth date"]
        );
    }

    #[test]
    fn test_component_of_not_found() {
        let map = create_test_graph();
        assert!(map.component_of("nope").unwrap_err().is_not_found());
    }

    #[test]
    fn test_component_of_matches_size_filter() {
        let map = create_test_graph();
        let component = map.component_of("D").unwrap();
        assert_eq!(component, map.connected_components_with_size(4)[0]);
    }

    #[test]
    fn test_component_edges_partition_graph_edges() {
        let mut map = create_test_graph();
        map.add_edge("M", "M");
        let total: usize = map
            .connected_components()
            .iter()
            .map(WikiMap::edge_count)
            .sum();
        assert_eq!(total, map.edge_count());

        let pair = map.component_of("N").unwrap();
        assert_eq!(pair.edge_count(), 2);
        assert!(pair.has_edge("M", "M"));
        assert!(pair.has_edge("N", "M"));
    }

    #[test]
    fn test_many_small_components_scale_linearly() {
        let pairs = 20_000;
        let map: WikiMap = (0..pairs)
            .map(|i| (format!("a{i}"), format!("b{i}")))
            .collect();

        let started = std::time::Instant::now();
        let components = map.connected_components_with_size(2);
        let elapsed = started.elapsed();

        assert_eq!(components.len(), pairs);
        assert!(components.iter().all(|c| c.edge_count() == 1));
        assert!(
            elapsed < std::time::Duration::from_secs(5),
            "extracting {pairs} components took {elapsed:?}"
        );
    }

    // ------------------------------------------------------------------------
    // Stats tests
    // ------------------------------------------------------------------------

    #[test]
    fn test_compute_stats() {
        let map = create_test_graph();
        let stats = compute_stats(&map);

        assert_eq!(stats.node_count, 12);
        assert_eq!(stats.edge_count, 8);
        assert_eq!(stats.component_count, 4);
        assert_eq!(stats.largest_component, 4);
        assert_eq!(stats.size_counts, map.connected_component_statistics());
    }

    #[test]
    fn test_compute_stats_empty() {
        let stats = compute_stats(&WikiMap::new());
        assert_eq!(stats.component_count, 0);
        assert_eq!(stats.largest_component, 0);
        assert!(stats.size_counts.is_empty());
    }

    #[test]
    fn test_stats_serialize() {
        let stats = compute_stats(&create_test_graph());
        let json = serde_json::to_value(&stats).unwrap();
        assert_eq!(json["component_count"], 4);
        assert_eq!(json["size_counts"]["3"], 2);
    }
}
