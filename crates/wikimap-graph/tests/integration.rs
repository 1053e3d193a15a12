//! End-to-end tests: raw mappings in, component statistics out.

#![allow(clippy::unwrap_used)]

use proptest::prelude::*;
use std::collections::BTreeMap;
use wikimap_content::clean;
use wikimap_graph::{FieldMapping, GraphBuilder, WikiMap, compute_stats};

#[test]
fn test_infobox_fields_group_by_synonym() {
    let mappings = vec![
        FieldMapping::new("Infobox football club", "Parent club(s)", "Parent club"),
        FieldMapping::new("Infobox football club", "Parent club", "Affiliate of"),
        FieldMapping::new("Infobox sports team", "Team president (men)", "President"),
        FieldMapping::new("Infobox university", "ARWU[5]", "ARWU ranking"),
        FieldMapping::new("Infobox university", "Web site:", "Website"),
    ];

    let (graph, stats) = GraphBuilder::new().build_from_mappings(mappings).unwrap();

    // "Parent club(s)" and "Parent club" clean to the same label: no edge
    assert_eq!(stats.mappings_read, 5);
    assert_eq!(stats.edges_created, 4);
    assert_eq!(stats.duplicate_mappings, 1);
    assert!(graph.contains_node("parent club"));
    assert!(graph.contains_node("team president"));
    assert!(graph.contains_node("arwu"));

    let mut lengths = graph.connected_component_lengths();
    lengths.sort_unstable();
    assert_eq!(lengths, vec![2, 2, 2, 2]);

    let club = graph.component_of("affiliate of").unwrap();
    assert_eq!(club.node_count(), 2);
    assert_eq!(
        club.renderings_of_graph_node("parent club").unwrap(),
        vec!["Parent club(s)", "Parent club"]
    );
}

#[test]
fn test_cleaned_labels_match_graph_nodes() {
    let mut graph = WikiMap::new();
    graph.add_mapping("Infobox weapon", "Rate\u{a0}of\u{a0}fire", "Rate of fire");

    assert_eq!(graph.node_count(), 1);
    assert!(graph.contains_node(&clean("Rate of fire")));
}

#[test]
fn test_stats_for_reference_graph() {
    let graph: WikiMap = [
        ("A", "B"),
        ("A", "C"),
        ("D", "C"),
        ("Y", "X"),
        ("Z", "X"),
        ("alpha", "beta"),
        ("alpha", "gamma"),
        ("M", "N"),
    ]
    .into_iter()
    .collect();

    let stats = compute_stats(&graph);
    assert_eq!(stats.size_counts, BTreeMap::from([(2, 1), (3, 2), (4, 1)]));

    let four = graph.connected_components_with_size(4);
    assert_eq!(four.len(), 1);
    let mut labels: Vec<&str> = four[0].node_labels().collect();
    labels.sort_unstable();
    assert_eq!(labels, vec!["A", "B", "C", "D"]);
}

fn edge_list() -> impl Strategy<Value = Vec<(u8, u8)>> {
    prop::collection::vec((0u8..20, 0u8..20), 0..40)
}

fn build(edges: &[(u8, u8)]) -> WikiMap {
    edges
        .iter()
        .map(|(u, v)| (format!("n{u}"), format!("n{v}")))
        .collect()
}

proptest! {
    #[test]
    fn prop_lengths_sum_to_node_count(edges in edge_list()) {
        let graph = build(&edges);
        let total: usize = graph.connected_component_lengths().iter().sum();
        prop_assert_eq!(total, graph.node_count());
    }

    #[test]
    fn prop_statistics_agree_with_lengths(edges in edge_list()) {
        let graph = build(&edges);
        let stats = graph.connected_component_statistics();
        let lengths = graph.connected_component_lengths();

        let counted: usize = stats.values().sum();
        prop_assert_eq!(counted, lengths.len());
        for (size, count) in &stats {
            prop_assert_eq!(graph.connected_components_with_size(*size).len(), *count);
        }
    }

    #[test]
    fn prop_duplicate_edges_are_idempotent(edges in edge_list()) {
        let once = build(&edges);
        let doubled: Vec<(u8, u8)> = edges.iter().chain(edges.iter()).copied().collect();
        let twice = build(&doubled);

        prop_assert_eq!(once.edge_count(), twice.edge_count());
        prop_assert_eq!(
            once.connected_component_statistics(),
            twice.connected_component_statistics()
        );
        prop_assert!(once == twice);
    }
}
