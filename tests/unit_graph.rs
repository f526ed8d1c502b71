// Unit tests for the two-pass network aggregation.
//
// Exercises the builder end to end on small in-memory corpora: frequency
// thresholding, filter-before-pairing, weight thresholding, id assignment,
// and the empty-corpus edge cases.

use std::collections::HashSet;
use std::sync::Arc;

use aura::graph::builder::{NetworkBuilder, NetworkConfig};
use aura::graph::tables::NetworkTables;
use aura::ingest::Record;
use aura::vocab::Vocabulary;

fn record(tags: &str) -> Record {
    Record {
        title: None,
        tags: Some(tags.to_string()),
        abstract_text: None,
        author_keywords: None,
    }
}

fn build(records: &[Record], min_frequency: u32, min_weight: u32) -> NetworkTables {
    let config = NetworkConfig {
        min_frequency,
        min_weight,
        ..NetworkConfig::default()
    };
    let builder = NetworkBuilder::new(Arc::new(Vocabulary::curated()), config);
    builder.build(records)
}

// ============================================================
// End-to-end thresholding
// ============================================================

#[test]
fn three_document_corpus_produces_expected_network() {
    let records = vec![
        record("Migraine; Depression; Anxiety"),
        record("Stress; Quality of Life"),
        record("Migraine; Depression"),
    ];
    let tables = build(&records, 2, 2);

    // Migraine and Depression appear in two documents; Anxiety, Stress,
    // and Quality Life in one each and fall below the threshold.
    let labels: Vec<&str> = tables.nodes.iter().map(|n| n.label.as_str()).collect();
    assert_eq!(labels.len(), 2);
    assert!(labels.contains(&"Migraine"));
    assert!(labels.contains(&"Depression"));

    for node in &tables.nodes {
        assert_eq!(node.frequency, 2);
    }

    // One edge: Migraine and Depression co-occur in two documents.
    assert_eq!(tables.edges.len(), 1);
    let edge = &tables.edges[0];
    assert_eq!(edge.weight, 2);
    let endpoints: HashSet<&str> =
        [edge.source_label.as_str(), edge.target_label.as_str()].into();
    assert_eq!(endpoints, HashSet::from(["Migraine", "Depression"]));
}

#[test]
fn low_frequency_terms_contribute_no_edge_weight() {
    // Anxiety rides along with two retained terms but only clears one
    // document. It must not produce edges, and its presence must not
    // affect the Stress/Depression weight.
    let records = vec![
        record("Stress; Depression"),
        record("Stress; Depression"),
        record("Stress; Depression; Anxiety"),
        record("Stress; Anxiety"),
    ];
    let tables = build(&records, 3, 1);

    let labels: HashSet<&str> = tables.nodes.iter().map(|n| n.label.as_str()).collect();
    assert_eq!(labels, HashSet::from(["Stress", "Depression"]));

    assert_eq!(tables.edges.len(), 1);
    assert_eq!(tables.edges[0].weight, 3);
}

#[test]
fn duplicate_terms_in_one_document_count_once() {
    let records = vec![
        record("Depression; depression; DEPRESSION"),
        record("Depression"),
    ];
    let tables = build(&records, 2, 1);
    assert_eq!(tables.nodes.len(), 1);
    assert_eq!(tables.nodes[0].frequency, 2);
}

#[test]
fn empty_corpus_yields_empty_tables() {
    let tables = build(&[], 1, 1);
    assert!(tables.nodes.is_empty());
    assert!(tables.edges.is_empty());
    assert_eq!(tables.density(), 0.0);
}

#[test]
fn corpus_with_no_qualifying_terms_yields_empty_tables() {
    let records = vec![record("study; research; the"), record("Meta Analysis")];
    let tables = build(&records, 1, 1);
    assert!(tables.nodes.is_empty());
    assert!(tables.edges.is_empty());
}

// ============================================================
// Monotonicity
// ============================================================

fn sample_corpus() -> Vec<Record> {
    vec![
        record("Migraine; Depression; Anxiety; Stress"),
        record("Migraine; Depression; Acupuncture"),
        record("Migraine; Stress; Disability"),
        record("Depression; Anxiety; Stress"),
        record("Migraine; Depression; Stress; Disability"),
        record("Anxiety; Acupuncture"),
    ]
}

#[test]
fn raising_min_frequency_never_increases_node_count() {
    let corpus = sample_corpus();
    let mut previous = usize::MAX;
    for min_frequency in 1..=6 {
        let tables = build(&corpus, min_frequency, 1);
        assert!(
            tables.nodes.len() <= previous,
            "node count grew at min_frequency={min_frequency}"
        );
        previous = tables.nodes.len();
    }
}

#[test]
fn raising_min_weight_never_increases_edge_count() {
    let corpus = sample_corpus();
    let mut previous = usize::MAX;
    for min_weight in 1..=6 {
        let tables = build(&corpus, 1, min_weight);
        assert!(
            tables.edges.len() <= previous,
            "edge count grew at min_weight={min_weight}"
        );
        previous = tables.edges.len();
    }
}

// ============================================================
// Structural invariants
// ============================================================

#[test]
fn every_edge_references_a_node_id() {
    let tables = build(&sample_corpus(), 1, 1);
    let ids: HashSet<&str> = tables.nodes.iter().map(|n| n.id.as_str()).collect();
    for edge in &tables.edges {
        assert!(ids.contains(edge.source.as_str()), "dangling source {}", edge.source);
        assert!(ids.contains(edge.target.as_str()), "dangling target {}", edge.target);
    }
}

#[test]
fn node_ids_are_unique() {
    let tables = build(&sample_corpus(), 1, 1);
    let mut seen = HashSet::new();
    for node in &tables.nodes {
        assert!(seen.insert(node.id.clone()), "duplicate id {}", node.id);
        assert!(node.id.len() <= 30);
    }
}

#[test]
fn nodes_are_sorted_by_descending_frequency() {
    let tables = build(&sample_corpus(), 1, 1);
    for window in tables.nodes.windows(2) {
        assert!(window[0].frequency >= window[1].frequency);
    }
}

#[test]
fn no_node_is_in_an_excluded_category() {
    let tables = build(&sample_corpus(), 1, 1);
    for node in &tables.nodes {
        assert!(
            !node.category.is_excluded(),
            "excluded category on node {}",
            node.label
        );
    }
}
