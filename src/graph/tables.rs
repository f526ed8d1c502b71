// Node and edge tables, the two artifacts Gephi imports.
//
// Both tables are derived, read-only aggregates: recomputed in full on
// every run, never updated incrementally.

use serde::Serialize;

use crate::vocab::Category;

/// Edge type tag written to the edge table. The graph is undirected by
/// construction; pairs are canonicalized before counting.
pub const EDGE_TYPE: &str = "Undirected";

/// Node ids are slugs truncated to this many characters.
pub const MAX_ID_LEN: usize = 30;

/// One retained term.
#[derive(Debug, Clone, Serialize)]
pub struct Node {
    /// Stable slug identifier, unique within one build result.
    pub id: String,
    /// Display label (the normalized term).
    pub label: String,
    pub category: Category,
    /// Number of documents whose term set contains this term.
    pub frequency: u32,
}

/// One retained co-occurrence pair. Source/target are node ids; the labels
/// ride along for human readability in the detailed table.
#[derive(Debug, Clone, Serialize)]
pub struct Edge {
    pub source: String,
    pub target: String,
    /// Number of documents where both terms co-occur.
    pub weight: u32,
    pub source_label: String,
    pub target_label: String,
}

/// A complete build result.
#[derive(Debug, Clone, Default, Serialize)]
pub struct NetworkTables {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
}

impl NetworkTables {
    /// Node counts per category, largest first.
    pub fn category_distribution(&self) -> Vec<(Category, usize)> {
        let mut counts: std::collections::HashMap<Category, usize> =
            std::collections::HashMap::new();
        for node in &self.nodes {
            *counts.entry(node.category).or_insert(0) += 1;
        }
        let mut distribution: Vec<(Category, usize)> = counts.into_iter().collect();
        distribution.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.as_str().cmp(b.0.as_str())));
        distribution
    }

    /// Edge count over the maximum possible for this node count.
    /// Zero for graphs with fewer than two nodes.
    pub fn density(&self) -> f64 {
        let n = self.nodes.len();
        if n < 2 {
            return 0.0;
        }
        self.edges.len() as f64 / (n as f64 * (n as f64 - 1.0) / 2.0)
    }
}

/// Derive a slug from a term label: lowercase, every character outside
/// `[a-z0-9_]` replaced with an underscore, truncated to `MAX_ID_LEN`.
pub fn slug_id(label: &str) -> String {
    label
        .to_lowercase()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' })
        .take(MAX_ID_LEN)
        .collect()
}

/// Assign a unique id to every label, in order.
///
/// Two distinct labels can truncate to the same slug. Rather than silently
/// merging them (which would corrupt edge references), colliding slugs get
/// a numeric suffix, with the base trimmed so the id stays within
/// `MAX_ID_LEN`. Deterministic for a given label order.
pub fn assign_ids(labels: &[&str]) -> Vec<String> {
    let mut taken = std::collections::HashSet::new();
    let mut ids = Vec::with_capacity(labels.len());

    for label in labels {
        let base = slug_id(label);
        let id = if taken.insert(base.clone()) {
            base
        } else {
            let mut n = 2u32;
            loop {
                let suffix = format!("_{n}");
                let keep = MAX_ID_LEN.saturating_sub(suffix.len()).min(base.len());
                // Slugs are ASCII, so byte slicing is safe here.
                let candidate = format!("{}{}", &base[..keep], suffix);
                if taken.insert(candidate.clone()) {
                    break candidate;
                }
                n += 1;
            }
        };
        ids.push(id);
    }

    ids
}
