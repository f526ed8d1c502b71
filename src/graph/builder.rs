// Network builder: per-document term extraction plus two-pass corpus
// aggregation.
//
// The aggregation is inherently two-pass. Node frequencies must be final
// for the whole corpus before any pairing happens, because only terms that
// clear the frequency threshold may contribute edge weight: a low-frequency
// term co-occurring with two retained terms adds nothing to the edge
// between them. Collapsing this into one streaming pass would change the
// results, so the retained-terms set is materialized explicitly between
// the passes.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

use crate::ingest::Record;
use crate::terms::classify::TermClassifier;
use crate::terms::normalize::TermNormalizer;
use crate::vocab::Vocabulary;

use super::tables::{assign_ids, Edge, NetworkTables, Node};

/// Thresholds and caps for one build run.
pub struct NetworkConfig {
    /// Minimum document count for a term to become a node.
    pub min_frequency: u32,
    /// Minimum co-occurrence count for a pair to become an edge.
    pub min_weight: u32,
    /// Cap on the number of terms a single document may contribute.
    pub max_terms_per_document: usize,
    /// Scan abstract text for literal category keyword occurrences and
    /// inject them as extra terms.
    pub scan_abstracts: bool,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            min_frequency: 3,
            min_weight: 2,
            max_terms_per_document: 20,
            scan_abstracts: true,
        }
    }
}

/// Builds the co-occurrence network from bibliography records.
pub struct NetworkBuilder {
    vocab: Arc<Vocabulary>,
    normalizer: TermNormalizer,
    classifier: TermClassifier,
    config: NetworkConfig,
}

impl NetworkBuilder {
    pub fn new(vocab: Arc<Vocabulary>, config: NetworkConfig) -> Self {
        Self {
            normalizer: TermNormalizer::new(Arc::clone(&vocab)),
            classifier: TermClassifier::new(Arc::clone(&vocab)),
            vocab,
            config,
        }
    }

    /// Extract the qualifying term set for one record.
    ///
    /// Tag and author-keyword fields are split on `;`/`,` and each segment
    /// runs through normalize + classify; terms landing in an excluded
    /// category are dropped. When enabled, the abstract is scanned for
    /// literal category keyword occurrences. Presence is binary: a phrase
    /// repeated five times in one abstract still counts once.
    ///
    /// The result is de-duplicated in encounter order and capped at
    /// `max_terms_per_document`, so no single article floods the network.
    pub fn extract_terms(&self, record: &Record) -> Vec<String> {
        let mut terms = Vec::new();
        let mut seen = HashSet::new();

        for field in [record.tags.as_deref(), record.author_keywords.as_deref()] {
            let Some(text) = field else { continue };
            for segment in text.split([';', ',']) {
                let Some(term) = self.normalizer.normalize(segment) else {
                    continue;
                };
                if self.classifier.classify(&term).is_excluded() {
                    continue;
                }
                if seen.insert(term.clone()) {
                    terms.push(term);
                }
            }
        }

        if self.config.scan_abstracts {
            if let Some(abstract_text) = record.abstract_text.as_deref() {
                let lowered = abstract_text.to_lowercase();
                for cat in self.vocab.categories() {
                    for keyword in cat.keywords {
                        if !lowered.contains(keyword) {
                            continue;
                        }
                        let Some(term) = self.normalizer.normalize(keyword) else {
                            continue;
                        };
                        if seen.insert(term.clone()) {
                            terms.push(term);
                        }
                    }
                }
            }
        }

        terms.truncate(self.config.max_terms_per_document);
        terms
    }

    /// Build the full network: extract per-document term sets, then run the
    /// two-pass aggregation. A record with zero qualifying terms contributes
    /// nothing; an empty corpus yields empty tables.
    pub fn build(&self, records: &[Record]) -> NetworkTables {
        let pb = ProgressBar::new(records.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("  Extracting [{bar:30}] {pos}/{len} ({eta})")
                .unwrap(),
        );

        let mut documents = Vec::new();
        for record in records {
            let terms = self.extract_terms(record);
            if !terms.is_empty() {
                documents.push(terms);
            }
            pb.inc(1);
        }
        pb.finish_and_clear();

        info!(
            records = records.len(),
            documents = documents.len(),
            "Term extraction complete"
        );

        aggregate(
            &documents,
            &self.classifier,
            self.config.min_frequency,
            self.config.min_weight,
        )
    }
}

/// Two-pass corpus aggregation over per-document term sets.
///
/// Pass 1 counts, per term, the number of documents containing it and
/// applies the frequency threshold. Pass 2 pairs only the retained terms
/// within each document and applies the weight threshold. Shared by the
/// tag-based builder and the discovery pipeline.
pub fn aggregate(
    documents: &[Vec<String>],
    classifier: &TermClassifier,
    min_frequency: u32,
    min_weight: u32,
) -> NetworkTables {
    // Pass 1: document frequency per term. Term sets are de-duplicated
    // defensively; a term may count at most once per document.
    let mut frequency: HashMap<&str, u32> = HashMap::new();
    for doc in documents {
        let unique: HashSet<&str> = doc.iter().map(String::as_str).collect();
        for term in unique {
            *frequency.entry(term).or_insert(0) += 1;
        }
    }

    let retained: HashMap<&str, u32> = frequency
        .iter()
        .filter(|(_, &freq)| freq >= min_frequency)
        .map(|(&term, &freq)| (term, freq))
        .collect();

    info!(
        total_terms = frequency.len(),
        retained_terms = retained.len(),
        "Frequency threshold applied"
    );

    // Pass 2: co-occurrence weights over retained terms only. Pairs are
    // canonicalized by sorting the labels so (A,B) and (B,A) accumulate
    // into one counter.
    let mut weights: HashMap<(&str, &str), u32> = HashMap::new();
    for doc in documents {
        let mut kept: Vec<&str> = doc
            .iter()
            .map(String::as_str)
            .filter(|term| retained.contains_key(term))
            .collect();
        kept.sort_unstable();
        kept.dedup();

        for i in 0..kept.len() {
            for j in (i + 1)..kept.len() {
                *weights.entry((kept[i], kept[j])).or_insert(0) += 1;
            }
        }
    }

    // Node table, sorted for reproducible output.
    let mut ranked: Vec<(&str, u32)> = retained.iter().map(|(&t, &f)| (t, f)).collect();
    ranked.sort_unstable_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));

    let labels: Vec<&str> = ranked.iter().map(|(term, _)| *term).collect();
    let ids = assign_ids(&labels);
    let id_of: HashMap<&str, &str> = labels
        .iter()
        .zip(ids.iter())
        .map(|(&label, id)| (label, id.as_str()))
        .collect();

    let nodes: Vec<Node> = ranked
        .iter()
        .zip(ids.iter())
        .map(|(&(label, freq), id)| Node {
            id: id.clone(),
            label: label.to_string(),
            category: classifier.classify(label),
            frequency: freq,
        })
        .collect();

    // Edge table: weight threshold, then the same deterministic ordering.
    let mut edges: Vec<Edge> = weights
        .into_iter()
        .filter(|(_, weight)| *weight >= min_weight)
        .map(|((a, b), weight)| Edge {
            source: id_of[a].to_string(),
            target: id_of[b].to_string(),
            weight,
            source_label: a.to_string(),
            target_label: b.to_string(),
        })
        .collect();
    edges.sort_unstable_by(|a, b| {
        b.weight
            .cmp(&a.weight)
            .then_with(|| a.source_label.cmp(&b.source_label))
            .then_with(|| a.target_label.cmp(&b.target_label))
    });

    info!(nodes = nodes.len(), edges = edges.len(), "Network assembled");

    NetworkTables { nodes, edges }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ingest::Record;

    fn builder(config: NetworkConfig) -> NetworkBuilder {
        NetworkBuilder::new(Arc::new(Vocabulary::curated()), config)
    }

    fn record(tags: &str) -> Record {
        Record {
            title: None,
            tags: Some(tags.to_string()),
            abstract_text: None,
            author_keywords: None,
        }
    }

    #[test]
    fn test_extract_terms_from_tags() {
        let b = builder(NetworkConfig::default());
        let terms = b.extract_terms(&record("Migraine; Depression; Anxiety"));
        assert!(terms.contains(&"Depression".to_string()));
        assert!(terms.contains(&"Anxiety".to_string()));
    }

    #[test]
    fn test_extract_terms_drops_research_methods() {
        let b = builder(NetworkConfig::default());
        let terms = b.extract_terms(&record("Stress; Randomized Controlled Trial; Meta Analysis"));
        assert!(terms.contains(&"Stress".to_string()));
        assert!(!terms
            .iter()
            .any(|t| t.to_lowercase().contains("trial") || t.to_lowercase().contains("meta")));
    }

    #[test]
    fn test_extract_terms_scans_abstract_binary() {
        let b = builder(NetworkConfig::default());
        let rec = Record {
            title: None,
            tags: Some("Migraine".to_string()),
            abstract_text: Some(
                "Depression is common. Depression severity tracks attack frequency; \
                 depression remains underdiagnosed."
                    .to_string(),
            ),
            author_keywords: None,
        };
        let terms = b.extract_terms(&rec);
        let hits = terms.iter().filter(|t| *t == "Depression").count();
        assert_eq!(hits, 1, "abstract keyword presence is binary per document");
    }

    #[test]
    fn test_extract_terms_respects_cap() {
        let config = NetworkConfig {
            max_terms_per_document: 2,
            ..NetworkConfig::default()
        };
        let b = builder(config);
        let terms = b.extract_terms(&record("Stress; Depression; Anxiety; Epilepsy"));
        assert_eq!(terms.len(), 2);
        // First N in encounter order, no ranking
        assert_eq!(terms, vec!["Stress".to_string(), "Depression".to_string()]);
    }

    #[test]
    fn test_tags_only_skips_abstract() {
        let config = NetworkConfig {
            scan_abstracts: false,
            ..NetworkConfig::default()
        };
        let b = builder(config);
        let rec = Record {
            title: None,
            tags: None,
            abstract_text: Some("Depression and anxiety everywhere.".to_string()),
            author_keywords: None,
        };
        assert!(b.extract_terms(&rec).is_empty());
    }

    #[test]
    fn test_empty_record_contributes_nothing() {
        let b = builder(NetworkConfig::default());
        let rec = Record {
            title: None,
            tags: None,
            abstract_text: None,
            author_keywords: None,
        };
        assert!(b.extract_terms(&rec).is_empty());
    }
}
