// Discovery pipeline: unsupervised term discovery from abstracts.
//
// Where the main builder trusts curated tag fields, discovery mines the
// abstracts themselves: an unsupervised extractor proposes candidate
// phrases, which run through the same normalize + classify pipeline as tag
// segments. Candidates the classifier cannot place are not discarded;
// they are tallied for human review, because they are exactly the terms
// the curated vocabularies are missing.

pub mod rake;
pub mod traits;

use std::collections::{HashMap, HashSet};

use indicatif::{ProgressBar, ProgressStyle};
use tracing::{info, warn};

use crate::graph::builder::aggregate;
use crate::graph::tables::NetworkTables;
use crate::ingest::Record;
use crate::terms::classify::TermClassifier;
use crate::terms::normalize::TermNormalizer;
use crate::vocab::Category;

use traits::PhraseExtractor;

/// Thresholds for the discovery network. Abstract-mined terms are noisier
/// than curated tags, so the frequency floor defaults higher than the main
/// builder's.
pub struct DiscoveryConfig {
    pub min_frequency: u32,
    pub min_weight: u32,
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            min_frequency: 5,
            min_weight: 2,
        }
    }
}

/// Result of a discovery run: the network over classifiable terms, plus the
/// review tally of normalized-but-unclassifiable terms, ranked by count.
pub struct DiscoveryOutcome {
    pub tables: NetworkTables,
    pub discovered: Vec<(String, u32)>,
}

/// Run discovery over the corpus.
///
/// Extractor failures are caught per document and degrade to "zero
/// candidates", so one malformed abstract never stops the rest of the corpus.
/// Research-method phrases are dropped (they describe the study, not the
/// subject); unclassified terms go into the review tally.
pub fn run(
    extractor: &dyn PhraseExtractor,
    normalizer: &TermNormalizer,
    classifier: &TermClassifier,
    records: &[Record],
    config: &DiscoveryConfig,
) -> DiscoveryOutcome {
    let mut documents = Vec::new();
    let mut discovered: HashMap<String, u32> = HashMap::new();

    let pb = ProgressBar::new(records.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("  Mining [{bar:30}] {pos}/{len} ({eta})")
            .unwrap(),
    );

    for record in records {
        pb.inc(1);
        let Some(text) = record.abstract_text.as_deref() else {
            continue;
        };

        let candidates = match extractor.extract(text) {
            Ok(candidates) => candidates,
            Err(err) => {
                warn!(error = %err, "Phrase extraction failed, skipping document");
                Vec::new()
            }
        };

        let mut doc_terms = Vec::new();
        let mut seen = HashSet::new();

        for (phrase, _score) in candidates {
            let Some(term) = normalizer.normalize(&phrase) else {
                continue;
            };
            match classifier.classify(&term) {
                Category::Unclassified => {
                    *discovered.entry(term).or_insert(0) += 1;
                }
                Category::ResearchMethods => {}
                _ => {
                    if seen.insert(term.clone()) {
                        doc_terms.push(term);
                    }
                }
            }
        }

        if !doc_terms.is_empty() {
            documents.push(doc_terms);
        }
    }
    pb.finish_and_clear();

    info!(
        documents = documents.len(),
        discovered = discovered.len(),
        "Discovery extraction complete"
    );

    let tables = aggregate(&documents, classifier, config.min_frequency, config.min_weight);

    let mut discovered: Vec<(String, u32)> = discovered.into_iter().collect();
    discovered.sort_unstable_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

    DiscoveryOutcome { tables, discovered }
}
