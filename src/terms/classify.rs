// Rule-based term classification.
//
// Classification is deterministic and static per run: curated vocabularies
// in, category out, no cross-document learning. The rules run in a strict
// priority order and the first match wins. The order is load-bearing, so
// the implementation iterates explicit ordered lists rather than looking
// anything up in a map.

use std::sync::Arc;

use crate::vocab::{Category, Vocabulary};

/// Assigns a normalized term to a semantic category.
pub struct TermClassifier {
    vocab: Arc<Vocabulary>,
}

impl TermClassifier {
    pub fn new(vocab: Arc<Vocabulary>) -> Self {
        Self { vocab }
    }

    /// Classify a term. Matching is case-insensitive substring containment,
    /// not token equality: "Vascular Risk" matches the keyword "vascular".
    ///
    /// Priority order:
    /// 1. Research-method phrases (excluded category, checked first so a
    ///    term like "Stress Meta Analysis" never lands in a real category).
    /// 2. Curated category keywords, categories in declared order.
    /// 3. Inferential fallback cues, same category order.
    /// 4. `Unclassified`.
    pub fn classify(&self, term: &str) -> Category {
        let lowered = term.to_lowercase();

        for phrase in self.vocab.research_methods() {
            if lowered.contains(phrase) {
                return Category::ResearchMethods;
            }
        }

        for cat in self.vocab.categories() {
            if cat.keywords.iter().any(|kw| lowered.contains(kw)) {
                return cat.category;
            }
        }

        for cat in self.vocab.categories() {
            if cat.fallback_cues.iter().any(|cue| lowered.contains(cue)) {
                return cat.category;
            }
        }

        Category::Unclassified
    }
}
