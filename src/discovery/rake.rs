// RAKE phrase extraction over abstract text.
//
// Uses the `keyword_extraction` crate's RAKE implementation. Zero API
// calls, runs locally, no cost. Abstracts are short enough that the
// co-occurrence statistics RAKE relies on stay meaningful per document.

use anyhow::Result;
use keyword_extraction::rake::{Rake, RakeParams};
use stop_words::{get, LANGUAGE};

use super::traits::PhraseExtractor;

/// Abstracts shorter than this carry too little text for phrase statistics;
/// extraction returns no candidates rather than noise.
const MIN_TEXT_LEN: usize = 50;

/// RAKE-based phrase extractor, the default discovery collaborator.
pub struct RakeExtractor {
    /// How many ranked phrases to keep per abstract.
    pub top_n: usize,
}

impl Default for RakeExtractor {
    fn default() -> Self {
        Self { top_n: 5 }
    }
}

impl PhraseExtractor for RakeExtractor {
    fn extract(&self, text: &str) -> Result<Vec<(String, f32)>> {
        if text.trim().chars().count() < MIN_TEXT_LEN {
            return Ok(Vec::new());
        }

        // General English stop words delimit candidate phrases; the curated
        // medical stopwords apply later, during normalization.
        let stop_words: Vec<String> = get(LANGUAGE::English);

        let rake = Rake::new(RakeParams::WithDefaults(text, &stop_words));
        Ok(rake.get_ranked_phrases_scores(self.top_n))
    }
}
