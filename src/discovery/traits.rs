// Phrase extractor trait: swap-ready abstraction.
//
// Discovery treats the extractor as an external collaborator: anything that
// can turn free text into ranked candidate phrases fits behind this trait.
// The default implementation uses RAKE; statistical or model-based
// extractors can be swapped in without touching the discovery pipeline.

use anyhow::Result;

/// Trait for unsupervised extraction of candidate phrases from free text.
pub trait PhraseExtractor {
    /// Extract ranked `(phrase, score)` candidates from one text.
    /// An empty result is a normal outcome for short or uniform text.
    fn extract(&self, text: &str) -> Result<Vec<(String, f32)>>;
}
