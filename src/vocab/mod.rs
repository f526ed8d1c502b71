// Curated vocabularies as static, read-only configuration.
//
// The stopword set, the per-category keyword lists, and the research-method
// exclusion phrases are process-wide immutable data. A `Vocabulary` is
// assembled once at startup and shared (via Arc) by the normalizer, the
// classifier, and the network builder. Nothing mutates it after load.

mod data;

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Semantic bucket for a normalized term.
///
/// Four real categories plus two excluded sentinels. `ResearchMethods` and
/// `Unclassified` never appear in the final node table; callers filter
/// them out via `is_excluded`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    TriggerMechanisms,
    TrueComorbidities,
    SocialImpact,
    Interventions,
    ResearchMethods,
    Unclassified,
}

impl Category {
    /// The tag written to the Category column of the node table.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::TriggerMechanisms => "trigger_mechanisms",
            Category::TrueComorbidities => "true_comorbidities",
            Category::SocialImpact => "social_impact",
            Category::Interventions => "interventions",
            Category::ResearchMethods => "research_methods",
            Category::Unclassified => "unclassified",
        }
    }

    /// Parse a Category column tag back into a category.
    /// Unknown tags read as `Unclassified`.
    pub fn from_tag(tag: &str) -> Category {
        match tag {
            "trigger_mechanisms" => Category::TriggerMechanisms,
            "true_comorbidities" => Category::TrueComorbidities,
            "social_impact" => Category::SocialImpact,
            "interventions" => Category::Interventions,
            "research_methods" => Category::ResearchMethods,
            _ => Category::Unclassified,
        }
    }

    /// Human-readable description for reports and the detailed node table.
    /// The excluded sentinels describe as "Other".
    pub fn description(&self) -> &'static str {
        match self {
            Category::TriggerMechanisms => "Trigger Mechanisms",
            Category::TrueComorbidities => "True Comorbidities",
            Category::SocialImpact => "Social Impact",
            Category::Interventions => "Interventions",
            Category::ResearchMethods | Category::Unclassified => "Other",
        }
    }

    /// Whether terms in this category are dropped from the network.
    pub fn is_excluded(&self) -> bool {
        matches!(self, Category::ResearchMethods | Category::Unclassified)
    }
}

/// One category's matching vocabulary: the curated keyword list plus the
/// broader inferential cues consulted as a fallback.
pub struct CategoryVocab {
    pub category: Category,
    /// Curated substrings, all lowercase: matching happens on lowercased
    /// terms.
    pub keywords: &'static [&'static str],
    /// Weaker single-word cues, only consulted when no curated keyword in
    /// any category matched.
    pub fallback_cues: &'static [&'static str],
}

/// The full curated vocabulary, assembled once and shared read-only.
pub struct Vocabulary {
    stopwords: HashSet<&'static str>,
    // Declared order matters: classification tries categories in this
    // sequence and the first match wins.
    categories: [CategoryVocab; 4],
    research_methods: &'static [&'static str],
}

impl Vocabulary {
    /// Build the vocabulary from the compiled-in curated tables.
    pub fn curated() -> Self {
        Self {
            stopwords: data::MEDICAL_STOPWORDS.iter().copied().collect(),
            categories: [
                CategoryVocab {
                    category: Category::TriggerMechanisms,
                    keywords: data::TRIGGER_KEYWORDS,
                    fallback_cues: data::TRIGGER_CUES,
                },
                CategoryVocab {
                    category: Category::TrueComorbidities,
                    keywords: data::COMORBIDITY_KEYWORDS,
                    fallback_cues: data::COMORBIDITY_CUES,
                },
                CategoryVocab {
                    category: Category::SocialImpact,
                    keywords: data::SOCIAL_IMPACT_KEYWORDS,
                    fallback_cues: data::SOCIAL_IMPACT_CUES,
                },
                CategoryVocab {
                    category: Category::Interventions,
                    keywords: data::INTERVENTION_KEYWORDS,
                    fallback_cues: data::INTERVENTION_CUES,
                },
            ],
            research_methods: data::RESEARCH_METHOD_PHRASES,
        }
    }

    pub fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.contains(word)
    }

    /// Categories in their declared priority order.
    pub fn categories(&self) -> &[CategoryVocab] {
        &self.categories
    }

    /// Methodology phrases checked (and excluded) before any category.
    pub fn research_methods(&self) -> &[&'static str] {
        self.research_methods
    }
}
