// Unit tests for term normalization and classification.
//
// Tests the two pure stages of the pipeline in isolation: the normalizer's
// cleanup/filter/title-case contract and the classifier's priority-ordered
// rule matching.

use std::sync::Arc;

use aura::terms::classify::TermClassifier;
use aura::terms::normalize::TermNormalizer;
use aura::vocab::{Category, Vocabulary};

fn vocab() -> Arc<Vocabulary> {
    Arc::new(Vocabulary::curated())
}

// ============================================================
// TermNormalizer: cleanup and filtering
// ============================================================

#[test]
fn normalize_strips_markers_and_parentheticals() {
    let n = TermNormalizer::new(vocab());
    assert_eq!(
        n.normalize("*CGRP-Related Migraine* (2023)"),
        Some("Cgrp-related Migraine".to_string())
    );
}

#[test]
fn normalize_drops_annotation_suffix() {
    let n = TermNormalizer::new(vocab());
    assert_eq!(
        n.normalize("Migraine Disorders/*drug therapy"),
        Some("Migraine Disorders".to_string())
    );
}

#[test]
fn normalize_stopword_only_inputs_are_absent() {
    let n = TermNormalizer::new(vocab());
    // Every token is a stopword or below the length floor, so nothing
    // survives and the result is absence, never an empty string.
    for raw in ["study", "the and or", "study of the patient", "a an is"] {
        assert_eq!(n.normalize(raw), None, "expected absence for {raw:?}");
    }
}

#[test]
fn normalize_never_returns_empty_string() {
    let n = TermNormalizer::new(vocab());
    for raw in ["", "  ", "study", "12 34", "()", "***"] {
        match n.normalize(raw) {
            None => {}
            Some(term) => assert!(!term.is_empty(), "empty term from {raw:?}"),
        }
    }
}

#[test]
fn normalize_digit_tokens_never_survive() {
    let n = TermNormalizer::new(vocab());
    for raw in ["migraine 2023", "123 depression", "2024"] {
        if let Some(term) = n.normalize(raw) {
            assert!(
                !term.split(' ').any(|w| w.chars().all(|c| c.is_ascii_digit())),
                "digit token survived in {term:?}"
            );
        }
    }
}

#[test]
fn normalize_is_idempotent() {
    let n = TermNormalizer::new(vocab());
    for raw in [
        "*CGRP-Related Migraine* (2023)",
        "Quality of Life",
        "chronic pain",
        "Depression [MeSH]",
    ] {
        let once = n.normalize(raw).unwrap();
        assert_eq!(n.normalize(&once), Some(once.clone()), "not idempotent: {raw:?}");
    }
}

#[test]
fn normalize_title_cases_per_word() {
    let n = TermNormalizer::new(vocab());
    assert_eq!(
        n.normalize("cortical spreading depression"),
        Some("Cortical Spreading Depression".to_string())
    );
    // Hyphenated compounds keep a single capital
    assert_eq!(n.normalize("cgrp-related"), Some("Cgrp-related".to_string()));
}

// ============================================================
// TermClassifier: priority order
// ============================================================

#[test]
fn classify_research_methods_beat_category_keywords() {
    let c = TermClassifier::new(vocab());
    // "stress" is a trigger keyword, but "meta analysis" is a research
    // method and the exclusion rule runs first.
    assert_eq!(
        c.classify("Stress Meta Analysis"),
        Category::ResearchMethods
    );
    assert_eq!(
        c.classify("Depression Cohort Study"),
        Category::ResearchMethods
    );
}

#[test]
fn classify_category_order_is_fixed() {
    let c = TermClassifier::new(vocab());
    // "inflammatory bowel" is a comorbidity keyword, but "inflammatory"
    // is a trigger keyword and trigger_mechanisms is checked first.
    assert_eq!(
        c.classify("Inflammatory Bowel"),
        Category::TriggerMechanisms
    );
}

#[test]
fn classify_substring_not_token_equality() {
    let c = TermClassifier::new(vocab());
    assert_eq!(c.classify("Vascular Risk"), Category::TriggerMechanisms);
    assert_eq!(c.classify("Poststroke"), Category::TrueComorbidities);
}

#[test]
fn classify_fallback_cues_fire_after_keywords() {
    let c = TermClassifier::new(vocab());
    assert_eq!(c.classify("Attack Pathophysiology"), Category::TriggerMechanisms);
    assert_eq!(c.classify("Caregiver Burden"), Category::SocialImpact);
    assert_eq!(c.classify("Prophylactic Medication"), Category::Interventions);
}

#[test]
fn classify_unknown_terms_are_unclassified() {
    let c = TermClassifier::new(vocab());
    assert_eq!(c.classify("Zebrafish Genome"), Category::Unclassified);
}

#[test]
fn excluded_categories_are_flagged() {
    assert!(Category::ResearchMethods.is_excluded());
    assert!(Category::Unclassified.is_excluded());
    assert!(!Category::TriggerMechanisms.is_excluded());
    assert!(!Category::Interventions.is_excluded());
}

// ============================================================
// Normalize + classify chained
// ============================================================

#[test]
fn noisy_tag_segment_normalizes_then_classifies() {
    let n = TermNormalizer::new(vocab());
    let c = TermClassifier::new(vocab());

    let term = n.normalize("*Depression* (major)").unwrap();
    assert_eq!(term, "Depression");
    assert_eq!(c.classify(&term), Category::TrueComorbidities);
}

#[test]
fn research_method_tags_survive_normalization_then_get_excluded() {
    let n = TermNormalizer::new(vocab());
    let c = TermClassifier::new(vocab());

    let term = n.normalize("Randomized Controlled Trial").unwrap();
    assert_eq!(c.classify(&term), Category::ResearchMethods);
    assert!(c.classify(&term).is_excluded());
}
