// Curated vocabulary tables.
//
// These lists are domain knowledge encoded as data: hand-authored from the
// migraine literature, extended over time as review of discovered terms
// surfaced new vocabulary. They are compiled into the binary and never
// change at runtime.

/// Filler vocabulary of scientific writing. Terms made only of these words
/// carry no domain signal and are rejected during normalization.
pub(super) const MEDICAL_STOPWORDS: &[&str] = &[
    "study",
    "studies",
    "research",
    "analysis",
    "effect",
    "effects",
    "patient",
    "patients",
    "group",
    "groups",
    "method",
    "methods",
    "result",
    "results",
    "conclusion",
    "conclusions",
    "objective",
    "background",
    "aim",
    "purpose",
    "significance",
    "review",
    "article",
    "paper",
    "their",
    "with",
    "the",
    "and",
    "or",
    "for",
    "from",
    "this",
    "that",
    "these",
    "those",
    "which",
    "what",
    "when",
    "where",
    "how",
    "why",
    "has",
    "have",
    "had",
    "was",
    "were",
    "is",
    "are",
    "be",
    "been",
    "being",
    "can",
    "could",
    "would",
    "should",
    "may",
    "might",
    "must",
    "author",
    "theory",
    "model",
    "system",
    "process",
    "approach",
    "perspective",
    "overview",
    "summary",
    "current",
    "future",
    "recent",
    "new",
    "novel",
    "various",
];

/// Trigger mechanism vocabulary: neural, vascular, hormonal, inflammatory,
/// and environmental pathways.
pub(super) const TRIGGER_KEYWORDS: &[&str] = &[
    // Neural mechanisms
    "trigeminal",
    "trigeminovascular",
    "cortical spreading depression",
    "central sensitization",
    "neurogenic inflammation",
    "neural mechanism",
    // Vascular mechanisms
    "vascular",
    "cerebral blood flow",
    "vasodilation",
    "vasoconstriction",
    // Hormonal mechanisms
    "hormonal",
    "estrogen",
    "progesterone",
    "menstrual",
    "menopause",
    // Inflammatory mechanisms
    "inflammatory",
    "cytokines",
    "neuroinflammation",
    "mast cells",
    // Environmental triggers
    "stress",
    "sleep deprivation",
    "weather",
    "barometric",
    "light sensitivity",
    // Added after discovery review
    "occipital nerve",
    "vestibular",
    "brainstem",
];

/// Comorbidity vocabulary, restricted to conditions with established
/// bidirectional association (not mere co-mention).
pub(super) const COMORBIDITY_KEYWORDS: &[&str] = &[
    // Psychiatric conditions
    "depression",
    "anxiety",
    "panic disorder",
    "bipolar",
    "ptsd",
    // Neurological conditions
    "epilepsy",
    "stroke",
    "restless legs",
    "parkinson",
    "alzheimer",
    // Pain conditions
    "fibromyalgia",
    "chronic pain",
    "neuropathic pain",
    // Autoimmune/allergic conditions
    "allergic rhinitis",
    "asthma",
    "irritable bowel",
    "inflammatory bowel",
    // Sleep disorders
    "insomnia",
    "sleep apnea",
    "circadian rhythm",
    // Cardiovascular conditions
    "hypertension",
    "patent foramen ovale",
    "stroke risk",
    // Added after discovery review
    "vestibular migraine",
    "cluster headache",
    "tension type headache",
    "tth",
    "medication overuse headache",
    "moh",
    "restless legs syndrome",
    "rls",
];

pub(super) const SOCIAL_IMPACT_KEYWORDS: &[&str] = &[
    "quality of life",
    "disability",
    "work productivity",
    "absenteeism",
    "presenteeism",
    "economic burden",
    "healthcare cost",
    "stigma",
    "social isolation",
    "family burden",
    "daily functioning",
    // Added after discovery review
    "emergency department",
    "headache days",
    "monthly migraine days",
    "hospitalization",
];

pub(super) const INTERVENTION_KEYWORDS: &[&str] = &[
    // Medications
    "triptans",
    "cgrp",
    "erenumab",
    "fremanezumab",
    "galcanezumab",
    "propranolol",
    "topiramate",
    "amitriptyline",
    "valproate",
    "botulinum",
    // Non-pharmacological
    "cognitive behavioral therapy",
    "biofeedback",
    "acupuncture",
    "physical therapy",
    "relaxation",
    "mindfulness",
    "yoga",
    // Lifestyle modifications
    "diet",
    "exercise",
    "sleep hygiene",
    "stress management",
    "neuromodulation",
    "monoclonal antibodies",
    "gene therapy",
    // Added after discovery review
    "nerve stimulation",
    "transcranial magnetic",
    "tms",
    "pfo closure",
    "calcitonin gene-related",
    "cgrp receptor",
    "gepants",
    "lasmiditan",
];

/// Methodology vocabulary. Terms matching these describe how a study was
/// run, not what it was about, and are excluded from the network.
pub(super) const RESEARCH_METHOD_PHRASES: &[&str] = &[
    "randomized controlled trial",
    "cohort study",
    "case control",
    "cross sectional",
    "systematic review",
    "meta analysis",
    "clinical trial",
    "observational study",
    "diagnostic criteria",
    "assessment scale",
    "statistical analysis",
    "epidemiology",
];

// Broader inferential cues, consulted only when no curated keyword matches.
// Deliberately short lists: a single generic word is weak evidence.

pub(super) const TRIGGER_CUES: &[&str] = &[
    "mechanism",
    "pathophysiology",
    "etiology",
    "trigger",
    "sensitization",
];

pub(super) const COMORBIDITY_CUES: &[&str] = &[
    "comorbidity",
    "comorbid",
    "coexisting",
    "associated with",
    // Headache diagnoses themselves sit with the other neurological
    // conditions; cue position keeps curated matches like "monthly
    // migraine days" winning first.
    "migraine",
    "headache",
];

pub(super) const SOCIAL_IMPACT_CUES: &[&str] =
    &["burden", "cost", "productivity", "quality", "disability"];

pub(super) const INTERVENTION_CUES: &[&str] = &[
    "therapy",
    "treatment",
    "medication",
    "management",
    "intervention",
];
