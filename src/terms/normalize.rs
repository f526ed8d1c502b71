// Term normalization: turning a noisy tag segment into a canonical label.
//
// Bibliography exports are messy: asterisk emphasis markers, trailing
// "/*qualifier" annotations, parenthetical citations, mixed case. The
// normalizer strips all of that, then filters tokens hard enough that what
// survives is domain vocabulary rather than scientific boilerplate.

use std::sync::Arc;

use regex_lite::Regex;

use crate::vocab::Vocabulary;

/// Token length bounds. Shorter tokens are connective tissue ("of", "in"),
/// longer ones are almost always concatenation noise from the export.
const MIN_TOKEN_LEN: usize = 3;
const MAX_TOKEN_LEN: usize = 20;

/// Cleans raw tag/keyword segments into canonical term labels.
///
/// The regexes are compiled once here; `normalize` is called for every
/// segment of every record in the corpus.
pub struct TermNormalizer {
    vocab: Arc<Vocabulary>,
    edge_asterisks: Regex,
    annotation_tail: Regex,
    bracketed: Regex,
}

impl TermNormalizer {
    pub fn new(vocab: Arc<Vocabulary>) -> Self {
        Self {
            vocab,
            edge_asterisks: Regex::new(r"^\*+|\*+$").unwrap(),
            annotation_tail: Regex::new(r"/\*.*").unwrap(),
            bracketed: Regex::new(r"\[.*?\]|\(.*?\)").unwrap(),
        }
    }

    /// Normalize a raw segment into a canonical term label.
    ///
    /// Returns `None` when nothing survives filtering; a normalized term is
    /// never the empty string. Each cleanup step narrows the candidate, so
    /// the order is fixed: strip markers, drop the annotation tail, remove
    /// bracketed runs, then lowercase and filter token by token.
    pub fn normalize(&self, raw: &str) -> Option<String> {
        let raw = raw.trim();
        if raw.is_empty() {
            return None;
        }

        let stripped = self.edge_asterisks.replace_all(raw, "");
        let stripped = self.annotation_tail.replace_all(&stripped, "");
        let stripped = self.bracketed.replace_all(&stripped, "");
        // Dropping a trailing parenthetical can expose another marker run
        // at the edge ("*Term* (2023)"), so strip once more.
        let stripped = self.edge_asterisks.replace_all(stripped.trim(), "");

        let lowered = stripped.to_lowercase();
        let kept: Vec<&str> = lowered
            .split_whitespace()
            .filter(|word| self.keep_token(word))
            .collect();

        if kept.is_empty() {
            return None;
        }

        Some(title_case(&kept))
    }

    /// Token filter: length bounds, stopword set, pure numbers, and a strict
    /// character set (lowercase letters and hyphens only).
    fn keep_token(&self, word: &str) -> bool {
        let len = word.chars().count();
        if !(MIN_TOKEN_LEN..=MAX_TOKEN_LEN).contains(&len) {
            return false;
        }
        if self.vocab.is_stopword(word) {
            return false;
        }
        if word.chars().all(|c| c.is_ascii_digit()) {
            return false;
        }
        word.chars().all(|c| c.is_ascii_lowercase() || c == '-')
    }
}

/// Uppercase the first letter of each word, leaving the rest lowercase.
/// Hyphenated compounds keep a single capital: "cgrp-related" becomes
/// "Cgrp-related", not "Cgrp-Related".
fn title_case(words: &[&str]) -> String {
    words
        .iter()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => format!("{}{}", first.to_ascii_uppercase(), chars.as_str()),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
