// src/core/chaining.rs
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Words in which Latin letter pairs must never collapse into one
/// Cyrillic letter. Only consulted when converting to Cyrillic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainSuppression {
    substrings: BTreeSet<String>,
    words: BTreeSet<String>,
}

impl ChainSuppression {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_lists(substrings: &[&str], words: &[&str]) -> Self {
        let mut rule = Self::new();
        for s in substrings {
            rule.add_substring(s);
        }
        for w in words {
            rule.add_word(w);
        }
        rule
    }

    pub fn add_substring(&mut self, stem: &str) {
        self.substrings.insert(stem.to_lowercase());
    }

    pub fn add_word(&mut self, word: &str) {
        self.words.insert(word.to_lowercase());
    }

    pub fn allows_chaining(&self, word: &str) -> bool {
        let lower = word.to_lowercase();
        if self.words.contains(&lower) {
            return false;
        }
        !self.substrings.iter().any(|stem| lower.contains(stem.as_str()))
    }
}
