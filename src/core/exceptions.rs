// src/core/exceptions.rs
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Whole-word overrides for one direction, keyed by the lowercased word.
///
/// An empty value marks a word that is left as written; any other value is
/// emitted verbatim whatever the casing of the input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverrideTable {
    entries: HashMap<String, String>,
}

impl OverrideTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_pairs(pairs: &[(&str, &str)]) -> Self {
        let mut table = Self::new();
        for &(word, replacement) in pairs {
            table.insert(word, replacement);
        }
        table
    }

    pub fn insert(&mut self, word: &str, replacement: &str) {
        self.entries.insert(word.to_lowercase(), replacement.to_string());
    }

    pub fn is_overridden(&self, word: &str) -> bool {
        self.entries.contains_key(&word.to_lowercase())
    }

    /// Replacement for `word`, or `None` if it has no override.
    pub fn resolve_override<'a>(&'a self, word: &'a str) -> Option<&'a str> {
        let value = self.entries.get(&word.to_lowercase())?;
        if value.is_empty() {
            Some(word)
        } else {
            Some(value)
        }
    }
}
