// src/lexicon.rs
use crate::core::chaining::ChainSuppression;
use crate::core::exceptions::OverrideTable;
use crate::core::tables;
use crate::core::types::Direction;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// The lexical exceptions an engine consults: one override table per
/// direction plus the chaining suppression rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lexicon {
    latin_overrides: OverrideTable,
    cyrillic_overrides: OverrideTable,
    suppression: ChainSuppression,
}

impl Lexicon {
    /// The compiled-in lists.
    pub fn builtin() -> Self {
        Self {
            latin_overrides: OverrideTable::from_pairs(tables::LATIN_OVERRIDES),
            cyrillic_overrides: OverrideTable::from_pairs(tables::CYRILLIC_OVERRIDES),
            suppression: ChainSuppression::from_lists(
                tables::CHAIN_SUPPRESSED_SUBSTRINGS,
                tables::CHAIN_SUPPRESSED_WORDS,
            ),
        }
    }

    /// No exceptions at all; every word goes through the mapping tables.
    pub fn empty() -> Self {
        Self {
            latin_overrides: OverrideTable::new(),
            cyrillic_overrides: OverrideTable::new(),
            suppression: ChainSuppression::new(),
        }
    }

    /// Overrides consulted for tokens in the source script of `direction`.
    pub fn overrides(&self, direction: Direction) -> &OverrideTable {
        match direction {
            Direction::LatinToCyrillic => &self.latin_overrides,
            Direction::CyrillicToLatin => &self.cyrillic_overrides,
        }
    }

    pub fn suppression(&self) -> &ChainSuppression {
        &self.suppression
    }

    /// Adds a whole-word override. An empty `replacement` keeps the word as written.
    pub fn add_override(&mut self, direction: Direction, word: &str, replacement: &str) -> Result<()> {
        let word = non_empty(word, "override word")?;
        let table = match direction {
            Direction::LatinToCyrillic => &mut self.latin_overrides,
            Direction::CyrillicToLatin => &mut self.cyrillic_overrides,
        };
        table.insert(word, replacement);
        Ok(())
    }

    pub fn add_suppressed_substring(&mut self, stem: &str) -> Result<()> {
        self.suppression.add_substring(non_empty(stem, "suppressed substring")?);
        Ok(())
    }

    pub fn add_suppressed_word(&mut self, word: &str) -> Result<()> {
        self.suppression.add_word(non_empty(word, "suppressed word")?);
        Ok(())
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::builtin()
    }
}

// Tokens never contain whitespace, so entries are stored trimmed. An empty
// stem would be contained in every word and disable chaining globally.
fn non_empty<'a>(s: &'a str, what: &str) -> Result<&'a str> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        Err(Error::InvalidArgument(format!("{what} must not be empty")))
    } else {
        Ok(trimmed)
    }
}
