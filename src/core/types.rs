// src/core/types.rs
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which script is the source for a given call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    LatinToCyrillic,
    CyrillicToLatin,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::LatinToCyrillic => f.write_str("latin-to-cyrillic"),
            Direction::CyrillicToLatin => f.write_str("cyrillic-to-latin"),
        }
    }
}

/// Result of a single-character table lookup.
///
/// A character with no entry at all is not a `Mapping`; it passes through
/// unchanged. `Drop` means the character has an entry but no counterpart
/// in the destination script (q, w, x, y).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mapping {
    To(&'static str),
    Drop,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Word,
    Delimiter,
}

/// A slice of the input, either a maximal run of word characters or a
/// maximal run of everything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
}

impl<'a> Token<'a> {
    pub fn word(text: &'a str) -> Self {
        Self { kind: TokenKind::Word, text }
    }

    pub fn delimiter(text: &'a str) -> Self {
        Self { kind: TokenKind::Delimiter, text }
    }
}
