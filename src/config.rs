// src/config.rs
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Options accepted when constructing a [`Transliterator`](crate::Transliterator).
///
/// Unknown keys are rejected so that a misspelt option fails loudly instead
/// of silently changing the output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase", default)]
pub struct Config {
    /// Treat Cyrillic letters as word characters when tokenizing.
    pub extended_script_tokenization: bool,
    /// Time every call and report it to the timing hook.
    pub benchmark: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            extended_script_tokenization: true,
            benchmark: false,
        }
    }
}

impl Config {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::InvalidConfig(e.to_string()))
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }
}
