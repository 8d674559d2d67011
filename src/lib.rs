// src/lib.rs
//! Latin/Cyrillic transliteration for Serbian text.
//!
//! ```
//! use translit_core::Transliterator;
//!
//! let t = Transliterator::default();
//! assert_eq!(t.to_cyrillic("Ljubljana"), "Љубљана");
//! assert_eq!(t.to_latin("Њујорк"), "Njujork");
//! ```

pub mod c_api;
pub mod config;
pub mod core;
pub mod error;
pub mod lexicon;

pub use crate::config::Config;
pub use crate::core::engine::{TimingHook, Transliterator};
pub use crate::core::tokenizer::tokenize;
pub use crate::core::types::{Direction, Token, TokenKind};
pub use crate::error::{Error, Result};
pub use crate::lexicon::Lexicon;
