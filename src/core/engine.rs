use crate::config::Config;
use crate::core::converter::{cyrillic_to_latin_into, latin_to_cyrillic_into, may_chain};
use crate::core::tokenizer::tokenize;
use crate::core::types::Direction;
use crate::error::{Error, Result};
use crate::lexicon::Lexicon;
use std::fmt;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, info, trace};

/// Receives the elapsed time of each call when `benchmark` is enabled.
pub type TimingHook = Arc<dyn Fn(Direction, Duration) + Send + Sync>;

/// A configured Latin/Cyrillic transliterator.
///
/// Holds no mutable state; one instance can serve any number of threads.
#[derive(Clone)]
pub struct Transliterator {
    config: Config,
    lexicon: Lexicon,
    timing_hook: TimingHook,
}

impl Transliterator {
    /// Builds an engine from `config` with the built-in lexicon.
    pub fn new(config: Config) -> Self {
        Self::with_lexicon(config, Lexicon::builtin())
    }

    pub fn with_lexicon(config: Config, lexicon: Lexicon) -> Self {
        debug!(
            extended_script = config.extended_script_tokenization,
            benchmark = config.benchmark,
            "transliterator created"
        );
        Self {
            config,
            lexicon,
            timing_hook: Arc::new(log_timing),
        }
    }

    /// Replaces the default timing hook, which logs through `tracing`.
    pub fn with_timing_hook<F>(mut self, hook: F) -> Self
    where
        F: Fn(Direction, Duration) + Send + Sync + 'static,
    {
        self.timing_hook = Arc::new(hook);
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    pub fn to_cyrillic(&self, text: &str) -> String {
        self.transliterate(text, Direction::LatinToCyrillic)
    }

    pub fn to_latin(&self, text: &str) -> String {
        self.transliterate(text, Direction::CyrillicToLatin)
    }

    pub fn transliterate(&self, text: &str, direction: Direction) -> String {
        let started = self.config.benchmark.then(Instant::now);

        let mut out = String::with_capacity(text.len() * 2);
        for token in tokenize(text, self.config.extended_script_tokenization) {
            self.convert_token(token.text, direction, &mut out);
        }

        if let Some(start) = started {
            (self.timing_hook)(direction, start.elapsed());
        }
        out
    }

    /// Like [`transliterate`](Self::transliterate) for raw bytes, which must be UTF-8.
    pub fn transliterate_bytes(&self, bytes: &[u8], direction: Direction) -> Result<String> {
        let text = std::str::from_utf8(bytes)
            .map_err(|e| Error::InvalidArgument(format!("input is not UTF-8: {e}")))?;
        Ok(self.transliterate(text, direction))
    }

    fn convert_token(&self, token: &str, direction: Direction, out: &mut String) {
        if let Some(replacement) = self.lexicon.overrides(direction).resolve_override(token) {
            trace!(%token, %replacement, %direction, "word override");
            out.push_str(replacement);
            return;
        }
        if token.trim().is_empty() {
            out.push_str(token);
            return;
        }

        match direction {
            Direction::LatinToCyrillic => {
                let chaining =
                    may_chain(token) && self.lexicon.suppression().allows_chaining(token);
                latin_to_cyrillic_into(token, chaining, out);
            }
            Direction::CyrillicToLatin => cyrillic_to_latin_into(token, out),
        }
    }
}

impl Default for Transliterator {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl fmt::Debug for Transliterator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transliterator")
            .field("config", &self.config)
            .field("timing_hook", &"<function>")
            .finish_non_exhaustive()
    }
}

fn log_timing(direction: Direction, elapsed: Duration) {
    info!(%direction, elapsed_us = elapsed.as_micros() as u64, "transliteration time");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn overrides_win_over_mapping() {
        let t = Transliterator::default();
        assert_eq!(t.to_cyrillic("Koristim JQUERY plugin"), "Користим jQuery plugin");
        assert_eq!(t.to_latin("Ћир и мир"), "Ћир i mir");
    }

    #[test]
    fn overrides_match_whole_tokens_only() {
        let t = Transliterator::default();
        assert_eq!(t.to_cyrillic("plugins"), "плугинс");
    }

    #[test]
    fn whitespace_tokens_are_untouched() {
        let t = Transliterator::default();
        assert_eq!(t.to_cyrillic(" \t\n"), " \t\n");
        assert_eq!(t.to_cyrillic(""), "");
    }

    #[test]
    fn delimiter_tokens_are_still_mapped() {
        let t = Transliterator::with_lexicon(
            Config { extended_script_tokenization: false, ..Config::default() },
            Lexicon::builtin(),
        );
        // Cyrillic is a delimiter here, but its letters are still converted.
        assert_eq!(t.to_latin("мир, свете"), "mir, svete");
        // The override no longer sees "ћир" as a word of its own.
        assert_eq!(t.to_latin("ћир и мир"), "ćir i mir");
    }

    #[test]
    fn timing_hook_runs_only_when_benchmarking() {
        let calls = Arc::new(AtomicUsize::new(0));

        let counter = Arc::clone(&calls);
        let quiet = Transliterator::default().with_timing_hook(move |_, _| {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        quiet.to_cyrillic("ljubav");
        assert_eq!(calls.load(Ordering::SeqCst), 0);

        let counter = Arc::clone(&calls);
        let timed = Transliterator::with_lexicon(
            Config { benchmark: true, ..Config::default() },
            Lexicon::builtin(),
        )
        .with_timing_hook(move |direction, _| {
            assert_eq!(direction, Direction::LatinToCyrillic);
            counter.fetch_add(1, Ordering::SeqCst);
        });
        assert_eq!(timed.to_cyrillic("ljubav"), quiet.to_cyrillic("ljubav"));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn invalid_utf8_is_invalid_argument() {
        let t = Transliterator::default();
        let err = t.transliterate_bytes(&[0x66, 0xff], Direction::LatinToCyrillic).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
        assert_eq!(
            t.transliterate_bytes("nj".as_bytes(), Direction::LatinToCyrillic).unwrap(),
            "њ"
        );
    }
}
