//! Dictionary - the word-validity oracle.
//!
//! [`Dictionary`] answers membership against an immutable local word list.
//! [`FallbackDictionary`] adds a cache-backed remote lookup for words the
//! local list does not know.

mod fallback;
mod lookup;

use std::collections::HashSet;
use std::io;
use std::path::Path;

pub use fallback::{cache_key, FallbackDictionary, CACHE_TTL};
#[cfg(feature = "http")]
pub use lookup::HttpWordLookup;
pub use lookup::{LookupOutcome, WordLookup};

const BUILTIN_WORDS: &str = include_str!("words.txt");

/// An immutable, case-insensitive set of valid words.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: HashSet<String>,
}

impl Dictionary {
    /// Build a dictionary from any list of words. Words are trimmed and
    /// lowercased; blank entries are skipped.
    pub fn new<I, W>(words: I) -> Self
    where
        I: IntoIterator<Item = W>,
        W: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        Self { words }
    }

    /// Parse a whitespace-separated word list. Lines starting with `#` are comments.
    pub fn from_word_list(text: &str) -> Self {
        Self::new(
            text.lines()
                .filter(|line| !line.trim_start().starts_with('#'))
                .flat_map(str::split_whitespace),
        )
    }

    /// The word list bundled with the crate.
    pub fn builtin() -> Self {
        Self::from_word_list(BUILTIN_WORDS)
    }

    /// Load a word list file.
    pub fn load(path: impl AsRef<Path>) -> io::Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Ok(Self::from_word_list(&text))
    }

    /// Case-insensitive membership test.
    pub fn is_valid_word(&self, word: &str) -> bool {
        self.words.contains(&word.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterate over the (lowercase) words in no particular order.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}
