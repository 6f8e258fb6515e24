//! FallbackDictionary - local word list first, then a cached remote lookup.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, warn};

use super::lookup::{LookupOutcome, WordLookup};
use super::Dictionary;
use crate::store::KeyValueStore;

/// How long a definitive remote answer stays cached.
pub const CACHE_TTL: Duration = Duration::from_secs(30 * 24 * 60 * 60);

const CACHE_PREFIX: &str = "word:valid:";

/// Cache key for a word's remote validity.
pub fn cache_key(word: &str) -> String {
    format!("{}{}", CACHE_PREFIX, word.to_lowercase())
}

/// A [`Dictionary`] that consults a cache and then a remote service for
/// words missing from the local list.
///
/// Remote failures never surface as errors: they reject the word for this
/// call and leave the cache untouched so the next call retries.
pub struct FallbackDictionary<K, L> {
    local: Dictionary,
    cache: Arc<K>,
    lookup: L,
}

impl<K: KeyValueStore, L: WordLookup> FallbackDictionary<K, L> {
    pub fn new(local: Dictionary, cache: Arc<K>, lookup: L) -> Self {
        Self {
            local,
            cache,
            lookup,
        }
    }

    /// The local word list.
    pub fn local(&self) -> &Dictionary {
        &self.local
    }

    /// Local membership only; never touches the cache or the network.
    pub fn is_valid_word(&self, word: &str) -> bool {
        self.local.is_valid_word(word)
    }

    /// Local membership, then cache, then remote lookup.
    ///
    /// At most one cache write, and only for a definitive remote answer.
    pub async fn is_valid_word_with_fallback(&self, word: &str) -> bool {
        if self.local.is_valid_word(word) {
            return true;
        }

        let key = cache_key(word);
        match self.cache.get(&key).await {
            Ok(Some(cached)) => match cached.as_str() {
                "true" => return true,
                "false" => return false,
                other => warn!(word, cached = other, "ignoring unexpected cached word validity"),
            },
            Ok(None) => {}
            Err(e) => warn!(word, error = %e, "word cache read failed"),
        }

        let valid = match self.lookup.lookup(word).await {
            LookupOutcome::Found => true,
            LookupOutcome::NotFound => false,
            LookupOutcome::Unavailable(reason) => {
                warn!(word, %reason, "remote word lookup unavailable, rejecting word");
                return false;
            }
        };

        debug!(word, valid, "caching remote word lookup");
        let value = if valid { "true" } else { "false" };
        if let Err(e) = self.cache.set(&key, value, Some(CACHE_TTL)).await {
            warn!(word, error = %e, "word cache write failed");
        }
        valid
    }
}
