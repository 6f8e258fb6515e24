//! Store - Key-value and ranked-set persistence used by the game service.
//!
//! The core never owns shared mutable state. Paths, completion flags, the
//! first-solve marker, the word-validity cache and the daily leaderboard all
//! live behind these traits so a Redis-like backend can be swapped in.
//!
//! ## Example
//!
//! ```ignore
//! use wordclimb::store::{InMemoryStore, KeyValueStore, Order, RankedSet};
//!
//! let store = InMemoryStore::new();
//! store.set("player:ana:path", r#"["cold"]"#, None).await?;
//! store.add("leaderboard:2025-01-01", "ana", 1100).await?;
//! let top = store.range("leaderboard:2025-01-01", 0, 9, Order::Descending).await?;
//! ```

mod in_memory;

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;

pub use in_memory::InMemoryStore;

/// Error type for store operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Storage-level error (backend unavailable, lock poisoned, ...).
    Storage(String),
    /// Serialization/deserialization of a stored value failed.
    Serde(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Storage(msg) => write!(f, "store error: {}", msg),
            StoreError::Serde(msg) => write!(f, "store serialization error: {}", msg),
        }
    }
}

impl std::error::Error for StoreError {}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::Serde(err.to_string())
    }
}

/// String key-value storage with optional expiry.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Get a value. Expired entries read as absent.
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Set a value, replacing any previous one. `ttl` of `None` never expires.
    async fn set(&self, key: &str, value: &str, ttl: Option<Duration>) -> Result<(), StoreError>;

    /// Atomically set a value only if the key is absent.
    /// Returns `true` if this call wrote the value.
    async fn set_if_absent(&self, key: &str, value: &str) -> Result<bool, StoreError>;

    /// Delete a key. Returns true if it existed.
    async fn del(&self, key: &str) -> Result<bool, StoreError>;
}

/// Sort direction for [`RankedSet::range`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Order {
    Ascending,
    Descending,
}

/// A member of a ranked set with its score.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedMember {
    pub member: String,
    pub score: i64,
}

/// Sorted sets keyed by name, ordered by score.
///
/// Equal scores are ordered by submission: in descending order the member
/// whose score was added first comes first. Ascending order is the exact
/// reverse of descending order.
#[async_trait]
pub trait RankedSet: Send + Sync {
    /// Add a member or replace its score. Replacing counts as a new submission.
    async fn add(&self, key: &str, member: &str, score: i64) -> Result<(), StoreError>;

    /// Members at positions `start..=stop` in the given order.
    async fn range(
        &self,
        key: &str,
        start: usize,
        stop: usize,
        order: Order,
    ) -> Result<Vec<RankedMember>, StoreError>;

    /// Number of members in the set.
    async fn cardinality(&self, key: &str) -> Result<usize, StoreError>;
}
