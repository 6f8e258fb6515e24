//! InMemoryStore - HashMap-backed store for testing and single-process deployments.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};
use std::time::{Duration, Instant};

use async_trait::async_trait;

use super::{KeyValueStore, Order, RankedMember, RankedSet, StoreError};

/// Internal stored representation of a string value.
struct StoredValue {
    value: String,
    expires_at: Option<Instant>,
}

impl StoredValue {
    fn is_live(&self, now: Instant) -> bool {
        self.expires_at.map_or(true, |at| now < at)
    }
}

/// Internal stored representation of a ranked-set member.
#[derive(Clone)]
struct StoredMember {
    member: String,
    score: i64,
    seq: u64,
}

/// In-memory store backed by HashMaps.
///
/// Clone-friendly via Arc: clones share the same data. Expired values are
/// dropped lazily, when a read or write touches the key. Keys that are never
/// touched again stay in memory.
#[derive(Clone)]
pub struct InMemoryStore {
    values: Arc<RwLock<HashMap<String, StoredValue>>>,
    sets: Arc<RwLock<HashMap<String, Vec<StoredMember>>>>,
    seq: Arc<AtomicU64>,
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self {
            values: Arc::new(RwLock::new(HashMap::new())),
            sets: Arc::new(RwLock::new(HashMap::new())),
            seq: Arc::new(AtomicU64::new(0)),
        }
    }

    fn poisoned<T>(_: T) -> StoreError {
        StoreError::Storage("lock poisoned".into())
    }
}

#[async_trait]
impl KeyValueStore for InMemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let now = Instant::now();
        {
            let values = self.values.read().map_err(Self::poisoned)?;
            match values.get(key) {
                None => return Ok(None),
                Some(stored) if stored.is_live(now) => return Ok(Some(stored.value.clone())),
                Some(_) => {}
            }
        }

        let mut values = self.values.write().map_err(Self::poisoned)?;
        if values.get(key).is_some_and(|stored| !stored.is_live(now)) {
            values.remove(key);
        }
        Ok(None)
    }

    async fn set(&self, key: &str, value: &str, ttl: Option<Duration>) -> Result<(), StoreError> {
        let mut values = self.values.write().map_err(Self::poisoned)?;
        values.insert(
            key.to_string(),
            StoredValue {
                value: value.to_string(),
                expires_at: ttl.map(|ttl| Instant::now() + ttl),
            },
        );
        Ok(())
    }

    async fn set_if_absent(&self, key: &str, value: &str) -> Result<bool, StoreError> {
        let mut values = self.values.write().map_err(Self::poisoned)?;
        let now = Instant::now();
        if values.get(key).is_some_and(|stored| stored.is_live(now)) {
            return Ok(false);
        }
        values.insert(
            key.to_string(),
            StoredValue {
                value: value.to_string(),
                expires_at: None,
            },
        );
        Ok(true)
    }

    async fn del(&self, key: &str) -> Result<bool, StoreError> {
        let mut values = self.values.write().map_err(Self::poisoned)?;
        let now = Instant::now();
        Ok(values.remove(key).is_some_and(|stored| stored.is_live(now)))
    }
}

#[async_trait]
impl RankedSet for InMemoryStore {
    async fn add(&self, key: &str, member: &str, score: i64) -> Result<(), StoreError> {
        let seq = self.seq.fetch_add(1, Ordering::SeqCst);
        let mut sets = self.sets.write().map_err(Self::poisoned)?;
        let members = sets.entry(key.to_string()).or_default();
        members.retain(|m| m.member != member);
        members.push(StoredMember {
            member: member.to_string(),
            score,
            seq,
        });
        Ok(())
    }

    async fn range(
        &self,
        key: &str,
        start: usize,
        stop: usize,
        order: Order,
    ) -> Result<Vec<RankedMember>, StoreError> {
        let sets = self.sets.read().map_err(Self::poisoned)?;
        let mut members = match sets.get(key) {
            Some(members) => members.clone(),
            None => return Ok(Vec::new()),
        };
        drop(sets);

        // Highest score first, earlier submission first on ties.
        members.sort_by(|a, b| b.score.cmp(&a.score).then(a.seq.cmp(&b.seq)));
        if order == Order::Ascending {
            members.reverse();
        }

        if start > stop {
            return Ok(Vec::new());
        }
        Ok(members
            .into_iter()
            .skip(start)
            .take((stop - start).saturating_add(1))
            .map(|m| RankedMember {
                member: m.member,
                score: m.score,
            })
            .collect())
    }

    async fn cardinality(&self, key: &str) -> Result<usize, StoreError> {
        let sets = self.sets.read().map_err(Self::poisoned)?;
        Ok(sets.get(key).map_or(0, Vec::len))
    }
}
