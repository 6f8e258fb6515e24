//! Game - state shared by the command handlers.
//!
//! Owns the store handle, the fallback dictionary, the catalog and the
//! clock. Per-player progress lives in the store under [`PlayerKeys`];
//! the first-solve marker and the leaderboard are per day.

mod keys;
mod response;

use std::sync::Arc;

use chrono::NaiveDate;
use tracing::{error, warn};

use crate::catalog::{Catalog, Puzzle};
use crate::clock::{Clock, SystemClock};
use crate::dictionary::{Dictionary, FallbackDictionary, WordLookup};
use crate::scoring::{calculate_score, ScoreResult};
use crate::store::{KeyValueStore, Order, RankedSet, StoreError};

pub use keys::{first_solve_key, leaderboard_key, PlayerKeys};
pub use response::{GameResponse, LeaderboardEntry, PlayerState};

pub const DEFAULT_LEADERBOARD_SIZE: usize = 10;

/// Everything the game needs from persistence.
pub trait GameStore: KeyValueStore + RankedSet + 'static {}

impl<T: KeyValueStore + RankedSet + 'static> GameStore for T {}

pub struct Game<S, L> {
    store: Arc<S>,
    words: FallbackDictionary<S, L>,
    catalog: Catalog,
    clock: Box<dyn Clock>,
    leaderboard_size: usize,
}

impl<S: GameStore, L: WordLookup + 'static> Game<S, L> {
    /// A game over the built-in catalog and the system clock. The store
    /// doubles as the word-validity cache.
    pub fn new(store: S, dictionary: Dictionary, lookup: L) -> Self {
        let store = Arc::new(store);
        Self {
            words: FallbackDictionary::new(dictionary, store.clone(), lookup),
            store,
            catalog: Catalog::builtin(),
            clock: Box::new(SystemClock),
            leaderboard_size: DEFAULT_LEADERBOARD_SIZE,
        }
    }

    pub fn with_catalog(mut self, catalog: Catalog) -> Self {
        self.catalog = catalog;
        self
    }

    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    pub fn with_leaderboard_size(mut self, size: usize) -> Self {
        self.leaderboard_size = size;
        self
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn words(&self) -> &FallbackDictionary<S, L> {
        &self.words
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    /// Today's date key and puzzle.
    pub fn todays_puzzle(&self) -> (String, Puzzle) {
        (
            self.clock.today_iso(),
            self.catalog.puzzle_by_date(self.clock.today()),
        )
    }

    /// The saved path, or `[start]` when nothing usable is stored.
    ///
    /// A stored path that does not begin with the puzzle's start word
    /// belongs to some other puzzle and is ignored.
    pub async fn load_path(&self, keys: &PlayerKeys, puzzle: &Puzzle) -> Result<Vec<String>, StoreError> {
        let fresh = || vec![puzzle.start.clone()];
        let Some(stored) = self.store.get(&keys.path).await? else {
            return Ok(fresh());
        };

        let path: Vec<String> = serde_json::from_str(&stored)?;
        match path.first() {
            Some(first) if first.eq_ignore_ascii_case(&puzzle.start) => Ok(path),
            _ => {
                warn!(key = %keys.path, "stored path does not start at today's start word, ignoring");
                Ok(fresh())
            }
        }
    }

    pub async fn save_path(&self, keys: &PlayerKeys, path: &[String]) -> Result<(), StoreError> {
        let encoded = serde_json::to_string(path)?;
        self.store.set(&keys.path, &encoded, None).await
    }

    pub async fn is_completed(&self, keys: &PlayerKeys) -> Result<bool, StoreError> {
        Ok(self.store.get(&keys.completed).await?.as_deref() == Some("true"))
    }

    pub async fn player_state(&self, keys: &PlayerKeys, puzzle: &Puzzle) -> Result<PlayerState, StoreError> {
        let path = self.load_path(keys, puzzle).await?;
        let completed = self.is_completed(keys).await?;
        let score = match self.store.get(&keys.score).await? {
            Some(stored) => Some(serde_json::from_str::<ScoreResult>(&stored)?.score),
            None => None,
        };
        Ok(PlayerState {
            path,
            completed,
            score,
        })
    }

    /// Atomically claim the day's first solve. A store failure counts as
    /// not first.
    pub async fn claim_first_solve(&self, day: &str, player: &str) -> bool {
        match self.store.set_if_absent(&first_solve_key(day), player).await {
            Ok(first) => first,
            Err(e) => {
                warn!(day, player, error = %e, "first-solve marker unavailable");
                false
            }
        }
    }

    /// Persist a completed puzzle and post the score to the day's
    /// leaderboard. The score is written before the completion flag so a
    /// player is never marked complete without one. A leaderboard failure
    /// is logged, not returned.
    pub async fn record_completion(
        &self,
        keys: &PlayerKeys,
        day: &str,
        player: &str,
        score: &ScoreResult,
    ) -> Result<(), StoreError> {
        let encoded = serde_json::to_string(score)?;
        self.store.set(&keys.score, &encoded, None).await?;
        self.store.set(&keys.completed, "true", None).await?;

        let board = leaderboard_key(day);
        if let Err(e) = self.store.add(&board, player, i64::from(score.score)).await {
            error!(%board, player, error = %e, "leaderboard update failed");
        }
        Ok(())
    }

    /// Score a ladder that reached the end word and persist it.
    ///
    /// `path` must already end in the end word. It is saved only after the
    /// completion flag is written: if recording fails, the final word stays
    /// unplayed, the first-solve claim is released and the player can
    /// submit it again.
    pub async fn complete(
        &self,
        keys: &PlayerKeys,
        day: &str,
        player: &str,
        puzzle: &Puzzle,
        path: &[String],
    ) -> Result<ScoreResult, StoreError> {
        let first_solve = self.claim_first_solve(day, player).await;
        let steps = u32::try_from(path.len().saturating_sub(1)).unwrap_or(u32::MAX);
        let score = calculate_score(steps, puzzle.optimal_steps, first_solve);

        if let Err(e) = self.record_completion(keys, day, player, &score).await {
            self.undo_completion(keys, day, first_solve).await;
            return Err(e);
        }

        if let Err(e) = self.save_path(keys, path).await {
            error!(key = %keys.path, error = %e, "completed path not saved");
        }
        Ok(score)
    }

    async fn undo_completion(&self, keys: &PlayerKeys, day: &str, first_solve: bool) {
        if let Err(e) = self.store.del(&keys.score).await {
            warn!(key = %keys.score, error = %e, "partial score not removed");
        }
        if first_solve {
            let marker = first_solve_key(day);
            if let Err(e) = self.store.del(&marker).await {
                warn!(%marker, error = %e, "first-solve claim not released");
            }
        }
    }

    /// Put the path back to `[start]` and forget completion and score.
    pub async fn reset_player(&self, keys: &PlayerKeys, puzzle: &Puzzle) -> Result<(), StoreError> {
        self.save_path(keys, &[puzzle.start.clone()]).await?;
        self.store.del(&keys.completed).await?;
        self.store.del(&keys.score).await?;
        Ok(())
    }

    /// Delete every key of the player's progress.
    pub async fn clear_player(&self, keys: &PlayerKeys) -> Result<(), StoreError> {
        for key in keys.all() {
            self.store.del(key).await?;
        }
        Ok(())
    }

    /// The day's top players and the total number of players.
    pub async fn leaderboard(&self, day: &str) -> Result<(Vec<LeaderboardEntry>, usize), StoreError> {
        let board = leaderboard_key(day);
        let total = self.store.cardinality(&board).await?;
        if total == 0 || self.leaderboard_size == 0 {
            return Ok((Vec::new(), total));
        }

        let top = self
            .store
            .range(&board, 0, self.leaderboard_size - 1, Order::Descending)
            .await?;
        let entries = top
            .into_iter()
            .enumerate()
            .map(|(i, ranked)| LeaderboardEntry {
                username: ranked.member,
                score: ranked.score,
                rank: i + 1,
            })
            .collect();
        Ok((entries, total))
    }
}
