//! Catalog - fixed puzzle definitions and the date → puzzle mapping.
//!
//! Every calendar day maps to one catalog entry: the day-index (days since
//! 1970-01-01) modulo the catalog length. Consecutive days therefore cycle
//! through the catalog in order with a period equal to its size.

use std::fmt;

use chrono::{Datelike, NaiveDate};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// A (start, end, optimal steps) triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PuzzleDefinition {
    pub start: &'static str,
    pub end: &'static str,
    pub optimal_steps: u32,
}

impl PuzzleDefinition {
    pub const fn new(start: &'static str, end: &'static str, optimal_steps: u32) -> Self {
        Self {
            start,
            end,
            optimal_steps,
        }
    }
}

/// Built-in puzzles. Each optimal step count is the true shortest ladder
/// through the built-in word list.
pub const BUILTIN_PUZZLES: &[PuzzleDefinition] = &[
    PuzzleDefinition::new("cold", "warm", 4),
    PuzzleDefinition::new("lead", "gold", 3),
    PuzzleDefinition::new("love", "hate", 4),
    PuzzleDefinition::new("head", "tail", 5),
    PuzzleDefinition::new("bird", "worm", 4),
    PuzzleDefinition::new("kind", "mean", 4),
    PuzzleDefinition::new("fire", "cool", 5),
    PuzzleDefinition::new("boat", "ship", 5),
    PuzzleDefinition::new("seed", "tree", 5),
    PuzzleDefinition::new("fast", "slow", 6),
];

/// A puzzle as handed to players.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Puzzle {
    pub start: String,
    pub end: String,
    #[serde(rename = "optimal")]
    pub optimal_steps: u32,
    /// Day-index for daily puzzles; catalog position for random ones.
    pub number: i64,
}

impl Puzzle {
    fn from_definition(definition: &PuzzleDefinition, number: i64) -> Self {
        Self {
            start: definition.start.to_string(),
            end: definition.end.to_string(),
            optimal_steps: definition.optimal_steps,
            number,
        }
    }

    /// Title of the daily post announcing this puzzle.
    pub fn title(&self, date: NaiveDate) -> String {
        format!(
            "WordClimb Daily Puzzle #{} - {}",
            self.number,
            date.format("%Y-%m-%d")
        )
    }
}

/// Error type for catalog construction and date parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// A catalog needs at least one puzzle.
    Empty,
    /// The date was not `YYYY-MM-DD`.
    InvalidDate(String),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Empty => write!(f, "catalog has no puzzles"),
            CatalogError::InvalidDate(date) => write!(f, "invalid date: {}", date),
        }
    }
}

impl std::error::Error for CatalogError {}

const UNIX_EPOCH_DAYS_FROM_CE: i64 = 719_163;

/// Days elapsed since 1970-01-01. Negative before the epoch.
pub fn day_index(date: NaiveDate) -> i64 {
    i64::from(date.num_days_from_ce()) - UNIX_EPOCH_DAYS_FROM_CE
}

/// An ordered, non-empty list of puzzle definitions.
#[derive(Debug, Clone)]
pub struct Catalog {
    puzzles: Vec<PuzzleDefinition>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Catalog {
    pub fn new(puzzles: Vec<PuzzleDefinition>) -> Result<Self, CatalogError> {
        if puzzles.is_empty() {
            return Err(CatalogError::Empty);
        }
        Ok(Self { puzzles })
    }

    pub fn builtin() -> Self {
        Self {
            puzzles: BUILTIN_PUZZLES.to_vec(),
        }
    }

    pub fn len(&self) -> usize {
        self.puzzles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.puzzles.is_empty()
    }

    pub fn definitions(&self) -> &[PuzzleDefinition] {
        &self.puzzles
    }

    /// The puzzle for a calendar day. Same date, same puzzle.
    pub fn puzzle_by_date(&self, date: NaiveDate) -> Puzzle {
        let day = day_index(date);
        let position = day.rem_euclid(self.puzzles.len() as i64) as usize;
        Puzzle::from_definition(&self.puzzles[position], day)
    }

    /// [`Catalog::puzzle_by_date`] for a `YYYY-MM-DD` string.
    pub fn puzzle_by_iso_date(&self, date: &str) -> Result<Puzzle, CatalogError> {
        let parsed = NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d")
            .map_err(|_| CatalogError::InvalidDate(date.to_string()))?;
        Ok(self.puzzle_by_date(parsed))
    }

    /// A uniformly random puzzle, not tied to any day.
    pub fn random_puzzle(&self) -> Puzzle {
        self.random_puzzle_with(&mut rand::thread_rng())
    }

    pub fn random_puzzle_with<R: Rng>(&self, rng: &mut R) -> Puzzle {
        let position = rng.gen_range(0..self.puzzles.len());
        Puzzle::from_definition(&self.puzzles[position], position as i64)
    }
}
