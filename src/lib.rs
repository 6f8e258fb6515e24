//! WordClimb - a daily word-ladder puzzle service.
//!
//! Players turn the day's start word into its end word one letter at a
//! time, every step a real word. The crate holds the game rules
//! (dictionary, catalog, validator, scoring), the persistence traits the
//! game runs on, and a command service exposing it over HTTP.

pub mod catalog;
pub mod clock;
pub mod dictionary;
pub mod game;
pub mod handlers;
pub mod microsvc;
pub mod scoring;
pub mod store;
pub mod validator;

pub use catalog::{day_index, Catalog, CatalogError, Puzzle, PuzzleDefinition};
pub use clock::{Clock, FixedClock, SystemClock};
pub use dictionary::{Dictionary, FallbackDictionary, LookupOutcome, WordLookup};
pub use game::{Game, GameResponse, GameStore};
pub use scoring::{calculate_score, format_score_message, Bonuses, ScoreResult};
pub use store::{InMemoryStore, KeyValueStore, Order, RankedMember, RankedSet, StoreError};
pub use validator::{
    is_puzzle_complete, is_valid_transition, validate_move, validate_move_with_fallback,
    MoveRejection, ValidationResult,
};

#[cfg(feature = "http")]
pub use dictionary::HttpWordLookup;
