//! Move validation for word ladders.
//!
//! A move is admissible when the new word is a real word, has not been used
//! on the path yet, and differs from the current word in exactly one
//! position. Checks run in that order and stop at the first failure.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::dictionary::{Dictionary, FallbackDictionary, WordLookup};
use crate::store::KeyValueStore;

/// Why a proposed word was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveRejection {
    NotAWord,
    AlreadyUsed,
    NotOneLetter,
}

impl fmt::Display for MoveRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveRejection::NotAWord => write!(f, "Not a valid English word!"),
            MoveRejection::AlreadyUsed => write!(f, "You already used this word!"),
            MoveRejection::NotOneLetter => write!(f, "Must change exactly ONE letter!"),
        }
    }
}

/// Outcome of validating a move. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ValidationResult {
    pub fn accepted() -> Self {
        Self {
            valid: true,
            message: None,
        }
    }

    pub fn rejected(reason: MoveRejection) -> Self {
        Self {
            valid: false,
            message: Some(reason.to_string()),
        }
    }
}

impl From<Result<(), MoveRejection>> for ValidationResult {
    fn from(result: Result<(), MoveRejection>) -> Self {
        match result {
            Ok(()) => Self::accepted(),
            Err(reason) => Self::rejected(reason),
        }
    }
}

/// True iff both words have the same length and differ in exactly one
/// position, ignoring case.
pub fn is_valid_transition(from: &str, to: &str) -> bool {
    let from: Vec<char> = from.to_lowercase().chars().collect();
    let to: Vec<char> = to.to_lowercase().chars().collect();
    if from.len() != to.len() {
        return false;
    }
    from.iter().zip(&to).filter(|(a, b)| a != b).count() == 1
}

/// Case-insensitive equality of the current word and the target.
pub fn is_puzzle_complete(current_word: &str, target_word: &str) -> bool {
    current_word.to_lowercase() == target_word.to_lowercase()
}

/// Validate a move against the local word list.
pub fn validate_move<S: AsRef<str>>(
    dictionary: &Dictionary,
    current_word: &str,
    new_word: &str,
    path: &[S],
) -> ValidationResult {
    check_move(dictionary.is_valid_word(new_word), current_word, new_word, path).into()
}

/// Validate a move, consulting the cache and remote lookup for words the
/// local list does not know. Same checks, same order, same messages as
/// [`validate_move`].
pub async fn validate_move_with_fallback<K, L, S>(
    words: &FallbackDictionary<K, L>,
    current_word: &str,
    new_word: &str,
    path: &[S],
) -> ValidationResult
where
    K: KeyValueStore,
    L: WordLookup,
    S: AsRef<str>,
{
    let is_word = words.is_valid_word_with_fallback(new_word).await;
    check_move(is_word, current_word, new_word, path).into()
}

fn check_move<S: AsRef<str>>(
    is_word: bool,
    current_word: &str,
    new_word: &str,
    path: &[S],
) -> Result<(), MoveRejection> {
    if !is_word {
        return Err(MoveRejection::NotAWord);
    }

    let new_lower = new_word.to_lowercase();
    if path.iter().any(|w| w.as_ref().to_lowercase() == new_lower) {
        return Err(MoveRejection::AlreadyUsed);
    }

    if !is_valid_transition(current_word, &new_lower) {
        return Err(MoveRejection::NotOneLetter);
    }

    Ok(())
}
