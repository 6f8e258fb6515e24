//! Response bodies, one variant per command.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::catalog::Puzzle;
use crate::microsvc::HandlerError;
use crate::scoring::ScoreResult;

/// A player's saved progress on the current puzzle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerState {
    pub path: Vec<String>,
    pub completed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub username: String,
    pub score: i64,
    pub rank: usize,
}

/// Everything the game service answers with, tagged by `type`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum GameResponse {
    Init {
        post_id: String,
        username: String,
        puzzle: Puzzle,
        player_state: PlayerState,
    },
    SubmitWord {
        post_id: String,
        valid: bool,
        #[serde(skip_serializing_if = "Option::is_none")]
        message: Option<String>,
        path: Vec<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        completed: Option<bool>,
        #[serde(skip_serializing_if = "Option::is_none")]
        score: Option<u32>,
        #[serde(skip_serializing_if = "Option::is_none")]
        score_details: Option<ScoreResult>,
    },
    Reset {
        post_id: String,
        puzzle: Puzzle,
    },
    Leaderboard {
        entries: Vec<LeaderboardEntry>,
        total_players: usize,
    },
    Cleared {
        message: String,
    },
}

impl GameResponse {
    pub fn into_value(self) -> Result<Value, HandlerError> {
        serde_json::to_value(self).map_err(|e| HandlerError::Other(Box::new(e)))
    }
}
