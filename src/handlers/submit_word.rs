//! Handler: submit-word
//!
//! Validates the word against the player's path, appends it, and scores the
//! puzzle when the target is reached.

use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, info};

use crate::dictionary::WordLookup;
use crate::game::{Game, GameResponse, GameStore, PlayerKeys};
use crate::microsvc::{Context, HandlerError};
use crate::validator::{is_puzzle_complete, validate_move_with_fallback};

pub const COMMAND: &str = "submit-word";

#[derive(Deserialize)]
pub struct Input {
    pub word: String,
}

pub fn guard<R>(ctx: &Context<R>) -> bool {
    super::has_post(ctx) && ctx.has_field("word")
}

pub async fn handle<S: GameStore, L: WordLookup + 'static>(
    ctx: Context<Game<S, L>>,
) -> Result<Value, HandlerError> {
    let input = ctx.input::<Input>()?;
    let word = input.word.trim();
    let game = ctx.repo();
    let post_id = ctx.post_id()?;
    let player = ctx.player();

    let (day, puzzle) = game.todays_puzzle();
    let keys = PlayerKeys::new(player, post_id, &day);

    if game.is_completed(&keys).await? {
        return Err(HandlerError::Rejected("puzzle already completed".into()));
    }

    let mut path = game.load_path(&keys, &puzzle).await?;
    let current = path.last().cloned().unwrap_or_else(|| puzzle.start.clone());

    let validation = validate_move_with_fallback(game.words(), &current, word, &path).await;
    if !validation.valid {
        debug!(player, post_id, word, message = ?validation.message, "word rejected");
        return GameResponse::SubmitWord {
            post_id: post_id.to_string(),
            valid: false,
            message: validation.message,
            path,
            completed: None,
            score: None,
            score_details: None,
        }
        .into_value();
    }

    path.push(word.to_lowercase());

    if !is_puzzle_complete(word, &puzzle.end) {
        game.save_path(&keys, &path).await?;
        return GameResponse::SubmitWord {
            post_id: post_id.to_string(),
            valid: true,
            message: None,
            path,
            completed: Some(false),
            score: None,
            score_details: None,
        }
        .into_value();
    }

    let score = game.complete(&keys, &day, player, &puzzle, &path).await?;
    info!(
        player,
        post_id,
        %day,
        steps = score.steps,
        score = score.score,
        first_solve = score.bonuses.first_solve.is_some(),
        "puzzle completed"
    );

    GameResponse::SubmitWord {
        post_id: post_id.to_string(),
        valid: true,
        message: None,
        path,
        completed: Some(true),
        score: Some(score.score),
        score_details: Some(score),
    }
    .into_value()
}
