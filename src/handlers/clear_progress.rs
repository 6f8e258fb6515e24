//! Handler: clear-progress
//!
//! Deletes the player's path, completion flag and score. The leaderboard
//! and first-solve marker are left alone.

use serde_json::Value;

use crate::dictionary::WordLookup;
use crate::game::{Game, GameResponse, GameStore, PlayerKeys};
use crate::microsvc::{Context, HandlerError};

pub const COMMAND: &str = "clear-progress";

pub fn guard<R>(ctx: &Context<R>) -> bool {
    super::has_post(ctx)
}

pub async fn handle<S: GameStore, L: WordLookup + 'static>(
    ctx: Context<Game<S, L>>,
) -> Result<Value, HandlerError> {
    let game = ctx.repo();
    let (day, _) = game.todays_puzzle();
    let keys = PlayerKeys::new(ctx.player(), ctx.post_id()?, &day);
    game.clear_player(&keys).await?;

    GameResponse::Cleared {
        message: "Progress cleared".to_string(),
    }
    .into_value()
}
