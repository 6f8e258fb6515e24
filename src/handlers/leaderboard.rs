//! Handler: leaderboard
//!
//! Today's top players. A store failure yields an empty board rather than
//! an error.

use serde_json::Value;
use tracing::error;

use crate::dictionary::WordLookup;
use crate::game::{Game, GameResponse, GameStore};
use crate::microsvc::{Context, HandlerError};

pub const COMMAND: &str = "leaderboard";

pub fn guard<R>(ctx: &Context<R>) -> bool {
    super::has_post(ctx)
}

pub async fn handle<S: GameStore, L: WordLookup + 'static>(
    ctx: Context<Game<S, L>>,
) -> Result<Value, HandlerError> {
    let game = ctx.repo();
    let (day, _) = game.todays_puzzle();

    let (entries, total_players) = match game.leaderboard(&day).await {
        Ok(board) => board,
        Err(e) => {
            error!(%day, error = %e, "leaderboard unavailable");
            (Vec::new(), 0)
        }
    };

    GameResponse::Leaderboard {
        entries,
        total_players,
    }
    .into_value()
}
