//! Handler: reset

use serde_json::Value;
use tracing::debug;

use crate::dictionary::WordLookup;
use crate::game::{Game, GameResponse, GameStore, PlayerKeys};
use crate::microsvc::{Context, HandlerError};

pub const COMMAND: &str = "reset";

pub fn guard<R>(ctx: &Context<R>) -> bool {
    super::has_post(ctx)
}

pub async fn handle<S: GameStore, L: WordLookup + 'static>(
    ctx: Context<Game<S, L>>,
) -> Result<Value, HandlerError> {
    let game = ctx.repo();
    let post_id = ctx.post_id()?;
    let player = ctx.player();

    let (day, puzzle) = game.todays_puzzle();
    let keys = PlayerKeys::new(player, post_id, &day);
    game.reset_player(&keys, &puzzle).await?;
    debug!(player, post_id, %day, "reset");

    GameResponse::Reset {
        post_id: post_id.to_string(),
        puzzle,
    }
    .into_value()
}
