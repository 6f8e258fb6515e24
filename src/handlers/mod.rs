//! Command handlers for the game service, one module per command.
//!
//! Every command needs the post id from the session to know which puzzle
//! instance the player is on.

pub mod clear_progress;
pub mod init;
pub mod leaderboard;
pub mod reset;
pub mod submit_word;

use crate::dictionary::WordLookup;
use crate::game::{Game, GameStore};
use crate::microsvc::{Context, Service};

/// A service with every game command registered.
pub fn service<S: GameStore, L: WordLookup + 'static>(game: Game<S, L>) -> Service<Game<S, L>> {
    crate::register_handlers!(
        Service::new(game),
        init,
        submit_word,
        reset,
        leaderboard,
        clear_progress,
    )
}

fn has_post<R>(ctx: &Context<R>) -> bool {
    ctx.session().post_id().is_some()
}
