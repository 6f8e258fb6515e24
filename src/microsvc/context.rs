//! Context passed to command handlers.
//!
//! Carries the parsed input, session variables, and a shared handle to the
//! service state. Handlers access everything they need through the context.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde_json::Value;

use super::error::HandlerError;
use super::session::{Session, POST_ID};

/// Display name used when the session carries no player.
pub const ANONYMOUS: &str = "anonymous";

/// The context passed to every command handler.
///
/// Generic over `R` (the service state) and owned, so async handlers can
/// hold it across await points.
///
/// ## Example
///
/// ```ignore
/// pub async fn handle<S: GameStore, L: WordLookup>(
///     ctx: Context<Game<S, L>>,
/// ) -> Result<Value, HandlerError> {
///     let post_id = ctx.post_id()?;
///     let input = ctx.input::<Input>()?;
///     // ...
/// }
/// ```
pub struct Context<R> {
    /// Raw JSON input from the request.
    input: Value,
    /// Session variables (player name, post id).
    session: Session,
    /// Shared service state.
    repo: Arc<R>,
}

impl<R> Context<R> {
    /// Create a new context.
    pub(crate) fn new(input: Value, session: Session, repo: Arc<R>) -> Self {
        Self {
            input,
            session,
            repo,
        }
    }

    /// Deserialize the input payload into a typed struct.
    pub fn input<T: DeserializeOwned>(&self) -> Result<T, HandlerError> {
        serde_json::from_value(self.input.clone())
            .map_err(|e| HandlerError::DecodeFailed(e.to_string()))
    }

    /// Get the session.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// The player's display name, or `"anonymous"`.
    pub fn player(&self) -> &str {
        self.session.player_name().unwrap_or(ANONYMOUS)
    }

    /// The post id from the session. Returns `MissingContext` if not present.
    pub fn post_id(&self) -> Result<&str, HandlerError> {
        self.session
            .post_id()
            .ok_or_else(|| HandlerError::MissingContext(POST_ID.into()))
    }

    /// Get a reference to the service state.
    pub fn repo(&self) -> &R {
        &self.repo
    }

    /// Check if the raw input contains a field.
    pub fn has_field(&self, field: &str) -> bool {
        self.input.get(field).is_some()
    }
}
