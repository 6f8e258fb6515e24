//! Session variables from the request context.

use std::collections::HashMap;

/// Header carrying the player's display name.
pub const PLAYER_NAME: &str = "x-player-name";
/// Header carrying the post (puzzle instance) the player is viewing.
pub const POST_ID: &str = "x-post-id";

/// Parsed session variables from the incoming request.
///
/// Identity is resolved upstream; the HTTP transport forwards it as headers:
///
/// ```text
/// x-player-name: ana
/// x-post-id: t3_abc123
/// ```
#[derive(Debug, Clone, Default)]
pub struct Session {
    variables: HashMap<String, String>,
}

impl Session {
    /// Create an empty session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a session from a map of variables.
    pub fn from_map(variables: HashMap<String, String>) -> Self {
        Self { variables }
    }

    /// Session for a player viewing a post.
    pub fn for_player(player: &str, post_id: &str) -> Self {
        let mut session = Self::new();
        session.set(PLAYER_NAME, player);
        session.set(POST_ID, post_id);
        session
    }

    /// The player's display name (`x-player-name`).
    pub fn player_name(&self) -> Option<&str> {
        self.get(PLAYER_NAME).filter(|name| !name.is_empty())
    }

    /// The post being played (`x-post-id`).
    pub fn post_id(&self) -> Option<&str> {
        self.get(POST_ID).filter(|id| !id.is_empty())
    }

    /// Get a session variable by key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.variables.get(key).map(|v| v.as_str())
    }

    /// Set a session variable.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.variables.insert(key.into(), value.into());
    }
}
