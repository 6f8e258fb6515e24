//! Store key layout.

/// Keys holding one player's progress on one puzzle instance
/// (a post on a given day).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerKeys {
    pub path: String,
    pub completed: String,
    pub score: String,
}

impl PlayerKeys {
    pub fn new(player: &str, post_id: &str, day: &str) -> Self {
        let prefix = format!("player:{}:post:{}:day:{}", player, post_id, day);
        Self {
            path: format!("{}:path", prefix),
            completed: format!("{}:completed", prefix),
            score: format!("{}:score", prefix),
        }
    }

    pub fn all(&self) -> [&str; 3] {
        [&self.path, &self.completed, &self.score]
    }
}

/// Who solved the day's puzzle first.
pub fn first_solve_key(day: &str) -> String {
    format!("puzzle:{}:firstSolve", day)
}

/// The day's ranked leaderboard.
pub fn leaderboard_key(day: &str) -> String {
    format!("leaderboard:{}", day)
}
