//! Score computation for completed ladders.

use serde::{Deserialize, Serialize};

pub const BASE_SCORE: u32 = 1000;
pub const STEP_PENALTY: u32 = 100;
pub const SCORE_FLOOR: u32 = 100;
pub const OPTIMAL_BONUS: u32 = 500;
pub const FIRST_SOLVE_BONUS: u32 = 200;

/// Bonuses awarded on top of the step-based score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bonuses {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub optimal: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_solve: Option<u32>,
}

/// The final score of a completed puzzle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreResult {
    pub score: u32,
    pub steps: u32,
    #[serde(rename = "optimal")]
    pub optimal_steps: u32,
    pub is_optimal: bool,
    pub bonuses: Bonuses,
}

/// Score a completed ladder.
///
/// `max(BASE_SCORE - steps * STEP_PENALTY, SCORE_FLOOR)`, plus
/// `OPTIMAL_BONUS` when `steps == optimal_steps` and `FIRST_SOLVE_BONUS`
/// when `is_first_solve`.
pub fn calculate_score(steps: u32, optimal_steps: u32, is_first_solve: bool) -> ScoreResult {
    let penalty = steps.saturating_mul(STEP_PENALTY);
    let mut score = BASE_SCORE.saturating_sub(penalty).max(SCORE_FLOOR);
    let mut bonuses = Bonuses::default();

    let is_optimal = steps == optimal_steps;
    if is_optimal {
        score += OPTIMAL_BONUS;
        bonuses.optimal = Some(OPTIMAL_BONUS);
    }

    if is_first_solve {
        score += FIRST_SOLVE_BONUS;
        bonuses.first_solve = Some(FIRST_SOLVE_BONUS);
    }

    ScoreResult {
        score,
        steps,
        optimal_steps,
        is_optimal,
        bonuses,
    }
}

/// Human-readable summary of a score.
pub fn format_score_message(result: &ScoreResult) -> String {
    let mut message = format!("Score: {} points ({} steps)", result.score, result.steps);
    if result.is_optimal {
        message.push_str("\n🎉 Optimal solution!");
    }
    if result.bonuses.first_solve.is_some() {
        message.push_str("\n⚡ First solve bonus!");
    }
    message
}
