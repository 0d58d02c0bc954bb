// crates/fibonrose-scoring/src/report.rs
//
// Aggregated trust view for badge and progress-bar rendering.

use serde::{Deserialize, Serialize};

use fibonrose_core::{FibonroseError, TrustLevel, TrustScoreInputs};

use crate::calculator::calculate_trust_score;
use crate::thresholds::{get_points_for_next_level, get_progress_to_next_level, get_trust_level};

/// Everything a dashboard needs to render a user's trust standing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrustReport {
    /// The trust score.
    pub score: u64,
    /// Level derived from the score.
    pub level: TrustLevel,
    /// Label for `level`.
    pub description: String,
    /// Points needed to reach the next level (0 at max level).
    pub points_to_next_level: u64,
    /// Progress toward the next level, 0.0 to 100.0.
    pub progress_percent: f64,
}

impl TrustReport {
    /// Build a report for an already-computed score.
    pub fn from_score(score: u64) -> Self {
        let level = get_trust_level(score);
        Self {
            score,
            level,
            description: level.description().to_string(),
            points_to_next_level: get_points_for_next_level(score),
            progress_percent: get_progress_to_next_level(score),
        }
    }

    /// Score the inputs and build a report.
    pub fn from_inputs(inputs: &TrustScoreInputs) -> Result<Self, FibonroseError> {
        let score = calculate_trust_score(inputs)?;
        Ok(Self::from_score(score))
    }
}
