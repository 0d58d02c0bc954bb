// crates/fibonrose-scoring/src/thresholds.rs
//
// Score -> level lookup over Fibonacci thresholds.
//
// The level for a score is the number of sequence terms that are <= the
// score, capped at 10. Because the sequence opens with two 1s, a score of 1
// jumps straight to level 2 and level 1 is never produced here.
//
// Threshold table (level: minimum score):
//   1: 1   2: 1   3: 2   4: 3   5: 5
//   6: 8   7: 13  8: 21  9: 34  10: 55

use serde::Serialize;

use fibonrose_core::{FibonacciSequence, FibonroseError, TrustLevel, MAX_TRUST_LEVEL};

/// Upper bound for the internally generated threshold sequence.
/// Far above the level-10 threshold; only the first ten terms matter.
pub const THRESHOLD_CEILING: u64 = 1_000_000;

/// One row of the level legend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LevelThreshold {
    /// The level reached at `min_score`.
    pub level: TrustLevel,
    /// Lowest score that reaches this level.
    pub min_score: u64,
    /// Label for the level.
    pub description: &'static str,
}

fn thresholds() -> FibonacciSequence {
    FibonacciSequence::up_to(THRESHOLD_CEILING)
}

/// Minimum score for `level` (1..=10). Level 0 starts at score 0.
fn threshold_for(seq: &FibonacciSequence, level: u8) -> u64 {
    if level == 0 {
        0
    } else {
        seq.get_clamped(level as usize - 1)
    }
}

/// Trust level for a score.
///
/// `0 -> 0`, `1 -> 2`, `2 -> 3`, `5 -> 5`; non-decreasing and capped at 10.
pub fn get_trust_level(score: u64) -> TrustLevel {
    let reached = thresholds().iter().take_while(|&t| t <= score).count();
    TrustLevel::saturating(reached)
}

/// Points still needed to reach the next level. Zero at the max level.
pub fn get_points_for_next_level(score: u64) -> u64 {
    let level = get_trust_level(score);
    if level.is_max() {
        return 0;
    }
    let seq = thresholds();
    threshold_for(&seq, level.value() + 1).saturating_sub(score)
}

/// Percentage of the way from the current level's threshold to the next.
///
/// Always in `[0.0, 100.0]`: `0.0` exactly at a threshold, `100.0` at the
/// max level.
pub fn get_progress_to_next_level(score: u64) -> f64 {
    let level = get_trust_level(score);
    if level.is_max() {
        return 100.0;
    }
    let seq = thresholds();
    let current = threshold_for(&seq, level.value());
    let next = threshold_for(&seq, level.value() + 1);
    let span = next.saturating_sub(current);
    if span == 0 {
        return 0.0;
    }
    let progressed = score.saturating_sub(current) as f64;
    (progressed / span as f64 * 100.0).clamp(0.0, 100.0)
}

/// The full level legend, levels 1 through 10.
pub fn level_thresholds() -> Vec<LevelThreshold> {
    let seq = thresholds();
    (1..=MAX_TRUST_LEVEL)
        .map(|level| {
            let level = TrustLevel::saturating(level as usize);
            LevelThreshold {
                level,
                min_score: threshold_for(&seq, level.value()),
                description: level.description(),
            }
        })
        .collect()
}

/// Convert a loosely typed score (e.g., a JSON number) into a `u64` score.
///
/// Fractional scores are floored.
///
/// # Errors
/// `InvalidArgument` for negative, NaN, or infinite values.
pub fn try_score_from_f64(value: f64) -> Result<u64, FibonroseError> {
    if !value.is_finite() || value < 0.0 {
        return Err(FibonroseError::invalid(format!(
            "score must be a non-negative finite number, got {}",
            value
        )));
    }
    Ok(value.floor() as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn observed_level_mapping() {
        assert_eq!(get_trust_level(0).value(), 0);
        assert_eq!(get_trust_level(1).value(), 2);
        assert_eq!(get_trust_level(2).value(), 3);
        assert_eq!(get_trust_level(3).value(), 4);
        assert_eq!(get_trust_level(4).value(), 4);
        assert_eq!(get_trust_level(5).value(), 5);
        assert_eq!(get_trust_level(54).value(), 9);
        assert_eq!(get_trust_level(55).value(), 10);
        assert_eq!(get_trust_level(u64::MAX).value(), 10);
    }

    #[test]
    fn points_for_next_level() {
        assert_eq!(get_points_for_next_level(0), 1);
        assert_eq!(get_points_for_next_level(1), 1);
        assert_eq!(get_points_for_next_level(3), 2);
        assert_eq!(get_points_for_next_level(4), 1);
        assert_eq!(get_points_for_next_level(40), 15);
        assert_eq!(get_points_for_next_level(55), 0);
        assert_eq!(get_points_for_next_level(1000), 0);
    }

    #[test]
    fn progress_at_boundaries() {
        assert_eq!(get_progress_to_next_level(0), 0.0);
        assert_eq!(get_progress_to_next_level(1), 0.0);
        assert_eq!(get_progress_to_next_level(8), 0.0);
        assert_eq!(get_progress_to_next_level(55), 100.0);
        assert_eq!(get_progress_to_next_level(1000), 100.0);
    }

    #[test]
    fn progress_mid_level() {
        // Level 6 spans 8..13.
        let p = get_progress_to_next_level(10);
        assert!((p - 40.0).abs() < 1e-9, "got {}", p);
    }

    #[test]
    fn legend_has_ten_rows() {
        let rows = level_thresholds();
        assert_eq!(rows.len(), 10);
        assert_eq!(rows[0].min_score, 1);
        assert_eq!(rows[0].description, "Sprout");
        assert_eq!(rows[9].min_score, 55);
        assert_eq!(rows[9].description, "Eternal Forest");
    }

    #[test]
    fn legend_agrees_with_lookup() {
        // Level 1 shares its threshold with level 2, so it is skipped.
        for row in level_thresholds().into_iter().skip(1) {
            assert_eq!(get_trust_level(row.min_score), row.level);
        }
    }

    #[test]
    fn score_conversion() {
        assert_eq!(try_score_from_f64(12.9).unwrap(), 12);
        assert!(try_score_from_f64(-0.5).is_err());
        assert!(try_score_from_f64(f64::NAN).is_err());
    }
}
