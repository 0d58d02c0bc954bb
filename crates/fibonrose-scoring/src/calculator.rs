// crates/fibonrose-scoring/src/calculator.rs
//
// Trust score and verification-count calculators.
//
// The trust score is a weighted sum of three components:
//   - verifications:   VERIFICATION_POINTS per completed verification
//   - transactions:    TRANSACTION_RATIO_POINTS * (positive / total)
//   - account age:     ACCOUNT_AGE_POINTS_PER_MONTH per 30 days, capped at 12 months
//
// Each component is non-decreasing in its own input, so the total is too.
//
// The verification-count level uses the distinct Fibonacci thresholds
// 1, 2, 3, 5, 8, ... and so runs one step behind `get_trust_level`, which
// counts the leading 1 twice. The two are independent and not meant to agree.

use fibonrose_core::{FibonacciSequence, FibonroseError, TrustLevel, TrustScoreInputs};

/// Points awarded per completed verification.
pub const VERIFICATION_POINTS: u64 = 5;

/// Points awarded for a perfect positive-transaction ratio.
pub const TRANSACTION_RATIO_POINTS: f64 = 20.0;

/// Points awarded per month of account age.
pub const ACCOUNT_AGE_POINTS_PER_MONTH: f64 = 1.0;

/// Days counted as one month of account age.
pub const DAYS_PER_MONTH: f64 = 30.0;

/// Account age stops contributing after this many months.
pub const ACCOUNT_AGE_MAX_MONTHS: f64 = 12.0;

/// Bound for the verification-level sequence. Level 10 is reached at 89.
const VERIFICATION_SEQUENCE_CEILING: u64 = 1_000;

/// Compute the trust score for a set of activity counters.
///
/// All-zero inputs score 0. The result is floored to an integer.
///
/// # Errors
/// `InvalidArgument` when the inputs fail [`TrustScoreInputs::validate`].
pub fn calculate_trust_score(inputs: &TrustScoreInputs) -> Result<u64, FibonroseError> {
    inputs.validate()?;

    let verification_points = inputs.verifications.saturating_mul(VERIFICATION_POINTS);
    let ratio_points = inputs.positive_ratio() * TRANSACTION_RATIO_POINTS;
    let months = (inputs.account_age_days / DAYS_PER_MONTH).min(ACCOUNT_AGE_MAX_MONTHS);
    let age_points = months * ACCOUNT_AGE_POINTS_PER_MONTH;

    Ok(verification_points.saturating_add((ratio_points + age_points).floor() as u64))
}

/// Level reached by a raw verification count.
///
/// Counts the distinct Fibonacci thresholds `1, 2, 3, 5, 8, ...` that are
/// `<= verification_count`, capped at 10. `0 -> 0`, `1 -> 1`, `2 -> 2`.
pub fn calculate_fibonacci_level(verification_count: u64) -> TrustLevel {
    let seq = FibonacciSequence::up_to(VERIFICATION_SEQUENCE_CEILING);
    let reached = seq
        .iter()
        .skip(1)
        .take_while(|&t| t <= verification_count)
        .count();
    TrustLevel::saturating(reached)
}

/// Fibonacci value at the index given by [`calculate_fibonacci_level`].
///
/// Ranges from 1 (no verifications) to 89 (level 10). Always positive.
pub fn calculate_fibonacci_score(verification_count: u64) -> u64 {
    let level = calculate_fibonacci_level(verification_count);
    FibonacciSequence::up_to(VERIFICATION_SEQUENCE_CEILING).get_clamped(level.value() as usize)
}
