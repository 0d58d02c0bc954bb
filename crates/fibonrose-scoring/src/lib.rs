// crates/fibonrose-scoring/src/lib.rs
//
// fibonrose-scoring: Fibonacci trust levels, thresholds, and trust score
// calculators for FibonroseTrust.
//
// Everything here is a pure function over `fibonrose-core` value types.
// Level boundaries come from the Fibonacci sequence 1, 1, 2, 3, 5, ...

pub mod calculator;
pub mod report;
pub mod thresholds;

// Re-export key items for ergonomic access from downstream crates.
pub use calculator::{
    calculate_fibonacci_level, calculate_fibonacci_score, calculate_trust_score,
    ACCOUNT_AGE_MAX_MONTHS, ACCOUNT_AGE_POINTS_PER_MONTH, DAYS_PER_MONTH,
    TRANSACTION_RATIO_POINTS, VERIFICATION_POINTS,
};
pub use report::TrustReport;
pub use thresholds::{
    get_points_for_next_level, get_progress_to_next_level, get_trust_level, level_thresholds,
    try_score_from_f64, LevelThreshold, THRESHOLD_CEILING,
};
