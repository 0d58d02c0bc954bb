// crates/fibonrose-metrics/src/complexity.rs
//
// Per-task metrics and the weighted complexity score.
//
// Each factor is normalized to 0-100 against a "complex task" reference
// point and capped, then combined with fixed weights:
//   execution time     10 s          0.30
//   gas used           500,000       0.25
//   transactions       10            0.20
//   contract calls     10            0.15
//   network requests   20            0.10

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Execution time (seconds) that scores 100 on the time factor.
pub const TIME_REFERENCE_SECS: f64 = 10.0;
/// Gas that scores 100 on the gas factor.
pub const GAS_REFERENCE: f64 = 500_000.0;
/// Transaction count that scores 100.
pub const TRANSACTION_REFERENCE: f64 = 10.0;
/// Contract call count that scores 100.
pub const CONTRACT_CALL_REFERENCE: f64 = 10.0;
/// Network request count that scores 100.
pub const NETWORK_REQUEST_REFERENCE: f64 = 20.0;

pub const TIME_WEIGHT: f64 = 0.30;
pub const GAS_WEIGHT: f64 = 0.25;
pub const TRANSACTION_WEIGHT: f64 = 0.20;
pub const CONTRACT_CALL_WEIGHT: f64 = 0.15;
pub const NETWORK_REQUEST_WEIGHT: f64 = 0.10;

/// Complexity tiers, ordered from simplest to most complex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ComplexityLevel {
    /// Score below 20.
    Simple = 1,
    /// Score in [20, 40).
    Moderate = 2,
    /// Score in [40, 60).
    Complex = 3,
    /// Score in [60, 80).
    VeryComplex = 4,
    /// Score 80 and above.
    Extreme = 5,
}

impl ComplexityLevel {
    /// All levels in ascending order.
    pub const ALL: [ComplexityLevel; 5] = [
        ComplexityLevel::Simple,
        ComplexityLevel::Moderate,
        ComplexityLevel::Complex,
        ComplexityLevel::VeryComplex,
        ComplexityLevel::Extreme,
    ];

    /// Upper-case name as used in reports ("SIMPLE", "VERY_COMPLEX", ...).
    pub fn name(self) -> &'static str {
        match self {
            ComplexityLevel::Simple => "SIMPLE",
            ComplexityLevel::Moderate => "MODERATE",
            ComplexityLevel::Complex => "COMPLEX",
            ComplexityLevel::VeryComplex => "VERY_COMPLEX",
            ComplexityLevel::Extreme => "EXTREME",
        }
    }
}

/// Metrics recorded for one blockchain task.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskMetrics {
    /// Unique task identifier.
    pub task_id: String,
    /// Human-readable task name.
    pub task_name: String,
    /// When tracking started.
    pub start_time: DateTime<Utc>,
    /// When the task completed; `None` while active.
    pub end_time: Option<DateTime<Utc>>,
    /// Wall-clock duration in seconds; `None` while active.
    pub execution_time: Option<f64>,
    pub gas_used: u64,
    pub transaction_count: u64,
    pub contract_calls: u64,
    /// Bytes of data processed.
    pub data_size: u64,
    pub network_requests: u64,
    /// Set on completion.
    pub complexity_score: Option<f64>,
    /// Set on completion.
    pub complexity_level: Option<ComplexityLevel>,
    /// Free-form caller metadata.
    #[serde(default)]
    pub metadata: BTreeMap<String, serde_json::Value>,
}

impl TaskMetrics {
    /// Start tracking a task now.
    pub fn new(task_id: impl Into<String>, task_name: impl Into<String>) -> Self {
        Self {
            task_id: task_id.into(),
            task_name: task_name.into(),
            start_time: Utc::now(),
            end_time: None,
            execution_time: None,
            gas_used: 0,
            transaction_count: 0,
            contract_calls: 0,
            data_size: 0,
            network_requests: 0,
            complexity_score: None,
            complexity_level: None,
            metadata: BTreeMap::new(),
        }
    }

    /// Mark the task complete and record its execution time.
    pub fn complete(&mut self) {
        let end = Utc::now();
        let elapsed = (end - self.start_time)
            .to_std()
            .map(|d| d.as_secs_f64())
            .unwrap_or(0.0);
        self.end_time = Some(end);
        self.execution_time = Some(elapsed);
    }

    /// True once `complete` has been called.
    pub fn is_complete(&self) -> bool {
        self.end_time.is_some()
    }

    /// Pretty-printed JSON representation.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Normalize `value` against `reference` onto 0-100, capped at 100.
fn factor(value: f64, reference: f64) -> f64 {
    (value / reference * 100.0).min(100.0)
}

/// Round to `decimals` decimal places.
pub(crate) fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (value * scale).round() / scale
}

/// Weighted complexity score in [0, 100], rounded to two decimals.
pub fn calculate_complexity_score(metrics: &TaskMetrics) -> f64 {
    let time_score = factor(metrics.execution_time.unwrap_or(0.0), TIME_REFERENCE_SECS);
    let gas_score = factor(metrics.gas_used as f64, GAS_REFERENCE);
    let tx_score = factor(metrics.transaction_count as f64, TRANSACTION_REFERENCE);
    let calls_score = factor(metrics.contract_calls as f64, CONTRACT_CALL_REFERENCE);
    let network_score = factor(metrics.network_requests as f64, NETWORK_REQUEST_REFERENCE);

    let complexity = time_score * TIME_WEIGHT
        + gas_score * GAS_WEIGHT
        + tx_score * TRANSACTION_WEIGHT
        + calls_score * CONTRACT_CALL_WEIGHT
        + network_score * NETWORK_REQUEST_WEIGHT;

    round_to(complexity, 2)
}

/// Map a complexity score onto its tier.
pub fn categorize_complexity(score: f64) -> ComplexityLevel {
    if score < 20.0 {
        ComplexityLevel::Simple
    } else if score < 40.0 {
        ComplexityLevel::Moderate
    } else if score < 60.0 {
        ComplexityLevel::Complex
    } else if score < 80.0 {
        ComplexityLevel::VeryComplex
    } else {
        ComplexityLevel::Extreme
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_task_has_zero_counters() {
        let m = TaskMetrics::new("test_001", "Test Task");
        assert_eq!(m.task_id, "test_001");
        assert_eq!(m.gas_used, 0);
        assert_eq!(m.transaction_count, 0);
        assert!(m.end_time.is_none());
        assert!(!m.is_complete());
    }

    #[test]
    fn complete_records_execution_time() {
        let mut m = TaskMetrics::new("test_001", "Test Task");
        std::thread::sleep(std::time::Duration::from_millis(10));
        m.complete();
        assert!(m.is_complete());
        assert!(m.execution_time.unwrap() > 0.0);
    }

    #[test]
    fn categorization_tiers() {
        assert_eq!(categorize_complexity(10.0), ComplexityLevel::Simple);
        assert_eq!(categorize_complexity(30.0), ComplexityLevel::Moderate);
        assert_eq!(categorize_complexity(50.0), ComplexityLevel::Complex);
        assert_eq!(categorize_complexity(70.0), ComplexityLevel::VeryComplex);
        assert_eq!(categorize_complexity(90.0), ComplexityLevel::Extreme);
        assert_eq!(categorize_complexity(20.0), ComplexityLevel::Moderate);
    }

    #[test]
    fn score_of_idle_task_is_zero() {
        let m = TaskMetrics::new("t", "idle");
        assert_eq!(calculate_complexity_score(&m), 0.0);
    }

    #[test]
    fn score_weights() {
        let mut m = TaskMetrics::new("t", "weighted");
        m.execution_time = Some(5.0); // 50 * 0.30 = 15
        m.gas_used = 100_000; // 20 * 0.25 = 5
        m.transaction_count = 5; // 50 * 0.20 = 10
        m.contract_calls = 10; // 100 * 0.15 = 15
        m.network_requests = 15; // 75 * 0.10 = 7.5
        assert!((calculate_complexity_score(&m) - 52.5).abs() < 1e-9);
    }

    #[test]
    fn factors_are_capped() {
        let mut m = TaskMetrics::new("t", "maxed");
        m.execution_time = Some(1_000.0);
        m.gas_used = u64::MAX;
        m.transaction_count = 1_000;
        m.contract_calls = 1_000;
        m.network_requests = 1_000;
        assert!((calculate_complexity_score(&m) - 100.0).abs() < 1e-9);
    }

    #[test]
    fn level_serializes_by_name() {
        let mut m = TaskMetrics::new("test_001", "Test Task");
        m.complexity_level = Some(ComplexityLevel::VeryComplex);
        let json: serde_json::Value = serde_json::from_str(&m.to_json().unwrap()).unwrap();
        assert_eq!(json["complexity_level"], "VERY_COMPLEX");
        assert_eq!(json["task_name"], "Test Task");
        assert_eq!(ComplexityLevel::VeryComplex.name(), "VERY_COMPLEX");
    }
}
