// crates/fibonrose-metrics/src/lib.rs
//
// fibonrose-metrics: Complexity scoring and collection for blockchain tasks.
//
// A task (a balance transfer, a contract interaction) is tracked from start
// to finish. On completion its execution time, gas, transaction, contract
// call, and network counters are folded into a 0-100 complexity score and
// one of five complexity levels. Transaction parameters (recipient address,
// amount, gas) can be checked up front with the `validation` functions.

pub mod collector;
pub mod complexity;
pub mod validation;

pub use collector::{MetricsCollector, MetricsReport, MetricsSummary, MetricsUpdate};
pub use complexity::{calculate_complexity_score, categorize_complexity, ComplexityLevel, TaskMetrics};
pub use validation::{
    validate_address, validate_amount, validate_gas_limit, validate_gas_params, validate_gas_price,
    validate_transaction_params, GasLimits, TransactionParams,
};
