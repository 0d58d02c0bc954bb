// crates/fibonrose-cli/src/commands/complexity.rs
//
// `fibonrose complexity` — score a blockchain task from its counters.

use clap::Args;

use fibonrose_core::FibonroseError;
use fibonrose_metrics::{calculate_complexity_score, categorize_complexity, TaskMetrics};

use crate::output::{emit, FieldRow, OutputFormat};

/// Task complexity command.
#[derive(Debug, Args)]
pub struct ComplexityCmd {
    /// Task name recorded in the output.
    #[arg(long, default_value = "cli")]
    pub name: String,

    /// Execution time in seconds.
    #[arg(long, default_value = "0", allow_negative_numbers = true)]
    pub execution_time: f64,

    /// Gas consumed.
    #[arg(long, default_value = "0")]
    pub gas: u64,

    /// Number of blockchain transactions.
    #[arg(long, default_value = "0")]
    pub transactions: u64,

    /// Number of smart contract calls.
    #[arg(long, default_value = "0")]
    pub contract_calls: u64,

    /// Bytes of data processed.
    #[arg(long, default_value = "0")]
    pub data_size: u64,

    /// Number of network requests.
    #[arg(long, default_value = "0")]
    pub network_requests: u64,
}

/// Run the complexity command.
pub fn run(cmd: &ComplexityCmd, format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    if !cmd.execution_time.is_finite() || cmd.execution_time < 0.0 {
        return Err(FibonroseError::invalid(format!(
            "execution time must be a non-negative finite number of seconds, got {}",
            cmd.execution_time
        ))
        .into());
    }

    let mut metrics = TaskMetrics::new(cmd.name.as_str(), cmd.name.as_str());
    metrics.execution_time = Some(cmd.execution_time);
    metrics.gas_used = cmd.gas;
    metrics.transaction_count = cmd.transactions;
    metrics.contract_calls = cmd.contract_calls;
    metrics.data_size = cmd.data_size;
    metrics.network_requests = cmd.network_requests;

    let score = calculate_complexity_score(&metrics);
    let level = categorize_complexity(score);
    metrics.complexity_score = Some(score);
    metrics.complexity_level = Some(level);

    let rows = vec![
        FieldRow::new("Task", &metrics.task_name),
        FieldRow::new("Complexity score", format!("{:.2}", score)),
        FieldRow::new("Complexity level", level.name()),
    ];
    emit(format, &metrics, &rows);
    Ok(())
}
