// crates/fibonrose-cli/src/commands/score.rs
//
// `fibonrose score` — compute a trust score from activity counters.

use clap::Args;
use serde_json::json;

use fibonrose_core::TrustScoreInputs;
use fibonrose_scoring::TrustReport;

use crate::commands::level::report_rows;
use crate::output::{emit, OutputFormat};

/// Trust score command.
#[derive(Debug, Args)]
pub struct ScoreCmd {
    /// Number of completed identity verifications.
    #[arg(long, default_value = "0")]
    pub verifications: u64,

    /// Number of positive transactions.
    #[arg(long, default_value = "0")]
    pub positive: u64,

    /// Total number of transactions.
    #[arg(long, default_value = "0")]
    pub total: u64,

    /// Account age in days.
    #[arg(long, default_value = "0", allow_negative_numbers = true)]
    pub age_days: f64,
}

/// Run the score command.
pub fn run(cmd: &ScoreCmd, format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    let inputs = TrustScoreInputs::new(cmd.verifications, cmd.positive, cmd.total, cmd.age_days)?;
    let report = TrustReport::from_inputs(&inputs)?;
    tracing::debug!(score = report.score, level = report.level.value(), "Scored inputs");

    let doc = json!({ "inputs": inputs, "report": report });
    emit(format, &doc, &report_rows(&report));
    Ok(())
}
