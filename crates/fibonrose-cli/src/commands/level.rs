// crates/fibonrose-cli/src/commands/level.rs
//
// `fibonrose level <score>` — trust level, label, and progress for a score.

use clap::Args;

use fibonrose_scoring::{try_score_from_f64, TrustReport};

use crate::output::{emit, FieldRow, OutputFormat};

/// Level lookup command.
#[derive(Debug, Args)]
pub struct LevelCmd {
    /// The trust score to look up.
    #[arg(allow_negative_numbers = true)]
    pub score: f64,
}

/// Table rows for a trust report.
pub(crate) fn report_rows(report: &TrustReport) -> Vec<FieldRow> {
    vec![
        FieldRow::new("Score", report.score),
        FieldRow::new("Level", report.level),
        FieldRow::new("Description", &report.description),
        FieldRow::new("Points to next level", report.points_to_next_level),
        FieldRow::new("Progress", format!("{:.1}%", report.progress_percent)),
    ]
}

/// Run the level command.
pub fn run(cmd: &LevelCmd, format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    let score = try_score_from_f64(cmd.score)?;
    let report = TrustReport::from_score(score);
    emit(format, &report, &report_rows(&report));
    Ok(())
}
