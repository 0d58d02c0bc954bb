// crates/fibonrose-cli/src/commands/levels.rs
//
// `fibonrose levels` — the level legend with minimum scores.

use tabled::Tabled;

use fibonrose_scoring::level_thresholds;

use crate::output::{emit, OutputFormat};

#[derive(Tabled)]
struct LegendRow {
    #[tabled(rename = "Level")]
    level: u8,
    #[tabled(rename = "Min score")]
    min_score: u64,
    #[tabled(rename = "Description")]
    description: &'static str,
}

/// Run the levels command.
pub fn run(format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    let legend = level_thresholds();
    let rows: Vec<LegendRow> = legend
        .iter()
        .map(|t| LegendRow {
            level: t.level.value(),
            min_score: t.min_score,
            description: t.description,
        })
        .collect();
    emit(format, &legend, &rows);
    Ok(())
}
