// crates/fibonrose-cli/src/commands/describe.rs
//
// `fibonrose describe <level>` — label for a trust level.

use clap::Args;
use serde_json::json;

use fibonrose_core::get_trust_level_description;

use crate::output::{emit, FieldRow, OutputFormat};

/// Level label command.
#[derive(Debug, Args)]
pub struct DescribeCmd {
    /// Trust level (1-10; anything else is "Unknown").
    #[arg(allow_negative_numbers = true)]
    pub level: i64,
}

/// Run the describe command.
pub fn run(cmd: &DescribeCmd, format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    let description = get_trust_level_description(cmd.level);
    let doc = json!({ "level": cmd.level, "description": description });
    emit(
        format,
        &doc,
        &[
            FieldRow::new("Level", cmd.level),
            FieldRow::new("Description", description),
        ],
    );
    Ok(())
}
