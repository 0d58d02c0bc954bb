// crates/fibonrose-cli/src/commands/fibonacci.rs
//
// `fibonrose fibonacci <verifications>` — verification-count level and score.

use clap::Args;
use serde::Serialize;

use fibonrose_core::TrustLevel;
use fibonrose_scoring::{calculate_fibonacci_level, calculate_fibonacci_score};

use crate::output::{emit, FieldRow, OutputFormat};

/// Verification-count command.
#[derive(Debug, Args)]
pub struct FibonacciCmd {
    /// Number of completed verifications.
    pub verifications: u64,
}

#[derive(Serialize)]
struct FibonacciView {
    verifications: u64,
    level: TrustLevel,
    description: &'static str,
    fibonacci_score: u64,
}

/// Run the fibonacci command.
pub fn run(cmd: &FibonacciCmd, format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    let level = calculate_fibonacci_level(cmd.verifications);
    let view = FibonacciView {
        verifications: cmd.verifications,
        level,
        description: level.description(),
        fibonacci_score: calculate_fibonacci_score(cmd.verifications),
    };

    let rows = vec![
        FieldRow::new("Verifications", view.verifications),
        FieldRow::new("Level", view.level),
        FieldRow::new("Description", view.description),
        FieldRow::new("Fibonacci score", view.fibonacci_score),
    ];
    emit(format, &view, &rows);
    Ok(())
}
