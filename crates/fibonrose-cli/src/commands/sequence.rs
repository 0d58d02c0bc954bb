// crates/fibonrose-cli/src/commands/sequence.rs
//
// `fibonrose sequence --max <n>` — print the bounded Fibonacci sequence.

use clap::Args;
use tabled::Tabled;

use fibonrose_core::generate_fibonacci_sequence;

use crate::output::{emit, OutputFormat};

/// Bounded sequence command.
#[derive(Debug, Args)]
pub struct SequenceCmd {
    /// Upper bound for the sequence terms.
    #[arg(long, default_value = "100", allow_negative_numbers = true)]
    pub max: f64,
}

#[derive(Tabled)]
struct TermRow {
    #[tabled(rename = "Index")]
    index: usize,
    #[tabled(rename = "Term")]
    term: u64,
}

/// Run the sequence command.
pub fn run(cmd: &SequenceCmd, format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    let seq = generate_fibonacci_sequence(cmd.max)?;
    tracing::debug!("Generated {} terms for max {}", seq.len(), cmd.max);

    let rows: Vec<TermRow> = seq
        .iter()
        .enumerate()
        .map(|(index, term)| TermRow { index, term })
        .collect();
    emit(format, &seq, &rows);
    Ok(())
}
