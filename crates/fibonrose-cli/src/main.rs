// crates/fibonrose-cli/src/main.rs
//
// CLI entrypoint for FibonroseTrust.
//
// Exposes the trust scoring library from the command line: the Fibonacci
// threshold sequence, score -> level lookups, the trust score calculator,
// the verification-count level, level labels, task complexity scoring, and
// transaction parameter checks.

mod commands;
mod config;
mod output;

use clap::{Parser, Subcommand};
use commands::complexity::ComplexityCmd;
use commands::describe::DescribeCmd;
use commands::fibonacci::FibonacciCmd;
use commands::level::LevelCmd;
use commands::score::ScoreCmd;
use commands::sequence::SequenceCmd;
use commands::validate::ValidateCmd;
use config::{CliConfig, DEFAULT_CONFIG_PATH};
use output::OutputFormat;

/// FibonroseTrust CLI — Fibonacci trust levels and scores.
#[derive(Parser, Debug)]
#[command(
    name = "fibonrose",
    version = "0.1.0",
    about = "FibonroseTrust CLI — Fibonacci-based trust scores and levels"
)]
struct Cli {
    /// Path to the TOML configuration file.
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_PATH)]
    config: String,

    /// Output format. Overrides the config file.
    #[arg(long, global = true, value_enum)]
    format: Option<OutputFormat>,

    #[command(subcommand)]
    command: Commands,
}

/// Top-level subcommands.
#[derive(Debug, Subcommand)]
enum Commands {
    /// Print the Fibonacci sequence up to a bound.
    Sequence(SequenceCmd),

    /// Show the trust level, label, and progress for a score.
    Level(LevelCmd),

    /// Compute a trust score from verification and activity counters.
    Score(ScoreCmd),

    /// Show the level and Fibonacci score for a verification count.
    Fibonacci(FibonacciCmd),

    /// Show the label for a trust level.
    Describe(DescribeCmd),

    /// Show every level with its minimum score.
    Levels,

    /// Score the complexity of a blockchain task.
    Complexity(ComplexityCmd),

    /// Check a transaction's address, amount, and gas settings.
    Validate(ValidateCmd),
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Load configuration before tracing so its log level can apply; report
    // the outcome once the subscriber is up.
    let loaded = CliConfig::load(&cli.config);
    let config = match &loaded {
        Ok(Some(cfg)) => cfg.clone(),
        _ => CliConfig::default(),
    };

    // Initialize tracing subscriber for structured logging. RUST_LOG wins
    // over the configured level.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_level)),
        )
        .init();

    match loaded {
        Ok(Some(_)) => tracing::info!("Loaded configuration from {}", cli.config),
        Ok(None) => tracing::debug!("No config at {}. Using defaults.", cli.config),
        Err(e) => tracing::warn!(
            "Could not load config from {}: {}. Using defaults.",
            cli.config,
            e
        ),
    }

    let format = cli.format.unwrap_or(config.output_format);

    match &cli.command {
        Commands::Sequence(cmd) => commands::sequence::run(cmd, format)?,
        Commands::Level(cmd) => commands::level::run(cmd, format)?,
        Commands::Score(cmd) => commands::score::run(cmd, format)?,
        Commands::Fibonacci(cmd) => commands::fibonacci::run(cmd, format)?,
        Commands::Describe(cmd) => commands::describe::run(cmd, format)?,
        Commands::Levels => commands::levels::run(format)?,
        Commands::Complexity(cmd) => commands::complexity::run(cmd, format)?,
        Commands::Validate(cmd) => commands::validate::run(cmd, format)?,
    }

    Ok(())
}
