use crate::errors::AppResult;
use clap::{Parser, Subcommand};

pub mod commands;

/// Collection Quiz - range filters, family statistics and letter frequency
#[derive(Parser)]
#[command(name = "collection-quiz")]
#[command(about = "Range filters, family statistics and letter frequency over in-memory collections")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// List even numbers below a limit
    EvenNumbers(commands::numbers::EvenNumbersCommand),
    /// List squares divisible by 7 below a limit, descending
    Squares(commands::numbers::SquaresCommand),
    /// Compute member count and average age per family from a JSON file
    FamilyStats(commands::family::FamilyStatsCommand),
    /// Count letter occurrences in text
    Letters(commands::letters::LettersCommand),
}

pub fn run() -> AppResult<()> {
    // Initialise tracing subscriber to capture info!() macros
    // Uses RUST_LOG environment variable (defaults to "error" if not set)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("error")),
        )
        .with_writer(std::io::stderr)
        .try_init();

    let cli = Cli::parse();

    match cli.command {
        Commands::EvenNumbers(command) => command.run(),
        Commands::Squares(command) => command.run(),
        Commands::FamilyStats(command) => command.run(),
        Commands::Letters(command) => command.run(),
    }
}
