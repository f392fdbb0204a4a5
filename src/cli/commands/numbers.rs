use super::{emit, load_config, resolve_format};
use crate::analysis::{descending_squares_divisible_by_seven, even_numbers, ReportFormatter};
use crate::errors::AppResult;
use clap::Args;
use std::path::PathBuf;
use tracing::info;

/// List even numbers below an exclusive upper limit
#[derive(Args)]
pub struct EvenNumbersCommand {
    /// Exclusive upper limit (must be >= 1)
    #[arg(allow_negative_numbers = true)]
    pub limit: i32,

    /// Output format: console or json (overrides config.toml)
    #[arg(long)]
    pub format: Option<String>,

    /// Write the report to a file instead of stdout
    #[arg(long)]
    pub output: Option<PathBuf>,
}

impl EvenNumbersCommand {
    pub fn run(&self) -> AppResult<()> {
        info!("Generating even numbers below {}", self.limit);

        let config = load_config()?;
        let values = even_numbers(self.limit)?;
        let report = ReportFormatter::format_numbers(
            &format!("Even Numbers below {}", self.limit),
            &values,
            &resolve_format(&self.format, &config),
        )?;
        emit(&report, &self.output)
    }
}

/// List squares divisible by 7 below an exclusive upper limit, descending
#[derive(Args)]
pub struct SquaresCommand {
    /// Exclusive upper limit (values below 1 give an empty list)
    #[arg(allow_negative_numbers = true)]
    pub limit: i32,

    /// Output format: console or json (overrides config.toml)
    #[arg(long)]
    pub format: Option<String>,

    /// Write the report to a file instead of stdout
    #[arg(long)]
    pub output: Option<PathBuf>,
}

impl SquaresCommand {
    pub fn run(&self) -> AppResult<()> {
        info!("Collecting squares divisible by 7 below {}", self.limit);

        let config = load_config()?;
        let values = descending_squares_divisible_by_seven(self.limit)?;
        let report = ReportFormatter::format_numbers(
            &format!("Squares Divisible by 7 below {}", self.limit),
            &values,
            &resolve_format(&self.format, &config),
        )?;
        emit(&report, &self.output)
    }
}
