use super::{emit, load_config, resolve_format};
use crate::analysis::{letter_frequency_with_scope, ReportFormatter};
use crate::errors::AppResult;
use crate::types::LetterScope;
use clap::Args;
use std::path::PathBuf;
use tracing::info;

/// Count letter occurrences in text, ignoring case
#[derive(Args)]
pub struct LettersCommand {
    /// Text to analyse
    #[arg(conflicts_with = "input")]
    pub text: Option<String>,

    /// Read the text from a file instead
    #[arg(long)]
    pub input: Option<PathBuf>,

    /// Letter classification: unicode or ascii (overrides config.toml)
    #[arg(long)]
    pub scope: Option<String>,

    /// Output format: console or json (overrides config.toml)
    #[arg(long)]
    pub format: Option<String>,

    /// Write the report to a file instead of stdout
    #[arg(long)]
    pub output: Option<PathBuf>,
}

impl LettersCommand {
    pub fn run(&self) -> AppResult<()> {
        let config = load_config()?;

        let scope = match &self.scope {
            Some(scope) => scope.parse::<LetterScope>()?,
            None => config.letter_scope()?,
        };

        let text = match &self.input {
            Some(path) => {
                info!("Reading text from {}", path.display());
                Some(std::fs::read_to_string(path)?)
            }
            None => self.text.clone(),
        };

        let counts = letter_frequency_with_scope(text.as_deref(), scope)?;
        info!("Found {} distinct letters", counts.len());

        let report = ReportFormatter::format_letter_frequency(
            &counts,
            &resolve_format(&self.format, &config),
        )?;
        emit(&report, &self.output)
    }
}
