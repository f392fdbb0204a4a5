use super::{emit, load_config, resolve_format};
use crate::analysis::{family_statistics, ReportFormatter};
use crate::errors::AppResult;
use crate::types::FamilyRecord;
use clap::Args;
use std::path::{Path, PathBuf};
use tracing::info;

/// Compute member count and average age per family
#[derive(Args)]
pub struct FamilyStatsCommand {
    /// JSON file holding an array of families: [{"id": 1, "persons": [{"age": 30}]}]
    #[arg(long)]
    pub input: PathBuf,

    /// Output format: console or json (overrides config.toml)
    #[arg(long)]
    pub format: Option<String>,

    /// Write the report to a file instead of stdout
    #[arg(long)]
    pub output: Option<PathBuf>,
}

impl FamilyStatsCommand {
    pub fn run(&self) -> AppResult<()> {
        info!("Reading families from {}", self.input.display());

        let config = load_config()?;
        let families = read_families(&self.input)?;
        let summaries = family_statistics(families.as_deref())?;
        info!("Summarised {} families", summaries.len());

        let report = ReportFormatter::format_family_statistics(
            &summaries,
            &resolve_format(&self.format, &config),
        )?;
        emit(&report, &self.output)
    }
}

/// Parse a family file. A literal `null` document yields `None`.
pub fn read_families(path: &Path) -> AppResult<Option<Vec<FamilyRecord>>> {
    let content = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}
