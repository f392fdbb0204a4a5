pub mod family;
pub mod letters;
pub mod numbers;

use crate::analysis::OutputFormat;
use crate::config::AppConfig;
use crate::errors::{AppError, AppResult};
use std::path::PathBuf;

/// Load configuration for CLI defaults; invalid values are reported, not ignored
fn load_config() -> AppResult<AppConfig> {
    AppConfig::load()
        .map_err(|e| AppError::Config(format!("Failed to load configuration: {}", e)))
}

/// Output format from CLI argument, falling back to config
fn resolve_format(cli_format: &Option<String>, config: &AppConfig) -> OutputFormat {
    match cli_format {
        Some(format) => format.parse().unwrap_or_default(),
        None => config.output_format(),
    }
}

/// Print the report, or write it to `output_path` with safe directory creation
fn emit(content: &str, output_path: &Option<PathBuf>) -> AppResult<()> {
    match output_path {
        Some(path) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(path, content)?;
            println!("Report written to: {}", path.display());
        }
        None => print!("{}", content),
    }
    Ok(())
}
