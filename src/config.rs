use crate::analysis::OutputFormat;
use crate::errors::AppResult;
use crate::types::LetterScope;
use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Application configuration loaded from config.toml or environment variables
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub letters: LettersConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LettersConfig {
    /// "unicode" or "ascii"
    pub scope: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// "console" or "json"
    pub format: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            letters: LettersConfig {
                scope: LetterScope::default().to_string(),
            },
            output: OutputConfig {
                format: "console".to_string(),
            },
        }
    }
}

impl AppConfig {
    /// Load configuration from config.toml file and environment variables
    /// Environment variables take precedence over file configuration
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration using `file_stem` (extension optional) as the file source
    pub fn load_from(file_stem: &str) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let config = Config::builder()
            .set_default("letters.scope", defaults.letters.scope)?
            .set_default("output.format", defaults.output.format)?
            // Load from config file if it exists
            .add_source(File::with_name(file_stem).required(false))
            // QUIZ_LETTERS__SCOPE, QUIZ_OUTPUT__FORMAT
            .add_source(
                Environment::with_prefix("QUIZ")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?;

        let app_config: AppConfig = config.try_deserialize()?;

        if app_config.letters.scope.parse::<LetterScope>().is_err() {
            return Err(ConfigError::Message(format!(
                "Invalid letters.scope '{}'. Expected 'unicode' or 'ascii'",
                app_config.letters.scope
            )));
        }

        Ok(app_config)
    }

    /// Get default config values for CLI argument defaults
    pub fn get_defaults() -> Result<Self, ConfigError> {
        // Try to load config for defaults, but don't fail if invalid
        match Self::load() {
            Ok(config) => Ok(config),
            Err(e) => {
                warn!("Falling back to default configuration: {}", e);
                Ok(Self::default())
            }
        }
    }

    pub fn letter_scope(&self) -> AppResult<LetterScope> {
        self.letters.scope.parse()
    }

    pub fn output_format(&self) -> OutputFormat {
        self.output.format.parse().unwrap_or_default()
    }
}
