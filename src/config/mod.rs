use crate::constants::{DEFAULT_LOG_LEVEL, LOG_FILE_NAME, env_vars};
use crate::error::AppError;
use crate::scoreboard::EndedGamePolicy;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs;
use tokio::io::AsyncWriteExt;

pub mod paths;
pub mod validation;

use paths::{get_config_path, get_log_dir_path};
use validation::validate_config;

/// Configuration structure for the scoreboard application.
/// Handles loading, saving, and managing application settings.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Config {
    /// Path to the log file. If not specified, logs will be written to a default location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file_path: Option<String>,
    /// Log level for the `live_scoreboard` tracing target.
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Whether ended games stay on the scoreboard or are dropped from it.
    #[serde(default)]
    pub ended_games: EndedGamePolicy,
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_file_path: None,
            log_level: default_log_level(),
            ended_games: EndedGamePolicy::default(),
        }
    }
}

impl Config {
    /// Loads configuration from the default config file location.
    /// Falls back to defaults when no config file exists.
    /// Environment variables override config file values.
    ///
    /// # Environment Variables
    /// - `SCOREBOARD_LOG_FILE` - Override log file path
    /// - `SCOREBOARD_LOG_LEVEL` - Override log level
    /// - `SCOREBOARD_ENDED_GAMES` - Override ended game policy (`retain` / `remove`)
    pub async fn load() -> Result<Self, AppError> {
        let config_path = get_config_path();

        let mut config = if Path::new(&config_path).exists() {
            Self::load_from_path(&config_path).await?
        } else {
            tracing::debug!("No config file at {config_path}, using defaults");
            Config::default()
        };

        config.apply_env_overrides()?;
        config.validate()?;

        Ok(config)
    }

    /// Applies the `SCOREBOARD_*` environment overrides in place.
    pub fn apply_env_overrides(&mut self) -> Result<(), AppError> {
        if let Ok(log_file_path) = std::env::var(env_vars::LOG_FILE) {
            self.log_file_path = Some(log_file_path);
        }

        if let Ok(log_level) = std::env::var(env_vars::LOG_LEVEL) {
            self.log_level = log_level.trim().to_ascii_lowercase();
        }

        if let Ok(policy) = std::env::var(env_vars::ENDED_GAMES) {
            self.ended_games = policy.parse().map_err(|e: String| {
                AppError::config_error(format!("{}: {e}", env_vars::ENDED_GAMES))
            })?;
        }

        Ok(())
    }

    /// Validates the configuration settings
    pub fn validate(&self) -> Result<(), AppError> {
        validate_config(&self.log_file_path, &self.log_level)
    }

    /// Returns the platform-specific path for the config file.
    pub fn get_config_path() -> String {
        paths::get_config_path()
    }

    /// Returns the platform-specific path for the log directory.
    pub fn get_log_dir_path() -> String {
        paths::get_log_dir_path()
    }

    /// Displays current configuration settings to stdout.
    pub async fn display() -> Result<(), AppError> {
        let config_path = get_config_path();
        let log_dir = get_log_dir_path();
        let config = Config::load().await?;

        println!("\nCurrent Configuration");
        println!("────────────────────────────────────");
        println!("Config Location:");
        if Path::new(&config_path).exists() {
            println!("{config_path}");
        } else {
            println!("{config_path} (not created, using defaults)");
        }
        println!("────────────────────────────────────");
        println!("Log Level:");
        println!("{}", config.log_level);
        println!("────────────────────────────────────");
        println!("Ended Games:");
        println!("{}", config.ended_games);
        println!("────────────────────────────────────");
        println!("Log File Location:");
        if let Some(custom_path) = &config.log_file_path {
            println!("{custom_path}");
        } else {
            println!("{log_dir}/{LOG_FILE_NAME}");
            println!("(Default location)");
        }

        Ok(())
    }

    /// Saves configuration to a custom file path.
    ///
    /// # Errors
    /// * `AppError::Config` - If the provided path has no parent directory
    /// * `AppError::Io` - If there's an I/O error creating directories or writing the file
    /// * `AppError::TomlSerialize` - If there's an error serializing the configuration
    pub async fn save_to_path(&self, path: &str) -> Result<(), AppError> {
        let config_dir = Path::new(path).parent().ok_or_else(|| {
            AppError::config_error(format!("Path '{path}' has no parent directory"))
        })?;

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).await?;
        }
        let content = toml::to_string_pretty(self)?;
        let mut file = fs::File::create(path).await?;
        file.write_all(content.as_bytes()).await?;
        file.flush().await?;
        Ok(())
    }

    /// Loads configuration from a custom file path without environment overrides.
    pub async fn load_from_path(path: &str) -> Result<Self, AppError> {
        let content = fs::read_to_string(path).await?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}
