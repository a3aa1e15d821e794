//! Application configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use mnk_tictactoe::{GameSettings, MAX_SETTING, MIN_SETTING};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

use crate::cli::PlayArgs;

/// Startup configuration for the terminal game.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct AppConfig {
    /// Initial board rows.
    #[serde(default = "default_size")]
    rows: usize,

    /// Initial board columns.
    #[serde(default = "default_size")]
    columns: usize,

    /// Initial run length needed to win.
    #[serde(default = "default_size")]
    win_length: usize,

    /// File that receives log output while the UI owns the terminal.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,
}

fn default_size() -> usize {
    3
}

fn default_log_file() -> PathBuf {
    PathBuf::from("mnk_tui.log")
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            rows: default_size(),
            columns: default_size(),
            win_length: default_size(),
            log_file: default_log_file(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        config.validate()?;
        info!(rows = config.rows, columns = config.columns, "Config loaded successfully");
        Ok(config)
    }

    /// Loads the file if it exists, otherwise returns defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            debug!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Applies command-line overrides and re-validates.
    #[instrument(skip(self))]
    pub fn with_overrides(mut self, args: &PlayArgs) -> Result<Self, ConfigError> {
        if let Some(rows) = args.rows {
            self.rows = rows;
        }
        if let Some(columns) = args.columns {
            self.columns = columns;
        }
        if let Some(win_length) = args.win_length {
            self.win_length = win_length;
        }
        self.validate()?;
        Ok(self)
    }

    /// Checks every size setting against the input rule.
    #[instrument(skip(self))]
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("rows", self.rows),
            ("columns", self.columns),
            ("win_length", self.win_length),
        ] {
            if value < MIN_SETTING {
                return Err(ConfigError::new(format!(
                    "{} must be at least {}, got {}",
                    name, MIN_SETTING, value
                )));
            }
            if value > MAX_SETTING {
                return Err(ConfigError::new(format!(
                    "{} must be at most {}, got {}",
                    name, MAX_SETTING, value
                )));
            }
        }
        Ok(())
    }

    /// Game settings for a validated config.
    pub fn settings(&self) -> Result<GameSettings, ConfigError> {
        GameSettings::new(self.rows, self.columns, self.win_length)
            .ok_or_else(|| ConfigError::new("Settings out of range".to_string()))
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
