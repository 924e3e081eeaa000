//! User settings loaded from a TOML file.

use crate::controller::{DEFAULT_PLAYER1, DEFAULT_PLAYER2};
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Default settings file, looked up in the working directory.
pub const DEFAULT_SETTINGS_FILE: &str = "tictactoe.toml";

/// Preferences for a play session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Pre-filled name for player 1 (X).
    player1: String,

    /// Pre-filled name for player 2 (O).
    player2: String,

    /// File the terminal UI writes its logs to.
    log_file: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            player1: DEFAULT_PLAYER1.to_string(),
            player2: DEFAULT_PLAYER2.to_string(),
            log_file: PathBuf::from("tictactoe_tui.log"),
        }
    }
}

impl Settings {
    /// Loads settings from a TOML file. Missing keys take their defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading settings from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read settings file: {}", e)))?;

        let settings: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse settings: {}", e)))?;

        info!(player1 = %settings.player1, player2 = %settings.player2, "Settings loaded");
        Ok(settings)
    }

    /// Loads `path` if given, else the default file when it exists, else defaults.
    ///
    /// An explicitly requested file must exist.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None if Path::new(DEFAULT_SETTINGS_FILE).exists() => {
                Self::from_file(DEFAULT_SETTINGS_FILE)
            }
            None => {
                debug!("No settings file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Replaces the player names when overrides are given.
    pub fn with_names(mut self, player1: Option<String>, player2: Option<String>) -> Self {
        if let Some(name) = player1 {
            self.player1 = name;
        }
        if let Some(name) = player2 {
            self.player2 = name;
        }
        self
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
