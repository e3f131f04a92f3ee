//! Match configuration loaded from TOML and overridden by the command line.

use crate::cli::Cli;
use derive_getters::Getters;
use derive_more::{Display, Error};
use parlor_tictactoe::Marker;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Settings for one match.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Marker the human plays; the computer gets the other one.
    #[serde(default = "default_human_marker")]
    human_marker: Marker,

    /// Seed for the computer's generator. `None` draws from OS entropy.
    #[serde(default)]
    seed: Option<u64>,

    /// Print the 1-9 legend under every board.
    #[serde(default = "default_show_legend")]
    show_legend: bool,
}

fn default_human_marker() -> Marker {
    Marker::X
}

fn default_show_legend() -> bool {
    true
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            human_marker: default_human_marker(),
            seed: None,
            show_legend: default_show_legend(),
        }
    }
}

impl GameConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(
            human_marker = %config.human_marker,
            seed = ?config.seed,
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise falls back to defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Applies command-line overrides on top of the file values.
    #[instrument(skip(self, cli))]
    pub fn with_overrides(mut self, cli: &Cli) -> Self {
        if let Some(marker) = cli.human_marker {
            debug!(%marker, "Overriding human marker");
            self.human_marker = marker;
        }
        if let Some(seed) = cli.seed {
            debug!(seed, "Overriding seed");
            self.seed = Some(seed);
        }
        if cli.no_legend {
            self.show_legend = false;
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
