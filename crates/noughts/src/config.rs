//! Window and game configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use noughts_core::Mark;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Smallest allowed cell edge in points.
pub const MIN_CELL_SIZE: f32 = 20.0;
/// Largest allowed cell edge in points.
pub const MAX_CELL_SIZE: f32 = 400.0;

/// Settings for the game window.
#[derive(Debug, Clone, PartialEq, Getters, Serialize, Deserialize)]
pub struct AppConfig {
    /// Window title.
    #[serde(default = "default_title")]
    title: String,

    /// Edge length of one board cell in points.
    #[serde(default = "default_cell_size")]
    cell_size: f32,

    /// Seed for the computer's moves. Drawn from the OS when absent.
    #[serde(default)]
    seed: Option<u64>,

    /// Mark the human plays.
    #[serde(default = "default_human_mark")]
    human_mark: Mark,

    /// Name of the key that restarts the game (egui key name).
    #[serde(default = "default_restart_key")]
    #[getter(skip)]
    restart_key: String,
}

fn default_title() -> String {
    "Tic Tac Toe".to_string()
}

fn default_cell_size() -> f32 {
    100.0
}

fn default_human_mark() -> Mark {
    Mark::X
}

fn default_restart_key() -> String {
    "Enter".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            cell_size: default_cell_size(),
            seed: None,
            human_mark: default_human_mark(),
            restart_key: default_restart_key(),
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
        let config = Self::from_toml(&content)?;
        info!(title = %config.title, cell_size = config.cell_size, "Config loaded successfully");
        Ok(config)
    }

    /// Loads the file at `path`, or the defaults if it does not exist.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Parses and validates a TOML document.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Checks value ranges and the restart key name.
    #[instrument(skip(self))]
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_CELL_SIZE..=MAX_CELL_SIZE).contains(&self.cell_size) {
            return Err(ConfigError::new(format!(
                "cell_size must be between {} and {}, got {}",
                MIN_CELL_SIZE, MAX_CELL_SIZE, self.cell_size
            )));
        }
        self.restart_key()?;
        Ok(())
    }

    /// Configured name of the restart key.
    pub fn restart_key_name(&self) -> &str {
        &self.restart_key
    }

    /// Resolves the configured restart key.
    pub fn restart_key(&self) -> Result<egui::Key, ConfigError> {
        egui::Key::from_name(&self.restart_key)
            .ok_or_else(|| ConfigError::new(format!("Unknown restart key: {}", self.restart_key)))
    }

    /// Applies command-line overrides, then revalidates.
    #[instrument(skip(self))]
    pub fn with_overrides(
        mut self,
        seed: Option<u64>,
        cell_size: Option<f32>,
        human_mark: Option<Mark>,
    ) -> Result<Self, ConfigError> {
        if let Some(seed) = seed {
            self.seed = Some(seed);
        }
        if let Some(cell_size) = cell_size {
            self.cell_size = cell_size;
        }
        if let Some(mark) = human_mark {
            self.human_mark = mark;
        }
        self.validate()?;
        Ok(self)
    }

    /// Edge length of the whole square window.
    pub fn window_size(&self) -> f32 {
        self.cell_size * noughts_core::COLS as f32
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
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
