//! Configuration settings for serenity.
//!
//! Settings are loaded from `~/.serenity/config.yaml`.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::config::Paths;
use crate::error::SerenityError;

/// Main configuration structure.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// General settings.
    pub general: GeneralConfig,
}

/// General application settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Task file location; `~/.serenity/data/serenity.txt` when unset.
    #[serde(default)]
    pub data_file: Option<PathBuf>,
    /// Color output setting.
    #[serde(default)]
    pub color: ColorSetting,
    /// Name the assistant introduces itself with.
    #[serde(default = "default_name")]
    pub name: String,
}

/// Color output setting.
#[derive(Debug, Clone, Copy, Deserialize, Default, PartialEq, Eq, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ColorSetting {
    /// Auto-detect based on terminal.
    #[default]
    Auto,
    /// Always use colors.
    Always,
    /// Never use colors.
    Never,
}

impl ColorSetting {
    /// Apply this setting to all colored output of the process.
    pub fn apply(self) {
        match self {
            Self::Auto => colored::control::unset_override(),
            Self::Always => colored::control::set_override(true),
            Self::Never => colored::control::set_override(false),
        }
    }
}

fn default_name() -> String {
    "Serenity".to_string()
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            data_file: None,
            color: ColorSetting::default(),
            name: default_name(),
        }
    }
}

impl Config {
    /// Load configuration from a specific path.
    ///
    /// If the config file doesn't exist, returns default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load_from_path(path: &Path) -> Result<Self, SerenityError> {
        if !path.exists() {
            debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path).map_err(|e| {
            SerenityError::Config(format!("Failed to read config file {}: {e}", path.display()))
        })?;

        debug!(path = %path.display(), "Loading config");
        serde_yaml::from_str(&contents).map_err(|e| {
            SerenityError::Config(format!("Failed to parse config file {}: {e}", path.display()))
        })
    }

    /// The task file to use: an explicit override, then the configured
    /// `data_file`, then the default under `paths`.
    #[must_use]
    pub fn task_file(&self, explicit: Option<&Path>, paths: &Paths) -> PathBuf {
        explicit
            .map(Path::to_path_buf)
            .or_else(|| self.general.data_file.clone())
            .unwrap_or_else(|| paths.task_file.clone())
    }
}
