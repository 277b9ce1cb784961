//! TOML configuration file.

use super::ScanPreferences;
use crate::device::Rotation;
use crate::preview::PreviewBounds;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuration validation errors.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid preview bounds: min_pixels {min} exceeds max_pixels {max}")]
    InvalidBounds { min: u64, max: u64 },
    #[error("invalid preview bounds: min_pixels must be positive")]
    ZeroMinimum,
    #[error("failed to read config file: {0}")]
    FileReadError(String),
    #[error("failed to parse config file: {0}")]
    ParseError(String),
}

/// Display settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Clockwise rotation applied to the preview. Scanners run in portrait,
    /// hence 90 by default.
    pub orientation: Rotation,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            orientation: Rotation::Deg90,
        }
    }
}

/// Full configuration file format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct FileConfig {
    #[serde(default)]
    pub preferences: ScanPreferences,
    #[serde(default)]
    pub preview: PreviewBounds,
    #[serde(default)]
    pub display: DisplayConfig,
}

impl FileConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::FileReadError(e.to_string()))?;
        Self::from_toml(&content)
    }

    /// Parses and validates configuration from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: FileConfig =
            toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration parameters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.preview.min_pixels == 0 {
            return Err(ConfigError::ZeroMinimum);
        }
        if !self.preview.is_valid() {
            return Err(ConfigError::InvalidBounds {
                min: self.preview.min_pixels,
                max: self.preview.max_pixels,
            });
        }
        Ok(())
    }
}
