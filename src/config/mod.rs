//! Bridge configuration
//!
//! Loaded from TOML. Every field has a default, so a missing file or a
//! partial file both yield a usable config.

use crate::error::{ConfigError, Result};
use crate::text::{DEFAULT_MAX_DEPTH, SECTION_CHAR};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ShimConfig {
    pub audio: AudioConfig,
    pub text: TextConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AudioConfig {
    /// Distance in blocks at which a positional source becomes inaudible
    pub max_distance: f64,
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self { max_distance: 48.0 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextConfig {
    /// Component nesting allowed before conversion falls back to legacy text
    pub max_depth: usize,
    /// Formatting character used by the legacy fallback
    pub legacy_char: char,
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            legacy_char: SECTION_CHAR,
        }
    }
}

impl ShimConfig {
    /// Load from `path`. A missing file yields the defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        match fs::read_to_string(path) {
            Ok(contents) => Self::from_toml_str(&contents),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::info!("No config at {}, using defaults", path.display());
                Ok(Self::default())
            }
            Err(source) => Err(ConfigError::Io {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: Self = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if !self.audio.max_distance.is_finite() || self.audio.max_distance <= 0.0 {
            return Err(ConfigError::Invalid {
                field: "audio.max_distance",
                reason: format!("must be a positive number, got {}", self.audio.max_distance),
            });
        }
        Ok(())
    }
}
