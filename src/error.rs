//! Error types

use std::path::PathBuf;

/// Internal failure while converting a component to native text.
///
/// Never returned from the public conversion entry points; the converter
/// catches it and falls back to legacy formatting.
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error("Invalid color hex string: {0:?}")]
    InvalidColor(String),

    #[error("Component nesting exceeds {limit} levels")]
    TooDeep { limit: usize },
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid config value for {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

pub type Result<T> = std::result::Result<T, ConfigError>;
