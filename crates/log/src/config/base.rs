//! Core configuration types

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{DisplayConfig, WriterConfig};
use crate::core::{LogError, LogResult};

/// Configuration for the default JSON sink and the declared context keys
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Minimum level written by the default sink
    pub level: Level,

    /// Output writer configuration
    pub writer: WriterConfig,

    /// Display configuration
    pub display: DisplayConfig,

    /// Context keys surfaced on every record, in output order
    pub keys: Vec<String>,
}

/// Log level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    /// Debug level
    Debug,
    /// Info level
    Info,
    /// Warn level
    Warn,
    /// Error level
    Error,
}

impl Level {
    /// Uppercase name as written into records
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Warn => "WARN",
            Level::Error => "ERROR",
        }
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Level {
    type Err = LogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "debug" => Ok(Level::Debug),
            "info" => Ok(Level::Info),
            "warn" | "warning" => Ok(Level::Warn),
            "error" => Ok(Level::Error),
            _ => Err(LogError::Level(s.to_string())),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            level: Level::Info,
            writer: WriterConfig::Stdout,
            display: DisplayConfig::default(),
            keys: Vec::new(),
        }
    }
}

impl Config {
    /// Parse a configuration document; missing fields take their defaults
    pub fn from_json(source: &str) -> LogResult<Self> {
        serde_json::from_str(source).map_err(|e| LogError::Config(e.to_string()))
    }
}
