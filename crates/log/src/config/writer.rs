//! Writer and display configuration

use serde::{Deserialize, Serialize};

/// Writer configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
#[non_exhaustive]
pub enum WriterConfig {
    /// Write to stdout
    #[default]
    Stdout,
    /// Write to stderr
    Stderr,
}

/// Display configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Prefix each record with an RFC 3339 `time` field
    pub time: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self { time: true }
    }
}

impl DisplayConfig {
    /// Parse display configuration from environment variables
    pub(super) fn parse_env(&mut self) {
        if let Ok(v) = std::env::var("AMBIENT_LOG_TIME") {
            self.time = !matches!(v.trim().to_ascii_lowercase().as_str(), "0" | "false");
        }
    }
}
