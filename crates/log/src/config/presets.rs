//! Configuration presets for common scenarios

use super::{Config, Level, WriterConfig};

impl Config {
    /// Create configuration from environment variables
    ///
    /// Unrecognised values are ignored and the default is kept.
    #[must_use]
    pub fn from_env() -> Self {
        let mut config = Self::default();

        // Parse AMBIENT_LOG or RUST_LOG
        let level = std::env::var("AMBIENT_LOG").or_else(|_| std::env::var("RUST_LOG"));
        if let Some(level) = level.ok().and_then(|l| l.parse::<Level>().ok()) {
            config.level = level;
        }

        if let Ok(writer) = std::env::var("AMBIENT_LOG_WRITER") {
            config.writer = match writer.to_lowercase().as_str() {
                "stderr" => WriterConfig::Stderr,
                _ => WriterConfig::Stdout,
            };
        }

        config.display.parse_env();

        if let Ok(keys) = std::env::var("AMBIENT_LOG_KEYS") {
            config.keys = parse_keys(&keys);
        }

        config
    }

    /// Development configuration (debug level)
    #[must_use]
    pub fn development() -> Self {
        Self {
            level: Level::Debug,
            ..Self::default()
        }
    }

    /// Production configuration (info level, stdout)
    #[must_use]
    pub fn production() -> Self {
        Self {
            level: Level::Info,
            writer: WriterConfig::Stdout,
            ..Self::default()
        }
    }

    /// Test configuration (everything, no timestamps)
    #[cfg(test)]
    pub fn test() -> Self {
        Self {
            level: Level::Debug,
            display: super::DisplayConfig { time: false },
            ..Self::default()
        }
    }
}

fn parse_keys(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .map(String::from)
        .collect()
}
