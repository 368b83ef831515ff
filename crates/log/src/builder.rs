//! Logger builder implementation

use std::sync::Arc;

use crate::config::Config;
use crate::logger::ContextualLogger;
use crate::sink::{JsonLogger, LeveledLogger};

/// Builder for [`ContextualLogger`]
///
/// When no underlying logger is supplied, [`build`](Self::build) falls back to
/// a [`JsonLogger`] configured from the builder's [`Config`].
#[derive(Default)]
pub struct LoggerBuilder {
    config: Config,
    keys: Vec<String>,
    underlying: Option<Arc<dyn LeveledLogger>>,
}

impl LoggerBuilder {
    /// Empty builder with default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create builder from config; declared keys are taken from `config.keys`
    #[must_use]
    pub fn from_config(config: Config) -> Self {
        Self {
            keys: config.keys.clone(),
            config,
            underlying: None,
        }
    }

    /// Declare one more context key
    #[must_use]
    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.keys.push(key.into());
        self
    }

    /// Declare several context keys, appended in order
    #[must_use]
    pub fn keys<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keys.extend(keys.into_iter().map(Into::into));
        self
    }

    /// Use `logger` instead of the default JSON sink
    #[must_use]
    pub fn underlying(mut self, logger: impl LeveledLogger + 'static) -> Self {
        self.underlying = Some(Arc::new(logger));
        self
    }

    /// Use an already shared logger instead of the default JSON sink
    #[must_use]
    pub fn shared(mut self, logger: Arc<dyn LeveledLogger>) -> Self {
        self.underlying = Some(logger);
        self
    }

    /// Configuration used for the fallback sink
    #[must_use]
    pub fn config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    /// Build the logger
    #[must_use]
    pub fn build(self) -> ContextualLogger {
        let underlying = match self.underlying {
            Some(logger) => logger,
            None => Arc::new(JsonLogger::from_config(&self.config)),
        };
        ContextualLogger::build(self.keys, Some(underlying))
    }
}

impl std::fmt::Debug for LoggerBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoggerBuilder")
            .field("config", &self.config)
            .field("keys", &self.keys)
            .field("underlying", &self.underlying.is_some())
            .finish()
    }
}
