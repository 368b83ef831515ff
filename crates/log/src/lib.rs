//! # Ambient Log - contextual structured logging
//!
//! Declare once which request-context keys matter, then log from anywhere in
//! the request without repeating them.
//!
//! ## Quick Start
//!
//! ```rust
//! use ambient_log::prelude::*;
//!
//! let logger = ContextualLogger::build(["userID", "requestID"], None);
//!
//! let ctx = Context::background()
//!     .with_value("userID", "42069")
//!     .with_value("requestID", "abcd-efgh");
//!
//! // {"time":"...","level":"INFO","msg":"Info message","userID":"42069","requestID":"abcd-efgh","key":"value"}
//! logger.info(&ctx, "Info message", attrs![key = "value"]);
//! ```
//!
//! Records are handed to a [`LeveledLogger`]. The default is [`JsonLogger`]
//! on stdout; [`TracingLogger`] forwards into an installed `tracing`
//! subscriber instead.

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

mod attr;
mod builder;
mod config;
mod context;
mod core;
mod logger;
mod macros;
mod sink;
mod writer;

// Public API
pub use attr::Attr;
pub use builder::LoggerBuilder;
pub use config::{Config, DisplayConfig, Level, WriterConfig};
pub use context::{Context, Lookup};
pub use crate::core::{LogError, LogResult};
pub use logger::{ContextualLogger, Log};
pub use sink::{JsonLogger, LeveledLogger, TRACING_TARGET, TracingLogger};

/// Prelude for common imports
pub mod prelude {
    pub use crate::{
        Attr, Context, ContextualLogger, Level, Log, LoggerBuilder, Lookup, attrs, with_context,
    };
}

/// Build a logger from `AMBIENT_LOG*` environment variables
///
/// See [`Config::from_env`] for the variables read.
#[must_use]
pub fn from_env() -> ContextualLogger {
    init_with(Config::from_env())
}

/// Build a logger from a configuration
#[must_use]
pub fn init_with(config: Config) -> ContextualLogger {
    LoggerBuilder::from_config(config).build()
}
