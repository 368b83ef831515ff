//! Bridge into the `tracing` ecosystem

use super::LeveledLogger;
use super::json::render_attrs;
use crate::attr::Attr;
use crate::config::Level;
use crate::context::Lookup;

/// Target used for every bridged event
pub const TRACING_TARGET: &str = "ambient_log";

/// Re-emits records as `tracing` events
///
/// The merged attributes travel as a JSON object string in the `attrs`
/// field, since `tracing` field names must be known at compile time.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl TracingLogger {
    /// Create the bridge
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl LeveledLogger for TracingLogger {
    fn log_attrs(&self, _ctx: &dyn Lookup, level: Level, message: &str, attrs: Vec<Attr>) {
        let attrs = render_attrs(&attrs).unwrap_or_else(|e| format!("{{\"!encode\":\"{e}\"}}"));
        match level {
            Level::Debug => tracing::debug!(target: TRACING_TARGET, attrs = %attrs, "{message}"),
            Level::Info => tracing::info!(target: TRACING_TARGET, attrs = %attrs, "{message}"),
            Level::Warn => tracing::warn!(target: TRACING_TARGET, attrs = %attrs, "{message}"),
            Level::Error => tracing::error!(target: TRACING_TARGET, attrs = %attrs, "{message}"),
        }
    }

    fn enabled(&self, level: Level) -> bool {
        match level {
            Level::Debug => tracing::enabled!(target: TRACING_TARGET, tracing::Level::DEBUG),
            Level::Info => tracing::enabled!(target: TRACING_TARGET, tracing::Level::INFO),
            Level::Warn => tracing::enabled!(target: TRACING_TARGET, tracing::Level::WARN),
            Level::Error => tracing::enabled!(target: TRACING_TARGET, tracing::Level::ERROR),
        }
    }
}
