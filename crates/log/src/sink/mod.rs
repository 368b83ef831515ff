//! Underlying leveled loggers
//!
//! [`LeveledLogger`] is the seam between the contextual logger and whatever
//! does the actual formatting and output:
//! - [`JsonLogger`]: one JSON object per line to a pluggable writer (default)
//! - [`TracingLogger`]: re-emits records as `tracing` events

mod bridge;
mod json;

pub use self::bridge::{TRACING_TARGET, TracingLogger};
pub use self::json::JsonLogger;

use std::sync::Arc;

use crate::attr::Attr;
use crate::config::Level;
use crate::context::Lookup;

/// Leveled logger accepting an ordered list of attributes per record
///
/// Implementations must tolerate concurrent calls from many threads.
pub trait LeveledLogger: Send + Sync {
    /// Emit one record. Failures are the implementation's concern.
    fn log_attrs(&self, ctx: &dyn Lookup, level: Level, message: &str, attrs: Vec<Attr>);

    /// Whether a record at `level` would be emitted
    fn enabled(&self, _level: Level) -> bool {
        true
    }
}

impl<T: LeveledLogger + ?Sized> LeveledLogger for Arc<T> {
    fn log_attrs(&self, ctx: &dyn Lookup, level: Level, message: &str, attrs: Vec<Attr>) {
        (**self).log_attrs(ctx, level, message, attrs);
    }

    fn enabled(&self, level: Level) -> bool {
        (**self).enabled(level)
    }
}

impl<T: LeveledLogger + ?Sized> LeveledLogger for Box<T> {
    fn log_attrs(&self, ctx: &dyn Lookup, level: Level, message: &str, attrs: Vec<Attr>) {
        (**self).log_attrs(ctx, level, message, attrs);
    }

    fn enabled(&self, level: Level) -> bool {
        (**self).enabled(level)
    }
}
