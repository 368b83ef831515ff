//! Contextual logger
//!
//! [`ContextualLogger`] pulls a fixed, ordered set of keys out of the request
//! context on every call and prepends them to the call-site attributes before
//! handing the record to the underlying [`LeveledLogger`].

use std::fmt;
use std::sync::Arc;

use crate::attr::Attr;
use crate::config::Level;
use crate::context::Lookup;
use crate::sink::{JsonLogger, LeveledLogger};

/// Leveled logging operations taking an explicit request context
///
/// Implemented by [`ContextualLogger`]; code that logs can depend on this
/// trait and receive a test double instead.
pub trait Log {
    /// Emit a record at `level`
    fn log<C: Lookup + ?Sized>(&self, ctx: &C, level: Level, message: &str, attrs: Vec<Attr>);

    /// Emit a `DEBUG` record
    fn debug<C: Lookup + ?Sized>(&self, ctx: &C, message: &str, attrs: Vec<Attr>) {
        self.log(ctx, Level::Debug, message, attrs);
    }

    /// Emit an `INFO` record
    fn info<C: Lookup + ?Sized>(&self, ctx: &C, message: &str, attrs: Vec<Attr>) {
        self.log(ctx, Level::Info, message, attrs);
    }

    /// Emit a `WARN` record
    fn warn<C: Lookup + ?Sized>(&self, ctx: &C, message: &str, attrs: Vec<Attr>) {
        self.log(ctx, Level::Warn, message, attrs);
    }

    /// Emit an `ERROR` record
    fn error<C: Lookup + ?Sized>(&self, ctx: &C, message: &str, attrs: Vec<Attr>) {
        self.log(ctx, Level::Error, message, attrs);
    }
}

/// Logger that injects declared context keys into every record
///
/// Cloning is cheap; clones share the declared keys and the underlying logger.
#[derive(Clone)]
pub struct ContextualLogger {
    keys: Arc<[String]>,
    underlying: Arc<dyn LeveledLogger>,
}

impl ContextualLogger {
    /// Create a logger for `keys`.
    ///
    /// Without an underlying logger, records go to stdout as JSON lines at
    /// `INFO` and above.
    pub fn build<I, S>(keys: I, underlying: Option<Arc<dyn LeveledLogger>>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let underlying = underlying.unwrap_or_else(|| Arc::new(JsonLogger::stdout()));
        Self {
            keys: keys.into_iter().map(Into::<String>::into).collect(),
            underlying,
        }
    }

    /// Declared context keys, in output order
    #[must_use]
    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    /// Whether the underlying logger would emit a record at `level`
    #[must_use]
    pub fn enabled(&self, level: Level) -> bool {
        self.underlying.enabled(level)
    }

    /// Attributes for every declared key present in `ctx`, in declared order
    pub fn context_attrs<C: Lookup + ?Sized>(&self, ctx: &C) -> Vec<Attr> {
        self.keys
            .iter()
            .filter_map(|key| {
                ctx.lookup(key)
                    .filter(|v| !v.is_null())
                    .map(|v| Attr::new(key.clone(), v.clone()))
            })
            .collect()
    }

    fn merge<C: Lookup + ?Sized>(&self, ctx: &C, attrs: Vec<Attr>) -> Vec<Attr> {
        let mut merged = self.context_attrs(ctx);
        merged.extend(attrs);
        merged
    }
}

impl Log for ContextualLogger {
    fn log<C: Lookup + ?Sized>(&self, ctx: &C, level: Level, message: &str, attrs: Vec<Attr>) {
        let merged = self.merge(ctx, attrs);
        self.underlying.log_attrs(&ctx, level, message, merged);
    }
}

impl fmt::Debug for ContextualLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContextualLogger")
            .field("keys", &self.keys)
            .finish_non_exhaustive()
    }
}
