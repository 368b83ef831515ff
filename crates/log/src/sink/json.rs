//! JSON lines sink

use std::fmt;
use std::io::Write;

use serde::ser::{SerializeMap, Serializer};
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::fmt::writer::BoxMakeWriter;

use super::LeveledLogger;
use crate::attr::Attr;
use crate::config::{Config, Level};
use crate::context::Lookup;
use crate::core::LogResult;
use crate::writer;

/// Writes each record as a single JSON object followed by `\n`
///
/// Keys are written in order: `time` (optional), `level`, `msg`, then the
/// attributes exactly as given. Duplicate attribute keys are not collapsed.
pub struct JsonLogger {
    make_writer: BoxMakeWriter,
    level: Level,
    time: bool,
    log_internal_errors: bool,
}

impl JsonLogger {
    /// JSON logger over any [`MakeWriter`], at `INFO` with timestamps
    pub fn new<M>(make_writer: M) -> Self
    where
        M: for<'a> MakeWriter<'a> + Send + Sync + 'static,
    {
        Self {
            make_writer: BoxMakeWriter::new(make_writer),
            level: Level::Info,
            time: true,
            log_internal_errors: true,
        }
    }

    /// JSON logger writing to stdout with default settings
    #[must_use]
    pub fn stdout() -> Self {
        Self::from_config(&Config::default())
    }

    /// JSON logger built from the writer, level and display settings of `config`
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self {
            make_writer: writer::make_writer(&config.writer),
            level: config.level,
            time: config.display.time,
            log_internal_errors: true,
        }
    }

    /// Minimum level written
    #[must_use]
    pub fn with_level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    /// Include the `time` field
    #[must_use]
    pub fn with_time(mut self, time: bool) -> Self {
        self.time = time;
        self
    }

    /// Report write failures on stderr
    #[must_use]
    pub fn log_internal_errors(mut self, enabled: bool) -> Self {
        self.log_internal_errors = enabled;
        self
    }

    /// Minimum level written
    #[must_use]
    pub fn level(&self) -> Level {
        self.level
    }

    fn encode(&self, level: Level, message: &str, attrs: &[Attr]) -> LogResult<Vec<u8>> {
        let mut buf = Vec::with_capacity(128);
        let mut ser = serde_json::Serializer::new(&mut buf);
        let mut map = ser.serialize_map(None)?;
        if self.time
            && let Ok(ts) = OffsetDateTime::now_utc().format(&Rfc3339)
        {
            map.serialize_entry("time", &ts)?;
        }
        map.serialize_entry("level", level.as_str())?;
        map.serialize_entry("msg", message)?;
        for attr in attrs {
            map.serialize_entry(&attr.key, &attr.value)?;
        }
        map.end()?;
        buf.push(b'\n');
        Ok(buf)
    }

    fn write_record(&self, level: Level, message: &str, attrs: &[Attr]) -> LogResult<()> {
        let line = self.encode(level, message, attrs)?;
        // single write so concurrent records never interleave within a line
        let mut writer = self.make_writer.make_writer();
        writer.write_all(&line)?;
        writer.flush()?;
        Ok(())
    }
}

impl LeveledLogger for JsonLogger {
    fn log_attrs(&self, _ctx: &dyn Lookup, level: Level, message: &str, attrs: Vec<Attr>) {
        if !self.enabled(level) {
            return;
        }
        if let Err(e) = self.write_record(level, message, &attrs)
            && self.log_internal_errors
        {
            eprintln!("[ambient-log] failed to write {level} record: {e}");
        }
    }

    fn enabled(&self, level: Level) -> bool {
        level >= self.level
    }
}

impl Default for JsonLogger {
    fn default() -> Self {
        Self::stdout()
    }
}

impl fmt::Debug for JsonLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JsonLogger")
            .field("level", &self.level)
            .field("time", &self.time)
            .field("log_internal_errors", &self.log_internal_errors)
            .finish_non_exhaustive()
    }
}

/// Render attributes as a JSON object, preserving order and duplicates
pub(crate) fn render_attrs(attrs: &[Attr]) -> LogResult<String> {
    let mut buf = Vec::with_capacity(64);
    let mut ser = serde_json::Serializer::new(&mut buf);
    let mut map = ser.serialize_map(Some(attrs.len()))?;
    for attr in attrs {
        map.serialize_entry(&attr.key, &attr.value)?;
    }
    map.end()?;
    // serde_json only emits valid UTF-8
    Ok(String::from_utf8_lossy(&buf).into_owned())
}
