//! Shared helpers for integration tests

#![allow(dead_code)]

use std::fmt;
use std::io;
use std::sync::Arc;

use ambient_log::{Attr, Level, LeveledLogger, Lookup};
use parking_lot::{Mutex, MutexGuard};
use serde::de::{Deserialize, Deserializer, MapAccess, Visitor};
use serde_json::Value;
use tracing_subscriber::fmt::MakeWriter;

/// In-memory sink usable wherever a `MakeWriter` is expected
#[derive(Clone, Default)]
pub struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

pub struct SharedBufferGuard<'a>(MutexGuard<'a, Vec<u8>>);

impl io::Write for SharedBufferGuard<'_> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for SharedBuffer {
    type Writer = SharedBufferGuard<'a>;

    fn make_writer(&'a self) -> Self::Writer {
        SharedBufferGuard(self.0.lock())
    }
}

impl SharedBuffer {
    pub fn text(&self) -> String {
        String::from_utf8(self.0.lock().clone()).expect("records are UTF-8")
    }

    pub fn lines(&self) -> Vec<String> {
        self.text().lines().map(String::from).collect()
    }

    /// Every line parsed as a JSON object (duplicate keys: last wins)
    pub fn records(&self) -> Vec<serde_json::Map<String, Value>> {
        self.lines()
            .iter()
            .map(|line| serde_json::from_str(line).expect("each line is a JSON object"))
            .collect()
    }

    /// Every line parsed keeping key order and duplicates
    pub fn ordered_records(&self) -> Vec<OrderedRecord> {
        self.lines()
            .iter()
            .map(|line| serde_json::from_str(line).expect("each line is a JSON object"))
            .collect()
    }
}

/// JSON object as an ordered list of entries
#[derive(Debug, Clone, PartialEq)]
pub struct OrderedRecord(pub Vec<(String, Value)>);

impl OrderedRecord {
    pub fn keys(&self) -> Vec<&str> {
        self.0.iter().map(|(k, _)| k.as_str()).collect()
    }

    pub fn without_time(&self) -> Self {
        Self(self.0.iter().filter(|(k, _)| k != "time").cloned().collect())
    }
}

impl<'de> Deserialize<'de> for OrderedRecord {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct EntriesVisitor;

        impl<'de> Visitor<'de> for EntriesVisitor {
            type Value = OrderedRecord;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a JSON object")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut entries = Vec::new();
                while let Some(entry) = map.next_entry::<String, Value>()? {
                    entries.push(entry);
                }
                Ok(OrderedRecord(entries))
            }
        }

        deserializer.deserialize_map(EntriesVisitor)
    }
}

/// Underlying logger that keeps every record it receives
#[derive(Default)]
pub struct Recorder {
    records: Mutex<Vec<(Level, String, Vec<Attr>)>>,
}

impl Recorder {
    pub fn take(&self) -> Vec<(Level, String, Vec<Attr>)> {
        std::mem::take(&mut *self.records.lock())
    }
}

impl LeveledLogger for Recorder {
    fn log_attrs(&self, _ctx: &dyn Lookup, level: Level, message: &str, attrs: Vec<Attr>) {
        self.records.lock().push((level, message.to_string(), attrs));
    }
}
