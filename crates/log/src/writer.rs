//! Writer implementations

use std::io;

use tracing_subscriber::fmt::writer::BoxMakeWriter;

use crate::config::WriterConfig;

/// Create a writer from configuration
pub fn make_writer(config: &WriterConfig) -> BoxMakeWriter {
    match config {
        WriterConfig::Stdout => BoxMakeWriter::new(io::stdout),
        WriterConfig::Stderr => BoxMakeWriter::new(io::stderr),
    }
}
