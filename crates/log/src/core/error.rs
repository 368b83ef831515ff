//! Error handling for ambient-log

/// Result alias for fallible configuration and sink operations
pub type LogResult<T> = Result<T, LogError>;

/// Errors produced while configuring a logger or writing a record
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum LogError {
    /// Configuration document could not be used
    #[error("Configuration error: {0}")]
    Config(String),

    /// Level name did not match any known level
    #[error("Invalid level '{0}': expected one of debug, info, warn, error")]
    Level(String),

    /// Sink write failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Record could not be encoded
    #[error("Encode error: {0}")]
    Encode(#[from] serde_json::Error),
}
