//! Core types shared by the rest of the crate.
//!
//! ### [`error`] - Error handling
//! [`LogError`] covers configuration, level parsing and sink I/O failures.
//! None of these ever surface from the logging calls themselves.

pub mod error;

pub use error::{LogError, LogResult};
