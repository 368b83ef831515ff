//! Configuration types
//!
//! - `base`: [`Config`] and [`Level`]
//! - `writer`: output writer and display configuration
//! - `presets`: development / production / environment setups

mod base;
mod presets;
mod writer;

pub use base::{Config, Level};
pub use writer::{DisplayConfig, WriterConfig};
