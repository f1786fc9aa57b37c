//! Configuration file parsing for Layout Studio
//!
//! Supports:
//! - `.lstudio/config.toml` - Project settings

pub mod settings;
pub mod types;

pub use settings::{load_settings, LSTUDIO_DIR};
pub use types::*;
