//! Centralized theme system for the editor.
//!
//! This module provides:
//! - `palette` - Raw color constants
//! - `styles` - Semantic style builder functions
//! - `registry` - Per-section-kind presentation rules, shared process-wide

pub mod palette;
pub mod registry;
pub mod styles;
