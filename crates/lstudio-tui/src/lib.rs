//! lstudio-tui - Terminal UI for Layout Studio
//!
//! Adds terminal rendering, event polling and widgets on top of the
//! `lstudio-app` state machine. Every section renders through one live
//! renderer, shown on its own in live mode and as the preview next to the
//! form in editing mode.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

// Re-export main entry point
pub use runner::run_with_project;
