//! Layout Studio Library
//!
//! A terminal editor for section-based page layouts. The editor itself lives
//! in the workspace crates; this crate wires up error reporting, logging and
//! the two run modes.

pub mod headless;

use std::path::Path;

use lstudio_core::logging::RunMode;
use lstudio_core::prelude::*;

pub use headless::run_headless;

/// Run the TUI editor on a project directory
pub async fn run_with_project(project_path: &Path) -> Result<()> {
    // Initialize error handling
    color_eyre::install().map_err(|e| Error::terminal(e.to_string()))?;

    // Initialize logging (to file, since the TUI owns stdout)
    lstudio_core::logging::init(RunMode::Editor)?;

    lstudio_tui::run_with_project(project_path).await
}
