//! Headless mode - normalized layout as JSON, no TUI
//!
//! Loads the project's layout the same way the editor does, upgrading older
//! shapes, and writes the resulting document to stdout. Useful for checking
//! what the editor would save without opening it.

use std::io::{self, Write};
use std::path::Path;

use lstudio_app::{open_project, AppState};
use lstudio_core::logging::RunMode;
use lstudio_core::prelude::*;

/// Run in headless mode - print the normalized layout document
pub async fn run_headless(project_path: &Path) -> Result<()> {
    lstudio_core::logging::init(RunMode::Headless)?;
    info!("Layout Studio starting in HEADLESS mode");
    info!("Project: {}", project_path.display());

    let state = open_project(project_path)?;
    if let Some(status) = &state.status {
        warn!("{}", status);
    }

    let json = normalized_json(&state)?;
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", json)?;
    stdout.flush()?;

    info!("Layout Studio headless mode exiting");
    Ok(())
}

/// Pretty JSON of the state's layout document
pub fn normalized_json(state: &AppState) -> Result<String> {
    Ok(serde_json::to_string_pretty(&state.layout)?)
}
