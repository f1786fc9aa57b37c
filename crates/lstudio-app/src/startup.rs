//! Project startup: settings, layout and initial state

use std::path::Path;

use lstudio_core::prelude::*;

use crate::config;
use crate::layout_store::load_or_default;
use crate::state::AppState;

/// Build the initial state for the project at `project_path`.
///
/// A missing layout file starts an empty layout. A layout that had to be
/// upgraded on load starts dirty so the upgrade gets saved.
pub fn open_project(project_path: &Path) -> Result<AppState> {
    let settings = config::load_settings(project_path);
    info!(
        "Loaded settings: layout_file={:?} fallback={}",
        settings.editor.layout_file,
        settings.editor.fallback.label()
    );

    let mut state = AppState::new(project_path.to_path_buf(), settings);
    let layout_path = state.layout_path();
    let normalized = load_or_default(&layout_path, &state.registry, &*state.ids)?;

    let upgraded = normalized.upgraded;
    state.replace_layout(normalized.document);
    if upgraded > 0 {
        state.mark_changed();
        state.set_status(format!(
            "{} sections were upgraded from an older format; save to keep them",
            upgraded
        ));
    }
    Ok(state)
}
