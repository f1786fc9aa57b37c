//! Layout persistence handlers

use std::path::Path;

use lstudio_core::LayoutDocument;
use tracing::{info, warn};

use crate::state::AppState;

use super::{UpdateAction, UpdateResult};

pub fn handle_save(state: &mut AppState) -> UpdateResult {
    if state.saving {
        return UpdateResult::none();
    }
    state.saving = true;
    state.set_status("Saving...");
    UpdateResult::action(UpdateAction::SaveLayout {
        path: state.layout_path(),
        document: state.layout.clone(),
        revision: state.revision,
    })
}

/// Edits made while the save was in flight keep the layout dirty.
pub fn handle_saved(state: &mut AppState, path: &Path, revision: u64) -> UpdateResult {
    info!("Layout saved to {}", path.display());
    state.saving = false;
    state.dirty = state.revision != revision;
    state.quit_requested = false;
    state.set_status(format!("Saved {}", path.display()));
    UpdateResult::none()
}

pub fn handle_save_failed(state: &mut AppState, error: String) -> UpdateResult {
    warn!("Saving layout failed: {}", error);
    state.saving = false;
    state.set_status(format!("Save failed: {}", error));
    UpdateResult::none()
}

pub fn handle_reload(state: &mut AppState) -> UpdateResult {
    state.set_status("Reloading...");
    UpdateResult::action(UpdateAction::ReloadLayout {
        path: state.layout_path(),
    })
}

/// Replace every section with the reloaded document.
///
/// Sections that had to be upgraded on load leave the layout dirty so the
/// upgraded shape gets written back.
pub fn handle_reloaded(
    state: &mut AppState,
    document: LayoutDocument,
    upgraded: usize,
) -> UpdateResult {
    let count = document.sections.len();
    state.replace_layout(document);
    state.revision += 1;
    if upgraded > 0 {
        state.mark_changed();
        state.set_status(format!(
            "Reloaded {} sections ({} upgraded from an older format)",
            count, upgraded
        ));
    } else {
        state.set_status(format!("Reloaded {} sections", count));
    }
    UpdateResult::none()
}

pub fn handle_reload_failed(state: &mut AppState, error: String) -> UpdateResult {
    warn!("Reloading layout failed: {}", error);
    state.set_status(format!("Reload failed: {}", error));
    UpdateResult::none()
}
