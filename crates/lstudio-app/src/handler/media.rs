//! Media row handlers: upload, clear and their completions

use std::path::PathBuf;

use serde_json::Value;
use tracing::{debug, info, warn};

use crate::form::RowControl;
use crate::message::MediaTarget;
use crate::state::{AppState, EditMode};

use super::{edit_section, edit_selected, UpdateAction, UpdateResult};

/// Prompt for the path of a file to upload into the selected media row.
pub fn handle_start_upload(state: &mut AppState) -> UpdateResult {
    if state.form_locked() {
        return UpdateResult::none();
    }
    let (Some(row), Some(section)) = (state.selected_row(), state.selected_section()) else {
        return UpdateResult::none();
    };
    if !matches!(row.control, RowControl::Media(_)) {
        return UpdateResult::none();
    }
    let snapshot = section.content().clone();
    state
        .editor
        .start_editing(EditMode::UploadPath, String::new(), snapshot);
    UpdateResult::none()
}

/// The upload path was confirmed: lock the form and hand the copy to the
/// event loop.
pub fn handle_commit_upload_path(state: &mut AppState) -> UpdateResult {
    let text = state.editor.buffer.local().trim().to_string();
    if text.is_empty() {
        state.editor.error = Some("Enter the path of a file to upload".to_string());
        return UpdateResult::none();
    }

    let (Some(row), Some(section)) = (state.selected_row(), state.selected_section()) else {
        state.editor.stop_editing();
        return UpdateResult::none();
    };
    let RowControl::Media(kind) = row.control else {
        state.editor.stop_editing();
        return UpdateResult::none();
    };

    let mut source = PathBuf::from(&text);
    if source.is_relative() {
        source = state.project_path.join(source);
    }
    let target = MediaTarget {
        section_id: section.id.clone(),
        target: row.target,
        kind,
    };

    info!("Uploading {} for section '{}'", source.display(), target.section_id);
    state.editor.stop_editing();
    state.upload.start(target.section_id.clone());
    state.set_status(format!("Uploading {}...", text));
    UpdateResult::action(UpdateAction::UploadMedia { target, source })
}

/// Clear the selected media row and delete the file it pointed at.
pub fn handle_clear_media(state: &mut AppState) -> UpdateResult {
    if state.form_locked() {
        return UpdateResult::none();
    }
    let Some(row) = state.selected_row() else {
        return UpdateResult::none();
    };
    let url = match &row.value {
        Value::String(url) if !url.is_empty() => url.clone(),
        _ => return UpdateResult::none(),
    };

    let msg = edit_selected(state, |editor| {
        editor.set_target(&row.target, Value::String(String::new()))
    })
    .and_then(|(_, msg)| msg);

    UpdateResult {
        message: msg,
        action: Some(UpdateAction::DeleteMedia { url }),
    }
}

/// Write the uploaded file's URL into the row the upload started from.
///
/// The item is found by id when its list is keyed, so reordering during the
/// upload does not misplace the URL. When the section or item is gone the
/// file is orphaned and gets deleted.
pub fn handle_uploaded(state: &mut AppState, target: MediaTarget, url: String) -> UpdateResult {
    state.upload.finish(&target.section_id);

    let written = state
        .layout
        .section(&target.section_id)
        .and_then(|section| {
            edit_section(state, section, |editor| {
                editor.set_target_stable(&target.target, Value::String(url.clone()))
            })
        });

    match written {
        Some((true, msg)) => {
            debug!("Upload stored at {}", url);
            state.set_status(format!("Uploaded {}", target.kind.label()));
            UpdateResult::maybe_message(msg)
        }
        _ => {
            warn!(
                "Upload target in section '{}' no longer exists, discarding {}",
                target.section_id, url
            );
            state.upload.error = Some("The upload finished after its item was removed".to_string());
            UpdateResult::action(UpdateAction::DeleteMedia { url })
        }
    }
}

pub fn handle_upload_failed(state: &mut AppState, section_id: &str, error: String) -> UpdateResult {
    warn!("Upload for section '{}' failed: {}", section_id, error);
    state.upload.fail(section_id, format!("Upload failed: {}", error));
    state.status = None;
    UpdateResult::none()
}

pub fn handle_deleted(_state: &mut AppState, url: &str) -> UpdateResult {
    debug!("Deleted media {}", url);
    UpdateResult::none()
}

pub fn handle_delete_failed(state: &mut AppState, url: &str, error: String) -> UpdateResult {
    warn!("Deleting {} failed: {}", url, error);
    state.upload.error = Some(format!("Could not delete {}: {}", url, error));
    UpdateResult::none()
}

pub fn handle_dismiss_error(state: &mut AppState) -> UpdateResult {
    state.upload.dismiss();
    state.editor.error = None;
    UpdateResult::none()
}
