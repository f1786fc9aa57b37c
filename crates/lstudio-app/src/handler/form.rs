//! Editing form navigation and the edit buffer
//!
//! Text and long-text rows dispatch on every keystroke so the live preview
//! follows typing. Color and number rows only dispatch on commit, after
//! validation, since partial input like `#ab` or `0.` would not parse.

use lstudio_core::SectionUpdate;

use crate::form::RowControl;
use crate::message::Message;
use crate::state::{AppState, EditMode};

use super::{edit_selected, media, UpdateResult};

pub fn handle_next_row(state: &mut AppState) -> UpdateResult {
    if !state.editor.is_editing() {
        let count = state.form_rows().len();
        state.editor.select_next(count);
    }
    UpdateResult::none()
}

pub fn handle_prev_row(state: &mut AppState) -> UpdateResult {
    if !state.editor.is_editing() {
        let count = state.form_rows().len();
        state.editor.select_previous(count);
    }
    UpdateResult::none()
}

/// Enter on a row: start editing, flip a toggle or run the row's action.
pub fn handle_activate(state: &mut AppState) -> UpdateResult {
    if state.form_locked() {
        return UpdateResult::none();
    }
    let (Some(row), Some(section)) = (state.selected_row(), state.selected_section()) else {
        return UpdateResult::none();
    };

    match row.control {
        control if control.is_text_like() => {
            let snapshot = section.content().clone();
            state
                .editor
                .start_editing(EditMode::Text, row.display_value(), snapshot);
            UpdateResult::none()
        }
        RowControl::Toggle => {
            let msg = edit_selected(state, |editor| editor.toggle(&row)).and_then(|(_, msg)| msg);
            UpdateResult::maybe_message(msg)
        }
        RowControl::Media(_) => media::handle_start_upload(state),
        RowControl::Action => UpdateResult::message(Message::ListAddItem),
        _ => UpdateResult::none(),
    }
}

pub fn handle_char_input(state: &mut AppState, c: char) -> UpdateResult {
    if !state.editor.is_editing() {
        return UpdateResult::none();
    }
    state.editor.buffer.local_mut().push(c);
    state.editor.error = None;
    dispatch_live(state)
}

pub fn handle_backspace(state: &mut AppState) -> UpdateResult {
    if !state.editor.is_editing() {
        return UpdateResult::none();
    }
    state.editor.buffer.local_mut().pop();
    state.editor.error = None;
    dispatch_live(state)
}

pub fn handle_clear_buffer(state: &mut AppState) -> UpdateResult {
    if !state.editor.is_editing() {
        return UpdateResult::none();
    }
    state.editor.buffer.local_mut().clear();
    state.editor.error = None;
    dispatch_live(state)
}

/// Send the buffer to the section when the row edits plain text.
fn dispatch_live(state: &mut AppState) -> UpdateResult {
    if state.editor.editing != Some(EditMode::Text) {
        return UpdateResult::none();
    }
    let Some(row) = state.selected_row() else {
        return UpdateResult::none();
    };
    if !matches!(row.control, RowControl::Text | RowControl::LongText) {
        return UpdateResult::none();
    }

    let text = state.editor.buffer.local().clone();
    let msg = edit_selected(state, |editor| editor.commit_text(&row, &text))
        .and_then(|(_, msg)| msg);
    UpdateResult::maybe_message(msg)
}

pub fn handle_commit(state: &mut AppState) -> UpdateResult {
    match state.editor.editing {
        None => UpdateResult::none(),
        Some(EditMode::UploadPath) => media::handle_commit_upload_path(state),
        Some(EditMode::Text) => {
            let Some(row) = state.selected_row() else {
                state.editor.stop_editing();
                return UpdateResult::none();
            };
            let text = state.editor.buffer.local().clone();

            match edit_selected(state, |editor| editor.commit_text(&row, &text)) {
                Some((Err(error), _)) => {
                    state.editor.error = Some(error);
                    UpdateResult::none()
                }
                Some((Ok(_), msg)) => {
                    state.editor.stop_editing();
                    UpdateResult::maybe_message(msg)
                }
                None => {
                    state.editor.stop_editing();
                    UpdateResult::none()
                }
            }
        }
    }
}

/// Abandon the edit, restoring the content the section had when it started.
pub fn handle_cancel(state: &mut AppState) -> UpdateResult {
    let snapshot = state.editor.snapshot.take();
    state.editor.stop_editing();

    let (Some(snapshot), Some(section)) = (snapshot, state.selected_section()) else {
        return UpdateResult::none();
    };
    if section.content() == &snapshot {
        return UpdateResult::none();
    }
    UpdateResult::message(Message::SectionUpdated {
        section_id: section.id.clone(),
        update: SectionUpdate::content(snapshot),
    })
}
