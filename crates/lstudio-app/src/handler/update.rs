//! Main update function - handles state transitions (TEA pattern)
//!
//! Handler implementations live in the sibling modules; this file only
//! routes each message to them.

use crate::message::Message;
use crate::state::{AppPhase, AppState};

use super::{form, keys::handle_key, layout, list, media, section, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::RequestQuit => {
            if state.dirty && !state.quit_requested {
                state.quit_requested = true;
                state.set_status("Unsaved changes: press q again to quit, Ctrl+S to save");
            } else {
                state.phase = AppPhase::Quitting;
            }
            UpdateResult::none()
        }

        Message::Quit => {
            state.phase = AppPhase::Quitting;
            UpdateResult::none()
        }

        Message::Key(key) => UpdateResult::maybe_message(handle_key(state, key)),

        Message::Tick => UpdateResult::none(),

        // ─────────────────────────────────────────────────────────
        // Section Messages
        // ─────────────────────────────────────────────────────────
        Message::SelectNextSection => section::handle_select_next(state),
        Message::SelectPrevSection => section::handle_select_previous(state),
        Message::ToggleEditing => section::handle_toggle_editing(state),
        Message::CycleNewSectionKind => section::handle_cycle_new_kind(state),
        Message::AddSection => section::handle_add_section(state),
        Message::DeleteSection => section::handle_delete_section(state),
        Message::MoveSection(direction) => section::handle_move_section(state, direction),
        Message::SectionUpdated { section_id, update } => {
            section::handle_section_updated(state, &section_id, update)
        }

        // ─────────────────────────────────────────────────────────
        // Form Messages
        // ─────────────────────────────────────────────────────────
        Message::FormNextRow => form::handle_next_row(state),
        Message::FormPrevRow => form::handle_prev_row(state),
        Message::FormActivate => form::handle_activate(state),
        Message::FormCharInput(c) => form::handle_char_input(state, c),
        Message::FormBackspace => form::handle_backspace(state),
        Message::FormClearBuffer => form::handle_clear_buffer(state),
        Message::FormCommit => form::handle_commit(state),
        Message::FormCancel => form::handle_cancel(state),

        // ─────────────────────────────────────────────────────────
        // List Messages
        // ─────────────────────────────────────────────────────────
        Message::ListAddItem => list::handle_add_item(state),
        Message::ListRemoveItem => list::handle_remove_item(state),
        Message::ListMoveItem(direction) => list::handle_move_item(state, direction),

        // ─────────────────────────────────────────────────────────
        // Media Messages
        // ─────────────────────────────────────────────────────────
        Message::StartUpload => media::handle_start_upload(state),
        Message::ClearMedia => media::handle_clear_media(state),
        Message::MediaUploaded { target, url } => media::handle_uploaded(state, target, url),
        Message::MediaUploadFailed { section_id, error } => {
            media::handle_upload_failed(state, &section_id, error)
        }
        Message::MediaDeleted { url } => media::handle_deleted(state, &url),
        Message::MediaDeleteFailed { url, error } => {
            media::handle_delete_failed(state, &url, error)
        }
        Message::DismissError => media::handle_dismiss_error(state),

        // ─────────────────────────────────────────────────────────
        // Layout Persistence Messages
        // ─────────────────────────────────────────────────────────
        Message::Save => layout::handle_save(state),
        Message::LayoutSaved { path, revision } => layout::handle_saved(state, &path, revision),
        Message::LayoutSaveFailed { error } => layout::handle_save_failed(state, error),
        Message::Reload => layout::handle_reload(state),
        Message::LayoutReloaded { document, upgraded } => {
            layout::handle_reloaded(state, document, upgraded)
        }
        Message::LayoutReloadFailed { error } => layout::handle_reload_failed(state, error),
    }
}
