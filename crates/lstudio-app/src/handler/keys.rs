//! Key event handlers for different UI modes

use lstudio_core::Direction;

use crate::form::RowControl;
use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::AppState;

/// Convert key events to messages based on current UI mode
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    // Force quit (bypass confirmation) - Ctrl+C works in every mode
    if key == InputKey::CharCtrl('c') {
        return Some(Message::Quit);
    }
    if key == InputKey::CharCtrl('s') {
        return Some(Message::Save);
    }

    if state.editor.is_editing() {
        handle_key_edit_buffer(key)
    } else if state.is_editing {
        handle_key_form(state, key)
    } else {
        handle_key_sections(state, key)
    }
}

/// Handle key events while browsing sections in live mode
fn handle_key_sections(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('q') | InputKey::Esc => Some(Message::RequestQuit),

        InputKey::Char('j') | InputKey::Down => Some(Message::SelectNextSection),
        InputKey::Char('k') | InputKey::Up => Some(Message::SelectPrevSection),

        InputKey::Char('e') | InputKey::Enter => Some(Message::ToggleEditing),

        // ─────────────────────────────────────────────────────────
        // Layout Structure
        // ─────────────────────────────────────────────────────────
        InputKey::Char('n') => Some(Message::CycleNewSectionKind),
        InputKey::Char('N') => Some(Message::AddSection),
        InputKey::Char('D') if state.selected_section().is_some() => {
            Some(Message::DeleteSection)
        }
        InputKey::Char('K') => Some(Message::MoveSection(Direction::Up)),
        InputKey::Char('J') => Some(Message::MoveSection(Direction::Down)),

        InputKey::Char('r') => Some(Message::Reload),
        InputKey::Char('x') if state.upload.error.is_some() => Some(Message::DismissError),

        _ => None,
    }
}

/// Handle key events on the editing form
fn handle_key_form(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('q') => Some(Message::RequestQuit),
        InputKey::Esc | InputKey::Char('e') => Some(Message::ToggleEditing),

        InputKey::Char('j') | InputKey::Down | InputKey::Tab => Some(Message::FormNextRow),
        InputKey::Char('k') | InputKey::Up | InputKey::BackTab => Some(Message::FormPrevRow),

        InputKey::Char('x') if state.upload.error.is_some() => Some(Message::DismissError),

        // Everything below edits content and is ignored while this
        // section's upload is in flight
        _ if state.form_locked() => None,

        InputKey::Enter | InputKey::Char(' ') => Some(Message::FormActivate),

        // ─────────────────────────────────────────────────────────
        // List Items
        // ─────────────────────────────────────────────────────────
        InputKey::Char('a') => Some(Message::ListAddItem),
        InputKey::Char('d') => Some(Message::ListRemoveItem),
        InputKey::Char('K') => Some(Message::ListMoveItem(Direction::Up)),
        InputKey::Char('J') => Some(Message::ListMoveItem(Direction::Down)),

        // ─────────────────────────────────────────────────────────
        // Media
        // ─────────────────────────────────────────────────────────
        InputKey::Char('u') if on_media_row(state) => Some(Message::StartUpload),
        InputKey::Delete if on_media_row(state) => Some(Message::ClearMedia),

        _ => None,
    }
}

/// Handle key events while typing into the edit buffer
fn handle_key_edit_buffer(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Esc => Some(Message::FormCancel),
        InputKey::Enter => Some(Message::FormCommit),
        InputKey::Backspace => Some(Message::FormBackspace),
        InputKey::CharCtrl('u') => Some(Message::FormClearBuffer),
        InputKey::Char(c) => Some(Message::FormCharInput(c)),
        _ => None,
    }
}

fn on_media_row(state: &AppState) -> bool {
    state
        .selected_row()
        .is_some_and(|row| matches!(row.control, RowControl::Media(_)))
}
