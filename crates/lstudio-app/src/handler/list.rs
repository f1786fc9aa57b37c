//! List item handlers for the editing form

use lstudio_core::Direction;

use crate::state::AppState;

use super::{edit_selected, UpdateResult};

/// Add an item to the list the cursor is in.
pub fn handle_add_item(state: &mut AppState) -> UpdateResult {
    let Some(row) = state.selected_row() else {
        return UpdateResult::none();
    };
    let Some(list) = row.target.list().map(str::to_string) else {
        state.set_status("Move to a list to add an item");
        return UpdateResult::none();
    };

    let msg = edit_selected(state, |editor| editor.add_item(&list)).and_then(|(_, msg)| msg);
    UpdateResult::maybe_message(msg)
}

/// Remove the item the cursor is in.
pub fn handle_remove_item(state: &mut AppState) -> UpdateResult {
    let Some(row) = state.selected_row() else {
        return UpdateResult::none();
    };
    let (Some(list), Some(index)) = (row.target.list(), row.target.item_index()) else {
        return UpdateResult::none();
    };

    let msg = edit_selected(state, |editor| editor.remove_item(list, index))
        .and_then(|(_, msg)| msg);
    UpdateResult::maybe_message(msg)
}

/// Move the item the cursor is in, keeping the cursor on the same field of
/// that item.
pub fn handle_move_item(state: &mut AppState, direction: Direction) -> UpdateResult {
    let Some(row) = state.selected_row() else {
        return UpdateResult::none();
    };
    let (Some(list), Some(index)) = (row.target.list(), row.target.item_index()) else {
        return UpdateResult::none();
    };
    if !row.movable {
        state.set_status("Items of this list keep their order");
        return UpdateResult::none();
    }

    let Some((moved, msg)) = edit_selected(state, |editor| editor.move_item(list, index, direction))
    else {
        return UpdateResult::none();
    };
    if moved {
        let stride = rows_per_item(state, list);
        state.editor.selected_row = match direction {
            Direction::Up => state.editor.selected_row.saturating_sub(stride),
            Direction::Down => state.editor.selected_row + stride,
        };
    }
    UpdateResult::maybe_message(msg)
}

/// Form rows one item of `list` occupies: its header plus one per field.
fn rows_per_item(state: &AppState, list: &str) -> usize {
    state
        .selected_kind()
        .and_then(|kind| kind.list_spec(list))
        .map_or(1, |spec| spec.fields.len() + 1)
}
