//! Section selection, layout structure and update application

use lstudio_core::{Direction, Section, SectionUpdate};
use tracing::{debug, info};

use crate::state::AppState;

use super::UpdateResult;

pub fn handle_select_next(state: &mut AppState) -> UpdateResult {
    let count = state.layout.sections.len();
    if count > 0 {
        state.selected = (state.selected + 1) % count;
        state.editor.reset();
    }
    UpdateResult::none()
}

pub fn handle_select_previous(state: &mut AppState) -> UpdateResult {
    let count = state.layout.sections.len();
    if count > 0 {
        state.selected = (state.selected + count - 1) % count;
        state.editor.reset();
    }
    UpdateResult::none()
}

/// Live text edits were already dispatched, so leaving the form keeps them.
pub fn handle_toggle_editing(state: &mut AppState) -> UpdateResult {
    state.is_editing = !state.is_editing;
    state.editor.reset();
    UpdateResult::none()
}

pub fn handle_cycle_new_kind(state: &mut AppState) -> UpdateResult {
    let count = state.registry.len();
    if count == 0 {
        return UpdateResult::none();
    }
    state.new_section_kind = (state.new_section_kind + 1) % count;
    if let Some(kind) = state.registry.kinds().get(state.new_section_kind) {
        let status = format!("New section: {}", kind.label);
        state.set_status(status);
    }
    UpdateResult::none()
}

/// Insert an empty section of the chosen kind after the selection.
pub fn handle_add_section(state: &mut AppState) -> UpdateResult {
    let Some(kind) = state.new_section_kind_name().map(str::to_string) else {
        return UpdateResult::none();
    };
    let section = Section::new(state.ids.next_id(), kind.as_str());
    info!("Adding section '{}' of type '{}'", section.id, kind);

    let index = if state.layout.sections.is_empty() {
        0
    } else {
        state.selected + 1
    };
    state.layout.sections.insert(index, section);
    state.selected = index;
    state.editor.reset();
    state.mark_changed();
    UpdateResult::none()
}

pub fn handle_delete_section(state: &mut AppState) -> UpdateResult {
    if state.selected >= state.layout.sections.len() {
        return UpdateResult::none();
    }
    let removed = state.layout.sections.remove(state.selected);
    info!("Deleted section '{}'", removed.id);

    state.editor.reset();
    state.mark_changed();
    state.clamp_selection();
    state.set_status(format!("Deleted {} section", removed.kind));
    UpdateResult::none()
}

pub fn handle_move_section(state: &mut AppState, direction: Direction) -> UpdateResult {
    let count = state.layout.sections.len();
    let from = state.selected;
    let to = match direction {
        Direction::Up if from > 0 => from - 1,
        Direction::Down if from + 1 < count => from + 1,
        _ => return UpdateResult::none(),
    };
    state.layout.sections.swap(from, to);
    state.selected = to;
    state.mark_changed();
    UpdateResult::none()
}

/// The parent half of the update contract: replace the section's content
/// with what its editor dispatched.
pub fn handle_section_updated(
    state: &mut AppState,
    section_id: &str,
    update: SectionUpdate,
) -> UpdateResult {
    debug!("Applying update to section '{}'", section_id);
    if !state.apply_update(section_id, update) {
        state.set_status("Section was removed before the edit landed");
    }
    UpdateResult::none()
}
