//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key event handlers for each UI mode
//! - `section`: Section selection, add/delete/reorder and update application
//! - `form`: Editing form navigation and the edit buffer
//! - `list`: List item add/remove/reorder
//! - `media`: Upload and delete of media rows
//! - `layout`: Save and reload of the layout file

pub(crate) mod form;
pub(crate) mod keys;
pub(crate) mod layout;
pub(crate) mod list;
pub(crate) mod media;
pub(crate) mod section;
pub(crate) mod update;


use std::path::PathBuf;

use lstudio_core::{LayoutDocument, OnUpdate, Section, SectionUpdate};

use crate::editor::SectionEditor;
use crate::message::{MediaTarget, Message};
use crate::state::AppState;

// Re-export main entry point
pub use update::update;

#[cfg(test)]
pub(crate) use keys::handle_key;

/// Actions that the event loop should perform after update
#[derive(Debug, Clone)]
pub enum UpdateAction {
    /// Write the layout document to disk
    SaveLayout {
        path: PathBuf,
        document: LayoutDocument,
        /// Layout revision being written
        revision: u64,
    },

    /// Read and normalize the layout file again
    ReloadLayout { path: PathBuf },

    /// Copy a file into the media store and write its URL to `target`
    UploadMedia { target: MediaTarget, source: PathBuf },

    /// Remove a previously uploaded file
    DeleteMedia { url: String },
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }

    /// Follow-up message if there is one, otherwise nothing
    pub fn maybe_message(msg: Option<Message>) -> Self {
        Self {
            message: msg,
            action: None,
        }
    }
}

/// Sink that keeps the last update a section editor dispatched.
///
/// Every update carries the section's full content, so the last one
/// subsumes any earlier ones from the same action.
#[derive(Debug, Default)]
pub(crate) struct PendingUpdate {
    update: Option<SectionUpdate>,
}

impl OnUpdate for PendingUpdate {
    fn on_update(&mut self, update: SectionUpdate) {
        self.update = Some(update);
    }
}

impl PendingUpdate {
    fn into_message(self, section_id: &str) -> Option<Message> {
        self.update.map(|update| Message::SectionUpdated {
            section_id: section_id.to_string(),
            update,
        })
    }
}

/// Run `op` against an editor for `section` and turn what it dispatched
/// into a `SectionUpdated` message.
///
/// Returns `None` when the section's kind is unknown.
pub(crate) fn edit_section<R>(
    state: &AppState,
    section: &Section,
    op: impl FnOnce(&mut SectionEditor<'_, PendingUpdate>) -> R,
) -> Option<(R, Option<Message>)> {
    let kind = state.registry.get(&section.kind)?;
    let mut pending = PendingUpdate::default();
    let result = {
        let mut editor = SectionEditor::new(kind, section, &mut pending)
            .with_ids(&*state.ids)
            .with_policy(state.fallback());
        op(&mut editor)
    };
    Some((result, pending.into_message(&section.id)))
}

/// [`edit_section`] for the selected section
pub(crate) fn edit_selected<R>(
    state: &AppState,
    op: impl FnOnce(&mut SectionEditor<'_, PendingUpdate>) -> R,
) -> Option<(R, Option<Message>)> {
    let section = state.selected_section()?;
    edit_section(state, section, op)
}
