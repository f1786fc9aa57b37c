//! Message types for the application (TEA pattern)

use std::path::PathBuf;

use lstudio_core::{Direction, LayoutDocument, MediaKind, SectionUpdate};

use crate::form::RowTarget;
use crate::input_key::InputKey;

/// Where an upload result is written back to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaTarget {
    pub section_id: String,
    pub target: RowTarget,
    pub kind: MediaKind,
}

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for periodic updates
    Tick,

    /// Request to quit (asks for a second press when there are unsaved edits)
    RequestQuit,

    /// Force quit without confirmation (Ctrl+C, signal handler)
    Quit,

    // ─────────────────────────────────────────────────────────
    // Section Messages
    // ─────────────────────────────────────────────────────────
    SelectNextSection,
    SelectPrevSection,

    /// Flip between live view and editing form for the layout
    ToggleEditing,

    /// Cycle the kind used by the next "add section"
    CycleNewSectionKind,

    /// Append a section of the selected new-section kind
    AddSection,

    /// Delete the selected section
    DeleteSection,

    /// Move the selected section within the layout
    MoveSection(Direction),

    /// A section's dispatcher produced an update
    SectionUpdated {
        section_id: String,
        update: SectionUpdate,
    },

    // ─────────────────────────────────────────────────────────
    // Form Messages
    // ─────────────────────────────────────────────────────────
    FormNextRow,
    FormPrevRow,

    /// Enter on the selected row: edit, toggle or run its action
    FormActivate,

    FormCharInput(char),
    FormBackspace,
    FormClearBuffer,

    /// Finish editing the selected row
    FormCommit,

    /// Abandon the current edit and restore the section's content
    FormCancel,

    // ─────────────────────────────────────────────────────────
    // List Messages
    // ─────────────────────────────────────────────────────────
    ListAddItem,
    ListRemoveItem,
    ListMoveItem(Direction),

    // ─────────────────────────────────────────────────────────
    // Media Messages
    // ─────────────────────────────────────────────────────────
    /// Prompt for a file to upload into the selected media row
    StartUpload,

    /// Clear the selected media row and delete its file
    ClearMedia,

    MediaUploaded { target: MediaTarget, url: String },
    MediaUploadFailed { section_id: String, error: String },
    MediaDeleted { url: String },
    MediaDeleteFailed { url: String, error: String },

    /// Dismiss the inline error banner
    DismissError,

    // ─────────────────────────────────────────────────────────
    // Layout Persistence Messages
    // ─────────────────────────────────────────────────────────
    Save,
    /// `revision` is the layout revision that was written
    LayoutSaved { path: PathBuf, revision: u64 },
    LayoutSaveFailed { error: String },

    Reload,
    LayoutReloaded {
        document: LayoutDocument,
        upgraded: usize,
    },
    LayoutReloadFailed { error: String },
}
