//! Application state (Model in TEA pattern)

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

use lstudio_core::{
    Content, FallbackPolicy, IdGenerator, LayoutDocument, LocalEcho, MillisIdGenerator, Registry,
    Resolved, Section, SectionKind, SectionUpdate,
};

use crate::config::Settings;
use crate::form::{form_rows, value_text, FormRow};
use crate::sections::builtin_registry;

/// Application lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

/// What the edit buffer is currently used for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditMode {
    /// Typing into a text, color or number row
    Text,
    /// Typing the path of a file to upload into a media row
    UploadPath,
}

/// View state of the editing form
#[derive(Debug, Clone, Default)]
pub struct EditorViewState {
    /// Selected row index within the form
    pub selected_row: usize,

    /// Active edit, if any
    pub editing: Option<EditMode>,

    /// Text shown in the selected row while editing
    pub buffer: LocalEcho<String>,

    /// Section content when the current edit started, restored on cancel
    pub snapshot: Option<Content>,

    /// Validation error for the current edit
    pub error: Option<String>,
}

impl EditorViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select_next(&mut self, row_count: usize) {
        if row_count > 0 {
            self.selected_row = (self.selected_row + 1) % row_count;
        }
    }

    pub fn select_previous(&mut self, row_count: usize) {
        if row_count > 0 {
            self.selected_row = (self.selected_row + row_count - 1) % row_count;
        }
    }

    pub fn start_editing(&mut self, mode: EditMode, value: String, snapshot: Content) {
        self.editing = Some(mode);
        self.buffer = LocalEcho::new(value);
        self.snapshot = Some(snapshot);
        self.error = None;
    }

    pub fn stop_editing(&mut self) {
        self.editing = None;
        self.buffer = LocalEcho::default();
        self.snapshot = None;
        self.error = None;
    }

    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    /// Clear all per-section state when the selection moves elsewhere
    pub fn reset(&mut self) {
        self.stop_editing();
        self.selected_row = 0;
    }
}

/// Media uploads in flight and the last media error
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UploadState {
    /// Uploads in flight per section id
    in_flight: HashMap<String, usize>,

    /// Last upload or delete failure, shown until dismissed
    pub error: Option<String>,
}

impl UploadState {
    pub fn start(&mut self, section_id: impl Into<String>) {
        *self.in_flight.entry(section_id.into()).or_default() += 1;
        self.error = None;
    }

    /// One upload of `section_id` completed
    pub fn finish(&mut self, section_id: &str) {
        if let Some(count) = self.in_flight.get_mut(section_id) {
            *count -= 1;
            if *count == 0 {
                self.in_flight.remove(section_id);
            }
        }
    }

    pub fn fail(&mut self, section_id: &str, error: impl Into<String>) {
        self.finish(section_id);
        self.error = Some(error.into());
    }

    pub fn dismiss(&mut self) {
        self.error = None;
    }

    /// Any upload is in flight
    pub fn is_uploading(&self) -> bool {
        !self.in_flight.is_empty()
    }

    /// Form of `section_id` is disabled
    pub fn blocks(&self, section_id: &str) -> bool {
        self.in_flight.contains_key(section_id)
    }
}

/// Complete application state (the Model in TEA)
pub struct AppState {
    /// Project directory the layout lives in
    pub project_path: PathBuf,

    pub settings: Settings,

    /// Section kinds by type name
    pub registry: Arc<Registry>,

    /// Source of ids for new sections and keyed list items
    pub ids: Arc<dyn IdGenerator + Send + Sync>,

    /// The layout document; the only copy of canonical section content
    pub layout: LayoutDocument,

    /// Index of the selected section
    pub selected: usize,

    /// Sections render their editing form instead of the live view
    pub is_editing: bool,

    pub editor: EditorViewState,

    pub upload: UploadState,

    /// Layout has edits not yet saved
    pub dirty: bool,

    /// Bumped on every applied update, to tell whether a finished save is
    /// still current
    pub revision: u64,

    /// A save is in flight
    pub saving: bool,

    /// One-line message for the status bar
    pub status: Option<String>,

    pub phase: AppPhase,

    /// Index into the registry of the kind used by "add section"
    pub new_section_kind: usize,

    /// Quit was requested once with unsaved edits
    pub quit_requested: bool,
}

impl AppState {
    pub fn new(project_path: PathBuf, settings: Settings) -> Self {
        Self {
            project_path,
            settings,
            registry: Arc::new(builtin_registry()),
            ids: Arc::new(MillisIdGenerator::new()),
            layout: LayoutDocument::default(),
            selected: 0,
            is_editing: false,
            editor: EditorViewState::new(),
            upload: UploadState::default(),
            dirty: false,
            revision: 0,
            saving: false,
            status: None,
            phase: AppPhase::Running,
            new_section_kind: 0,
            quit_requested: false,
        }
    }

    pub fn with_layout(mut self, layout: LayoutDocument) -> Self {
        self.layout = layout;
        self.clamp_selection();
        self
    }

    pub fn with_ids(mut self, ids: Arc<dyn IdGenerator + Send + Sync>) -> Self {
        self.ids = ids;
        self
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }

    pub fn fallback(&self) -> FallbackPolicy {
        self.settings.editor.fallback
    }

    pub fn layout_path(&self) -> PathBuf {
        self.settings.layout_path(&self.project_path)
    }

    pub fn media_dir(&self) -> PathBuf {
        self.settings.media_dir(&self.project_path)
    }

    pub fn selected_section(&self) -> Option<&Section> {
        self.layout.sections.get(self.selected)
    }

    /// Kind of the selected section; `None` when nothing is selected or
    /// the section's type is unknown
    pub fn selected_kind(&self) -> Option<&SectionKind> {
        self.selected_section()
            .and_then(|section| self.registry.get(&section.kind))
    }

    /// Kind name the next "add section" creates
    pub fn new_section_kind_name(&self) -> Option<&str> {
        self.registry
            .kinds()
            .get(self.new_section_kind)
            .map(|kind| kind.name.as_str())
    }

    pub fn resolve(&self, section: &Section) -> Option<Resolved> {
        self.registry
            .get(&section.kind)
            .map(|kind| kind.resolve(section.content(), self.fallback()))
    }

    /// Form rows of the selected section
    pub fn form_rows(&self) -> Vec<FormRow> {
        let Some(section) = self.selected_section() else {
            return Vec::new();
        };
        match self.registry.get(&section.kind) {
            Some(kind) => form_rows(kind, &kind.resolve(section.content(), self.fallback())),
            None => Vec::new(),
        }
    }

    pub fn selected_row(&self) -> Option<FormRow> {
        self.form_rows().into_iter().nth(self.editor.selected_row)
    }

    /// Form of the selected section is disabled by an upload
    pub fn form_locked(&self) -> bool {
        self.selected_section()
            .is_some_and(|section| self.upload.blocks(&section.id))
    }

    /// Replace a section's content with the content carried by `update`.
    ///
    /// Returns `false` when the section no longer exists.
    pub fn apply_update(&mut self, section_id: &str, update: SectionUpdate) -> bool {
        let Some(section) = self.layout.section_mut(section_id) else {
            tracing::warn!("Dropping update for missing section '{}'", section_id);
            return false;
        };
        section.apply(update);
        self.mark_changed();
        self.clamp_selection();
        self.resync_edit_buffer();
        true
    }

    /// Replace the whole layout, as after a reload
    pub fn replace_layout(&mut self, layout: LayoutDocument) {
        self.layout = layout;
        self.dirty = false;
        self.quit_requested = false;
        self.clamp_selection();
        self.editor.stop_editing();
    }

    /// Follow external changes of the row being edited.
    ///
    /// Compares against the stored value, not the resolved one: under the
    /// falsy policy a field the user just emptied resolves to its default,
    /// which must not be typed back into the buffer.
    pub fn resync_edit_buffer(&mut self) {
        if self.editor.editing != Some(EditMode::Text) {
            return;
        }
        let (Some(row), Some(section)) = (self.selected_row(), self.selected_section()) else {
            return;
        };
        let current = match row.target.stored(section.content()) {
            Some(value) if !value.is_null() => value_text(value),
            _ => row.display_value(),
        };
        if self.editor.buffer.observe(&current) {
            tracing::debug!("Edit buffer resynced for '{}'", row.key);
        }
    }

    /// Keep the section and row cursors inside their lists
    pub fn clamp_selection(&mut self) {
        let count = self.layout.sections.len();
        if count == 0 {
            self.selected = 0;
        } else if self.selected >= count {
            self.selected = count - 1;
        }

        let rows = self.form_rows().len();
        if rows == 0 {
            self.editor.selected_row = 0;
        } else if self.editor.selected_row >= rows {
            self.editor.selected_row = rows - 1;
        }
    }

    /// Record a structural change to the layout
    pub fn mark_changed(&mut self) {
        self.dirty = true;
        self.revision += 1;
        self.quit_requested = false;
    }

    pub fn set_status(&mut self, status: impl Into<String>) {
        self.status = Some(status.into());
    }
}
