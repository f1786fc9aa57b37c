//! lstudio-app - Application state and orchestration for Layout Studio
//!
//! This crate implements the TEA (The Elm Architecture) pattern for the
//! layout editor: the built-in section kinds, the per-section editor that
//! routes every edit through the update dispatcher, configuration loading,
//! layout persistence and the media service trait.

pub mod actions;
pub mod config;
pub mod editor;
pub mod form;
pub mod handler;
pub mod input_key;
pub mod layout_store;
pub mod media;
pub mod message;
pub mod process;
pub mod sections;
pub mod signals;
pub mod startup;
pub mod state;

// Re-export primary types
pub use editor::SectionEditor;
pub use form::{form_rows, FormRow, RowControl, RowTarget};
pub use handler::{UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use media::{LocalMediaService, LocalMediaStore, MediaService};
pub use message::{MediaTarget, Message};
pub use sections::builtin_registry;
pub use startup::open_project;
pub use state::{AppPhase, AppState, EditMode, EditorViewState, UploadState};
