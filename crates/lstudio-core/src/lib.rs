//! # lstudio-core - Section Content Model
//!
//! Foundation crate for Layout Studio. Provides the section content model,
//! per-field default resolution, the update dispatcher every section edit
//! goes through, list item editing, and load-time normalization of older
//! layout shapes.
//!
//! This crate has **zero internal dependencies** and no terminal code.
//!
//! ## Public API
//!
//! ### Content (`content`)
//! - [`Section`] - One block of a layout with an open, all-optional content record
//! - [`SectionUpdate`] - Partial section passed to the parent's update channel
//! - [`LayoutDocument`] - Ordered sections of a layout
//! - [`IdGenerator`] - Source of stable ids for sections and list items
//!
//! ### Resolution (`resolve`)
//! - [`resolve()`] - Per-field default merge, recursive for nested records
//! - [`FallbackPolicy`] - What counts as a missing value
//! - [`Resolved`] - Read accessors that never fail on malformed shapes
//!
//! ### Dispatch (`dispatch`, `list_editor`)
//! - [`dispatch()`] - Shallow merge and a single `on_update` call
//! - [`nested_patch()`] - Read-merge-write one level down
//! - [`ListEditor`] - Add, update, remove and move items of a list field
//!
//! ### Schema (`schema`, `normalize`)
//! - [`SectionKind`], [`FieldSpec`], [`ListSpec`] - Section type descriptors
//! - [`Registry`] - Lookup of section kinds by type name
//! - [`normalize_document()`] - Upgrade stored layouts to the current shape
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use lstudio_core::prelude::*;
//! ```

pub mod content;
pub mod dispatch;
pub mod echo;
pub mod error;
pub mod list_editor;
pub mod logging;
pub mod normalize;
pub mod resolve;
pub mod schema;

/// Prelude for common imports used throughout all Layout Studio crates
pub mod prelude {
    pub use super::error::{Error, Result};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

pub use content::{
    single, Content, IdGenerator, LayoutDocument, MillisIdGenerator, Section, SectionUpdate,
    SequenceIdGenerator, LAYOUT_VERSION,
};
pub use dispatch::{dispatch, merge_patch, nested_patch, OnUpdate};
pub use echo::LocalEcho;
pub use error::{Error, Result};
pub use list_editor::{list_items, Direction, ListEditor};
pub use normalize::{normalize_content, normalize_document, Normalized, RawLayout, RawSection};
pub use resolve::{resolve, FallbackPolicy, Resolved};
pub use schema::{FieldKind, FieldSpec, ListSpec, LiveLayout, MediaKind, Registry, SectionKind};
