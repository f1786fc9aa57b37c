//! Section content model
//!
//! A layout document is an ordered list of [`Section`]s. Each section carries
//! an open, all-optional [`Content`] record; absence of a field always means
//! "use the default", never "invalid".

use std::sync::atomic::{AtomicI64, AtomicU64, Ordering};
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Open content record of a section. Every field is optional.
pub type Content = Map<String, Value>;

/// Layout schema version written by this build.
pub const LAYOUT_VERSION: u32 = 1;

fn empty_content() -> &'static Content {
    static EMPTY: OnceLock<Content> = OnceLock::new();
    EMPTY.get_or_init(Content::new)
}

/// A self-contained, independently editable block of a page layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub id: String,

    /// Section type name, selects the descriptor used to render it
    #[serde(rename = "type")]
    pub kind: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<Content>,
}

impl Section {
    /// A freshly added section starts with `content = {}`.
    pub fn new(id: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind: kind.into(),
            content: Some(Content::new()),
        }
    }

    pub fn with_content(mut self, content: Content) -> Self {
        self.content = Some(content);
        self
    }

    /// Content as read by renderers; absent content reads as `{}`.
    pub fn content(&self) -> &Content {
        self.content.as_ref().unwrap_or_else(|| empty_content())
    }

    /// Apply an update coming out of the section's dispatcher.
    ///
    /// The carried content replaces the current one wholesale; it is already
    /// the full merged record.
    pub fn apply(&mut self, update: SectionUpdate) {
        if let Some(content) = update.content {
            self.content = Some(content);
        }
    }
}

/// Partial section record passed to the parent's update channel.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SectionUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<Content>,
}

impl SectionUpdate {
    pub fn content(content: Content) -> Self {
        Self {
            content: Some(content),
        }
    }
}

/// Persisted layout document, owned by the parent editor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutDocument {
    #[serde(default)]
    pub version: u32,

    #[serde(default)]
    pub sections: Vec<Section>,
}

impl Default for LayoutDocument {
    fn default() -> Self {
        Self {
            version: LAYOUT_VERSION,
            sections: Vec::new(),
        }
    }
}

impl LayoutDocument {
    pub fn section(&self, id: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.id == id)
    }

    pub fn section_mut(&mut self, id: &str) -> Option<&mut Section> {
        self.sections.iter_mut().find(|s| s.id == id)
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.sections.iter().position(|s| s.id == id)
    }
}

/// Build a single-field patch.
pub fn single(key: impl Into<String>, value: impl Into<Value>) -> Content {
    let mut patch = Content::new();
    patch.insert(key.into(), value.into());
    patch
}

// ─────────────────────────────────────────────────────────────────
// Identifiers
// ─────────────────────────────────────────────────────────────────

/// Source of stable identifiers for sections and list items.
pub trait IdGenerator {
    fn next_id(&self) -> String;
}

/// Milliseconds since the epoch, as a decimal string.
///
/// Strictly increasing within a process even when two ids are requested in
/// the same millisecond.
#[derive(Debug, Default)]
pub struct MillisIdGenerator {
    last: AtomicI64,
}

impl MillisIdGenerator {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdGenerator for MillisIdGenerator {
    fn next_id(&self) -> String {
        let now = chrono::Utc::now().timestamp_millis();
        let mut prev = self.last.load(Ordering::Relaxed);
        loop {
            let candidate = now.max(prev + 1);
            match self
                .last
                .compare_exchange_weak(prev, candidate, Ordering::SeqCst, Ordering::Relaxed)
            {
                Ok(_) => return candidate.to_string(),
                Err(actual) => prev = actual,
            }
        }
    }
}

/// Deterministic `prefix-N` ids, used for fixtures and tests.
#[derive(Debug)]
pub struct SequenceIdGenerator {
    prefix: String,
    next: AtomicU64,
}

impl SequenceIdGenerator {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: AtomicU64::new(1),
        }
    }
}

impl IdGenerator for SequenceIdGenerator {
    fn next_id(&self) -> String {
        let n = self.next.fetch_add(1, Ordering::Relaxed);
        format!("{}-{}", self.prefix, n)
    }
}
