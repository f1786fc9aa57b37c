//! Load-time normalization of historical content shapes
//!
//! Older layouts stored list sections in several shapes: the list itself as
//! the whole content, or a bag of objects keyed by position. All of them are
//! upgraded here, once, so render paths only ever see the current shape.

use std::collections::HashSet;

use serde::Deserialize;
use serde_json::Value;

use crate::content::{Content, IdGenerator, LayoutDocument, Section, LAYOUT_VERSION};
use crate::schema::{Registry, SectionKind};

/// A section as found on disk, before normalization.
#[derive(Debug, Clone, Deserialize)]
pub struct RawSection {
    #[serde(default)]
    pub id: Option<String>,

    #[serde(rename = "type")]
    pub kind: String,

    #[serde(default)]
    pub content: Value,
}

/// A layout file as found on disk.
///
/// Very old files are a bare array of sections without a version.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawLayout {
    Document {
        #[serde(default)]
        version: u32,
        #[serde(default)]
        sections: Vec<RawSection>,
    },
    Bare(Vec<RawSection>),
}

/// Result of normalizing a layout.
#[derive(Debug, Clone, PartialEq)]
pub struct Normalized {
    pub document: LayoutDocument,
    /// Number of sections whose stored shape was changed
    pub upgraded: usize,
}

impl Normalized {
    pub fn is_upgraded(&self) -> bool {
        self.upgraded > 0
    }
}

/// Upgrade one section's stored content to the current shape.
///
/// `kind` is `None` for unknown section types; their object content is kept
/// as is.
pub fn normalize_content(kind: Option<&SectionKind>, raw: Value, ids: &dyn IdGenerator) -> Content {
    let mut content = match raw {
        Value::Object(map) => map,
        Value::Array(items) => match kind.and_then(|k| k.primary_list.as_deref()) {
            Some(list) => {
                tracing::debug!("Moving bare array content into '{}'", list);
                let mut content = Content::new();
                content.insert(list.to_string(), Value::Array(items));
                content
            }
            None => {
                tracing::trace!("Dropping bare array content of a kind without a list");
                Content::new()
            }
        },
        Value::Null => Content::new(),
        other => {
            tracing::trace!("Replacing scalar content with empty record: {}", other);
            Content::new()
        }
    };

    let Some(kind) = kind else {
        return content;
    };

    for (key, spec) in kind.lists() {
        let Some(value) = content.get_mut(key) else {
            continue;
        };

        if let Value::Object(bag) = value {
            if !bag.is_empty() && bag.values().all(Value::is_object) {
                *value = Value::Array(keyed_bag_to_array(bag));
            }
        }

        if let Value::Array(items) = value {
            let before = items.len();
            items.retain(Value::is_object);
            if items.len() != before {
                tracing::debug!("Dropped {} non-record entries from '{}'", before - items.len(), key);
            }
        }

        if spec.keyed {
            if let Value::Array(items) = value {
                for item in items.iter_mut() {
                    if let Value::Object(item) = item {
                        let has_id = matches!(item.get("id"), Some(Value::String(s)) if !s.is_empty());
                        if !has_id {
                            item.insert("id".to_string(), Value::String(ids.next_id()));
                        }
                    }
                }
            }
        }
    }

    content
}

/// Entries of a keyed bag, ordered by key. Numeric keys sort numerically.
fn keyed_bag_to_array(bag: &Content) -> Vec<Value> {
    let mut entries: Vec<(&String, &Value)> = bag.iter().collect();
    entries.sort_by(|(a, _), (b, _)| match (a.parse::<u64>(), b.parse::<u64>()) {
        (Ok(a), Ok(b)) => a.cmp(&b),
        _ => a.cmp(b),
    });
    entries.into_iter().map(|(_, v)| v.clone()).collect()
}

/// Normalize a whole layout and bump it to the current version.
pub fn normalize_document(raw: RawLayout, registry: &Registry, ids: &dyn IdGenerator) -> Normalized {
    let (version, raw_sections) = match raw {
        RawLayout::Document { version, sections } => (version, sections),
        RawLayout::Bare(sections) => (0, sections),
    };

    let mut seen = HashSet::new();
    let mut upgraded = 0;
    let mut sections = Vec::with_capacity(raw_sections.len());

    for raw in raw_sections {
        let kind = registry.get(&raw.kind);
        if kind.is_none() {
            tracing::warn!("Unknown section type '{}'", raw.kind);
        }

        let id = match raw.id {
            Some(id) if !id.is_empty() && !seen.contains(&id) => id,
            _ => {
                upgraded += 1;
                ids.next_id()
            }
        };
        seen.insert(id.clone());

        let before = raw.content.clone();
        let content = normalize_content(kind, raw.content, ids);
        if Value::Object(content.clone()) != before {
            upgraded += 1;
        }

        sections.push(Section {
            id,
            kind: raw.kind,
            content: Some(content),
        });
    }

    if version != LAYOUT_VERSION {
        tracing::info!("Upgrading layout from version {} to {}", version, LAYOUT_VERSION);
    }

    Normalized {
        document: LayoutDocument {
            version: LAYOUT_VERSION,
            sections,
        },
        upgraded,
    }
}
