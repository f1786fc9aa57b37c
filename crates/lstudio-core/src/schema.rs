//! Section kind descriptors
//!
//! A [`SectionKind`] declares the fields a section type understands, their
//! defaults and how its live view is laid out. Defaults are derived from the
//! field schema so the form, the resolver and the renderer can never
//! disagree about them.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::content::Content;
use crate::resolve::{resolve, FallbackPolicy, Resolved};

/// Kind of media a field accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Video,
}

impl MediaKind {
    pub fn label(self) -> &'static str {
        match self {
            MediaKind::Image => "image",
            MediaKind::Video => "video",
        }
    }

    /// Accepted file extensions, lowercase without the dot.
    pub fn extensions(self) -> &'static [&'static str] {
        match self {
            MediaKind::Image => &["png", "jpg", "jpeg", "gif", "webp", "svg"],
            MediaKind::Video => &["mp4", "webm", "mov"],
        }
    }

    pub fn accepts(self, extension: &str) -> bool {
        let ext = extension.to_ascii_lowercase();
        self.extensions().iter().any(|e| *e == ext)
    }
}

/// How a field is edited and displayed.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldKind {
    Text,
    LongText,
    /// `#rrggbb` color string
    Color,
    Number,
    Toggle,
    Media(MediaKind),
    /// Nested record with its own fields
    Group(Vec<FieldSpec>),
    /// Array of item records
    List(ListSpec),
}

impl FieldKind {
    /// Field is edited through the text buffer.
    pub fn is_text_like(&self) -> bool {
        matches!(
            self,
            FieldKind::Text | FieldKind::LongText | FieldKind::Color | FieldKind::Number
        )
    }
}

/// One declared field of a section or list item.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldSpec {
    pub key: String,
    pub label: String,
    pub kind: FieldKind,
    pub default: Value,
}

impl FieldSpec {
    fn new(key: impl Into<String>, label: impl Into<String>, kind: FieldKind, default: Value) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            kind,
            default,
        }
    }

    pub fn text(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(key, label, FieldKind::Text, Value::String(String::new()))
    }

    pub fn long_text(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(key, label, FieldKind::LongText, Value::String(String::new()))
    }

    pub fn color(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(key, label, FieldKind::Color, Value::String("#000000".into()))
    }

    pub fn number(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(key, label, FieldKind::Number, Value::from(0))
    }

    pub fn toggle(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(key, label, FieldKind::Toggle, Value::Bool(false))
    }

    pub fn media(key: impl Into<String>, label: impl Into<String>, kind: MediaKind) -> Self {
        Self::new(key, label, FieldKind::Media(kind), Value::String(String::new()))
    }

    pub fn group(key: impl Into<String>, label: impl Into<String>, fields: Vec<FieldSpec>) -> Self {
        let default = Value::Object(defaults_of(&fields));
        Self::new(key, label, FieldKind::Group(fields), default)
    }

    pub fn list(key: impl Into<String>, label: impl Into<String>, spec: ListSpec) -> Self {
        let default = Value::Array(spec.default_items.clone());
        Self::new(key, label, FieldKind::List(spec), default)
    }

    pub fn default(mut self, value: impl Into<Value>) -> Self {
        self.default = value.into();
        self
    }
}

fn defaults_of(fields: &[FieldSpec]) -> Content {
    fields
        .iter()
        .map(|f| (f.key.clone(), f.default.clone()))
        .collect()
}

/// Declaration of a list field's items.
#[derive(Debug, Clone, PartialEq)]
pub struct ListSpec {
    /// Singular label of one item ("Service", "Initiative")
    pub item_label: String,
    pub fields: Vec<FieldSpec>,
    /// Items carry a stable `id`
    pub keyed: bool,
    /// Items can be reordered
    pub movable: bool,
    /// Items shown while the list is absent from content
    pub default_items: Vec<Value>,
}

impl ListSpec {
    pub fn new(item_label: impl Into<String>, fields: Vec<FieldSpec>) -> Self {
        Self {
            item_label: item_label.into(),
            fields,
            keyed: false,
            movable: false,
            default_items: Vec::new(),
        }
    }

    pub fn keyed(mut self) -> Self {
        self.keyed = true;
        self
    }

    pub fn movable(mut self) -> Self {
        self.movable = true;
        self
    }

    pub fn default_items(mut self, items: Vec<Value>) -> Self {
        self.default_items = items;
        self
    }

    pub fn item_defaults(&self) -> Content {
        defaults_of(&self.fields)
    }

    /// Record appended by an "add" action.
    pub fn new_item(&self) -> Content {
        let mut item = self.item_defaults();
        if let Some(first) = self.fields.iter().find(|f| f.kind.is_text_like()) {
            if matches!(&first.default, Value::String(s) if s.is_empty()) {
                item.insert(
                    first.key.clone(),
                    Value::String(format!("New {}", self.item_label)),
                );
            }
        }
        item
    }

    pub fn field(&self, key: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.key == key)
    }
}

/// Arrangement of a section's live view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiveLayout {
    /// Title, subtitle and call to action over a background
    Banner,
    /// Cards laid out from the primary list
    Grid,
    /// Large numbers with captions
    Stats,
    /// Ordered entries, one per line
    Timeline,
    /// Address block with contact details
    Contact,
}

/// Descriptor of one section type.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionKind {
    /// Value of `Section::kind` selecting this descriptor
    pub name: String,
    pub label: String,
    pub fields: Vec<FieldSpec>,
    /// List field a legacy bare-array content is moved into
    pub primary_list: Option<String>,
    pub layout: LiveLayout,
}

impl SectionKind {
    pub fn new(name: impl Into<String>, label: impl Into<String>, layout: LiveLayout) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            fields: Vec::new(),
            primary_list: None,
            layout,
        }
    }

    pub fn field(mut self, spec: FieldSpec) -> Self {
        if self.primary_list.is_none() && matches!(spec.kind, FieldKind::List(_)) {
            self.primary_list = Some(spec.key.clone());
        }
        self.fields.push(spec);
        self
    }

    pub fn primary_list(mut self, key: impl Into<String>) -> Self {
        self.primary_list = Some(key.into());
        self
    }

    pub fn defaults(&self) -> Content {
        defaults_of(&self.fields)
    }

    pub fn find_field(&self, key: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.key == key)
    }

    pub fn list_spec(&self, key: &str) -> Option<&ListSpec> {
        match self.find_field(key).map(|f| &f.kind) {
            Some(FieldKind::List(spec)) => Some(spec),
            _ => None,
        }
    }

    /// All list fields with their item declarations.
    pub fn lists(&self) -> impl Iterator<Item = (&str, &ListSpec)> {
        self.fields.iter().filter_map(|f| match &f.kind {
            FieldKind::List(spec) => Some((f.key.as_str(), spec)),
            _ => None,
        })
    }

    /// Resolve `content` against this kind's defaults.
    ///
    /// List fields come out as arrays of item records resolved against the
    /// item defaults; a non-array list reads as empty and non-object entries
    /// are dropped.
    pub fn resolve(&self, content: &Content, policy: FallbackPolicy) -> Resolved {
        let mut resolved = resolve(content, &self.defaults(), policy);

        for (key, spec) in self.lists() {
            let item_defaults = spec.item_defaults();
            let items = match resolved.get(key) {
                Some(Value::Array(items)) => items
                    .iter()
                    .filter_map(Value::as_object)
                    .map(|item| Value::Object(resolve(item, &item_defaults, policy)))
                    .collect(),
                Some(other) => {
                    tracing::trace!(
                        "Section '{}' list '{}' is not an array: {}",
                        self.name,
                        key,
                        other
                    );
                    Vec::new()
                }
                None => Vec::new(),
            };
            resolved.insert(key.to_string(), Value::Array(items));
        }

        Resolved::from_content(resolved)
    }
}

/// Lookup of section kinds by type name.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    kinds: Vec<SectionKind>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a kind. A later registration of the same name replaces it.
    pub fn register(&mut self, kind: SectionKind) {
        match self.kinds.iter_mut().find(|k| k.name == kind.name) {
            Some(existing) => *existing = kind,
            None => self.kinds.push(kind),
        }
    }

    pub fn get(&self, name: &str) -> Option<&SectionKind> {
        self.kinds.iter().find(|k| k.name == name)
    }

    pub fn kinds(&self) -> &[SectionKind] {
        &self.kinds
    }

    pub fn names(&self) -> Vec<&str> {
        self.kinds.iter().map(|k| k.name.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }
}
