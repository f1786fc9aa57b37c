//! Editing form rows.
//!
//! Builds the flat list of rows shown by a section's editing form from its
//! kind and resolved content. Used by both the key handler (to know what the
//! cursor is on) and the section editor widget (for rendering).

use lstudio_core::{Content, FieldKind, FieldSpec, ListSpec, MediaKind, Resolved, SectionKind};
use serde_json::Value;

/// What a form row edits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowTarget {
    /// Top-level content field
    Field { key: String },
    /// Field of a nested record
    Nested { group: String, key: String },
    /// Field of a list item
    Item {
        list: String,
        index: usize,
        /// Stable id of the item at render time, when the list is keyed
        item_id: Option<String>,
        key: String,
    },
    /// Heading of a list field
    ListHeader { list: String },
    /// Heading of one list item
    ItemHeader { list: String, index: usize },
    /// "Add item" action row
    AddItem { list: String },
}

impl RowTarget {
    /// List field the row belongs to, if any.
    pub fn list(&self) -> Option<&str> {
        match self {
            RowTarget::Item { list, .. }
            | RowTarget::ListHeader { list }
            | RowTarget::ItemHeader { list, .. }
            | RowTarget::AddItem { list } => Some(list),
            RowTarget::Field { .. } | RowTarget::Nested { .. } => None,
        }
    }

    /// Item index the row belongs to, if any.
    pub fn item_index(&self) -> Option<usize> {
        match self {
            RowTarget::Item { index, .. } | RowTarget::ItemHeader { index, .. } => Some(*index),
            _ => None,
        }
    }

    /// Value stored in `content` for this row, before defaults apply.
    ///
    /// List items are counted the way rows count them, skipping entries
    /// that are not records.
    pub fn stored<'c>(&self, content: &'c Content) -> Option<&'c Value> {
        match self {
            RowTarget::Field { key } => content.get(key),
            RowTarget::Nested { group, key } => content.get(group)?.as_object()?.get(key),
            RowTarget::Item {
                list, index, key, ..
            } => content
                .get(list)?
                .as_array()?
                .iter()
                .filter_map(Value::as_object)
                .nth(*index)?
                .get(key),
            RowTarget::ListHeader { .. }
            | RowTarget::ItemHeader { .. }
            | RowTarget::AddItem { .. } => None,
        }
    }
}

/// Control used to edit a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowControl {
    Text,
    LongText,
    Color,
    Number,
    Toggle,
    Media(MediaKind),
    /// Non-editable heading
    Heading,
    /// Activating the row performs an action
    Action,
}

impl RowControl {
    fn for_field(kind: &FieldKind) -> Self {
        match kind {
            FieldKind::Text => RowControl::Text,
            FieldKind::LongText => RowControl::LongText,
            FieldKind::Color => RowControl::Color,
            FieldKind::Number => RowControl::Number,
            FieldKind::Toggle => RowControl::Toggle,
            FieldKind::Media(media) => RowControl::Media(*media),
            FieldKind::Group(_) | FieldKind::List(_) => RowControl::Heading,
        }
    }

    /// Edited through the text buffer
    pub fn is_text_like(self) -> bool {
        matches!(
            self,
            RowControl::Text | RowControl::LongText | RowControl::Color | RowControl::Number
        )
    }
}

/// One line of the editing form.
#[derive(Debug, Clone, PartialEq)]
pub struct FormRow {
    pub target: RowTarget,
    pub label: String,
    /// Content key, shown when `ui.show_field_keys` is set
    pub key: String,
    pub control: RowControl,
    /// Resolved value shown in the row
    pub value: Value,
    /// Indentation level
    pub depth: u8,
    /// Row's list allows reordering
    pub movable: bool,
}

impl FormRow {
    pub fn display_value(&self) -> String {
        value_text(&self.value)
    }
}

/// Text shown for a value in the form and edit buffer.
pub fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Build all form rows for a section.
pub fn form_rows(kind: &SectionKind, resolved: &Resolved) -> Vec<FormRow> {
    let mut rows = Vec::new();

    for field in &kind.fields {
        match &field.kind {
            FieldKind::Group(children) => {
                rows.push(heading(RowTarget::Field { key: field.key.clone() }, field, 0));
                let nested = resolved.nested(&field.key);
                for child in children {
                    rows.push(FormRow {
                        target: RowTarget::Nested {
                            group: field.key.clone(),
                            key: child.key.clone(),
                        },
                        label: child.label.clone(),
                        key: format!("{}.{}", field.key, child.key),
                        control: RowControl::for_field(&child.kind),
                        value: nested.get(&child.key).cloned().unwrap_or(Value::Null),
                        depth: 1,
                        movable: false,
                    });
                }
            }
            FieldKind::List(spec) => list_rows(&mut rows, field, spec, resolved),
            _ => rows.push(FormRow {
                target: RowTarget::Field {
                    key: field.key.clone(),
                },
                label: field.label.clone(),
                key: field.key.clone(),
                control: RowControl::for_field(&field.kind),
                value: resolved.get(&field.key).cloned().unwrap_or(Value::Null),
                depth: 0,
                movable: false,
            }),
        }
    }

    rows
}

fn heading(target: RowTarget, field: &FieldSpec, depth: u8) -> FormRow {
    FormRow {
        target,
        label: field.label.clone(),
        key: field.key.clone(),
        control: RowControl::Heading,
        value: Value::Null,
        depth,
        movable: false,
    }
}

fn list_rows(rows: &mut Vec<FormRow>, field: &FieldSpec, spec: &ListSpec, resolved: &Resolved) {
    let list = field.key.clone();
    rows.push(heading(RowTarget::ListHeader { list: list.clone() }, field, 0));

    for (index, item) in resolved.items(&list).iter().enumerate() {
        let item_id = match item.get("id") {
            Some(Value::String(id)) if !id.is_empty() => Some(id.clone()),
            _ => None,
        };

        rows.push(FormRow {
            target: RowTarget::ItemHeader {
                list: list.clone(),
                index,
            },
            label: format!("{} {}", spec.item_label, index + 1),
            key: format!("{}[{}]", list, index),
            control: RowControl::Heading,
            value: Value::Null,
            depth: 1,
            movable: spec.movable,
        });

        for child in &spec.fields {
            rows.push(FormRow {
                target: RowTarget::Item {
                    list: list.clone(),
                    index,
                    item_id: item_id.clone(),
                    key: child.key.clone(),
                },
                label: child.label.clone(),
                key: format!("{}[{}].{}", list, index, child.key),
                control: RowControl::for_field(&child.kind),
                value: item.get(&child.key).cloned().unwrap_or(Value::Null),
                depth: 2,
                movable: spec.movable,
            });
        }
    }

    rows.push(FormRow {
        target: RowTarget::AddItem { list: list.clone() },
        label: format!("+ Add {}", spec.item_label),
        key: list,
        control: RowControl::Action,
        value: Value::Null,
        depth: 1,
        movable: false,
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sections::builtin_registry;
    use lstudio_core::{Content, FallbackPolicy};
    use serde_json::json;

    fn rows_for(kind: &str, content: Value) -> Vec<FormRow> {
        let registry = builtin_registry();
        let kind = registry.get(kind).unwrap();
        let content = content.as_object().cloned().unwrap_or_default();
        form_rows(kind, &kind.resolve(&content, FallbackPolicy::Nullish))
    }

    #[test]
    fn test_plain_fields_show_resolved_values() {
        let rows = rows_for("hero", json!({ "title": "Hi" }));
        assert_eq!(rows[0].label, "Title");
        assert_eq!(rows[0].display_value(), "Hi");
        assert_eq!(rows[1].display_value(), "Tell visitors what you do");
        assert!(rows.iter().all(|r| r.target.list().is_none()));
    }

    #[test]
    fn test_group_fields_are_nested_rows() {
        let rows = rows_for("contact", json!({ "contactInfo": { "phone": "x" } }));
        let phone = rows
            .iter()
            .find(|r| r.key == "contactInfo.phone")
            .unwrap();
        let email = rows
            .iter()
            .find(|r| r.key == "contactInfo.email")
            .unwrap();
        assert_eq!(phone.display_value(), "x");
        assert_eq!(email.display_value(), "hello@example.com");
        assert_eq!(phone.depth, 1);
    }

    #[test]
    fn test_list_rows_per_item_with_add_row() {
        let rows = rows_for(
            "governance",
            json!({ "initiatives": [{ "id": "a", "title": "A" }, { "id": "b", "title": "B" }] }),
        );
        let headers: Vec<_> = rows
            .iter()
            .filter(|r| matches!(r.target, RowTarget::ItemHeader { .. }))
            .map(|r| r.label.as_str())
            .collect();
        assert_eq!(headers, vec!["Initiative 1", "Initiative 2"]);
        assert!(matches!(
            rows.last().map(|r| &r.target),
            Some(RowTarget::AddItem { list }) if list == "initiatives"
        ));

        let second_title = rows
            .iter()
            .find(|r| r.key == "initiatives[1].title")
            .unwrap();
        assert!(matches!(
            &second_title.target,
            RowTarget::Item { index: 1, item_id: Some(id), .. } if id == "b"
        ));
        assert!(second_title.movable);
    }

    #[test]
    fn test_malformed_list_gives_only_header_and_add() {
        let rows = rows_for("stats", json!({ "stats": "oops" }));
        let stat_rows: Vec<_> = rows
            .iter()
            .filter(|r| r.target.list() == Some("stats"))
            .collect();
        assert_eq!(stat_rows.len(), 2);
    }

    #[test]
    fn test_empty_content_builds_rows() {
        let registry = builtin_registry();
        for kind in registry.kinds() {
            let rows = form_rows(kind, &kind.resolve(&Content::new(), FallbackPolicy::Nullish));
            assert!(!rows.is_empty(), "{}", kind.name);
        }
    }
}
