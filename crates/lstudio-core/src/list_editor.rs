//! Index-addressed editing of array-valued content fields
//!
//! Every operation rebuilds the whole array and sends `{ field: new_array }`
//! through [`dispatch`]. Items are addressed by their position in the list
//! as last rendered; this is only sound because the UI loop processes one
//! event at a time and re-renders before the next one. Completions that
//! arrive asynchronously must use the id-based variants instead.

use serde_json::Value;

use crate::content::{single, Content, IdGenerator};
use crate::dispatch::{dispatch, merge_patch, OnUpdate};

/// Direction for [`ListEditor::move_item`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

/// Items of a list field. A missing or non-array value reads as empty.
pub fn list_items(content: &Content, field: &str) -> Vec<Value> {
    match content.get(field) {
        Some(Value::Array(items)) => items.clone(),
        Some(other) => {
            tracing::trace!("Treating non-array '{}' as empty list: {}", field, other);
            Vec::new()
        }
        None => Vec::new(),
    }
}

fn item_id(item: &Value) -> Option<&str> {
    item.get("id").and_then(Value::as_str)
}

/// Editor for one list field of a section's content.
///
/// Holds its own copy of the content and advances it after each successful
/// operation, so several operations in one event see each other's results.
pub struct ListEditor<'a, S: OnUpdate + ?Sized> {
    content: Content,
    field: &'a str,
    sink: &'a mut S,
    ids: Option<&'a dyn IdGenerator>,
}

impl<'a, S: OnUpdate + ?Sized> ListEditor<'a, S> {
    pub fn new(content: &Content, field: &'a str, sink: &'a mut S) -> Self {
        Self {
            content: content.clone(),
            field,
            sink,
            ids: None,
        }
    }

    /// Assign fresh ids to added items that do not carry one.
    pub fn with_ids(mut self, ids: &'a dyn IdGenerator) -> Self {
        self.ids = Some(ids);
        self
    }

    pub fn content(&self) -> &Content {
        &self.content
    }

    pub fn items(&self) -> Vec<Value> {
        list_items(&self.content, self.field)
    }

    pub fn len(&self) -> usize {
        self.items().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Append `item` to the end of the list.
    pub fn add(&mut self, mut item: Content) -> bool {
        if let Some(ids) = self.ids {
            let has_id = matches!(item.get("id"), Some(Value::String(s)) if !s.is_empty());
            if !has_id {
                item.insert("id".to_string(), Value::String(ids.next_id()));
            }
        }
        let mut items = self.items();
        items.push(Value::Object(item));
        self.commit(items);
        true
    }

    /// Shallow-merge `patch` into the entry at `index`.
    pub fn update(&mut self, index: usize, patch: Content) -> bool {
        let items = self.items();
        if index >= items.len() {
            tracing::debug!(
                "Ignoring update of {}[{}]: list has {} items",
                self.field,
                index,
                items.len()
            );
            return false;
        }
        let updated = items
            .into_iter()
            .enumerate()
            .map(|(i, item)| {
                if i != index {
                    return item;
                }
                match item {
                    Value::Object(existing) => Value::Object(merge_patch(&existing, patch.clone())),
                    _ => Value::Object(patch.clone()),
                }
            })
            .collect();
        self.commit(updated);
        true
    }

    /// Remove the entry at `index`; later entries shift down by one.
    pub fn remove(&mut self, index: usize) -> bool {
        let items = self.items();
        if index >= items.len() {
            return false;
        }
        let remaining = items
            .into_iter()
            .enumerate()
            .filter(|(i, _)| *i != index)
            .map(|(_, item)| item)
            .collect();
        self.commit(remaining);
        true
    }

    /// Swap the entry at `index` with its neighbour. No-op at the boundaries.
    pub fn move_item(&mut self, index: usize, direction: Direction) -> bool {
        let mut items = self.items();
        let target = match direction {
            Direction::Up if index > 0 && index < items.len() => index - 1,
            Direction::Down if index + 1 < items.len() => index + 1,
            _ => return false,
        };
        items.swap(index, target);
        self.commit(items);
        true
    }

    pub fn position_of(&self, id: &str) -> Option<usize> {
        self.items().iter().position(|item| item_id(item) == Some(id))
    }

    /// Update the item carrying `id`, wherever it currently sits.
    pub fn update_by_id(&mut self, id: &str, patch: Content) -> bool {
        match self.position_of(id) {
            Some(index) => self.update(index, patch),
            None => {
                tracing::warn!("No item with id '{}' in '{}'", id, self.field);
                false
            }
        }
    }

    pub fn remove_by_id(&mut self, id: &str) -> bool {
        match self.position_of(id) {
            Some(index) => self.remove(index),
            None => false,
        }
    }

    fn commit(&mut self, items: Vec<Value>) {
        self.content = dispatch(
            &self.content,
            single(self.field, Value::Array(items)),
            self.sink,
        );
    }
}
