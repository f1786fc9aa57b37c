//! Section editor - binds form rows to the update dispatcher
//!
//! A [`SectionEditor`] is created for one user action against one section.
//! It never mutates the section it was given: every edit goes through
//! [`dispatch`] and reaches the parent through the `OnUpdate` sink.

use std::sync::LazyLock;

use lstudio_core::{
    dispatch, nested_patch, single, Content, Direction, FallbackPolicy, IdGenerator, ListEditor,
    OnUpdate, Section, SectionKind,
};
use regex::Regex;
use serde_json::{Number, Value};

use crate::form::{FormRow, RowControl, RowTarget};

static COLOR_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#(?:[0-9a-fA-F]{3}|[0-9a-fA-F]{6})$").expect("Invalid color pattern regex")
});

/// Parse text typed into a row into the value stored in content.
pub fn parse_input(control: RowControl, text: &str) -> Result<Value, String> {
    match control {
        RowControl::Color => {
            let text = text.trim();
            if COLOR_REGEX.is_match(text) {
                Ok(Value::String(text.to_lowercase()))
            } else {
                Err(format!("Invalid color '{}': expected #rgb or #rrggbb", text))
            }
        }
        RowControl::Number => {
            let parsed: f64 = text
                .trim()
                .parse()
                .map_err(|_| format!("Invalid number '{}'", text))?;
            if parsed.fract() == 0.0 && parsed.abs() < i64::MAX as f64 {
                Ok(Value::from(parsed as i64))
            } else {
                Number::from_f64(parsed)
                    .map(Value::Number)
                    .ok_or_else(|| format!("Invalid number '{}'", text))
            }
        }
        RowControl::Toggle => match text.trim() {
            "true" => Ok(Value::Bool(true)),
            "false" => Ok(Value::Bool(false)),
            other => Err(format!("Expected true or false, got '{}'", other)),
        },
        RowControl::Text | RowControl::LongText | RowControl::Media(_) => {
            Ok(Value::String(text.to_string()))
        }
        RowControl::Heading | RowControl::Action => Err("Row is not editable".to_string()),
    }
}

/// Editor for one section's content.
pub struct SectionEditor<'a, S: OnUpdate + ?Sized> {
    kind: &'a SectionKind,
    content: Content,
    sink: &'a mut S,
    ids: Option<&'a dyn IdGenerator>,
    policy: FallbackPolicy,
}

impl<'a, S: OnUpdate + ?Sized> SectionEditor<'a, S> {
    pub fn new(kind: &'a SectionKind, section: &Section, sink: &'a mut S) -> Self {
        Self {
            kind,
            content: section.content().clone(),
            sink,
            ids: None,
            policy: FallbackPolicy::default(),
        }
    }

    /// Policy the form rows were resolved with.
    pub fn with_policy(mut self, policy: FallbackPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Assign ids to items added to keyed lists.
    pub fn with_ids(mut self, ids: &'a dyn IdGenerator) -> Self {
        self.ids = Some(ids);
        self
    }

    /// Content after the edits made so far.
    pub fn content(&self) -> &Content {
        &self.content
    }

    pub fn set_field(&mut self, key: &str, value: Value) {
        self.content = dispatch(&self.content, single(key, value), self.sink);
    }

    /// Update one key of a nested record, keeping its other keys.
    pub fn set_nested(&mut self, group: &str, key: &str, value: Value) {
        let patch = nested_patch(&self.content, group, single(key, value));
        self.content = dispatch(&self.content, patch, self.sink);
    }

    /// Content the list editor starts from, holding exactly the items the
    /// form rows were built from.
    ///
    /// A missing list is shown with the kind's default items, so editing it
    /// starts from those items rather than from nothing. Entries that are
    /// not records are never shown and are dropped here, keeping row
    /// indexes and array indexes the same.
    fn list_base(&self, list: &str) -> Content {
        let mut base = self.content.clone();
        let current = base.get(list);
        let items = if self.policy.is_missing(current) {
            self.kind
                .list_spec(list)
                .map(|spec| spec.default_items.clone())
        } else {
            match current {
                Some(Value::Array(items)) if !items.iter().all(Value::is_object) => {
                    tracing::debug!("Dropping non-record entries of list '{}'", list);
                    Some(items.iter().filter(|item| item.is_object()).cloned().collect())
                }
                Some(Value::Array(_)) => None,
                _ => Some(Vec::new()),
            }
        };
        if let Some(items) = items {
            base.insert(list.to_string(), Value::Array(items));
        }
        base
    }

    fn with_list<R>(&mut self, list: &str, op: impl FnOnce(&mut ListEditor<'_, S>) -> R) -> R {
        let base = self.list_base(list);
        let keyed = self.kind.list_spec(list).is_some_and(|spec| spec.keyed);
        let mut editor = ListEditor::new(&base, list, &mut *self.sink);
        if keyed {
            if let Some(ids) = self.ids {
                editor = editor.with_ids(ids);
            }
        }
        let result = op(&mut editor);
        let content = editor.content().clone();
        self.content = content;
        result
    }

    /// Append a new default-valued item to `list`.
    pub fn add_item(&mut self, list: &str) -> bool {
        let Some(item) = self.kind.list_spec(list).map(|spec| spec.new_item()) else {
            tracing::warn!("Section '{}' has no list '{}'", self.kind.name, list);
            return false;
        };
        self.with_list(list, |editor| editor.add(item))
    }

    pub fn update_item(&mut self, list: &str, index: usize, patch: Content) -> bool {
        self.with_list(list, |editor| editor.update(index, patch))
    }

    pub fn update_item_by_id(&mut self, list: &str, id: &str, patch: Content) -> bool {
        self.with_list(list, |editor| editor.update_by_id(id, patch))
    }

    pub fn remove_item(&mut self, list: &str, index: usize) -> bool {
        self.with_list(list, |editor| editor.remove(index))
    }

    pub fn move_item(&mut self, list: &str, index: usize, direction: Direction) -> bool {
        if !self.kind.list_spec(list).is_some_and(|spec| spec.movable) {
            return false;
        }
        self.with_list(list, |editor| editor.move_item(index, direction))
    }

    /// Write `value` to whatever `target` points at.
    ///
    /// Returns `false` when the target is not a value row or no longer
    /// exists.
    pub fn set_target(&mut self, target: &RowTarget, value: Value) -> bool {
        match target {
            RowTarget::Field { key } => {
                self.set_field(key, value);
                true
            }
            RowTarget::Nested { group, key } => {
                self.set_nested(group, key, value);
                true
            }
            RowTarget::Item {
                list, index, key, ..
            } => self.update_item(list, *index, single(key.as_str(), value)),
            RowTarget::ListHeader { .. }
            | RowTarget::ItemHeader { .. }
            | RowTarget::AddItem { .. } => false,
        }
    }

    /// Like [`set_target`](Self::set_target) but addresses list items by id
    /// when the row carried one. Used for completions that arrive after the
    /// list may have been reordered.
    pub fn set_target_stable(&mut self, target: &RowTarget, value: Value) -> bool {
        match target {
            RowTarget::Item {
                list,
                item_id: Some(id),
                key,
                ..
            } => self.update_item_by_id(list, id, single(key.as_str(), value)),
            other => self.set_target(other, value),
        }
    }

    /// Parse `text` for `row` and write it.
    pub fn commit_text(&mut self, row: &FormRow, text: &str) -> Result<bool, String> {
        let value = parse_input(row.control, text)?;
        if value == row.value {
            return Ok(false);
        }
        Ok(self.set_target(&row.target, value))
    }

    /// Flip a toggle row.
    pub fn toggle(&mut self, row: &FormRow) -> bool {
        if row.control != RowControl::Toggle {
            return false;
        }
        let current = matches!(row.value, Value::Bool(true));
        self.set_target(&row.target, Value::Bool(!current))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::form_rows;
    use crate::sections::builtin_registry;
    use lstudio_core::{FallbackPolicy, SectionUpdate, SequenceIdGenerator};
    use serde_json::json;

    fn section(kind: &str, content: Value) -> Section {
        Section::new("s1", kind).with_content(content.as_object().cloned().unwrap())
    }

    #[test]
    fn test_single_field_edit_dispatches_once_without_defaults() {
        let registry = builtin_registry();
        let kind = registry.get("hero").unwrap();
        let section = section("hero", json!({ "title": "Old" }));
        let mut updates: Vec<SectionUpdate> = Vec::new();
        let mut sink = |u: SectionUpdate| updates.push(u);

        let rows = form_rows(kind, &kind.resolve(section.content(), FallbackPolicy::Nullish));
        let title = rows.iter().find(|r| r.key == "title").unwrap();
        SectionEditor::new(kind, &section, &mut sink)
            .commit_text(title, "New")
            .unwrap();

        assert_eq!(updates.len(), 1);
        assert_eq!(
            updates[0].content,
            Some(json!({ "title": "New" }).as_object().cloned().unwrap())
        );
    }

    #[test]
    fn test_unchanged_text_does_not_dispatch() {
        let registry = builtin_registry();
        let kind = registry.get("hero").unwrap();
        let section = section("hero", json!({ "title": "Same" }));
        let mut calls = 0;
        let mut sink = |_u: SectionUpdate| calls += 1;

        let rows = form_rows(kind, &kind.resolve(section.content(), FallbackPolicy::Nullish));
        let title = rows.iter().find(|r| r.key == "title").unwrap();
        let changed = SectionEditor::new(kind, &section, &mut sink)
            .commit_text(title, "Same")
            .unwrap();

        assert!(!changed);
        assert_eq!(calls, 0);
    }

    #[test]
    fn test_nested_edit_keeps_sibling_keys() {
        let registry = builtin_registry();
        let kind = registry.get("contact").unwrap();
        let section = section(
            "contact",
            json!({ "contactInfo": { "phone": "1", "email": "e@x" } }),
        );
        let mut sink = |_u: SectionUpdate| {};
        let mut editor = SectionEditor::new(kind, &section, &mut sink);

        editor.set_nested("contactInfo", "phone", json!("2"));

        assert_eq!(
            editor.content()["contactInfo"],
            json!({ "phone": "2", "email": "e@x" })
        );
    }

    #[test]
    fn test_add_item_to_absent_list_starts_from_defaults() {
        let registry = builtin_registry();
        let kind = registry.get("services").unwrap();
        let section = Section::new("s1", "services");
        let ids = SequenceIdGenerator::new("svc");
        let mut sink = |_u: SectionUpdate| {};
        let mut editor = SectionEditor::new(kind, &section, &mut sink).with_ids(&ids);

        assert!(editor.add_item("services"));

        let items = editor.content()["services"].as_array().unwrap().clone();
        assert_eq!(items.len(), 4);
        assert_eq!(items[0]["title"], "Consulting");
        assert_eq!(items[3]["title"], "New Service");
        assert_eq!(items[3]["id"], "svc-1");
    }

    #[test]
    fn test_null_list_edits_start_from_defaults() {
        let registry = builtin_registry();
        let kind = registry.get("services").unwrap();
        let section = section("services", json!({ "services": null }));
        let mut sink = |_u: SectionUpdate| {};
        let mut editor = SectionEditor::new(kind, &section, &mut sink);

        assert!(editor.update_item("services", 0, single("title", "Advice")));

        let items = editor.content()["services"].as_array().unwrap().clone();
        assert_eq!(items.len(), 3);
        assert_eq!(items[0]["title"], "Advice");
        assert_eq!(items[1]["title"], kind.list_spec("services").unwrap().default_items[1]["title"]);
    }

    #[test]
    fn test_list_edit_skips_non_record_entries() {
        let registry = builtin_registry();
        let kind = registry.get("services").unwrap();
        let section = section(
            "services",
            json!({ "services": ["junk", { "id": "x", "title": "A" }] }),
        );
        let mut sink = |_u: SectionUpdate| {};
        let mut editor = SectionEditor::new(kind, &section, &mut sink);

        assert!(editor.update_item("services", 0, single("title", "AZ")));

        assert_eq!(
            editor.content()["services"],
            json!([{ "id": "x", "title": "AZ" }])
        );
    }

    #[test]
    fn test_unkeyed_list_items_get_no_id() {
        let registry = builtin_registry();
        let kind = registry.get("sustainability").unwrap();
        let section = Section::new("s1", "sustainability");
        let ids = SequenceIdGenerator::new("x");
        let mut sink = |_u: SectionUpdate| {};
        let mut editor = SectionEditor::new(kind, &section, &mut sink).with_ids(&ids);

        editor.add_item("pillars");

        assert!(editor.content()["pillars"][0].get("id").is_none());
    }

    #[test]
    fn test_move_only_on_movable_lists() {
        let registry = builtin_registry();
        let services = registry.get("services").unwrap();
        let section = section(
            "services",
            json!({ "services": [{ "title": "A" }, { "title": "B" }] }),
        );
        let mut calls = 0;
        let mut sink = |_u: SectionUpdate| calls += 1;
        assert!(!SectionEditor::new(services, &section, &mut sink).move_item(
            "services",
            0,
            Direction::Down
        ));
        assert_eq!(calls, 0);

        let governance = registry.get("governance").unwrap();
        let section = section_with_initiatives();
        let mut sink = |_u: SectionUpdate| {};
        let mut editor = SectionEditor::new(governance, &section, &mut sink);
        assert!(editor.move_item("initiatives", 0, Direction::Down));
        assert_eq!(editor.content()["initiatives"][0]["title"], "B");
    }

    fn section_with_initiatives() -> Section {
        section(
            "governance",
            json!({ "initiatives": [
                { "id": "a", "title": "A" },
                { "id": "b", "title": "B" }
            ] }),
        )
    }

    #[test]
    fn test_stable_target_follows_item_after_reorder() {
        let registry = builtin_registry();
        let kind = registry.get("governance").unwrap();
        let section = section_with_initiatives();
        let target = RowTarget::Item {
            list: "initiatives".into(),
            index: 0,
            item_id: Some("a".into()),
            key: "title".into(),
        };
        let mut sink = |_u: SectionUpdate| {};
        let mut editor = SectionEditor::new(kind, &section, &mut sink);

        editor.move_item("initiatives", 0, Direction::Down);
        assert!(editor.set_target_stable(&target, json!("A2")));

        assert_eq!(editor.content()["initiatives"][0]["title"], "B");
        assert_eq!(editor.content()["initiatives"][1]["title"], "A2");
    }

    #[test]
    fn test_toggle_flips_resolved_value() {
        let registry = builtin_registry();
        let kind = registry.get("hero").unwrap();
        let section = Section::new("s1", "hero");
        let rows = form_rows(kind, &kind.resolve(section.content(), FallbackPolicy::Nullish));
        let show = rows.iter().find(|r| r.key == "showButton").unwrap();
        let mut sink = |_u: SectionUpdate| {};
        let mut editor = SectionEditor::new(kind, &section, &mut sink);

        assert!(editor.toggle(show));
        assert_eq!(editor.content()["showButton"], false);
    }

    #[test]
    fn test_parse_input_validates() {
        assert_eq!(parse_input(RowControl::Color, "#AbC"), Ok(json!("#abc")));
        assert!(parse_input(RowControl::Color, "red").is_err());
        assert_eq!(parse_input(RowControl::Number, "3"), Ok(json!(3)));
        assert_eq!(parse_input(RowControl::Number, "0.25"), Ok(json!(0.25)));
        assert!(parse_input(RowControl::Number, "abc").is_err());
        assert_eq!(parse_input(RowControl::Text, ""), Ok(json!("")));
        assert!(parse_input(RowControl::Heading, "x").is_err());
    }
}
