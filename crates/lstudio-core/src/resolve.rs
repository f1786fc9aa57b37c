//! Default-merge resolution
//!
//! A rendered field's effective value is chosen per field as
//! `content[key]` unless it is missing, else the section's default. Nested
//! records are resolved recursively so a partially specified nested record
//! keeps its sibling defaults.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::content::Content;

/// What counts as "missing" when falling back to a default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FallbackPolicy {
    /// Only absent and `null` fall back. `""`, `0` and `false` are kept.
    #[default]
    Nullish,
    /// Absent, `null`, `""`, `0` and `false` all fall back.
    Falsy,
}

impl FallbackPolicy {
    pub fn is_missing(self, value: Option<&Value>) -> bool {
        match value {
            None | Some(Value::Null) => true,
            Some(v) => match self {
                FallbackPolicy::Nullish => false,
                FallbackPolicy::Falsy => is_falsy(v),
            },
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FallbackPolicy::Nullish => "nullish",
            FallbackPolicy::Falsy => "falsy",
        }
    }
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}

/// Resolve every declared field of `defaults` against `content`.
///
/// Keys present only in `content` pass through unchanged.
pub fn resolve(content: &Content, defaults: &Content, policy: FallbackPolicy) -> Content {
    let mut resolved = Content::new();

    for (key, default) in defaults {
        let value = content.get(key);
        let effective = match (value, default) {
            (Some(Value::Object(inner)), Value::Object(nested_defaults)) => {
                Value::Object(resolve(inner, nested_defaults, policy))
            }
            (Some(v), _) if !policy.is_missing(Some(v)) => v.clone(),
            _ => default.clone(),
        };
        resolved.insert(key.clone(), effective);
    }

    for (key, value) in content {
        if !defaults.contains_key(key) {
            resolved.insert(key.clone(), value.clone());
        }
    }

    resolved
}

/// Read-only view over resolved content.
///
/// Accessors never fail: a value of the wrong shape reads as empty.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Resolved(Content);

impl Resolved {
    pub fn new(content: &Content, defaults: &Content, policy: FallbackPolicy) -> Self {
        Self(resolve(content, defaults, policy))
    }

    pub fn from_content(content: Content) -> Self {
        Self(content)
    }

    pub fn as_content(&self) -> &Content {
        &self.0
    }

    pub fn into_content(self) -> Content {
        self.0
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Text view of a field. Numbers and booleans are printed, anything else
    /// reads as an empty string.
    pub fn text(&self, key: &str) -> Cow<'_, str> {
        match self.0.get(key) {
            Some(Value::String(s)) => Cow::Borrowed(s.as_str()),
            Some(Value::Number(n)) => Cow::Owned(n.to_string()),
            Some(Value::Bool(b)) => Cow::Owned(b.to_string()),
            _ => Cow::Borrowed(""),
        }
    }

    pub fn number(&self, key: &str) -> Option<f64> {
        match self.0.get(key) {
            Some(Value::Number(n)) => n.as_f64(),
            Some(Value::String(s)) => s.trim().parse().ok(),
            _ => None,
        }
    }

    pub fn flag(&self, key: &str) -> bool {
        matches!(self.0.get(key), Some(Value::Bool(true)))
    }

    /// Nested record; a non-object value reads as empty.
    pub fn nested(&self, key: &str) -> Resolved {
        match self.0.get(key) {
            Some(Value::Object(map)) => Resolved(map.clone()),
            _ => Resolved::default(),
        }
    }

    /// Items of a list field. A non-array value reads as an empty list and
    /// non-object entries are skipped.
    pub fn items(&self, key: &str) -> Vec<Resolved> {
        match self.0.get(key) {
            Some(Value::Array(items)) => items
                .iter()
                .filter_map(Value::as_object)
                .map(|item| Resolved(item.clone()))
                .collect(),
            Some(other) => {
                tracing::trace!("List field '{}' is not an array: {}", key, other);
                Vec::new()
            }
            None => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn obj(value: Value) -> Content {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    fn hero_defaults() -> Content {
        obj(json!({
            "title": "Welcome",
            "subtitle": "Build with us",
            "opacity": 0.6,
            "showButton": true,
            "contactInfo": { "phone": "+1 555 0100", "email": "hello@example.com" }
        }))
    }

    #[test]
    fn test_empty_content_resolves_to_defaults() {
        let resolved = resolve(&Content::new(), &hero_defaults(), FallbackPolicy::Nullish);
        assert_eq!(resolved, hero_defaults());
    }

    #[test]
    fn test_present_values_win() {
        let content = obj(json!({ "title": "Ours", "opacity": 0.2 }));
        let resolved = resolve(&content, &hero_defaults(), FallbackPolicy::Nullish);
        assert_eq!(resolved["title"], "Ours");
        assert_eq!(resolved["opacity"], 0.2);
        assert_eq!(resolved["subtitle"], "Build with us");
    }

    #[test]
    fn test_nullish_keeps_falsy_values() {
        let content = obj(json!({ "title": "", "opacity": 0, "showButton": false }));
        let resolved = resolve(&content, &hero_defaults(), FallbackPolicy::Nullish);
        assert_eq!(resolved["title"], "");
        assert_eq!(resolved["opacity"], 0);
        assert_eq!(resolved["showButton"], false);
    }

    #[test]
    fn test_null_falls_back_under_both_policies() {
        let content = obj(json!({ "title": null }));
        for policy in [FallbackPolicy::Nullish, FallbackPolicy::Falsy] {
            let resolved = resolve(&content, &hero_defaults(), policy);
            assert_eq!(resolved["title"], "Welcome");
        }
    }

    #[test]
    fn test_falsy_policy_replaces_falsy_values() {
        let content = obj(json!({ "title": "", "opacity": 0, "showButton": false }));
        let resolved = resolve(&content, &hero_defaults(), FallbackPolicy::Falsy);
        assert_eq!(resolved["title"], "Welcome");
        assert_eq!(resolved["opacity"], 0.6);
        assert_eq!(resolved["showButton"], true);
    }

    #[test]
    fn test_partial_nested_record_keeps_sibling_defaults() {
        let content = obj(json!({ "contactInfo": { "phone": "x" } }));
        let resolved = resolve(&content, &hero_defaults(), FallbackPolicy::Nullish);
        assert_eq!(resolved["contactInfo"]["phone"], "x");
        assert_eq!(resolved["contactInfo"]["email"], "hello@example.com");
    }

    #[test]
    fn test_undeclared_keys_pass_through() {
        let content = obj(json!({ "legacyBadge": "new" }));
        let resolved = resolve(&content, &hero_defaults(), FallbackPolicy::Nullish);
        assert_eq!(resolved["legacyBadge"], "new");
    }

    #[test]
    fn test_every_declared_field_is_total() {
        let defaults = hero_defaults();
        let variants = [
            json!({}),
            json!({ "title": null, "subtitle": null }),
            json!({ "title": "T", "subtitle": "S", "opacity": 1, "showButton": false,
                    "contactInfo": { "phone": "p", "email": "e" } }),
        ];
        for variant in variants {
            let content = obj(variant);
            let resolved = resolve(&content, &defaults, FallbackPolicy::Nullish);
            for (key, default) in &defaults {
                match content.get(key) {
                    Some(Value::Null) | None => assert_eq!(&resolved[key], default),
                    Some(Value::Object(_)) => assert!(resolved[key].is_object()),
                    Some(v) => assert_eq!(&resolved[key], v),
                }
            }
        }
    }

    #[test]
    fn test_accessors_read_wrong_shapes_as_empty() {
        let resolved = Resolved::from_content(obj(json!({
            "title": 42,
            "items": "not a list",
            "contact": [1, 2],
            "flag": "yes"
        })));
        assert_eq!(resolved.text("title"), "42");
        assert!(resolved.items("items").is_empty());
        assert!(resolved.nested("contact").as_content().is_empty());
        assert!(!resolved.flag("flag"));
        assert_eq!(resolved.text("missing"), "");
    }

    #[test]
    fn test_items_skip_non_object_entries() {
        let resolved = Resolved::from_content(obj(json!({
            "items": [{ "title": "A" }, "junk", 3, { "title": "B" }]
        })));
        let items = resolved.items("items");
        assert_eq!(items.len(), 2);
        assert_eq!(items[1].text("title"), "B");
    }

    #[test]
    fn test_number_accepts_numeric_strings() {
        let resolved = Resolved::from_content(obj(json!({ "a": "12.5", "b": 3, "c": "x" })));
        assert_eq!(resolved.number("a"), Some(12.5));
        assert_eq!(resolved.number("b"), Some(3.0));
        assert_eq!(resolved.number("c"), None);
    }
}
