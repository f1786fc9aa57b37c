//! Update dispatch
//!
//! Every section edit goes through [`dispatch`]: the patch is shallow-merged
//! into the current content and the full merged record is handed to the
//! parent's [`OnUpdate`] sink, exactly once per call.

use serde_json::Value;

use crate::content::{Content, SectionUpdate};

/// The parent-supplied update channel of a section.
pub trait OnUpdate {
    fn on_update(&mut self, update: SectionUpdate);
}

impl<F> OnUpdate for F
where
    F: FnMut(SectionUpdate),
{
    fn on_update(&mut self, update: SectionUpdate) {
        self(update)
    }
}

/// Shallow merge: keys of `patch` replace keys of `current`, nothing else
/// changes. Nested objects in the patch replace wholesale.
pub fn merge_patch(current: &Content, patch: Content) -> Content {
    let mut merged = current.clone();
    for (key, value) in patch {
        merged.insert(key, value);
    }
    merged
}

/// Merge `patch` into `current` and send the result to `sink`.
///
/// Returns the merged content so callers chaining several edits in one
/// event can keep working on the up-to-date record.
pub fn dispatch<S>(current: &Content, patch: Content, sink: &mut S) -> Content
where
    S: OnUpdate + ?Sized,
{
    tracing::debug!(
        "Dispatching content update: {:?}",
        patch.keys().collect::<Vec<_>>()
    );
    let merged = merge_patch(current, patch);
    sink.on_update(SectionUpdate::content(merged.clone()));
    merged
}

/// Build a patch that updates keys of a nested record one level down.
///
/// Reads the current nested object (a non-object reads as empty), merges
/// `patch` into it and packages the result under `field`, ready for
/// [`dispatch`].
pub fn nested_patch(current: &Content, field: &str, patch: Content) -> Content {
    let base = current
        .get(field)
        .and_then(Value::as_object)
        .cloned()
        .unwrap_or_default();
    let mut out = Content::new();
    out.insert(field.to_string(), Value::Object(merge_patch(&base, patch)));
    out
}
