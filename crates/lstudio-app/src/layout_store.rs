//! Layout file loading and saving

use std::path::Path;

use lstudio_core::prelude::*;
use lstudio_core::{normalize_document, IdGenerator, LayoutDocument, Normalized, RawLayout, Registry};

/// Read and normalize the layout file at `path`.
///
/// Returns [`Error::LayoutNotFound`] when the file doesn't exist, so callers
/// can decide whether a missing layout means "start empty".
pub fn load_layout(path: &Path, registry: &Registry, ids: &dyn IdGenerator) -> Result<Normalized> {
    let text = match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(Error::LayoutNotFound {
                path: path.to_path_buf(),
            })
        }
        Err(e) => return Err(e.into()),
    };

    let raw: RawLayout =
        serde_json::from_str(&text).map_err(|e| Error::layout_parse(path, e.to_string()))?;
    let normalized = normalize_document(raw, registry, ids);

    if normalized.is_upgraded() {
        info!(
            "Upgraded {} sections of {:?} from an older shape",
            normalized.upgraded, path
        );
    }
    debug!(
        "Loaded {} sections from {:?}",
        normalized.document.sections.len(),
        path
    );
    Ok(normalized)
}

/// [`load_layout`] that treats a missing file as an empty layout
pub fn load_or_default(
    path: &Path,
    registry: &Registry,
    ids: &dyn IdGenerator,
) -> Result<Normalized> {
    match load_layout(path, registry, ids) {
        Err(Error::LayoutNotFound { .. }) => {
            debug!("No layout at {:?}, starting empty", path);
            Ok(Normalized {
                document: LayoutDocument::default(),
                upgraded: 0,
            })
        }
        other => other,
    }
}

/// Write the layout as pretty JSON
pub fn save_layout(path: &Path, document: &LayoutDocument) -> Result<()> {
    let dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(dir).map_err(|e| Error::layout_save(path, e.to_string()))?;

    let mut content =
        serde_json::to_string_pretty(document).map_err(|e| Error::layout_save(path, e.to_string()))?;
    content.push('\n');

    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "layout.json".to_string());
    let temp_path = dir.join(format!(".{}.tmp", file_name));

    // Write to temp, then rename
    std::fs::write(&temp_path, &content).map_err(|e| Error::layout_save(path, e.to_string()))?;
    std::fs::rename(&temp_path, path).map_err(|e| Error::layout_save(path, e.to_string()))?;

    info!("Saved layout to {:?}", path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sections::builtin_registry;
    use lstudio_core::{single, Section, SequenceIdGenerator};
    use serde_json::json;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_is_not_found() {
        let temp = tempdir().unwrap();
        let ids = SequenceIdGenerator::new("s");
        let result = load_layout(&temp.path().join("layout.json"), &builtin_registry(), &ids);
        assert!(matches!(result, Err(Error::LayoutNotFound { .. })));

        let empty =
            load_or_default(&temp.path().join("layout.json"), &builtin_registry(), &ids).unwrap();
        assert!(empty.document.sections.is_empty());
    }

    #[test]
    fn test_invalid_json_is_parse_error() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("layout.json");
        std::fs::write(&path, "{ not json").unwrap();

        let result = load_layout(&path, &builtin_registry(), &SequenceIdGenerator::new("s"));

        assert!(matches!(result, Err(Error::LayoutParse { .. })));
    }

    #[test]
    fn test_save_then_load_keeps_sections() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("site").join("layout.json");
        let document = LayoutDocument {
            sections: vec![Section::new("a", "hero").with_content(single("title", "Hi"))],
            ..LayoutDocument::default()
        };

        save_layout(&path, &document).unwrap();
        let loaded =
            load_layout(&path, &builtin_registry(), &SequenceIdGenerator::new("s")).unwrap();

        assert_eq!(loaded.document, document);
        assert!(!loaded.is_upgraded());
        assert!(!temp.path().join("site").join(".layout.json.tmp").exists());
    }

    #[test]
    fn test_bare_legacy_array_is_upgraded() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("layout.json");
        let legacy = json!([
            { "type": "stats", "content": { "stats": { "1": { "label": "C" }, "0": { "label": "B" } } } },
            { "type": "services", "content": [{ "title": "Audit" }] }
        ]);
        std::fs::write(&path, legacy.to_string()).unwrap();

        let loaded =
            load_layout(&path, &builtin_registry(), &SequenceIdGenerator::new("s")).unwrap();

        assert!(loaded.is_upgraded());
        let stats = &loaded.document.sections[0];
        assert!(!stats.id.is_empty());
        assert_eq!(stats.content()["stats"][0]["label"], "B");
        assert_eq!(stats.content()["stats"][1]["label"], "C");
        assert!(stats.content()["stats"][0]["id"].is_string());

        let services = &loaded.document.sections[1];
        assert_eq!(services.content()["services"][0]["title"], "Audit");
    }
}
