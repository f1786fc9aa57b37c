//! Configuration types for Layout Studio
//!
//! Defines:
//! - `Settings` - Project settings from `.lstudio/config.toml`
//! - `EditorSettings`, `MediaSettings`, `UiSettings` - Per-table settings

use std::path::{Path, PathBuf};

use lstudio_core::FallbackPolicy;
use serde::{Deserialize, Serialize};

/// Project settings (`.lstudio/config.toml`)
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub editor: EditorSettings,

    #[serde(default)]
    pub media: MediaSettings,

    #[serde(default)]
    pub ui: UiSettings,
}

impl Settings {
    /// Layout file path for a project
    pub fn layout_path(&self, project_path: &Path) -> PathBuf {
        project_path.join(&self.editor.layout_file)
    }

    /// Media directory for a project
    pub fn media_dir(&self, project_path: &Path) -> PathBuf {
        project_path.join(&self.media.dir)
    }
}

/// Editing behaviour
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct EditorSettings {
    /// Which values fall back to a section's defaults
    #[serde(default)]
    pub fallback: FallbackPolicy,

    /// Layout document, relative to the project directory
    #[serde(default = "default_layout_file")]
    pub layout_file: PathBuf,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            fallback: FallbackPolicy::default(),
            layout_file: default_layout_file(),
        }
    }
}

fn default_layout_file() -> PathBuf {
    PathBuf::from("layout.json")
}

/// Local media store
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct MediaSettings {
    /// Directory uploaded files are copied into, relative to the project
    #[serde(default = "default_media_dir")]
    pub dir: PathBuf,
}

impl Default for MediaSettings {
    fn default() -> Self {
        Self {
            dir: default_media_dir(),
        }
    }
}

fn default_media_dir() -> PathBuf {
    PathBuf::from(".lstudio/media")
}

/// Display options
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct UiSettings {
    /// Show raw content keys next to form labels
    #[serde(default)]
    pub show_field_keys: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_gives_defaults() {
        let settings: Settings = toml::from_str("").unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.editor.fallback, FallbackPolicy::Nullish);
        assert_eq!(settings.editor.layout_file, PathBuf::from("layout.json"));
    }

    #[test]
    fn test_partial_toml() {
        let settings: Settings = toml::from_str(
            r#"
[editor]
fallback = "falsy"

[ui]
show_field_keys = true
"#,
        )
        .unwrap();
        assert_eq!(settings.editor.fallback, FallbackPolicy::Falsy);
        assert_eq!(settings.editor.layout_file, PathBuf::from("layout.json"));
        assert_eq!(settings.media.dir, PathBuf::from(".lstudio/media"));
        assert!(settings.ui.show_field_keys);
    }

    #[test]
    fn test_paths_are_project_relative() {
        let settings = Settings::default();
        let project = Path::new("/tmp/site");
        assert_eq!(settings.layout_path(project), project.join("layout.json"));
        assert_eq!(settings.media_dir(project), project.join(".lstudio/media"));
    }
}
