//! Application error types with rich context

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Application error types organized by layer/domain
#[derive(Debug, Error)]
pub enum Error {
    // ─────────────────────────────────────────────────────────────
    // Common/Infrastructure Errors
    // ─────────────────────────────────────────────────────────────
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    // ─────────────────────────────────────────────────────────────
    // Terminal/TUI Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Terminal error: {message}")]
    Terminal { message: String },

    // ─────────────────────────────────────────────────────────────
    // Layout Document Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Layout file not found: {path}")]
    LayoutNotFound { path: PathBuf },

    #[error("Failed to parse layout {path}: {message}")]
    LayoutParse { path: PathBuf, message: String },

    #[error("Failed to save layout {path}: {message}")]
    LayoutSave { path: PathBuf, message: String },

    // ─────────────────────────────────────────────────────────────
    // Media Errors
    // ─────────────────────────────────────────────────────────────
    #[error("{message}")]
    Media { message: String },

    #[error("Unsupported media file: {path}")]
    UnsupportedMedia { path: PathBuf },
}

// ─────────────────────────────────────────────────────────────────
// Convenience Constructors
// ─────────────────────────────────────────────────────────────────

impl Error {
    pub fn terminal(message: impl Into<String>) -> Self {
        Self::Terminal {
            message: message.into(),
        }
    }

    pub fn layout_parse(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::LayoutParse {
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn layout_save(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::LayoutSave {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a [`Error::Media`] error carrying a human-readable message.
    pub fn media(message: impl Into<String>) -> Self {
        Self::Media {
            message: message.into(),
        }
    }

    pub fn unsupported_media(path: impl Into<PathBuf>) -> Self {
        Self::UnsupportedMedia { path: path.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_messages() {
        let err = Error::media("Upload rejected: file too large");
        assert_eq!(err.to_string(), "Upload rejected: file too large");

        let err = Error::unsupported_media("/tmp/clip.avi");
        assert!(err.to_string().contains("clip.avi"));
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_error_from_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("{oops").unwrap_err();
        let err: Error = json_err.into();
        assert!(matches!(err, Error::Json(_)));
    }

    #[test]
    fn test_layout_errors_mention_path() {
        let err = Error::layout_parse("/work/layout.json", "expected value");
        assert!(err.to_string().contains("/work/layout.json"));
        assert!(err.to_string().contains("expected value"));

        let err = Error::LayoutNotFound {
            path: PathBuf::from("/work/missing.json"),
        };
        assert!(err.to_string().contains("/work/missing.json"));
    }
}
