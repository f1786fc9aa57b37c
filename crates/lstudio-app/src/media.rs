//! Media storage for image and video rows
//!
//! This module provides the MediaService trait used by the event loop to
//! upload and delete media files. Uploads are copied into the project's
//! media directory and referenced by `file://` URL.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use lstudio_core::{Error, IdGenerator, MediaKind, Result};
use tracing::debug;
use url::Url;

/// Upload and deletion of media files
#[trait_variant::make(MediaService: Send)]
pub trait LocalMediaService {
    /// Store `source` and return the URL content should reference it by
    async fn upload(&self, source: &Path, kind: MediaKind) -> Result<String>;

    /// Remove a file previously returned by `upload`.
    ///
    /// URLs this store did not hand out are left alone.
    async fn delete(&self, url: &str) -> Result<()>;
}

/// Media store backed by a local directory
pub struct LocalMediaStore {
    dir: PathBuf,
    ids: Arc<dyn IdGenerator + Send + Sync>,
}

impl LocalMediaStore {
    pub fn new(dir: impl Into<PathBuf>, ids: Arc<dyn IdGenerator + Send + Sync>) -> Self {
        Self {
            dir: dir.into(),
            ids,
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File name for a stored copy: a fresh id plus the source's own name,
    /// restricted to characters safe in a URL path.
    fn stored_name(&self, source: &Path, extension: &str) -> String {
        let stem: String = source
            .file_stem()
            .map(|s| s.to_string_lossy())
            .unwrap_or_default()
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                    c.to_ascii_lowercase()
                } else {
                    '-'
                }
            })
            .collect();
        format!("{}-{}.{}", self.ids.next_id(), stem, extension.to_ascii_lowercase())
    }
}

impl MediaService for LocalMediaStore {
    async fn upload(&self, source: &Path, kind: MediaKind) -> Result<String> {
        let extension = source
            .extension()
            .and_then(|ext| ext.to_str())
            .filter(|ext| kind.accepts(ext))
            .ok_or_else(|| Error::unsupported_media(source))?;

        let metadata = tokio::fs::metadata(source).await.map_err(|e| {
            Error::media(format!("Cannot read {}: {}", source.display(), e))
        })?;
        if !metadata.is_file() {
            return Err(Error::media(format!("{} is not a file", source.display())));
        }

        let dir = std::path::absolute(&self.dir)?;
        tokio::fs::create_dir_all(&dir).await?;

        let dest = dir.join(self.stored_name(source, extension));
        tokio::fs::copy(source, &dest).await?;
        debug!("Copied {} to {}", source.display(), dest.display());

        let url = Url::from_file_path(&dest)
            .map_err(|_| Error::media(format!("Cannot build a URL for {}", dest.display())))?;
        Ok(url.to_string())
    }

    async fn delete(&self, url: &str) -> Result<()> {
        let Some(path) = Url::parse(url)
            .ok()
            .filter(|url| url.scheme() == "file")
            .and_then(|url| url.to_file_path().ok())
        else {
            debug!("Not a stored file, leaving {} alone", url);
            return Ok(());
        };

        let dir = std::path::absolute(&self.dir)?;
        if !path.starts_with(&dir) {
            debug!("{} is outside the media directory, leaving it alone", path.display());
            return Ok(());
        }

        match tokio::fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;
    use std::sync::Arc;

    use super::{LocalMediaStore, MediaService};
    use lstudio_core::{Error, MediaKind, SequenceIdGenerator};
    use url::Url;
    use tempfile::tempdir;

    fn store(dir: &Path) -> LocalMediaStore {
        LocalMediaStore::new(dir.join("media"), Arc::new(SequenceIdGenerator::new("m")))
    }

    #[tokio::test]
    async fn test_upload_copies_into_media_dir() {
        let temp = tempdir().unwrap();
        let source = temp.path().join("Team Photo.PNG");
        std::fs::write(&source, b"png").unwrap();
        let store = store(temp.path());

        let url = store.upload(&source, MediaKind::Image).await.unwrap();

        assert!(url.starts_with("file://"));
        assert!(url.ends_with("m-1-team-photo.png"));
        let stored = Url::parse(&url).unwrap().to_file_path().unwrap();
        assert_eq!(std::fs::read(stored).unwrap(), b"png");
    }

    #[tokio::test]
    async fn test_upload_rejects_wrong_kind() {
        let temp = tempdir().unwrap();
        let source = temp.path().join("clip.mp4");
        std::fs::write(&source, b"mp4").unwrap();

        let result = store(temp.path()).upload(&source, MediaKind::Image).await;

        assert!(matches!(result, Err(Error::UnsupportedMedia { .. })));
    }

    #[tokio::test]
    async fn test_upload_missing_file_is_media_error() {
        let temp = tempdir().unwrap();
        let result = store(temp.path())
            .upload(&temp.path().join("nope.png"), MediaKind::Image)
            .await;

        assert!(matches!(result, Err(Error::Media { .. })));
    }

    #[tokio::test]
    async fn test_delete_removes_stored_file() {
        let temp = tempdir().unwrap();
        let source = temp.path().join("a.jpg");
        std::fs::write(&source, b"jpg").unwrap();
        let store = store(temp.path());
        let url = store.upload(&source, MediaKind::Image).await.unwrap();
        let stored = Url::parse(&url).unwrap().to_file_path().unwrap();

        store.delete(&url).await.unwrap();

        assert!(!stored.exists());
        // Second delete is a no-op
        store.delete(&url).await.unwrap();
    }

    #[tokio::test]
    async fn test_delete_ignores_foreign_urls() {
        let temp = tempdir().unwrap();
        let outside = temp.path().join("keep.png");
        std::fs::write(&outside, b"x").unwrap();
        let store = store(temp.path());

        store.delete("https://cdn.example.com/a.png").await.unwrap();
        store
            .delete(Url::from_file_path(&outside).unwrap().as_str())
            .await
            .unwrap();

        assert!(outside.exists());
    }
}
