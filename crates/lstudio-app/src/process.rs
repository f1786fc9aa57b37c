//! Message processing
//!
//! Runs a message through the TEA update loop, following up messages until
//! none remain and handing actions to background tasks.

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::actions::handle_action;
use crate::handler;
use crate::media::MediaService;
use crate::message::Message;
use crate::state::AppState;

/// Process a message through the TEA update function
pub fn process_message<M>(
    state: &mut AppState,
    message: Message,
    msg_tx: &mpsc::Sender<Message>,
    media: &Arc<M>,
) where
    M: MediaService + Send + Sync + 'static,
{
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);

        if let Some(action) = result.action {
            handle_action(
                action,
                msg_tx.clone(),
                Arc::clone(media),
                Arc::clone(&state.registry),
                Arc::clone(&state.ids),
            );
        }

        // Continue with follow-up message
        msg = result.message;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::{Path, PathBuf};
    use std::time::Duration;

    use lstudio_core::{single, LayoutDocument, MediaKind, Result, Section, SequenceIdGenerator};
    use serde_json::json;
    use tempfile::tempdir;

    use crate::config::Settings;
    use crate::input_key::InputKey;

    /// Media service that hands out fixed URLs
    struct FakeMedia;

    impl MediaService for FakeMedia {
        async fn upload(&self, source: &Path, _kind: MediaKind) -> Result<String> {
            let name = source
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            Ok(format!("https://media.test/{}", name))
        }

        async fn delete(&self, _url: &str) -> Result<()> {
            Ok(())
        }
    }

    fn state(project: PathBuf, sections: Vec<Section>) -> AppState {
        AppState::new(project, Settings::default())
            .with_ids(Arc::new(SequenceIdGenerator::new("t")))
            .with_layout(LayoutDocument {
                sections,
                ..LayoutDocument::default()
            })
    }

    async fn next(rx: &mut mpsc::Receiver<Message>) -> Message {
        tokio::time::timeout(Duration::from_secs(5), rx.recv())
            .await
            .expect("timed out waiting for message")
            .expect("channel closed")
    }

    #[tokio::test]
    async fn test_save_round_trip_clears_dirty() {
        let temp = tempdir().unwrap();
        let mut state = state(
            temp.path().to_path_buf(),
            vec![Section::new("a", "hero").with_content(single("title", "T"))],
        );
        state.dirty = true;
        let (tx, mut rx) = mpsc::channel(8);
        let media = Arc::new(FakeMedia);

        process_message(&mut state, Message::Key(InputKey::CharCtrl('s')), &tx, &media);
        assert!(state.saving);

        let saved = next(&mut rx).await;
        assert!(matches!(saved, Message::LayoutSaved { .. }));
        process_message(&mut state, saved, &tx, &media);

        assert!(!state.dirty);
        assert!(!state.saving);
        let written = std::fs::read_to_string(temp.path().join("layout.json")).unwrap();
        assert!(written.contains("\"title\": \"T\""));
    }

    #[tokio::test]
    async fn test_upload_writes_url_into_item() {
        let temp = tempdir().unwrap();
        let mut state = state(
            temp.path().to_path_buf(),
            vec![Section::new("s", "services").with_content(
                json!({ "services": [{ "id": "i1", "title": "A" }] })
                    .as_object()
                    .cloned()
                    .unwrap(),
            )],
        );
        state.is_editing = true;
        state.editor.selected_row = state
            .form_rows()
            .iter()
            .position(|r| r.key == "services[0].image")
            .unwrap();
        let (tx, mut rx) = mpsc::channel(8);
        let media = Arc::new(FakeMedia);

        process_message(&mut state, Message::StartUpload, &tx, &media);
        for c in "photo.png".chars() {
            process_message(&mut state, Message::FormCharInput(c), &tx, &media);
        }
        process_message(&mut state, Message::FormCommit, &tx, &media);
        assert!(state.form_locked());

        let uploaded = next(&mut rx).await;
        process_message(&mut state, uploaded, &tx, &media);

        assert!(!state.form_locked());
        assert_eq!(
            state.layout.sections[0].content()["services"][0]["image"],
            "https://media.test/photo.png"
        );
    }

    #[tokio::test]
    async fn test_reload_missing_file_reports_failure() {
        let temp = tempdir().unwrap();
        let mut state = state(temp.path().to_path_buf(), vec![]);
        let (tx, mut rx) = mpsc::channel(8);
        let media = Arc::new(FakeMedia);

        process_message(&mut state, Message::Reload, &tx, &media);
        let reply = next(&mut rx).await;

        assert!(matches!(reply, Message::LayoutReloadFailed { .. }));
    }
}
