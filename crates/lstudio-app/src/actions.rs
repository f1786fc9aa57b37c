//! Action handlers: UpdateAction dispatch and background task spawning
//!
//! Every action runs off the event loop and reports back with a message.

use std::sync::Arc;

use lstudio_core::{IdGenerator, Registry};
use tokio::sync::mpsc;
use tracing::{debug, warn};

use crate::handler::UpdateAction;
use crate::layout_store::{load_layout, save_layout};
use crate::media::MediaService;
use crate::message::Message;

/// Ids shared with background tasks
pub type SharedIds = Arc<dyn IdGenerator + Send + Sync>;

/// Execute an action by spawning a background task
pub fn handle_action<M>(
    action: UpdateAction,
    msg_tx: mpsc::Sender<Message>,
    media: Arc<M>,
    registry: Arc<Registry>,
    ids: SharedIds,
) where
    M: MediaService + Send + Sync + 'static,
{
    match action {
        UpdateAction::SaveLayout {
            path,
            document,
            revision,
        } => {
            tokio::task::spawn_blocking(move || {
                let msg = match save_layout(&path, &document) {
                    Ok(()) => Message::LayoutSaved { path, revision },
                    Err(e) => Message::LayoutSaveFailed {
                        error: e.to_string(),
                    },
                };
                send_blocking(&msg_tx, msg);
            });
        }

        UpdateAction::ReloadLayout { path } => {
            tokio::task::spawn_blocking(move || {
                let msg = match load_layout(&path, &registry, &*ids) {
                    Ok(normalized) => Message::LayoutReloaded {
                        document: normalized.document,
                        upgraded: normalized.upgraded,
                    },
                    Err(e) => Message::LayoutReloadFailed {
                        error: e.to_string(),
                    },
                };
                send_blocking(&msg_tx, msg);
            });
        }

        UpdateAction::UploadMedia { target, source } => {
            tokio::spawn(async move {
                let msg = match media.upload(&source, target.kind).await {
                    Ok(url) => Message::MediaUploaded { target, url },
                    Err(e) => Message::MediaUploadFailed {
                        section_id: target.section_id,
                        error: e.to_string(),
                    },
                };
                if msg_tx.send(msg).await.is_err() {
                    debug!("Upload finished after the event loop stopped");
                }
            });
        }

        UpdateAction::DeleteMedia { url } => {
            tokio::spawn(async move {
                let msg = match media.delete(&url).await {
                    Ok(()) => Message::MediaDeleted { url },
                    Err(e) => Message::MediaDeleteFailed {
                        url,
                        error: e.to_string(),
                    },
                };
                if msg_tx.send(msg).await.is_err() {
                    debug!("Delete finished after the event loop stopped");
                }
            });
        }
    }
}

fn send_blocking(msg_tx: &mpsc::Sender<Message>, msg: Message) {
    if msg_tx.blocking_send(msg).is_err() {
        warn!("Event loop stopped before a background result arrived");
    }
}
