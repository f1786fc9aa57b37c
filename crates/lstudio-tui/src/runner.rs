//! Main TUI runner - entry point and event loop
//!
//! Contains the application lifecycle:
//! - `run_with_project`: open a project, run the editor, restore the terminal
//! - `run_loop`: main event loop processing terminal and background messages

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use lstudio_app::message::Message;
use lstudio_app::process::process_message;
use lstudio_app::state::AppState;
use lstudio_app::{open_project, signals, LocalMediaStore};
use lstudio_core::prelude::*;
use tokio::sync::mpsc;

use super::{event, render, terminal};

/// How long quitting waits for a save that is still being written
const SAVE_GRACE: Duration = Duration::from_secs(2);

/// Run the TUI editor on a project directory
pub async fn run_with_project(project_path: &Path) -> Result<()> {
    // Load settings and the layout before touching the terminal, so load
    // errors print normally
    let mut state = open_project(project_path)?;
    info!(
        "Opened {} with {} sections",
        state.layout_path().display(),
        state.layout.sections.len()
    );

    let media = Arc::new(LocalMediaStore::new(
        state.media_dir(),
        Arc::clone(&state.ids),
    ));

    let mut term = terminal::init();

    // Unified message channel for background tasks and the signal handler
    let (msg_tx, mut msg_rx) = mpsc::channel::<Message>(256);

    // Spawn signal handler (Quit on SIGINT/SIGTERM, Reload on SIGHUP)
    signals::spawn_signal_handler(msg_tx.clone());

    let result = run_loop(&mut term, &mut state, &mut msg_rx, &msg_tx, &media);

    terminal::restore();

    if state.saving {
        finish_pending_save(&mut state, &mut msg_rx, &msg_tx, &media).await;
    }
    if state.dirty {
        warn!("Quit with unsaved changes to {}", state.layout_path().display());
    }

    result
}

/// Main event loop
fn run_loop(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    msg_rx: &mut mpsc::Receiver<Message>,
    msg_tx: &mpsc::Sender<Message>,
    media: &Arc<LocalMediaStore>,
) -> Result<()> {
    while !state.should_quit() {
        // Process background results (saves, uploads, signals)
        while let Ok(msg) = msg_rx.try_recv() {
            process_message(state, msg, msg_tx, media);
        }

        // Render
        terminal.draw(|frame| render::view(frame, state))?;

        // Handle terminal events
        if let Some(message) = event::poll()? {
            process_message(state, message, msg_tx, media);
        }
    }

    Ok(())
}

/// Wait briefly for an in-flight save so quitting right after Ctrl+S does
/// not lose it
async fn finish_pending_save(
    state: &mut AppState,
    msg_rx: &mut mpsc::Receiver<Message>,
    msg_tx: &mpsc::Sender<Message>,
    media: &Arc<LocalMediaStore>,
) {
    let deadline = tokio::time::Instant::now() + SAVE_GRACE;
    while state.saving {
        match tokio::time::timeout_at(deadline, msg_rx.recv()).await {
            Ok(Some(msg @ (Message::LayoutSaved { .. } | Message::LayoutSaveFailed { .. }))) => {
                process_message(state, msg, msg_tx, media);
            }
            Ok(Some(_)) => {}
            Ok(None) | Err(_) => {
                warn!("Save still running at exit");
                return;
            }
        }
    }
}
