//! OS signal handling: shutdown and layout reload

use tokio::sync::mpsc;

use lstudio_core::prelude::*;

use crate::message::Message;

/// Signal the editor reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Received {
    Shutdown,
    Reload,
}

impl Received {
    fn message(self) -> Message {
        match self {
            Received::Shutdown => Message::Quit,
            Received::Reload => Message::Reload,
        }
    }
}

/// Spawn a task that turns OS signals into messages.
///
/// SIGINT and SIGTERM quit; SIGHUP re-reads the layout file (unix only).
pub fn spawn_signal_handler(tx: mpsc::Sender<Message>) {
    tokio::spawn(async move {
        loop {
            let received = match wait_for_signal().await {
                Ok(received) => received,
                Err(e) => {
                    error!("Signal handler error: {}", e);
                    return;
                }
            };

            info!("Received {:?} signal", received);
            if tx.send(received.message()).await.is_err() || received == Received::Shutdown {
                return;
            }
        }
    });
}

#[cfg(unix)]
async fn wait_for_signal() -> Result<Received> {
    use tokio::signal::unix::{signal, SignalKind};

    let listen = |kind: SignalKind, name: &str| {
        signal(kind).map_err(|e| Error::terminal(format!("Failed to create {} handler: {}", name, e)))
    };
    let mut sigint = listen(SignalKind::interrupt(), "SIGINT")?;
    let mut sigterm = listen(SignalKind::terminate(), "SIGTERM")?;
    let mut sighup = listen(SignalKind::hangup(), "SIGHUP")?;

    let received = tokio::select! {
        _ = sigint.recv() => Received::Shutdown,
        _ = sigterm.recv() => Received::Shutdown,
        _ = sighup.recv() => Received::Reload,
    };
    Ok(received)
}

#[cfg(windows)]
async fn wait_for_signal() -> Result<Received> {
    tokio::signal::ctrl_c()
        .await
        .map_err(|e| Error::terminal(format!("Failed to listen for Ctrl+C: {}", e)))?;
    Ok(Received::Shutdown)
}
