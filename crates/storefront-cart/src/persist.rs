//! Background cart writer
//!
//! Mutations never wait on storage. Each one hands an encoded snapshot to
//! [`PersistHandle::save`], which queues it for a single writer task. The
//! task applies writes in the order they were issued, so the last mutation
//! is always the one left in the store.

use crate::store::KeyValueStore;
use std::sync::Arc;
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;

/// Commands processed by the writer task
#[derive(Debug)]
enum PersistCommand {
    /// Write payload under the handle's key
    Save(Vec<u8>),
    /// Acknowledge once every earlier command is done
    Flush(oneshot::Sender<()>),
}

/// Handle to a running writer task
#[derive(Debug)]
pub struct PersistHandle {
    key: String,
    sender: mpsc::UnboundedSender<PersistCommand>,
    task: JoinHandle<()>,
}

impl PersistHandle {
    /// Spawn writer for `key` on the current tokio runtime
    #[must_use]
    pub fn spawn(store: Arc<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        let key = key.into();
        let (tx, rx) = mpsc::unbounded_channel();

        let task = tokio::spawn(writer_task(store, key.clone(), rx));

        Self {
            key,
            sender: tx,
            task,
        }
    }

    /// Storage key written by this handle
    #[inline]
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Queue a payload; returns immediately
    pub fn save(&self, payload: Vec<u8>) {
        if self.sender.send(PersistCommand::Save(payload)).is_err() {
            tracing::warn!(key = %self.key, "cart writer stopped; change not persisted");
        }
    }

    /// Wait until every payload queued so far has been written (or failed)
    pub async fn flush(&self) {
        let (ack_tx, ack_rx) = oneshot::channel();
        if self.sender.send(PersistCommand::Flush(ack_tx)).is_err() {
            return;
        }
        let _ = ack_rx.await;
    }

    /// Drain outstanding writes and stop the writer
    pub async fn close(self) {
        drop(self.sender);
        if let Err(e) = self.task.await {
            tracing::warn!(key = %self.key, "cart writer ended abnormally: {}", e);
        }
    }
}

/// Writer loop (runs in its own tokio task)
async fn writer_task(
    store: Arc<dyn KeyValueStore>,
    key: String,
    mut rx: mpsc::UnboundedReceiver<PersistCommand>,
) {
    while let Some(cmd) = rx.recv().await {
        match cmd {
            PersistCommand::Save(payload) => {
                let bytes = payload.len();
                match store.set(&key, payload).await {
                    Ok(()) => tracing::debug!(key = %key, bytes, "cart persisted"),
                    Err(e) => tracing::warn!(key = %key, "failed to persist cart: {}", e),
                }
            }
            PersistCommand::Flush(ack) => {
                let _ = ack.send(());
            }
        }
    }
}
