//! Debounced auto-save
//!
//! [`AutoSaver`] owns a background tokio task fed through an unbounded
//! channel. Every snapshot restarts the quiet period; once `debounce` passes
//! without a new snapshot, only the most recent one is written to the
//! [`Store`]. Closing the saver flushes a pending snapshot before the task
//! ends.

use crate::areas::store::Store;
use anyhow::Context;
use derive_new::new;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Quiet period used when none is configured.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(500);

/// Raw (untrimmed) old and new text as last seen by the caller.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct Snapshot {
    old: String,
    new: String,
}

pub struct AutoSaver {
    sender: mpsc::UnboundedSender<Snapshot>,
    handle: JoinHandle<usize>,
}

impl AutoSaver {
    /// Spawns the saver task on the current tokio runtime.
    pub fn spawn(store: Store, debounce: Duration) -> Self {
        let (sender, receiver) = mpsc::unbounded_channel();
        let handle = tokio::spawn(run(store, debounce, receiver));

        AutoSaver { sender, handle }
    }

    pub fn submit(&self, old: impl Into<String>, new: impl Into<String>) -> anyhow::Result<()> {
        self.sender
            .send(Snapshot::new(old.into(), new.into()))
            .map_err(|_| anyhow::anyhow!("auto-save task is no longer running"))
    }

    /// Flushes any pending snapshot and returns how many writes were made.
    pub async fn shutdown(self) -> anyhow::Result<usize> {
        drop(self.sender);
        self.handle.await.context("auto-save task failed")
    }
}

async fn run(
    store: Store,
    debounce: Duration,
    mut receiver: mpsc::UnboundedReceiver<Snapshot>,
) -> usize {
    let mut writes = 0;

    while let Some(mut latest) = receiver.recv().await {
        loop {
            tokio::select! {
                next = receiver.recv() => match next {
                    Some(snapshot) => latest = snapshot,
                    None => break,
                },
                _ = tokio::time::sleep(debounce) => break,
            }
        }

        match store.set_pair(&latest.old, &latest.new) {
            Ok(()) => writes += 1,
            Err(err) => log::warn!("auto-save failed: {:#}", err),
        }
    }

    log::debug!("auto-save task finished after {} writes", writes);
    writes
}
