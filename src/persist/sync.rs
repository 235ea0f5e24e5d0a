//! Persistence synchronizer
//!
//! Subscribes to store snapshots and writes them through the adapter on a
//! later scheduler turn, so mutating callers never block on I/O. The watch
//! channel holds only the latest snapshot: a burst of mutations before the
//! task wakes collapses into a single write. Write faults are absorbed by
//! the adapter's own contract and never reach the store.

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::domain::Task;

use super::adapter::StorageAdapter;
use super::backend::KeyValueBackend;

/// Handle to the background write-through task; dropping it stops the task
pub struct PersistenceSync {
    handle: JoinHandle<()>,
}

impl PersistenceSync {
    /// Spawn the write-through task for the given snapshot subscription
    pub fn spawn<B>(adapter: StorageAdapter<B>, mut rx: watch::Receiver<Vec<Task>>) -> Self
    where
        B: KeyValueBackend,
    {
        let handle = tokio::spawn(async move {
            debug!("persistence sync started");
            while rx.changed().await.is_ok() {
                let snapshot = rx.borrow_and_update().clone();
                debug!(count = snapshot.len(), "writing snapshot through");
                adapter.save_all(&snapshot);
            }
            debug!("persistence sync stopped");
        });
        Self { handle }
    }

    /// Whether the background task is still running
    pub fn is_running(&self) -> bool {
        !self.handle.is_finished()
    }
}

impl Drop for PersistenceSync {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
