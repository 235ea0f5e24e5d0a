//! Persistence: key-value backends, storage adapter, write-through sync

mod adapter;
mod backend;
mod sync;

pub use adapter::{STORAGE_KEY, StorageAdapter, StorageHealth};
pub use backend::{FileBackend, KeyValueBackend, MemoryBackend};
pub use sync::PersistenceSync;
