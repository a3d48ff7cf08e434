//! Infrastructure layer - External I/O and persistence

pub mod config;
pub mod entry_store;
pub mod kv_store;
pub mod logging;
pub mod repository;

pub use config::Config;
pub use entry_store::{EntryStore, KeyValueEntryStore, DEFAULT_STORAGE_KEY};
pub use kv_store::{FileKeyValueStore, KeyValueStore, MemoryKeyValueStore};
pub use repository::{BoardRepository, FileSystemRepository};
