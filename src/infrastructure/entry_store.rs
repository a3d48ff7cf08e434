//! Entry list persistence on top of a key-value store

use crate::domain::Entry;
use crate::error::Result;
use crate::infrastructure::kv_store::{validate_key, KeyValueStore};

/// Default key the entry list is stored under
pub const DEFAULT_STORAGE_KEY: &str = "news";

/// Load/save capability for the whole entry list
pub trait EntryStore {
    /// Read the persisted list.
    ///
    /// Absent or unparseable data yields an empty list; only failures of the
    /// underlying storage are errors.
    fn load(&self) -> Result<Vec<Entry>>;

    /// Persist the full list, replacing the previous snapshot
    fn save(&self, entries: &[Entry]) -> Result<()>;
}

/// Keeps the list as a JSON array at a fixed key
#[derive(Debug, Clone)]
pub struct KeyValueEntryStore<K> {
    store: K,
    key: String,
}

impl<K: KeyValueStore> KeyValueEntryStore<K> {
    /// Use the default `news` key
    pub fn new(store: K) -> Self {
        KeyValueEntryStore {
            store,
            key: DEFAULT_STORAGE_KEY.to_string(),
        }
    }

    pub fn with_key(store: K, key: &str) -> Result<Self> {
        validate_key(key)?;
        Ok(KeyValueEntryStore {
            store,
            key: key.to_string(),
        })
    }
}

impl<K: KeyValueStore> EntryStore for KeyValueEntryStore<K> {
    fn load(&self) -> Result<Vec<Entry>> {
        let Some(raw) = self.store.get(&self.key)? else {
            log::info!("no stored entries under key '{}'", self.key);
            return Ok(Vec::new());
        };

        match serde_json::from_str::<Vec<Entry>>(&raw) {
            Ok(entries) => {
                log::info!(
                    "loaded {} entries from key '{}'",
                    entries.len(),
                    self.key
                );
                Ok(entries)
            }
            Err(e) => {
                log::warn!(
                    "ignoring malformed entry data under key '{}': {}",
                    self.key,
                    e
                );
                Ok(Vec::new())
            }
        }
    }

    fn save(&self, entries: &[Entry]) -> Result<()> {
        let serialized = serde_json::to_string(entries)?;
        self.store.set(&self.key, &serialized)?;
        log::debug!("saved {} entries to key '{}'", entries.len(), self.key);
        Ok(())
    }
}
