//! Ordered entry list, newest first

use crate::domain::entry::{Draft, Entry, EntryId};

/// In-memory list of entries in display order.
///
/// New entries are prepended, so the first element is always the newest.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryList {
    entries: Vec<Entry>,
}

impl EntryList {
    pub fn new() -> Self {
        EntryList::default()
    }

    pub fn from_entries(entries: Vec<Entry>) -> Self {
        EntryList { entries }
    }

    pub fn as_slice(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, id: EntryId) -> Option<&Entry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Largest id present, used to seed id generation after a load
    pub fn max_id(&self) -> Option<EntryId> {
        self.entries.iter().map(|e| e.id).max()
    }

    /// Insert a new entry at the front
    pub fn prepend(&mut self, entry: Entry) {
        self.entries.insert(0, entry);
    }

    /// Replace title/text of the entry with `id` in place.
    /// Returns `None` and leaves the list untouched when no entry matches.
    pub fn update(&mut self, id: EntryId, draft: Draft) -> Option<&Entry> {
        let entry = self.entries.iter_mut().find(|e| e.id == id)?;
        entry.apply(draft);
        Some(entry)
    }

    /// Remove the entry with `id`, if any
    pub fn remove(&mut self, id: EntryId) -> Option<Entry> {
        let index = self.entries.iter().position(|e| e.id == id)?;
        Some(self.entries.remove(index))
    }
}
