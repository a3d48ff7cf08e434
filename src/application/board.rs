//! Entry list controller

use crate::application::observer::{SubscriptionId, Subscribers};
use crate::domain::{Clock, Draft, Entry, EntryId, EntryList, IdGenerator, SystemClock};
use crate::error::{NewsboardError, Result};
use crate::infrastructure::EntryStore;

/// Change published after a mutation has been persisted
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardEvent {
    Created(Entry),
    Updated(Entry),
    Deleted(EntryId),
}

/// Owns the entry list for a session and mirrors it into `store`.
///
/// The list is loaded once in [`NewsBoard::open`]; every operation that
/// changes it writes the whole list back before notifying subscribers.
/// Operations that change nothing do not touch the store.
pub struct NewsBoard<S: EntryStore> {
    store: S,
    entries: EntryList,
    ids: IdGenerator,
    subscribers: Subscribers<BoardEvent>,
}

impl<S: EntryStore> NewsBoard<S> {
    /// Load the list from `store`, using the wall clock for ids
    pub fn open(store: S) -> Result<Self> {
        Self::open_with_clock(store, SystemClock)
    }

    pub fn open_with_clock(store: S, clock: impl Clock + 'static) -> Result<Self> {
        let entries = EntryList::from_entries(store.load()?);

        let mut ids = IdGenerator::new(Box::new(clock));
        if let Some(max) = entries.max_id() {
            ids.observe(max);
        }

        Ok(NewsBoard {
            store,
            entries,
            ids,
            subscribers: Subscribers::new(),
        })
    }

    pub fn entries(&self) -> &[Entry] {
        self.entries.as_slice()
    }

    pub fn get(&self, id: EntryId) -> Option<&Entry> {
        self.entries.get(id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn subscribe(&mut self, callback: impl FnMut(&BoardEvent) + 'static) -> SubscriptionId {
        self.subscribers.subscribe(callback)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subscribers.unsubscribe(id)
    }

    /// Add a new entry at the front. Blank title or text is a no-op.
    pub fn create(&mut self, title: &str, text: &str) -> Result<Option<Entry>> {
        match Draft::new(title, text) {
            Some(draft) => self.create_draft(draft).map(Some),
            None => Ok(None),
        }
    }

    /// Replace title/text of an existing entry. Blank input or an unknown id
    /// is a no-op.
    pub fn update(&mut self, id: EntryId, title: &str, text: &str) -> Result<Option<Entry>> {
        match Draft::new(title, text) {
            Some(draft) => self.update_draft(id, draft),
            None => Ok(None),
        }
    }

    /// Remove an entry. Unknown ids are a no-op; returns whether anything
    /// was removed.
    pub fn delete(&mut self, id: EntryId) -> Result<bool> {
        if self.entries.remove(id).is_none() {
            log::debug!("delete: no entry {}", id);
            return Ok(false);
        }

        self.persist()?;
        log::debug!("deleted entry {}", id);
        self.subscribers.notify(&BoardEvent::Deleted(id));
        Ok(true)
    }

    pub(crate) fn create_draft(&mut self, draft: Draft) -> Result<Entry> {
        let id = self.ids.next_id().ok_or_else(|| {
            NewsboardError::IdsExhausted(self.entries.max_id().unwrap_or(EntryId::new(i64::MAX)))
        })?;
        let entry = Entry::new(id, draft);
        self.entries.prepend(entry.clone());

        self.persist()?;
        log::debug!("created entry {}", entry.id);
        self.subscribers.notify(&BoardEvent::Created(entry.clone()));
        Ok(entry)
    }

    pub(crate) fn update_draft(&mut self, id: EntryId, draft: Draft) -> Result<Option<Entry>> {
        let Some(entry) = self.entries.update(id, draft).cloned() else {
            log::debug!("update: no entry {}", id);
            return Ok(None);
        };

        self.persist()?;
        log::debug!("updated entry {}", id);
        self.subscribers.notify(&BoardEvent::Updated(entry.clone()));
        Ok(Some(entry))
    }

    fn persist(&self) -> Result<()> {
        self.store.save(self.entries.as_slice())
    }
}

impl<S: EntryStore> std::fmt::Debug for NewsBoard<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NewsBoard")
            .field("entries", &self.entries)
            .field("ids", &self.ids)
            .field("subscribers", &self.subscribers)
            .finish_non_exhaustive()
    }
}
