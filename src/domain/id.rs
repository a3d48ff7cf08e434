//! Entry id generation

use crate::domain::entry::EntryId;
use chrono::Utc;

/// Source of the current time in milliseconds since the Unix epoch
pub trait Clock {
    fn now_millis(&self) -> i64;
}

/// Wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        Utc::now().timestamp_millis()
    }
}

impl<F> Clock for F
where
    F: Fn() -> i64,
{
    fn now_millis(&self) -> i64 {
        self()
    }
}

/// Hands out timestamp-derived ids that strictly increase.
///
/// When the clock has not advanced past the last id (same millisecond, or a
/// clock that went backwards) the next id is `last + 1`. Once `last` is
/// `i64::MAX` no further id exists.
pub struct IdGenerator {
    clock: Box<dyn Clock>,
    last: Option<EntryId>,
}

impl IdGenerator {
    pub fn new(clock: Box<dyn Clock>) -> Self {
        IdGenerator { clock, last: None }
    }

    /// Make sure future ids are greater than `id`
    pub fn observe(&mut self, id: EntryId) {
        if self.last.is_none_or(|last| id > last) {
            self.last = Some(id);
        }
    }

    /// Returns `None` when the id space is exhausted; the state is unchanged
    pub fn next_id(&mut self) -> Option<EntryId> {
        let now = self.clock.now_millis();
        let millis = match self.last {
            Some(last) if now <= last.as_millis() => last.as_millis().checked_add(1)?,
            _ => now,
        };

        let id = EntryId::new(millis);
        self.last = Some(id);
        Some(id)
    }
}

impl std::fmt::Debug for IdGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IdGenerator")
            .field("last", &self.last)
            .finish_non_exhaustive()
    }
}
