//! Entry records and validated title/text drafts

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of an entry: milliseconds since the Unix epoch at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(i64);

impl EntryId {
    pub fn new(millis: i64) -> Self {
        EntryId(millis)
    }

    pub fn as_millis(&self) -> i64 {
        self.0
    }
}

impl From<i64> for EntryId {
    fn from(millis: i64) -> Self {
        EntryId(millis)
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single news entry as persisted
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub id: EntryId,
    pub title: String,
    pub text: String,
}

impl Entry {
    pub fn new(id: EntryId, draft: Draft) -> Self {
        Entry {
            id,
            title: draft.title,
            text: draft.text,
        }
    }

    /// Replace title and text, keeping the id
    pub fn apply(&mut self, draft: Draft) {
        self.title = draft.title;
        self.text = draft.text;
    }
}

/// A title/text pair that passed validation.
///
/// Both fields are non-empty after trimming. Values are kept as entered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Draft {
    title: String,
    text: String,
}

impl Draft {
    /// Returns `None` when either field is empty or whitespace-only
    pub fn new(title: impl Into<String>, text: impl Into<String>) -> Option<Self> {
        let title = title.into();
        let text = text.into();

        if title.trim().is_empty() || text.trim().is_empty() {
            return None;
        }

        Some(Draft { title, text })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}
