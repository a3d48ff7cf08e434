//! Form controller driving a board

use crate::application::board::NewsBoard;
use crate::application::observer::{SubscriptionId, Subscribers};
use crate::domain::{Entry, EntryId, Form, Submission};
use crate::error::Result;
use crate::infrastructure::EntryStore;

/// Result of [`EditorSession::submit`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Title or text was blank; nothing changed
    Rejected,
    Created(Entry),
    Updated(Entry),
    /// The edit target no longer exists; the form was still reset
    Unchanged(EntryId),
}

/// Couples the create/edit form with the board it submits to.
///
/// Form subscribers receive the form after every change to it.
pub struct EditorSession<S: EntryStore> {
    board: NewsBoard<S>,
    form: Form,
    form_subscribers: Subscribers<Form>,
}

impl<S: EntryStore> EditorSession<S> {
    pub fn new(board: NewsBoard<S>) -> Self {
        EditorSession {
            board,
            form: Form::new(),
            form_subscribers: Subscribers::new(),
        }
    }

    pub fn board(&self) -> &NewsBoard<S> {
        &self.board
    }

    pub fn board_mut(&mut self) -> &mut NewsBoard<S> {
        &mut self.board
    }

    pub fn form(&self) -> &Form {
        &self.form
    }

    pub fn subscribe_form(&mut self, callback: impl FnMut(&Form) + 'static) -> SubscriptionId {
        self.form_subscribers.subscribe(callback)
    }

    pub fn unsubscribe_form(&mut self, id: SubscriptionId) -> bool {
        self.form_subscribers.unsubscribe(id)
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.form.set_title(title);
        self.form_changed();
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.form.set_text(text);
        self.form_changed();
    }

    /// Load the entry with `id` into the form and switch to edit-mode.
    /// Returns false, leaving the form as is, when there is no such entry.
    pub fn begin_edit(&mut self, id: EntryId) -> bool {
        let Some(entry) = self.board.get(id) else {
            return false;
        };

        self.form.begin_edit(entry);
        self.form_changed();
        true
    }

    /// Submit the form to the board
    pub fn submit(&mut self) -> Result<SubmitOutcome> {
        let Some(submission) = self.form.submit() else {
            log::debug!("submit rejected: blank title or text");
            return Ok(SubmitOutcome::Rejected);
        };
        self.form_changed();

        match submission {
            Submission::Create(draft) => {
                let entry = self.board.create_draft(draft)?;
                Ok(SubmitOutcome::Created(entry))
            }
            Submission::Update(id, draft) => match self.board.update_draft(id, draft)? {
                Some(entry) => Ok(SubmitOutcome::Updated(entry)),
                None => Ok(SubmitOutcome::Unchanged(id)),
            },
        }
    }

    fn form_changed(&mut self) {
        self.form_subscribers.notify(&self.form);
    }
}

impl<S: EntryStore> std::fmt::Debug for EditorSession<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EditorSession")
            .field("board", &self.board)
            .field("form", &self.form)
            .finish_non_exhaustive()
    }
}
