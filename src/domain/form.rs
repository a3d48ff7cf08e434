//! Create/edit form state machine

use crate::domain::entry::{Draft, Entry, EntryId};

/// Which operation a valid submit performs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormMode {
    /// Submitting creates a new entry
    #[default]
    Creating,
    /// Submitting updates the entry with this id
    Editing(EntryId),
}

/// What an accepted submit asks the entry list to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    Create(Draft),
    Update(EntryId, Draft),
}

/// In-progress title/text plus the optional edit target
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Form {
    title: String,
    text: String,
    mode: FormMode,
}

impl Form {
    pub fn new() -> Self {
        Form::default()
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.mode, FormMode::Editing(_))
    }

    /// Label for the submit control
    pub fn submit_label(&self) -> &'static str {
        match self.mode {
            FormMode::Creating => "Add",
            FormMode::Editing(_) => "Update",
        }
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Switch to edit-mode for `entry` and load its fields.
    /// Allowed from either state.
    pub fn begin_edit(&mut self, entry: &Entry) {
        self.mode = FormMode::Editing(entry.id);
        self.title = entry.title.clone();
        self.text = entry.text.clone();
    }

    /// Validate and turn the current fields into a submission.
    ///
    /// Blank input returns `None` and leaves the form untouched. Otherwise the
    /// form is cleared and returns to create-mode.
    pub fn submit(&mut self) -> Option<Submission> {
        let draft = Draft::new(self.title.as_str(), self.text.as_str())?;

        let submission = match self.mode {
            FormMode::Creating => Submission::Create(draft),
            FormMode::Editing(id) => Submission::Update(id, draft),
        };

        *self = Form::default();
        Some(submission)
    }
}
