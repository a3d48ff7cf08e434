//! Domain layer - Entries, the entry list and the form state machine

pub mod entry;
pub mod entry_list;
pub mod form;
pub mod id;

pub use entry::{Draft, Entry, EntryId};
pub use entry_list::EntryList;
pub use form::{Form, FormMode, Submission};
pub use id::{Clock, IdGenerator, SystemClock};
