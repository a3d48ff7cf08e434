//! newsboard - Terminal news list editor
//!
//! Keeps an ordered list of short title/text entries in memory and mirrors
//! the whole list into a string-keyed persistent store after every change.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::NewsboardError;
