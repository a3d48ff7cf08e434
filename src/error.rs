//! Error types for newsboard

use crate::domain::EntryId;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for newsboard
#[derive(Debug, Error)]
pub enum NewsboardError {
    #[error("Not a newsboard directory: {0}")]
    NotInitialized(PathBuf),

    #[error("Entry not found: {0}")]
    EntryNotFound(EntryId),

    #[error("Title and text must not be blank")]
    BlankSubmission,

    #[error("No entry id left after {0}")]
    IdsExhausted(EntryId),

    #[error("Invalid storage key: {0:?}")]
    InvalidStorageKey(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("Logging error: {0}")]
    Logging(#[from] flexi_logger::FlexiLoggerError),
}

impl NewsboardError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            NewsboardError::NotInitialized(_) => 2,
            NewsboardError::EntryNotFound(_) => 3,
            NewsboardError::BlankSubmission => 4,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            NewsboardError::NotInitialized(path) => {
                format!(
                    "Not a newsboard directory: {}\n\n\
                    Suggestions:\n\
                    • Run 'newsboard init' in this directory to create a new board\n\
                    • Navigate to an existing newsboard directory\n\
                    • Set NEWSBOARD_ROOT environment variable to your board path",
                    path.display()
                )
            }
            NewsboardError::EntryNotFound(id) => {
                format!(
                    "No entry with id {}\n\n\
                    Suggestions:\n\
                    • Use 'newsboard list' to see entry ids",
                    id
                )
            }
            NewsboardError::BlankSubmission => {
                "Title and text must not be blank\n\n\
                Example:\n\
                newsboard add \"Release\" \"Version 1.0 is out\""
                    .to_string()
            }
            NewsboardError::InvalidStorageKey(key) => {
                format!(
                    "Invalid storage key: {:?}\n\n\
                    Keys use letters, digits, '-', '_' or '.' and must not start with '.'\n\
                    Example: newsboard config storage_key news",
                    key
                )
            }
            NewsboardError::Config(msg) => {
                if msg.contains("log level") {
                    format!(
                        "{}\n\n\
                        Valid levels: trace, debug, info, warn, error, off\n\
                        Example: newsboard config log_level info",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using NewsboardError
pub type Result<T> = std::result::Result<T, NewsboardError>;
