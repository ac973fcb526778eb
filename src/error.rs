//! Error types for moodj

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the moodj application
#[derive(Debug, Error)]
pub enum MoodjError {
    #[error("Not a moodj directory: {0}")]
    NotJournalDirectory(PathBuf),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Journal entry not found: {0}")]
    NotFound(u64),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Editor error: {0}")]
    Editor(String),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl MoodjError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            MoodjError::NotJournalDirectory(_) => 2,
            MoodjError::InvalidInput(_) | MoodjError::InvalidDate(_) => 3,
            MoodjError::NotFound(_) => 4,
            MoodjError::Unauthorized(_) => 5,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            MoodjError::NotJournalDirectory(path) => {
                format!(
                    "Not a moodj directory: {}\n\n\
                    Suggestions:\n\
                    • Run 'moodj init' in this directory to create a new journal\n\
                    • Navigate to an existing moodj directory\n\
                    • Set MOODJ_ROOT environment variable to your journal path",
                    path.display()
                )
            }
            MoodjError::NotFound(id) => {
                format!(
                    "Journal entry not found: {}\n\n\
                    Suggestions:\n\
                    • Use 'moodj list' to see the ids of your entries\n\
                    • Deleted entries cannot be restored and their ids are never reused",
                    id
                )
            }
            MoodjError::Unauthorized(msg) => {
                format!(
                    "Unauthorized: {}\n\n\
                    Suggestions:\n\
                    • Log in first: moodj login <name>\n\
                    • Or set the MOODJ_PRINCIPAL environment variable",
                    msg
                )
            }
            MoodjError::InvalidDate(value) => {
                format!(
                    "Invalid date: '{}'\n\n\
                    Expected format: DD-MM-YYYY (months: YYYY-MM)\n\
                    Example: moodj list --date 17-01-2025",
                    value
                )
            }
            MoodjError::Editor(msg) => {
                format!(
                    "{}\n\n\
                    Suggestions:\n\
                    • Check that your editor is installed and in PATH\n\
                    • Set EDITOR environment variable (e.g., export EDITOR=nano)\n\
                    • Configure editor: moodj config editor 'vim'\n\
                    • Skip the editor entirely: moodj write --content \"...\"",
                    msg
                )
            }
            MoodjError::InvalidInput(msg) if msg.starts_with("Invalid mood") => {
                format!(
                    "Invalid input: {}\n\n\
                    Valid moods: happy, sad, angry, anxious, exhausted, neutral\n\
                    Example: moodj list --mood sad",
                    msg
                )
            }
            MoodjError::Config(msg) => msg.clone(),
            _ => self.to_string(),
        }
    }
}

/// Result type using MoodjError
pub type Result<T> = std::result::Result<T, MoodjError>;
