//! Configuration management

use crate::domain::{Identity, Principal};
use crate::error::{MoodjError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Name of the per-journal metadata directory
pub const JOURNAL_DIR: &str = ".moodj";

/// Environment variable overriding the configured principal
pub const PRINCIPAL_ENV: &str = "MOODJ_PRINCIPAL";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub editor: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub principal: Option<String>,
    pub created: DateTime<Utc>,
}

impl Config {
    /// Create a new config with default values
    pub fn new() -> Self {
        Config {
            editor: Self::detect_default_editor(),
            nickname: None,
            principal: None,
            created: Utc::now(),
        }
    }

    /// Load config from .moodj/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(JOURNAL_DIR).join("config.toml");

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                MoodjError::NotJournalDirectory(path.to_path_buf())
            } else {
                MoodjError::Io(e)
            }
        })?;

        toml::from_str(&contents)
            .map_err(|e| MoodjError::Config(format!("Failed to parse config.toml: {}", e)))
    }

    /// Save config to .moodj/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let journal_dir = path.join(JOURNAL_DIR);
        let config_path = journal_dir.join("config.toml");

        if !journal_dir.exists() {
            fs::create_dir(&journal_dir)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| MoodjError::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(&config_path, contents)?;

        Ok(())
    }

    /// Get the editor command, checking environment variables first
    pub fn get_editor(&self) -> String {
        std::env::var("EDITOR")
            .or_else(|_| std::env::var("VISUAL"))
            .unwrap_or_else(|_| self.editor.clone())
    }

    /// Nickname for greetings, "User" when none is set
    pub fn display_name(&self) -> &str {
        self.nickname
            .as_deref()
            .filter(|n| !n.trim().is_empty())
            .unwrap_or("User")
    }

    /// Detect default editor from environment or system
    fn detect_default_editor() -> String {
        std::env::var("EDITOR")
            .or_else(|_| std::env::var("VISUAL"))
            .unwrap_or_else(|_| {
                if cfg!(windows) {
                    "notepad".to_string()
                } else {
                    "nano".to_string()
                }
            })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Identity for Config {
    /// `MOODJ_PRINCIPAL` wins over the logged-in principal in the config file
    fn principal(&self) -> Principal {
        match std::env::var(PRINCIPAL_ENV) {
            Ok(name) if !name.trim().is_empty() => Principal::from_name(Some(&name)),
            _ => Principal::from_name(self.principal.as_deref()),
        }
    }
}
