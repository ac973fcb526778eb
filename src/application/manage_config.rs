//! Config management use case

use crate::error::{MoodjError, Result};
use crate::infrastructure::{Config, FileSystemRepository, JournalRepository};

/// Keys understood by `config`, in listing order
pub const CONFIG_KEYS: [&str; 4] = ["editor", "nickname", "principal", "created"];

fn unknown_key(key: &str) -> MoodjError {
    MoodjError::Config(format!(
        "Unknown config key: '{}'. Valid keys are: {}",
        key,
        CONFIG_KEYS.join(", ")
    ))
}

/// Service for managing journal configuration
pub struct ConfigService {
    repository: FileSystemRepository,
}

impl ConfigService {
    /// Create a new config service
    pub fn new(repository: FileSystemRepository) -> Self {
        ConfigService { repository }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.repository.load_config()?;

        match key {
            "editor" => Ok(config.editor.clone()),
            "nickname" => Ok(config.nickname.clone().unwrap_or_default()),
            "principal" => Ok(config.principal.clone().unwrap_or_default()),
            "created" => Ok(config.created.to_rfc3339()),
            _ => Err(unknown_key(key)),
        }
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.repository.load_config()?;

        match key {
            "editor" => {
                config.editor = value.to_string();
            }
            "nickname" => {
                let nickname = value.trim();
                if nickname.is_empty() {
                    return Err(MoodjError::InvalidInput(
                        "nickname cannot be empty".to_string(),
                    ));
                }
                config.nickname = Some(nickname.to_string());
            }
            "principal" => {
                return Err(MoodjError::Config(
                    "Use 'moodj login <name>' to change the principal".to_string(),
                ));
            }
            "created" => {
                return Err(MoodjError::Config(
                    "Cannot modify 'created' field (read-only)".to_string(),
                ));
            }
            _ => return Err(unknown_key(key)),
        }

        self.repository.save_config(&config)?;
        Ok(())
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        self.repository.load_config()
    }
}
