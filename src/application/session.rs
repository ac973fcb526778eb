//! Login, logout and identity lookup

use crate::domain::{Identity, Principal};
use crate::error::{MoodjError, Result};
use crate::infrastructure::{FileSystemRepository, JournalRepository};
use tracing::info;

/// Service managing the principal recorded in the journal config
pub struct SessionService {
    repository: FileSystemRepository,
}

impl SessionService {
    pub fn new(repository: FileSystemRepository) -> Self {
        SessionService { repository }
    }

    /// Record `name` as the logged-in principal
    pub fn login(&self, name: &str) -> Result<Principal> {
        let principal = Principal::from_name(Some(name));
        let Principal::User(user) = &principal else {
            return Err(MoodjError::InvalidInput(
                "login name cannot be empty".to_string(),
            ));
        };

        let mut config = self.repository.load_config()?;
        config.principal = Some(user.clone());
        self.repository.save_config(&config)?;
        info!(%principal, "logged in");
        Ok(principal)
    }

    pub fn logout(&self) -> Result<()> {
        let mut config = self.repository.load_config()?;
        config.principal = None;
        self.repository.save_config(&config)?;
        info!("logged out");
        Ok(())
    }

    /// Current principal, honoring the environment override
    pub fn whoami(&self) -> Result<Principal> {
        Ok(self.repository.load_config()?.principal())
    }
}
