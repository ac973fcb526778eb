//! Delete entry use case

use crate::domain::{EntryId, Identity};
use crate::error::Result;
use crate::infrastructure::JournalStore;
use tracing::info;

/// Service for deleting journal entries
pub struct DeleteEntryService<S, I> {
    store: S,
    identity: I,
}

impl<S: JournalStore, I: Identity> DeleteEntryService<S, I> {
    pub fn new(store: S, identity: I) -> Self {
        DeleteEntryService { store, identity }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn delete(&mut self, id: EntryId) -> Result<()> {
        self.identity.require_authenticated()?;
        self.store.delete(id)?;
        info!(id, "deleted journal entry");
        Ok(())
    }
}
