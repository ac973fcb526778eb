//! In-memory journal store

use crate::domain::{EntryDraft, EntryFilter, EntryId, JournalEntry};
use crate::error::Result;
use crate::infrastructure::repository::{EntryLog, JournalStore};

/// Journal store that keeps entries in memory only
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    log: EntryLog,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[JournalEntry] {
        self.log.entries()
    }
}

impl JournalStore for MemoryStore {
    fn create(&mut self, draft: EntryDraft) -> Result<JournalEntry> {
        self.log.create(draft)
    }

    fn update(&mut self, id: EntryId, draft: EntryDraft) -> Result<JournalEntry> {
        self.log.update(id, draft)
    }

    fn delete(&mut self, id: EntryId) -> Result<()> {
        self.log.delete(id)
    }

    fn get(&self, id: EntryId) -> Result<JournalEntry> {
        self.log.get(id)
    }

    fn list_all(&self, criteria: &EntryFilter) -> Result<Vec<JournalEntry>> {
        Ok(self.log.matching(criteria))
    }
}
