//! Save entry use case: classify, then persist

use crate::domain::aggregate::milestone_crossed;
use crate::domain::{EntryDraft, EntryFilter, EntryId, Identity, JournalEntry};
use crate::error::Result;
use crate::infrastructure::JournalStore;
use chrono::{DateTime, FixedOffset, Local};
use tracing::info;

/// Result of a successful save
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveOutcome {
    pub entry: JournalEntry,
    /// True when a new entry was created rather than an existing one updated
    pub created: bool,
    /// Badge level newly reached by this save, if any
    pub milestone: Option<u8>,
}

/// Service for creating and editing journal entries
pub struct SaveEntryService<S, I> {
    store: S,
    identity: I,
}

impl<S: JournalStore, I: Identity> SaveEntryService<S, I> {
    pub fn new(store: S, identity: I) -> Self {
        SaveEntryService { store, identity }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Save now, in the local timezone
    pub fn save(&mut self, id: Option<EntryId>, title: &str, content: &str) -> Result<SaveOutcome> {
        self.save_at(id, title, content, Local::now().fixed_offset())
    }

    /// Classify `content` and persist it as a new entry (`id` is `None`) or
    /// over an existing one.
    ///
    /// The stored mood and reflection come from this call's classification.
    pub fn save_at(
        &mut self,
        id: Option<EntryId>,
        title: &str,
        content: &str,
        saved_at: DateTime<FixedOffset>,
    ) -> Result<SaveOutcome> {
        let principal = self.identity.require_authenticated()?;
        let previous = self.store.list_all(&EntryFilter::default())?.len();

        let draft = EntryDraft::classify(title, content, saved_at);
        let (entry, created) = match id {
            Some(id) => (self.store.update(id, draft)?, false),
            None => (self.store.create(draft)?, true),
        };

        let current = if created { previous + 1 } else { previous };
        let milestone = milestone_crossed(previous, current);

        info!(
            id = entry.id,
            mood = %entry.mood,
            created,
            %principal,
            "saved journal entry"
        );
        if let Some(level) = milestone {
            info!(level, total = current, "milestone reached");
        }

        Ok(SaveOutcome {
            entry,
            created,
            milestone,
        })
    }
}
