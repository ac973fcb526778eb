//! List and show entries use case

use crate::domain::{EntryFilter, EntryId, Identity, JournalEntry, Mood};
use crate::error::{MoodjError, Result};
use crate::infrastructure::JournalStore;
use chrono::NaiveDate;
use std::str::FromStr;

/// Parse a calendar day given as DD-MM-YYYY (ISO YYYY-MM-DD also accepted)
pub fn parse_day(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value, "%d-%m-%Y")
        .or_else(|_| NaiveDate::parse_from_str(value, "%Y-%m-%d"))
        .map_err(|_| MoodjError::InvalidDate(value.to_string()))
}

/// Parse a mood filter given on the command line, case-insensitively
pub fn parse_mood(value: &str) -> Result<Mood> {
    Mood::from_str(value.trim()).map_err(MoodjError::InvalidInput)
}

/// Service for browsing saved entries
pub struct ListEntriesService<S, I> {
    store: S,
    identity: I,
}

impl<S: JournalStore, I: Identity> ListEntriesService<S, I> {
    pub fn new(store: S, identity: I) -> Self {
        ListEntriesService { store, identity }
    }

    /// Entries matching every given criterion, most recent first
    pub fn list(&self, criteria: &EntryFilter) -> Result<Vec<JournalEntry>> {
        self.identity.require_authenticated()?;
        self.store.list_all(criteria)
    }

    pub fn show(&self, id: EntryId) -> Result<JournalEntry> {
        self.identity.require_authenticated()?;
        self.store.get(id)
    }
}
