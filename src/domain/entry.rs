//! Journal entry records

use crate::domain::classifier::{reflection_for, Classification};
use crate::domain::Mood;
use chrono::{DateTime, FixedOffset, NaiveDate};
use serde::{Deserialize, Serialize};

/// Title given to entries saved without one
pub const DEFAULT_TITLE: &str = "Untitled Journal";

/// Opaque entry identifier, unique within a journal and never reused
pub type EntryId = u64;

/// A saved journal entry
///
/// The reflection is not stored separately; it is always the canonical text
/// for the entry's current mood.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JournalEntry {
    pub id: EntryId,
    pub title: String,
    pub content: String,
    pub mood: Mood,
    pub created_at: DateTime<FixedOffset>,
    pub updated_at: DateTime<FixedOffset>,
}

impl JournalEntry {
    /// Build a fresh entry from a draft
    pub fn from_draft(id: EntryId, draft: EntryDraft) -> Self {
        JournalEntry {
            id,
            title: draft.title,
            content: draft.content,
            mood: draft.classification.mood,
            created_at: draft.saved_at,
            updated_at: draft.saved_at,
        }
    }

    /// Apply a new draft to this entry, keeping id and creation time
    pub fn apply(&mut self, draft: EntryDraft) {
        self.title = draft.title;
        self.content = draft.content;
        self.mood = draft.classification.mood;
        self.updated_at = draft.saved_at;
    }

    pub fn reflection(&self) -> &'static str {
        reflection_for(self.mood)
    }

    /// Calendar day in the offset the entry was recorded in
    pub fn local_date(&self) -> NaiveDate {
        self.created_at.date_naive()
    }
}

/// Everything a store needs to create or update an entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryDraft {
    pub title: String,
    pub content: String,
    pub classification: Classification,
    pub saved_at: DateTime<FixedOffset>,
}

impl EntryDraft {
    /// Classify `content` and bundle it with the title and save time.
    ///
    /// An empty or whitespace-only title becomes [`DEFAULT_TITLE`].
    pub fn classify(title: &str, content: &str, saved_at: DateTime<FixedOffset>) -> Self {
        let title = title.trim();
        EntryDraft {
            title: if title.is_empty() {
                DEFAULT_TITLE.to_string()
            } else {
                title.to_string()
            },
            content: content.to_string(),
            classification: Classification::of(content),
            saved_at,
        }
    }
}

/// On-disk shape of an entry
///
/// The mood is kept loose so that hand-edited or legacy files still load;
/// it is normalized when converted into a [`JournalEntry`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredEntry {
    pub id: EntryId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mood: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reflection: Option<String>,
    pub created_at: DateTime<FixedOffset>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<FixedOffset>>,
}

impl From<StoredEntry> for JournalEntry {
    fn from(stored: StoredEntry) -> Self {
        let title = if stored.title.trim().is_empty() {
            DEFAULT_TITLE.to_string()
        } else {
            stored.title
        };
        JournalEntry {
            id: stored.id,
            title,
            content: stored.content,
            mood: Mood::normalize(stored.mood.as_deref()),
            created_at: stored.created_at,
            updated_at: stored.updated_at.unwrap_or(stored.created_at),
        }
    }
}

impl From<&JournalEntry> for StoredEntry {
    fn from(entry: &JournalEntry) -> Self {
        StoredEntry {
            id: entry.id,
            title: entry.title.clone(),
            content: entry.content.clone(),
            mood: Some(entry.mood.label().to_string()),
            reflection: Some(entry.reflection().to_string()),
            created_at: entry.created_at,
            updated_at: Some(entry.updated_at),
        }
    }
}
