//! Domain layer - Mood classification, entries and aggregation

pub mod aggregate;
pub mod classifier;
pub mod draft;
pub mod entry;
pub mod identity;
pub mod mood;

pub use aggregate::{EntryFilter, MoodCounts};
pub use classifier::{classify, reflection_for, Classification};
pub use entry::{EntryDraft, EntryId, JournalEntry, StoredEntry, DEFAULT_TITLE};
pub use identity::{Identity, Principal, StaticIdentity};
pub use mood::Mood;
