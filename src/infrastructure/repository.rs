//! File system repository

use crate::domain::aggregate::filter;
use crate::domain::{EntryDraft, EntryFilter, EntryId, JournalEntry, StoredEntry};
use crate::error::{MoodjError, Result};
use crate::infrastructure::config::{Config, JOURNAL_DIR};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Environment variable pointing at a journal root
pub const ROOT_ENV: &str = "MOODJ_ROOT";

const ENTRIES_FILE: &str = "entries.toml";
const DRAFT_FILE: &str = "draft.md";

/// Abstract repository for journal setup and configuration
pub trait JournalRepository {
    /// Get the root directory of this repository
    fn root(&self) -> &Path;

    /// Load configuration from .moodj/config.toml
    fn load_config(&self) -> Result<Config>;

    /// Save configuration to .moodj/config.toml
    fn save_config(&self, config: &Config) -> Result<()>;

    /// Check if .moodj directory exists
    fn is_initialized(&self) -> bool;

    /// Create .moodj directory structure
    fn initialize(&self) -> Result<()>;
}

/// Persistence of journal entries
///
/// Stores reject drafts with empty content and unknown ids. A failed call
/// leaves the stored collection untouched.
pub trait JournalStore {
    fn create(&mut self, draft: EntryDraft) -> Result<JournalEntry>;

    fn update(&mut self, id: EntryId, draft: EntryDraft) -> Result<JournalEntry>;

    fn delete(&mut self, id: EntryId) -> Result<()>;

    fn get(&self, id: EntryId) -> Result<JournalEntry>;

    /// Entries matching `criteria`, most recent first
    fn list_all(&self, criteria: &EntryFilter) -> Result<Vec<JournalEntry>>;
}

/// Reject drafts a store must not persist
pub(crate) fn validate_draft(draft: &EntryDraft) -> Result<()> {
    if draft.content.trim().is_empty() {
        return Err(MoodjError::InvalidInput(
            "journal content cannot be empty".to_string(),
        ));
    }
    Ok(())
}

/// Entry collection with its id counter
///
/// `entries` is ordered most recent first. `next_id` only ever grows, so a
/// deleted id is never handed out again.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryLog {
    next_id: EntryId,
    entries: Vec<JournalEntry>,
}

impl EntryLog {
    pub fn entries(&self) -> &[JournalEntry] {
        &self.entries
    }

    pub fn create(&mut self, draft: EntryDraft) -> Result<JournalEntry> {
        validate_draft(&draft)?;
        let id = self.next_id.max(1);
        let entry = JournalEntry::from_draft(id, draft);
        self.next_id = id + 1;
        self.entries.insert(0, entry.clone());
        Ok(entry)
    }

    pub fn update(&mut self, id: EntryId, draft: EntryDraft) -> Result<JournalEntry> {
        validate_draft(&draft)?;
        let entry = self
            .entries
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or(MoodjError::NotFound(id))?;
        entry.apply(draft);
        Ok(entry.clone())
    }

    pub fn delete(&mut self, id: EntryId) -> Result<()> {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        if self.entries.len() == before {
            return Err(MoodjError::NotFound(id));
        }
        Ok(())
    }

    pub fn get(&self, id: EntryId) -> Result<JournalEntry> {
        self.entries
            .iter()
            .find(|e| e.id == id)
            .cloned()
            .ok_or(MoodjError::NotFound(id))
    }

    pub fn matching(&self, criteria: &EntryFilter) -> Vec<JournalEntry> {
        filter(&self.entries, criteria).cloned().collect()
    }
}

/// On-disk layout of entries.toml
#[derive(Debug, Default, Serialize, Deserialize)]
struct EntriesFile {
    #[serde(default)]
    next_id: EntryId,
    #[serde(default, rename = "entry")]
    entries: Vec<StoredEntry>,
}

impl From<EntriesFile> for EntryLog {
    fn from(file: EntriesFile) -> Self {
        let entries: Vec<JournalEntry> = file.entries.into_iter().map(JournalEntry::from).collect();
        // A hand-edited file may lag behind its entries.
        let highest = entries.iter().map(|e| e.id).max().unwrap_or(0);
        EntryLog {
            next_id: file.next_id.max(highest + 1),
            entries,
        }
    }
}

impl From<&EntryLog> for EntriesFile {
    fn from(log: &EntryLog) -> Self {
        EntriesFile {
            next_id: log.next_id,
            entries: log.entries.iter().map(StoredEntry::from).collect(),
        }
    }
}

/// File system implementation of JournalRepository and JournalStore
#[derive(Debug, Clone)]
pub struct FileSystemRepository {
    pub root: PathBuf,
}

impl FileSystemRepository {
    /// Create a new repository with the given root directory
    pub fn new(root: PathBuf) -> Self {
        FileSystemRepository { root }
    }

    /// Discover journal root by walking up from current directory
    /// First checks MOODJ_ROOT environment variable, then falls back to discovery
    pub fn discover() -> Result<Self> {
        if let Ok(root_path) = std::env::var(ROOT_ENV) {
            let path = PathBuf::from(root_path);
            if Self::has_journal_dir(&path) {
                return Ok(FileSystemRepository::new(path));
            } else {
                return Err(MoodjError::Config(format!(
                    "MOODJ_ROOT is set to '{}' but no .moodj directory found. \
                    Run 'moodj init' in that directory or unset MOODJ_ROOT.",
                    path.display()
                )));
            }
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Discover journal root by walking up from a specific starting directory
    pub fn discover_from(start: &Path) -> Result<Self> {
        let mut current = start.to_path_buf();

        loop {
            if Self::has_journal_dir(&current) {
                return Ok(FileSystemRepository::new(current));
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => {
                    return Err(MoodjError::NotJournalDirectory(start.to_path_buf()));
                }
            }
        }
    }

    /// Check if a path contains a .moodj directory
    fn has_journal_dir(path: &Path) -> bool {
        path.join(JOURNAL_DIR).is_dir()
    }

    fn entries_path(&self) -> PathBuf {
        self.root.join(JOURNAL_DIR).join(ENTRIES_FILE)
    }

    /// Path of the scratch file used when composing in an editor
    pub fn draft_path(&self) -> PathBuf {
        self.root.join(JOURNAL_DIR).join(DRAFT_FILE)
    }

    /// Read all entries (empty log if nothing has been saved yet)
    pub fn load(&self) -> Result<EntryLog> {
        let path = self.entries_path();
        if !path.exists() {
            if !self.is_initialized() {
                return Err(MoodjError::NotJournalDirectory(self.root.clone()));
            }
            return Ok(EntryLog::default());
        }

        let contents = fs::read_to_string(&path)?;
        let file: EntriesFile = toml::from_str(&contents)?;
        let log = EntryLog::from(file);
        debug!(count = log.entries.len(), "loaded journal entries");
        Ok(log)
    }

    /// Write all entries with a best-effort atomic replace:
    /// write to a temp file in the same directory, then rename into place.
    ///
    /// On Windows, `rename` does not overwrite existing files, so we remove the destination first.
    pub fn persist(&self, log: &EntryLog) -> Result<()> {
        let path = self.entries_path();
        let contents = toml::to_string_pretty(&EntriesFile::from(log))?;

        let tmp_path = path.with_file_name(format!(
            "{}.moodj-tmp-{}",
            ENTRIES_FILE,
            std::process::id()
        ));
        fs::write(&tmp_path, contents)?;

        if cfg!(windows) && path.exists() {
            fs::remove_file(&path)?;
        }

        fs::rename(&tmp_path, &path)?;
        debug!(count = log.entries.len(), "persisted journal entries");
        Ok(())
    }

    /// Load, apply `change`, and persist only if it succeeded
    fn modify<T>(&self, change: impl FnOnce(&mut EntryLog) -> Result<T>) -> Result<T> {
        let mut log = self.load()?;
        let result = change(&mut log)?;
        self.persist(&log)?;
        Ok(result)
    }
}

impl JournalRepository for FileSystemRepository {
    fn root(&self) -> &Path {
        &self.root
    }

    fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    fn is_initialized(&self) -> bool {
        Self::has_journal_dir(&self.root)
    }

    fn initialize(&self) -> Result<()> {
        let journal_dir = self.root.join(JOURNAL_DIR);

        if journal_dir.exists() {
            return Err(MoodjError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir(&journal_dir)?;
        info!(root = %self.root.display(), "initialized journal");
        Ok(())
    }
}

impl JournalStore for FileSystemRepository {
    fn create(&mut self, draft: EntryDraft) -> Result<JournalEntry> {
        self.modify(|log| log.create(draft))
    }

    fn update(&mut self, id: EntryId, draft: EntryDraft) -> Result<JournalEntry> {
        self.modify(|log| log.update(id, draft))
    }

    fn delete(&mut self, id: EntryId) -> Result<()> {
        self.modify(|log| log.delete(id))
    }

    fn get(&self, id: EntryId) -> Result<JournalEntry> {
        self.load()?.get(id)
    }

    fn list_all(&self, criteria: &EntryFilter) -> Result<Vec<JournalEntry>> {
        Ok(self.load()?.matching(criteria))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Mood;
    use chrono::{DateTime, FixedOffset, TimeZone};
    use tempfile::TempDir;

    fn at(day: u32) -> DateTime<FixedOffset> {
        FixedOffset::east_opt(3600)
            .unwrap()
            .with_ymd_and_hms(2025, 2, day, 12, 0, 0)
            .unwrap()
    }

    fn draft(title: &str, content: &str, day: u32) -> EntryDraft {
        EntryDraft::classify(title, content, at(day))
    }

    fn init_repo(temp: &TempDir) -> FileSystemRepository {
        let repo = FileSystemRepository::new(temp.path().to_path_buf());
        repo.initialize().unwrap();
        repo.save_config(&Config::new()).unwrap();
        repo
    }

    #[test]
    fn test_initialize_creates_directory() {
        let temp = TempDir::new().unwrap();
        let repo = FileSystemRepository::new(temp.path().to_path_buf());

        assert!(!repo.is_initialized());
        repo.initialize().unwrap();
        assert!(repo.is_initialized());
        assert!(temp.path().join(".moodj").is_dir());
    }

    #[test]
    fn test_initialize_twice_fails() {
        let temp = TempDir::new().unwrap();
        let repo = FileSystemRepository::new(temp.path().to_path_buf());
        repo.initialize().unwrap();
        assert!(repo.initialize().is_err());
    }

    #[test]
    fn test_discover_from_subdirectory() {
        let temp = TempDir::new().unwrap();
        init_repo(&temp);
        let nested = temp.path().join("a").join("b");
        fs::create_dir_all(&nested).unwrap();

        let repo = FileSystemRepository::discover_from(&nested).unwrap();
        assert_eq!(repo.root, temp.path());
    }

    #[test]
    fn test_discover_from_outside_journal() {
        let temp = TempDir::new().unwrap();
        let result = FileSystemRepository::discover_from(temp.path());
        assert!(matches!(result, Err(MoodjError::NotJournalDirectory(_))));
    }

    #[test]
    fn test_empty_journal_lists_nothing() {
        let temp = TempDir::new().unwrap();
        let repo = init_repo(&temp);
        assert!(repo.list_all(&EntryFilter::default()).unwrap().is_empty());
    }

    #[test]
    fn test_create_persists_and_orders_newest_first() {
        let temp = TempDir::new().unwrap();
        let mut repo = init_repo(&temp);

        let first = repo.create(draft("One", "a great start", 1)).unwrap();
        let second = repo.create(draft("Two", "I feel so tired", 2)).unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);

        let reopened = FileSystemRepository::new(temp.path().to_path_buf());
        let entries = reopened.list_all(&EntryFilter::default()).unwrap();
        let ids: Vec<u64> = entries.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![2, 1]);
        assert_eq!(entries[0].mood, Mood::Exhausted);
        assert_eq!(entries[1].created_at, at(1));
    }

    #[test]
    fn test_update_keeps_id_and_created_at() {
        let temp = TempDir::new().unwrap();
        let mut repo = init_repo(&temp);
        let entry = repo.create(draft("One", "a great start", 1)).unwrap();

        let updated = repo
            .update(entry.id, draft("One", "now I'm furious", 4))
            .unwrap();

        assert_eq!(updated.id, entry.id);
        assert_eq!(updated.created_at, at(1));
        assert_eq!(updated.updated_at, at(4));
        assert_eq!(repo.get(entry.id).unwrap().mood, Mood::Angry);
    }

    #[test]
    fn test_update_missing_id() {
        let temp = TempDir::new().unwrap();
        let mut repo = init_repo(&temp);
        let result = repo.update(7, draft("x", "content", 1));
        assert!(matches!(result, Err(MoodjError::NotFound(7))));
    }

    #[test]
    fn test_empty_content_rejected_without_side_effects() {
        let temp = TempDir::new().unwrap();
        let mut repo = init_repo(&temp);
        repo.create(draft("One", "hello", 1)).unwrap();

        let result = repo.create(draft("Two", "   ", 2));
        assert!(matches!(result, Err(MoodjError::InvalidInput(_))));
        assert_eq!(repo.list_all(&EntryFilter::default()).unwrap().len(), 1);
    }

    #[test]
    fn test_deleted_ids_are_not_reused() {
        let temp = TempDir::new().unwrap();
        let mut repo = init_repo(&temp);
        repo.create(draft("One", "a", 1)).unwrap();
        let second = repo.create(draft("Two", "b", 2)).unwrap();

        repo.delete(second.id).unwrap();
        assert!(matches!(
            repo.delete(second.id),
            Err(MoodjError::NotFound(_))
        ));

        let third = repo.create(draft("Three", "c", 3)).unwrap();
        assert_eq!(third.id, 3);
    }

    #[test]
    fn test_hand_edited_file_is_normalized() {
        let temp = TempDir::new().unwrap();
        let repo = init_repo(&temp);
        fs::write(
            temp.path().join(".moodj/entries.toml"),
            r#"
[[entry]]
id = 5
title = ""
content = "imported"
mood = "Elated"
reflection = "outdated text"
created_at = "2025-02-01T08:00:00+01:00"

[[entry]]
id = 2
content = "older"
created_at = "2025-01-01T08:00:00+01:00"
"#,
        )
        .unwrap();

        let log = repo.load().unwrap();
        assert_eq!(log.entries().len(), 2);
        assert!(log.entries().iter().all(|e| e.mood == Mood::Neutral));
        assert_eq!(log.entries()[0].title, "Untitled Journal");

        // next_id was missing; allocation continues past the highest id.
        let mut repo = repo;
        let created = repo.create(draft("New", "fresh", 3)).unwrap();
        assert_eq!(created.id, 6);
    }

    #[test]
    fn test_load_outside_journal() {
        let temp = TempDir::new().unwrap();
        let repo = FileSystemRepository::new(temp.path().to_path_buf());
        assert!(matches!(
            repo.load(),
            Err(MoodjError::NotJournalDirectory(_))
        ));
    }
}
