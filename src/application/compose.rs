//! Compose entry text in an external editor

use crate::domain::draft::{parse_draft, render_draft, ParsedDraft};
use crate::error::Result;
use crate::infrastructure::{EditorSession, FileSystemRepository};
use chrono::Local;
use std::fs;

/// Open the draft file seeded with `title` and `content`, wait for the
/// editor to exit, and read back what was written.
///
/// The draft file is removed afterwards, also when the editor fails.
pub fn compose_in_editor(
    repository: &FileSystemRepository,
    editor: &EditorSession,
    title: &str,
    content: &str,
) -> Result<ParsedDraft> {
    let path = repository.draft_path();
    fs::write(&path, render_draft(title, content, Local::now().date_naive()))?;

    let edited = editor
        .edit(&path)
        .and_then(|_| fs::read_to_string(&path).map_err(Into::into));
    let _ = fs::remove_file(&path);

    Ok(parse_draft(&edited?))
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use crate::application::init::init;
    use crate::error::MoodjError;
    use tempfile::TempDir;

    #[test]
    fn test_noop_editor_returns_seeded_text() {
        let temp = TempDir::new().unwrap();
        let repo = init(temp.path()).unwrap();

        // `true` exits immediately without touching the file.
        let parsed = compose_in_editor(
            &repo,
            &EditorSession::new("true".to_string()),
            "Evening",
            "calm and tired",
        )
        .unwrap();

        assert_eq!(parsed.title, "Evening");
        assert_eq!(parsed.content, "calm and tired");
        assert!(!repo.draft_path().exists());
    }

    #[test]
    fn test_noop_editor_keeps_markup_and_comments() {
        let temp = TempDir::new().unwrap();
        let repo = init(temp.path()).unwrap();

        let parsed = compose_in_editor(
            &repo,
            &EditorSession::new("true".to_string()),
            "*big* day #",
            "I love <!-- my note --> my cat",
        )
        .unwrap();

        assert_eq!(parsed.title, "*big* day #");
        assert_eq!(parsed.content, "I love <!-- my note --> my cat");
    }

    #[test]
    fn test_failed_editor_cleans_up() {
        let temp = TempDir::new().unwrap();
        let repo = init(temp.path()).unwrap();

        let result = compose_in_editor(&repo, &EditorSession::new("false".to_string()), "", "");

        assert!(matches!(result, Err(MoodjError::Editor(_))));
        assert!(!repo.draft_path().exists());
    }
}
