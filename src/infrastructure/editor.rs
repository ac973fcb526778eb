//! Editor integration for composing journal entries

use crate::error::{MoodjError, Result};
use std::path::Path;
use std::process::Command;
use tracing::debug;

/// Session for editing a draft file in an external editor
pub struct EditorSession {
    command: String,
}

impl EditorSession {
    /// Create a new editor session with the given command
    pub fn new(editor_command: String) -> Self {
        EditorSession {
            command: editor_command,
        }
    }

    /// Open a file in the editor and wait for it to close
    pub fn edit(&self, file_path: &Path) -> Result<()> {
        let (program, args) = self.parse_command();

        let mut all_args = args;
        all_args.push(file_path.to_string_lossy().to_string());
        debug!(editor = %program, ?all_args, "launching editor");

        // On Windows, use cmd /c to ensure .bat and .cmd files are found
        #[cfg(windows)]
        let status = Command::new("cmd")
            .arg("/C")
            .arg(&program)
            .args(&all_args)
            .status();

        #[cfg(not(windows))]
        let status = Command::new(&program).args(&all_args).status();

        let status = status.map_err(|e| {
            MoodjError::Editor(format!("Failed to launch editor '{}': {}", program, e))
        })?;

        if !status.success() {
            return Err(MoodjError::Editor(format!(
                "Editor '{}' exited with {}",
                program, status
            )));
        }

        Ok(())
    }

    /// Parse command into program and arguments
    fn parse_command(&self) -> (String, Vec<String>) {
        let parts: Vec<&str> = self.command.split_whitespace().collect();

        if parts.is_empty() {
            let fallback = if cfg!(windows) { "notepad" } else { "nano" };
            return (fallback.to_string(), vec![]);
        }

        let program = parts[0].to_string();
        let args = parts[1..].iter().map(|s| s.to_string()).collect();

        (program, args)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_command_with_args() {
        let session = EditorSession::new("code -w".to_string());
        let (program, args) = session.parse_command();

        assert_eq!(program, "code");
        assert_eq!(args, vec!["-w"]);
    }

    #[test]
    fn test_parse_command_empty() {
        let session = EditorSession::new("   ".to_string());
        let (program, args) = session.parse_command();

        assert!(program == "nano" || program == "notepad");
        assert!(args.is_empty());
    }

    #[test]
    fn test_missing_editor_is_reported() {
        let session = EditorSession::new("moodj-no-such-editor-binary".to_string());
        let result = session.edit(Path::new("draft.md"));
        assert!(matches!(result, Err(MoodjError::Editor(_))));
    }

    #[cfg(unix)]
    #[test]
    fn test_failing_editor_is_reported() {
        let session = EditorSession::new("false".to_string());
        let result = session.edit(Path::new("draft.md"));
        match result {
            Err(MoodjError::Editor(msg)) => assert!(msg.contains("exited")),
            other => panic!("expected editor error, got {:?}", other),
        }
    }
}
