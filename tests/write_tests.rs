//! Integration tests for writing, editing, showing and deleting entries

#![allow(deprecated)]

use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

mod common;
use common::{init_logged_in, moodj_cmd, write_entry};

#[test]
fn test_write_classifies_and_reflects() {
    let temp = TempDir::new().unwrap();
    init_logged_in(temp.path());

    moodj_cmd()
        .current_dir(temp.path())
        .args(["write", "--title", "Today", "--content", "I am happy and proud today"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved entry #1 (happy)"))
        .stdout(predicate::str::contains("Your journal radiates positivity and joy!"));

    let stored = fs::read_to_string(temp.path().join(".moodj/entries.toml")).unwrap();
    assert!(stored.contains("mood = \"happy\""));
    assert!(stored.contains("title = \"Today\""));
}

#[test]
fn test_write_without_keywords_is_neutral() {
    let temp = TempDir::new().unwrap();
    init_logged_in(temp.path());

    moodj_cmd()
        .current_dir(temp.path())
        .args(["write", "--content", "nothing special happened"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(neutral)"))
        .stdout(predicate::str::contains("balanced tone"));

    moodj_cmd()
        .current_dir(temp.path())
        .args(["show", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("#1 Untitled Journal"));
}

#[test]
fn test_write_empty_content_fails() {
    let temp = TempDir::new().unwrap();
    init_logged_in(temp.path());

    moodj_cmd()
        .current_dir(temp.path())
        .args(["write", "--content", "   "])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("content cannot be empty"));

    assert!(!temp.path().join(".moodj/entries.toml").exists());
}

#[cfg(unix)]
#[test]
fn test_write_with_editor_that_leaves_draft_empty() {
    let temp = TempDir::new().unwrap();
    init_logged_in(temp.path());

    // `true` closes immediately, leaving only the template behind.
    moodj_cmd()
        .current_dir(temp.path())
        .env("EDITOR", "true")
        .arg("write")
        .assert()
        .code(3);

    assert!(!temp.path().join(".moodj/draft.md").exists());
}

#[cfg(unix)]
#[test]
fn test_edit_with_editor_keeps_existing_content() {
    let temp = TempDir::new().unwrap();
    init_logged_in(temp.path());
    write_entry(temp.path(), "Morning", "so tired today");

    moodj_cmd()
        .current_dir(temp.path())
        .env("EDITOR", "true")
        .args(["edit", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated entry #1 (exhausted)"));
}

#[cfg(unix)]
#[test]
fn test_unchanged_edit_keeps_title_and_content_verbatim() {
    let temp = TempDir::new().unwrap();
    init_logged_in(temp.path());
    write_entry(temp.path(), "Day #", "I love <!-- my note --> my cat");

    moodj_cmd()
        .current_dir(temp.path())
        .env("EDITOR", "true")
        .args(["edit", "1"])
        .assert()
        .success();

    moodj_cmd()
        .current_dir(temp.path())
        .args(["show", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("#1 Day #\n"))
        .stdout(predicate::str::contains("I love <!-- my note --> my cat"));
}

#[test]
fn test_edit_reclassifies_entry() {
    let temp = TempDir::new().unwrap();
    init_logged_in(temp.path());
    write_entry(temp.path(), "Morning", "a wonderful sunrise");

    moodj_cmd()
        .current_dir(temp.path())
        .args(["edit", "1", "--content", "then the train was late and I was furious"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated entry #1 (angry)"))
        .stdout(predicate::str::contains("frustration and anger"));

    moodj_cmd()
        .current_dir(temp.path())
        .args(["show", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("#1 Morning"))
        .stdout(predicate::str::contains("mood: angry"))
        .stdout(predicate::str::contains("radiates positivity").not());
}

#[test]
fn test_edit_missing_entry() {
    let temp = TempDir::new().unwrap();
    init_logged_in(temp.path());

    moodj_cmd()
        .current_dir(temp.path())
        .args(["edit", "9", "--content", "anything"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Journal entry not found: 9"));
}

#[test]
fn test_delete_entry() {
    let temp = TempDir::new().unwrap();
    init_logged_in(temp.path());
    write_entry(temp.path(), "One", "joy");
    write_entry(temp.path(), "Two", "cry");
    write_entry(temp.path(), "Three", "panic");

    moodj_cmd()
        .current_dir(temp.path())
        .args(["delete", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted entry #2"));

    moodj_cmd()
        .current_dir(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("One"))
        .stdout(predicate::str::contains("Three"))
        .stdout(predicate::str::contains("Two").not());

    moodj_cmd()
        .current_dir(temp.path())
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("Sad           0"));

    moodj_cmd()
        .current_dir(temp.path())
        .args(["delete", "2"])
        .assert()
        .code(4);

    // Ids of deleted entries are never handed out again.
    moodj_cmd()
        .current_dir(temp.path())
        .args(["write", "--content", "tears"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved entry #4"));
}

#[test]
fn test_tenth_entry_congratulates() {
    let temp = TempDir::new().unwrap();
    init_logged_in(temp.path());
    for i in 0..9 {
        write_entry(temp.path(), &format!("Day {}", i), "fine");
    }

    moodj_cmd()
        .current_dir(temp.path())
        .args(["write", "--content", "fine"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Congratulations! You have reached Streak Seeker Level 1!",
        ));

    moodj_cmd()
        .current_dir(temp.path())
        .args(["write", "--content", "fine"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Congratulations").not());
}
