#![allow(dead_code)]

use assert_cmd::Command;
use std::path::Path;

pub fn moodj_cmd() -> Command {
    let mut cmd = Command::cargo_bin("moodj").unwrap();
    cmd.env_remove("MOODJ_ROOT");
    cmd.env_remove("MOODJ_PRINCIPAL");
    cmd.env_remove("MOODJ_LOG");
    cmd.env_remove("EDITOR");
    cmd.env_remove("VISUAL");
    cmd
}

/// Initialize a journal in `dir` and log in as "tester"
pub fn init_logged_in(dir: &Path) {
    moodj_cmd().arg("init").arg(dir).assert().success();
    moodj_cmd()
        .current_dir(dir)
        .args(["login", "tester"])
        .assert()
        .success();
}

/// Write an entry with inline content
pub fn write_entry(dir: &Path, title: &str, content: &str) {
    moodj_cmd()
        .current_dir(dir)
        .args(["write", "--title", title, "--content", content])
        .assert()
        .success();
}
