#![allow(dead_code)]

use assert_cmd::Command;
use assert_fs::TempDir;
use assert_fs::prelude::{FileWriteStr, PathChild};
use rstest::fixture;
use std::path::{Path, PathBuf};

#[fixture]
pub fn workspace_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

#[fixture]
pub fn old_text() -> String {
    "line1\nline2\nline3\nline4".to_string()
}

#[fixture]
pub fn new_text() -> String {
    "line2\nline3_modified\nline4\nline5".to_string()
}

/// Writes `old.txt` and `new.txt` into `dir` and returns their paths.
pub fn write_inputs(dir: &TempDir, old: &str, new: &str) -> (PathBuf, PathBuf) {
    let old_file = dir.child("old.txt");
    let new_file = dir.child("new.txt");
    old_file.write_str(old).expect("Failed to write old text");
    new_file.write_str(new).expect("Failed to write new text");

    (old_file.path().to_path_buf(), new_file.path().to_path_buf())
}

pub fn run_redline_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("redline").expect("Failed to find redline binary");
    cmd.env_remove("REDLINE_HOME");
    cmd.env_remove("RUST_LOG");
    cmd.current_dir(dir);
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}

pub fn stdout_of(cmd: &mut Command) -> String {
    let output = cmd.assert().success();
    String::from_utf8(output.get_output().stdout.clone()).expect("stdout is not UTF-8")
}
