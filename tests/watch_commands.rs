use crate::common::{
    new_text, old_text, run_redline_command, stdout_of, workspace_dir, write_inputs,
};
use assert_fs::TempDir;
use assert_fs::prelude::PathChild;
use predicates::prelude::{Predicate, predicate};
use rstest::rstest;

mod common;

#[rstest]
fn single_poll_prints_comparison_and_auto_saves(
    workspace_dir: TempDir,
    old_text: String,
    new_text: String,
) -> Result<(), Box<dyn std::error::Error>> {
    write_inputs(&workspace_dir, &old_text, &new_text);

    let actual_output = stdout_of(&mut run_redline_command(
        workspace_dir.path(),
        &[
            "watch",
            "--old",
            "old.txt",
            "--new",
            "new.txt",
            "--iterations",
            "1",
            "--interval-ms",
            "10",
            "--debounce-ms",
            "10",
        ],
    ));

    assert!(predicate::str::is_match(r"^\[\d{2}:\d{2}:\d{2}\]\n")?.eval(&actual_output));
    assert!(actual_output.ends_with(
        "  line2\n+ line3_modified\n  line4\n~ line5\nDiff Stats: Added: 1 | Changed: 1 | Removed: 2\n"
    ));

    let saved_new = std::fs::read_to_string(workspace_dir.child(".redline").child("new.txt").path())?;
    pretty_assertions::assert_eq!(saved_new, new_text);

    Ok(())
}

#[rstest]
fn watch_keeps_running_after_blank_input(workspace_dir: TempDir) {
    write_inputs(&workspace_dir, "old", "");

    run_redline_command(
        workspace_dir.path(),
        &[
            "watch",
            "--old",
            "old.txt",
            "--new",
            "new.txt",
            "--iterations",
            "2",
            "--interval-ms",
            "10",
        ],
    )
    .assert()
    .success()
    .stdout(predicate::str::contains(
        "Please enter both old and new text.",
    ));
}

#[rstest]
fn watch_rejects_stdin(workspace_dir: TempDir) {
    write_inputs(&workspace_dir, "old", "new");

    run_redline_command(
        workspace_dir.path(),
        &["watch", "--old", "-", "--new", "new.txt", "--iterations", "1"],
    )
    .assert()
    .failure()
    .stderr(predicate::str::contains("stdin"));
}

#[rstest]
#[case("0")]
#[case("many")]
fn watch_rejects_invalid_iterations(workspace_dir: TempDir, #[case] iterations: &str) {
    write_inputs(&workspace_dir, "old", "new");

    run_redline_command(
        workspace_dir.path(),
        &[
            "watch",
            "--old",
            "old.txt",
            "--new",
            "new.txt",
            "--iterations",
            iterations,
        ],
    )
    .assert()
    .failure()
    .stderr(predicate::str::contains("--iterations"));

    assert!(!workspace_dir.child(".redline").child("old.txt").exists());
}

#[rstest]
#[case("0")]
#[case("soon")]
fn watch_rejects_invalid_interval(workspace_dir: TempDir, #[case] interval: &str) {
    write_inputs(&workspace_dir, "old", "new");

    run_redline_command(
        workspace_dir.path(),
        &[
            "watch",
            "--old",
            "old.txt",
            "--new",
            "new.txt",
            "--interval-ms",
            interval,
        ],
    )
    .assert()
    .failure()
    .stderr(predicate::str::contains("--interval-ms"));
}
