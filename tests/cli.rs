use assert_cmd::Command;
use filetime::{FileTime, set_file_mtime};
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use std::time::{Duration, SystemTime};
use tempfile::tempdir;

const DAY: u64 = 24 * 60 * 60;

fn create_project(dir: &Path, days: u64) {
    fs::create_dir_all(dir).unwrap();
    let file = dir.join("main.rs");
    fs::write(&file, "fn main() {}").unwrap();

    let time = FileTime::from_system_time(SystemTime::now() - Duration::from_secs(days * DAY));
    set_file_mtime(&file, time).unwrap();
    set_file_mtime(dir, time).unwrap();
}

/// Project tree plus a config directory whose `mycoderc` uses absolute paths.
fn setup_test_directory() -> tempfile::TempDir {
    let dir = tempdir().unwrap();
    let root = dir.path();

    create_project(&root.join("code/alpha"), 10);
    create_project(&root.join("code/beta"), 1);
    create_project(&root.join("work/api"), 3);

    let rules = format!(
        "--add {code}\n--ad {code}\n\n[group:work]\n--add {work}\n}}\n",
        code = root.join("code").display(),
        work = root.join("work").display(),
    );
    fs::create_dir_all(root.join("cfg")).unwrap();
    fs::write(root.join("cfg/mycoderc"), rules).unwrap();
    // Never launch a real editor from the tests
    fs::write(root.join("cfg/settings.yaml"), "editor: \"true\"\n").unwrap();

    dir
}

fn mycode(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("mycode").unwrap();
    cmd.arg("--config-dir").arg(dir.join("cfg"));
    cmd
}

#[test]
fn test_show_global_most_recent_first() {
    let dir = setup_test_directory();

    mycode(dir.path())
        .arg("--show")
        .assert()
        .success()
        .stdout("beta\nalpha\n");
}

#[test]
fn test_show_groups_layout() {
    let dir = setup_test_directory();

    mycode(dir.path())
        .args(["--show", "groups"])
        .assert()
        .success()
        .stdout("Group: work\n  - api\n");
}

#[test]
fn test_show_named_group() {
    let dir = setup_test_directory();

    mycode(dir.path())
        .args(["--show", "work"])
        .assert()
        .success()
        .stdout("api\n");
}

#[test]
fn test_unknown_group_fails() {
    let dir = setup_test_directory();

    mycode(dir.path())
        .args(["--show", "personal"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("Group 'personal' not found."));
}

#[test]
fn test_unknown_project_fails() {
    let dir = setup_test_directory();

    mycode(dir.path())
        .arg("gamma")
        .assert()
        .failure()
        .stdout(predicate::str::contains("Project 'gamma' not found."));
}

#[cfg(unix)]
#[test]
fn test_open_project_runs_editor() {
    let dir = setup_test_directory();

    mycode(dir.path())
        .arg("alpha")
        .assert()
        .success()
        .stdout(predicate::str::contains("Opened project 'alpha'"));
}

#[test]
fn test_check_reports_ignored_lines() {
    let dir = setup_test_directory();

    mycode(dir.path())
        .arg("--check")
        .assert()
        .success()
        .stderr(predicate::str::contains(":2: unknown directive: --ad "));
}

#[test]
fn test_missing_rule_document_fails() {
    let dir = tempdir().unwrap();
    fs::create_dir_all(dir.path().join("cfg")).unwrap();

    mycode(dir.path())
        .arg("--show")
        .assert()
        .failure()
        .stderr(predicate::str::contains("mycoderc"));
}
