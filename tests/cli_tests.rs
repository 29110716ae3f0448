use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

/// Point the search at a closed local port so lookups fail fast and the app
/// falls back to "no candidates found" without touching the network.
fn offline_cmd() -> Command {
    let mut cmd = Command::cargo_bin("animewizard").unwrap();
    cmd.env("ANILIST_ENDPOINT", "http://127.0.0.1:9/graphql")
        .env("ANILIST_TIMEOUT_SECS", "2")
        .env("NO_COLOR", "1");
    cmd
}

#[test]
fn test_help_flag() {
    Command::cargo_bin("animewizard")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Interactively rename anime folders"));
}

#[test]
fn test_version_flag() {
    Command::cargo_bin("animewizard")
        .unwrap()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_missing_target_dir() {
    Command::cargo_bin("animewizard")
        .unwrap()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_nonexistent_target_dir() {
    offline_cmd()
        .arg("/nonexistent/anime/library")
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("does not exist"));
}

#[test]
fn test_target_is_a_file() {
    let dir = tempdir().unwrap();
    let file_path = dir.path().join("not-a-dir");
    std::fs::write(&file_path, "x").unwrap();

    offline_cmd()
        .arg(file_path.to_str().unwrap())
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("not a directory"));
}

#[test]
fn test_no_subfolders_is_informational() {
    let dir = tempdir().unwrap();

    offline_cmd()
        .arg(dir.path().to_str().unwrap())
        .assert()
        .success()
        .stdout(predicate::str::contains("No subfolders found"));
}

#[test]
fn test_skip_all_folders() {
    let dir = tempdir().unwrap();
    std::fs::create_dir(dir.path().join("Attack on Titan (2013) [BD]")).unwrap();
    std::fs::create_dir(dir.path().join("Monster")).unwrap();

    offline_cmd()
        .arg(dir.path().to_str().unwrap())
        .write_stdin("s\ns\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("SESSION SUMMARY"))
        .stdout(predicate::str::contains("Attack on Titan (2013) [BD] (skipped)"))
        .stdout(predicate::str::contains("Monster (skipped)"))
        .stdout(predicate::str::contains("0 folders renamed, 2 skipped."));

    // Nothing was touched
    assert!(dir.path().join("Attack on Titan (2013) [BD]").exists());
    assert!(dir.path().join("Monster").exists());
}

#[test]
fn test_quit_ends_session_early() {
    let dir = tempdir().unwrap();
    std::fs::create_dir(dir.path().join("Some Show")).unwrap();

    offline_cmd()
        .arg(dir.path().to_str().unwrap())
        .write_stdin("q\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("No folders were processed."));
}

#[test]
fn test_stdin_eof_ends_session() {
    let dir = tempdir().unwrap();
    std::fs::create_dir(dir.path().join("Some Show")).unwrap();

    offline_cmd()
        .arg(dir.path().to_str().unwrap())
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("SESSION SUMMARY"));
}

#[test]
fn test_dry_run_renames_nothing() {
    let dir = tempdir().unwrap();
    std::fs::create_dir(dir.path().join("Some Show")).unwrap();

    offline_cmd()
        .args(["--dry", dir.path().to_str().unwrap()])
        .write_stdin("s\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("DRY RUN"))
        .stdout(predicate::str::contains("Nothing was changed"));

    assert!(dir.path().join("Some Show").exists());
}
