//! End-to-end checks of the copier-gh binary

use assert_cmd::Command;
use predicates::prelude::*;

/// Binary with an isolated cache and endpoints nobody listens on
fn copier_gh(cache: &tempfile::TempDir) -> Command {
    let mut cmd = Command::cargo_bin("copier-gh").unwrap();
    cmd.env("COPIER_GH_CACHE_DIR", cache.path())
        .env("COPIER_GH_API_URL", "http://127.0.0.1:9/")
        .env("COPIER_GH_RAW_URL", "http://127.0.0.1:9/")
        .env_remove("COPIER_GH_TOOL");
    cmd
}

#[test]
fn test_missing_value_fails_before_any_work() {
    let cache = tempfile::tempdir().unwrap();
    copier_gh(&cache)
        .args(["update", "--gh-data"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("--gh-data requires a value"));
    assert_eq!(std::fs::read_dir(cache.path()).unwrap().count(), 0);
}

#[test]
fn test_malformed_reference() {
    let cache = tempfile::tempdir().unwrap();
    copier_gh(&cache)
        .args(["copy", "--gh-data", "gh:acme/widgets"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid GitHub path format"));
}

#[test]
fn test_missing_tool() {
    let cache = tempfile::tempdir().unwrap();
    copier_gh(&cache)
        .env("COPIER_GH_TOOL", "copier-gh-no-such-tool-4821")
        .args(["copy", "--gh-data", "gh:acme/widgets@dev/config.yaml"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("command not found"));
    assert!(!cache.path().join("acme").exists());
}

#[test]
fn test_tool_exit_code_is_propagated() {
    let cache = tempfile::tempdir().unwrap();
    copier_gh(&cache)
        .env("COPIER_GH_TOOL", "sh")
        .args(["-c", "exit 4"])
        .assert()
        .code(4);
}

#[test]
fn test_local_data_file_is_forwarded() {
    let cache = tempfile::tempdir().unwrap();
    copier_gh(&cache)
        .env("COPIER_GH_TOOL", "sh")
        .args([
            "-c",
            r#"printf '<%s>\n' "$0" "$1""#,
            "--gh-data",
            "local.yaml",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Data source: local.yaml"))
        .stdout(predicate::str::contains("<--data-file>\n<local.yaml>"));
}

#[test]
fn test_unreachable_host_is_fetch_failure() {
    let cache = tempfile::tempdir().unwrap();
    copier_gh(&cache)
        .env("COPIER_GH_TOOL", "sh")
        .args(["-c", "exit 0", "--gh-data", "gh:acme/widgets/config.yaml"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("master"))
        .stderr(predicate::str::contains("Failed to fetch"));
    assert!(!cache.path().join("acme/widgets/master_config.yaml").exists());
}

#[cfg(unix)]
#[test]
fn test_non_utf8_argument_is_forwarded() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let cache = tempfile::tempdir().unwrap();
    copier_gh(&cache)
        .env("COPIER_GH_TOOL", "sh")
        .arg("-c")
        .arg(r#"test "$0" = "$(printf 'caf\351')" && exit 5"#)
        .arg(OsStr::from_bytes(b"caf\xe9"))
        .assert()
        .code(5);
}
