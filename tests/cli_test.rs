#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::process::Command;

fn warehouse() -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_warehouse"));
    command
        .env_remove("WAREHOUSE_DIR")
        .env_remove("WAREHOUSE_CONFIG")
        .env_remove("WAREHOUSE_PORT");
    command
}

#[test]
fn test_help_lists_server_flags() {
    let output = warehouse().arg("--help").output().expect("run help");
    assert!(output.status.success());
    let text = String::from_utf8(output.stdout).expect("utf8 help");
    for flag in ["--port", "--dir", "--return-location", "--auth-user", "--log-json"] {
        assert!(text.contains(flag), "help lacks {flag}");
    }
}

#[test]
fn test_version_matches_crate() {
    let output = warehouse().arg("--version").output().expect("run version");
    assert!(output.status.success());
    let text = String::from_utf8(output.stdout).expect("utf8 version");
    assert!(text.contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_missing_custom_dir_fails_before_serving() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp directory");
    let missing = temp_dir.path().join("nowhere");
    let output = warehouse()
        .arg("--dir")
        .arg(&missing)
        .output()
        .expect("run with missing dir");
    assert!(!output.status.success());
    assert!(!missing.exists());
}

#[test]
fn test_unknown_flag_is_rejected() {
    let output = warehouse().arg("--no-such-flag").output().expect("run");
    assert_eq!(output.status.code(), Some(2));
}
