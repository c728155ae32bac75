// Tests for CLI exit code behavior.

use std::process::Command;

use crate::common::{run_wtfd, setup_project, wtfd_bin};

#[test]
/// Exit code 0 when every declaration is documented.
fn test_exit_code_0_clean() {
    let dir = setup_project(&[("app.py", "def run():\n    \"\"\"Run.\"\"\"\n")]);
    assert_eq!(run_wtfd(dir.path(), &["check", "--strict"]).status.code(), Some(0));
}

#[test]
/// Exit code 0 for violations in permissive mode.
fn test_exit_code_0_permissive_violations() {
    let dir = setup_project(&[("app.py", "def run():\n    pass\n")]);
    assert_eq!(run_wtfd(dir.path(), &["check"]).status.code(), Some(0));
}

#[test]
/// Exit code 1 for violations in strict mode, with the summary on stdout.
fn test_exit_code_1_strict_violations() {
    let dir = setup_project(&[("app.py", "def run():\n    pass\n")]);
    let out = run_wtfd(dir.path(), &["check", "--strict"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stdout).contains("app.py:1: function `run`"));
    assert!(String::from_utf8_lossy(&out.stderr).contains("wtfd: error: 1 missing docstring(s)"));
}

#[test]
/// `WTFD_STRICT` switches strict mode on like the flag.
fn test_exit_code_1_strict_from_env() {
    let dir = setup_project(&[("app.py", "def run():\n    pass\n")]);
    let out = Command::new(wtfd_bin())
        .arg("check")
        .current_dir(dir.path())
        .env("WTFD_STRICT", "true")
        .env_remove("WTFD_APPS")
        .output()
        .unwrap();
    assert_eq!(out.status.code(), Some(1));
}

#[test]
/// Exit code 2 when the scan path is not a directory.
fn test_exit_code_2_missing_path() {
    let dir = setup_project(&[]);
    let out = run_wtfd(dir.path(), &["check", "--path", "does/not/exist"]);
    assert_eq!(out.status.code(), Some(2));
}

#[test]
/// Exit code 2 when parse errors are fatal.
fn test_exit_code_2_fatal_parse_error() {
    let dir = setup_project(&[("broken.py", "class Broken(\n")]);
    let out = run_wtfd(dir.path(), &["check", "--fail-on-parse-error"]);
    assert_eq!(out.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&out.stderr).contains("wtfd check: failed to parse"));
}

#[test]
/// Exit code 2 for an invalid configured ignore pattern.
fn test_exit_code_2_bad_ignore_pattern() {
    let dir = setup_project(&[
        ("app.py", "def run():\n    pass\n"),
        (".wtfd/wtfd.json", r#"{ "ignore_patterns": ["["] }"#),
    ]);
    assert_eq!(run_wtfd(dir.path(), &["check"]).status.code(), Some(2));
}

#[test]
/// Exit code 2 for an unsupported completion shell.
fn test_exit_code_2_unknown_shell() {
    let dir = setup_project(&[]);
    assert_eq!(run_wtfd(dir.path(), &["completion", "tcsh"]).status.code(), Some(2));
}
