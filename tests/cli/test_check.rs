// Tests for `wtfd check` output.

use crate::common::{run_wtfd, setup_project, write_file};

#[test]
/// A clean project produces no output at all.
fn test_check_clean_project_is_silent() {
    let dir = setup_project(&[(
        "shop/models.py",
        "class Order:\n    \"\"\"An order.\"\"\"\n",
    )]);
    let out = run_wtfd(dir.path(), &["check"]);
    assert_eq!(out.status.code(), Some(0));
    assert!(out.stdout.is_empty(), "stdout: {}", String::from_utf8_lossy(&out.stdout));
}

#[test]
/// Violations are listed on stdout with file, line, kind and name.
fn test_check_lists_violations() {
    let dir = setup_project(&[
        ("shop/models.py", "class Order:\n    pass\n"),
        ("shop/views.py", "\"\"\"Views.\"\"\"\n\ndef index(request):\n    pass\n"),
    ]);
    let out = run_wtfd(dir.path(), &["check"]);
    assert_eq!(out.status.code(), Some(0));

    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.starts_with("Missing docstrings (2):\n"), "stdout: {stdout}");
    assert!(stdout.contains("models.py:1: class `Order`"));
    assert!(stdout.contains("views.py:3: function `index`"));
    assert!(stdout.contains("2 missing docstring(s) in 2 file(s), 2 file(s) scanned"));
}

#[test]
/// `--exclude` adds to the default `Meta` exclusion.
fn test_check_exclude_flag() {
    let dir = setup_project(&[(
        "forms.py",
        "class F:\n    \"\"\"Form.\"\"\"\n    class Meta:\n        pass\n    class Config:\n        pass\n",
    )]);
    let out = run_wtfd(dir.path(), &["check"]);
    assert!(String::from_utf8_lossy(&out.stdout).contains("`Config`"));

    let out = run_wtfd(dir.path(), &["check", "--exclude", "config"]);
    assert_eq!(out.status.code(), Some(0));
    assert!(out.stdout.is_empty());
}

#[test]
/// `--app` limits the scan to the named module roots.
fn test_check_app_flag() {
    let dir = setup_project(&[
        ("shop/models.py", "def total():\n    pass\n"),
        ("billing/invoice.py", "def issue():\n    pass\n"),
    ]);
    let out = run_wtfd(dir.path(), &["check", "--app", "billing"]);
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("`issue`"));
    assert!(!stdout.contains("`total`"));
}

#[test]
/// An unresolvable app is a warning, not a failure.
fn test_check_unresolved_app_warns() {
    let dir = setup_project(&[("shop/models.py", "def total():\n    pass\n")]);
    let out = run_wtfd(dir.path(), &["check", "--strict", "--app", "nonexistent_app"]);
    assert_eq!(out.status.code(), Some(0));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("could not resolve module root `nonexistent_app`"), "stderr: {stderr}");
}

#[test]
/// Settings in `.wtfd/wtfd.json` apply without flags.
fn test_check_reads_config_file() {
    let dir = setup_project(&[("shop/models.py", "def total():\n    pass\n")]);
    write_file(dir.path(), ".wtfd/wtfd.json", r#"{ "strict": true }"#);

    let out = run_wtfd(dir.path(), &["check"]);
    assert_eq!(out.status.code(), Some(1));
}

#[test]
/// `--path` points the scan at another directory.
fn test_check_path_flag() {
    let dir = setup_project(&[("project/app.py", "def run():\n    pass\n")]);
    let out = run_wtfd(dir.path(), &["check", "--path", "project"]);
    assert_eq!(out.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&out.stdout).contains("`run`"));
}

#[test]
/// A broken file is skipped with a warning by default.
fn test_check_skips_broken_file() {
    let dir = setup_project(&[
        ("broken.py", "def broken(:\n    pass\n"),
        ("fine.py", "def fine():\n    \"\"\"Fine.\"\"\"\n"),
    ]);
    let out = run_wtfd(dir.path(), &["check"]);
    assert_eq!(out.status.code(), Some(0));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("wtfd: warning: skipping"), "stderr: {stderr}");
    assert!(stderr.contains("broken.py"));
}

#[test]
/// `--json` emits the full report as JSON.
fn test_check_json_output() {
    let dir = setup_project(&[("views.py", "def index():\n    pass\n")]);
    let out = run_wtfd(dir.path(), &["--json", "check", "--strict"]);
    assert_eq!(out.status.code(), Some(1));

    let json: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(json["strict_mode"], true);
    assert_eq!(json["files_scanned"], 1);
    let violations = json["violations"].as_array().unwrap();
    assert_eq!(violations.len(), 1);
    assert_eq!(violations[0]["name"], "index");
    assert_eq!(violations[0]["kind"], "function");
    assert_eq!(violations[0]["line"], 1);
}

#[test]
/// `--json` on a clean project still prints a report.
fn test_check_json_clean() {
    let dir = setup_project(&[("views.py", "def index():\n    'Index.'\n")]);
    let out = run_wtfd(dir.path(), &["check", "--json"]);
    assert_eq!(out.status.code(), Some(0));

    let json: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(json["violations"].as_array().unwrap().len(), 0);
}
