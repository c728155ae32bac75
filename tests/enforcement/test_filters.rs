// Path and file filtering during collection.

use wtfd_core::config::ScanConfiguration;
use wtfd_enforce::engine::ScanEngine;
use wtfd_parsers::resolver::StaticResolver;

use crate::common::{setup_project, write_file};

const UNDOCUMENTED: &str = "def undocumented():\n    pass\n";

fn collected_names(config: ScanConfiguration) -> Vec<String> {
    let engine = ScanEngine::new(config, Box::new(StaticResolver::new()));
    engine
        .collect()
        .unwrap()
        .files
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
        .collect()
}

#[test]
/// Files inside `migrations` and `tests` directories are never visited.
fn test_migrations_and_tests_directories_are_pruned() {
    let dir = setup_project(&[
        ("shop/models.py", UNDOCUMENTED),
        ("shop/migrations/0001_initial.py", UNDOCUMENTED),
        ("shop/migrations/nested/deep.py", UNDOCUMENTED),
        ("shop/tests/factories.py", UNDOCUMENTED),
    ]);
    assert_eq!(collected_names(ScanConfiguration::new(dir.path())), vec!["models.py"]);
}

#[test]
/// Directories merely containing the words are kept.
fn test_similar_directory_names_are_kept() {
    let dir = setup_project(&[
        ("shop/migrations_old/a.py", UNDOCUMENTED),
        ("shop/Tests/b.py", UNDOCUMENTED),
    ]);
    assert_eq!(
        collected_names(ScanConfiguration::new(dir.path())),
        vec!["b.py", "a.py"]
    );
}

#[test]
/// Filenames containing `test` and non-Python files are excluded.
fn test_file_filter() {
    let dir = setup_project(&[
        ("app/test_views.py", UNDOCUMENTED),
        ("app/views_test.py", UNDOCUMENTED),
        ("app/contest.py", UNDOCUMENTED),
        ("app/README.md", "# readme\n"),
        ("app/views.pyc", ""),
        ("app/Testing.py", UNDOCUMENTED),
    ]);
    assert_eq!(collected_names(ScanConfiguration::new(dir.path())), vec!["Testing.py"]);
}

#[test]
/// Dunder files are scanned unless skipping is switched on.
fn test_dunder_files_toggle() {
    let dir = setup_project(&[("pkg/__init__.py", UNDOCUMENTED), ("pkg/core.py", UNDOCUMENTED)]);

    assert_eq!(
        collected_names(ScanConfiguration::new(dir.path())),
        vec!["__init__.py", "core.py"]
    );
    assert_eq!(
        collected_names(ScanConfiguration::new(dir.path()).with_skip_dunder_files(true)),
        vec!["core.py"]
    );
}

#[test]
/// A `.wtfdignore` file prunes matching paths.
fn test_ignore_file_prunes_paths() {
    let dir = setup_project(&[
        ("app/views.py", UNDOCUMENTED),
        ("vendor/lib.py", UNDOCUMENTED),
        ("app/generated.py", UNDOCUMENTED),
    ]);
    write_file(dir.path(), ".wtfdignore", "vendor/\ngenerated.py\n");

    assert_eq!(collected_names(ScanConfiguration::new(dir.path())), vec!["views.py"]);
}

#[test]
/// Configured ignore patterns prune matching paths.
fn test_ignore_patterns_prune_paths() {
    let dir = setup_project(&[("app/views.py", UNDOCUMENTED), ("build/out.py", UNDOCUMENTED)]);
    let config =
        ScanConfiguration::new(dir.path()).with_ignore_patterns(vec!["build/".to_string()]);

    assert_eq!(collected_names(config), vec!["views.py"]);
}

#[cfg(unix)]
#[test]
/// A symlinked module is scanned like a regular file.
fn test_symlinked_file_is_collected() {
    let dir = setup_project(&[("real/impl_mod.py", UNDOCUMENTED)]);
    std::fs::create_dir_all(dir.path().join("app")).unwrap();
    std::os::unix::fs::symlink(
        dir.path().join("real/impl_mod.py"),
        dir.path().join("app/linked.py"),
    )
    .unwrap();

    assert_eq!(
        collected_names(ScanConfiguration::new(dir.path())),
        vec!["linked.py", "impl_mod.py"]
    );
}
