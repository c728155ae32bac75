//! Path and filename predicates applied before any file is opened.

use std::path::Path;

use crate::python::SOURCE_EXTENSION;

/// Directory suffixes whose whole subtree is never scanned.
const EXCLUDED_DIR_SUFFIXES: &[&str] = &["/migrations", "/tests"];

/// Whether the walk should descend into `path`.
pub fn is_valid_path(path: &Path) -> bool {
    let normalized = path
        .to_string_lossy()
        .replace(std::path::MAIN_SEPARATOR, "/");
    !EXCLUDED_DIR_SUFFIXES
        .iter()
        .any(|suffix| normalized.ends_with(suffix))
}

/// Whether a bare filename is an analysis target.
///
/// Module-init style names (`__init__.py`) are kept unless `skip_dunder_files`
/// is set.
pub fn is_candidate_file(name: &str, skip_dunder_files: bool) -> bool {
    !name.is_empty()
        && name.ends_with(SOURCE_EXTENSION)
        && !name.contains("test")
        && !(skip_dunder_files && name.starts_with("__"))
}
