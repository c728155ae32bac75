//! Map dotted Python module names to directories on disk.
//!
//! The engine only ever sees the [`ModuleResolver`] trait; nothing here
//! imports or executes Python.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Environment variable holding extra search path entries.
pub const PYTHONPATH_ENV: &str = "PYTHONPATH";

/// Locates the directory of a configured module root.
pub trait ModuleResolver {
    /// Directory to scan for `name`, or `None` when it cannot be found.
    fn resolve(&self, name: &str) -> Option<PathBuf>;
}

/// Resolves names against an ordered list of search directories, first hit
/// wins.
#[derive(Debug, Clone, Default)]
pub struct SearchPathResolver {
    search_path: Vec<PathBuf>,
}

impl SearchPathResolver {
    pub fn new(search_path: Vec<PathBuf>) -> Self {
        Self { search_path }
    }

    /// Project root first, then every `PYTHONPATH` entry.
    pub fn from_env(project_root: &Path) -> Self {
        let mut search_path = vec![project_root.to_path_buf()];
        if let Some(extra) = std::env::var_os(PYTHONPATH_ENV) {
            search_path.extend(std::env::split_paths(&extra).filter(|p| !p.as_os_str().is_empty()));
        }
        Self { search_path }
    }

    pub fn search_path(&self) -> &[PathBuf] {
        &self.search_path
    }
}

impl ModuleResolver for SearchPathResolver {
    fn resolve(&self, name: &str) -> Option<PathBuf> {
        self.search_path
            .iter()
            .find_map(|base| resolve_module_dir(base, name))
    }
}

/// Fixed name → directory mapping.
#[derive(Debug, Clone, Default)]
pub struct StaticResolver {
    roots: HashMap<String, PathBuf>,
}

impl StaticResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: &str, dir: impl Into<PathBuf>) -> Self {
        self.roots.insert(name.to_string(), dir.into());
        self
    }
}

impl ModuleResolver for StaticResolver {
    fn resolve(&self, name: &str) -> Option<PathBuf> {
        self.roots.get(name).cloned()
    }
}

/// Resolve a dotted module path (e.g. `a.b.c`) below `base_dir`.
///
/// Every segment except the last must be a directory. The last segment
/// resolves to its package directory (with or without `__init__.py`), or,
/// for a plain `c.py` module, to the directory that contains it.
pub fn resolve_module_dir(base_dir: &Path, module_path: &str) -> Option<PathBuf> {
    let parts: Vec<&str> = module_path.split('.').collect();
    if parts.iter().any(|p| !is_identifier(p)) {
        return None;
    }

    let mut current = base_dir.to_path_buf();
    for part in &parts[..parts.len() - 1] {
        let pkg_dir = current.join(part);
        if !pkg_dir.is_dir() {
            return None;
        }
        current = pkg_dir;
    }

    let last = parts.last()?;
    let as_pkg = current.join(last);
    if as_pkg.is_dir() {
        Some(as_pkg)
    } else if current.join(format!("{last}.py")).is_file() {
        Some(current)
    } else {
        None
    }
}

fn is_identifier(segment: &str) -> bool {
    let mut chars = segment.chars();
    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_alphanumeric() || c == '_')
}
