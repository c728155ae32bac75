use std::path::{Path, PathBuf};

use ignore::overrides::OverrideBuilder;
use ignore::WalkBuilder;

use crate::filters::{is_candidate_file, is_valid_path};

/// Per-directory ignore file, gitignore syntax.
pub const IGNORE_FILENAME: &str = ".wtfdignore";

#[derive(Debug, thiserror::Error)]
pub enum WalkError {
    #[error("invalid ignore pattern `{pattern}`: {message}")]
    Pattern { pattern: String, message: String },
    #[error("failed to walk {path}: {message}")]
    Io { path: String, message: String },
}

/// Recursive discovery of candidate Python files under one root.
pub struct FileWalker {
    root: PathBuf,
    skip_dunder_files: bool,
    ignore_patterns: Vec<String>,
}

impl FileWalker {
    pub fn new(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
            skip_dunder_files: false,
            ignore_patterns: Vec::new(),
        }
    }

    pub fn skip_dunder_files(mut self, skip: bool) -> Self {
        self.skip_dunder_files = skip;
        self
    }

    pub fn ignore_patterns(mut self, patterns: &[String]) -> Self {
        self.ignore_patterns = patterns.to_vec();
        self
    }

    /// Candidate files in traversal order, paths joined onto the root.
    ///
    /// Pruned directories (see [`is_valid_path`]) are never entered, and
    /// files failing [`is_candidate_file`] are never opened. Hidden files and
    /// `.gitignore` are not consulted; only `.wtfdignore` and the configured
    /// patterns prune the walk.
    pub fn walk(&self) -> Result<Vec<PathBuf>, WalkError> {
        if !is_valid_path(&self.root) {
            return Ok(Vec::new());
        }

        let mut builder = WalkBuilder::new(&self.root);
        builder
            .standard_filters(false)
            .add_custom_ignore_filename(IGNORE_FILENAME)
            .sort_by_file_name(|a, b| a.cmp(b))
            .filter_entry(|entry| {
                let is_dir = entry.file_type().map_or(false, |ft| ft.is_dir());
                !is_dir || is_valid_path(entry.path())
            });

        if !self.ignore_patterns.is_empty() {
            let mut overrides = OverrideBuilder::new(&self.root);
            for pattern in &self.ignore_patterns {
                overrides
                    .add(&format!("!{pattern}"))
                    .map_err(|e| WalkError::Pattern {
                        pattern: pattern.clone(),
                        message: e.to_string(),
                    })?;
            }
            let overrides = overrides.build().map_err(|e| WalkError::Pattern {
                pattern: self.ignore_patterns.join(", "),
                message: e.to_string(),
            })?;
            builder.overrides(overrides);
        }

        let mut entries = Vec::new();
        for result in builder.build() {
            let entry = result.map_err(|e| WalkError::Io {
                path: self.root.display().to_string(),
                message: e.to_string(),
            })?;

            if !is_regular_or_linked_file(&entry) {
                continue;
            }
            let Some(name) = entry.file_name().to_str() else {
                continue;
            };
            if is_candidate_file(name, self.skip_dunder_files) {
                entries.push(entry.into_path());
            }
        }

        Ok(entries)
    }
}

/// Symlinked files count as files. Symlinked directories are never entered,
/// since links are not followed.
fn is_regular_or_linked_file(entry: &ignore::DirEntry) -> bool {
    match entry.file_type() {
        Some(ft) if ft.is_file() => true,
        Some(ft) if ft.is_symlink() => entry.path().is_file(),
        _ => false,
    }
}
