//! Configuration file loading for wtfd.
//!
//! Reads `.wtfd/wtfd.json` and turns it into an immutable [`ScanConfiguration`].
//! Falls back to sensible defaults when the config file is missing or incomplete.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Directory (relative to the project root) holding the config file.
pub const CONFIG_DIR: &str = ".wtfd";
/// Config file name inside [`CONFIG_DIR`].
pub const CONFIG_FILE: &str = "wtfd.json";

/// Declaration names skipped unless the config says otherwise.
/// `Meta` is the inner options class Django models and forms declare.
pub const DEFAULT_EXCLUDED_NAMES: &[&str] = &["Meta"];

/// What to do when a candidate file is not valid Python.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParseErrorPolicy {
    /// Log a warning, record the file as skipped and keep scanning.
    #[default]
    Warn,
    /// Abort the whole run.
    Fail,
}

/// Top-level wtfd configuration, as stored on disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WtfdConfig {
    /// Dotted module names to scan. Empty means the whole project.
    #[serde(default)]
    pub apps: Vec<String>,
    #[serde(default)]
    pub strict: bool,
    #[serde(default = "default_exclude")]
    pub exclude: Vec<String>,
    #[serde(default)]
    pub skip_dunder_files: bool,
    #[serde(default)]
    pub parse_errors: ParseErrorPolicy,
    /// Extra gitignore-style globs pruned from the walk.
    #[serde(default)]
    pub ignore_patterns: Vec<String>,
}

fn default_exclude() -> Vec<String> {
    DEFAULT_EXCLUDED_NAMES.iter().map(|s| s.to_string()).collect()
}

impl Default for WtfdConfig {
    fn default() -> Self {
        Self {
            apps: vec![],
            strict: false,
            exclude: default_exclude(),
            skip_dunder_files: false,
            parse_errors: ParseErrorPolicy::default(),
            ignore_patterns: vec![],
        }
    }
}

impl WtfdConfig {
    /// Path of the config file for a project rooted at `project_root`.
    pub fn path_for(project_root: &Path) -> PathBuf {
        project_root.join(CONFIG_DIR).join(CONFIG_FILE)
    }

    /// Load configuration from `.wtfd/wtfd.json` under `project_root`.
    /// Returns defaults if the file doesn't exist or can't be parsed.
    pub fn load(project_root: &Path) -> Self {
        let config_path = Self::path_for(project_root);
        let content = match std::fs::read_to_string(&config_path) {
            Ok(c) => c,
            Err(_) => return Self::default(),
        };
        match serde_json::from_str(&content) {
            Ok(cfg) => cfg,
            Err(e) => {
                eprintln!(
                    "wtfd: warning: failed to parse {}: {}, using defaults",
                    config_path.display(),
                    e
                );
                Self::default()
            }
        }
    }
}

/// Immutable input of a single scan.
///
/// Assembled once by the caller (usually from a [`WtfdConfig`] plus CLI
/// overrides) and handed to the engine by value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanConfiguration {
    project_root: PathBuf,
    module_roots: Vec<String>,
    strict_mode: bool,
    excluded_names: BTreeSet<String>,
    skip_dunder_files: bool,
    parse_errors: ParseErrorPolicy,
    ignore_patterns: Vec<String>,
}

impl ScanConfiguration {
    /// Defaults: whole project, permissive, `Meta` excluded.
    pub fn new(project_root: impl Into<PathBuf>) -> Self {
        Self::from_config(project_root, &WtfdConfig::default())
    }

    pub fn from_config(project_root: impl Into<PathBuf>, config: &WtfdConfig) -> Self {
        Self {
            project_root: project_root.into(),
            module_roots: config.apps.clone(),
            strict_mode: config.strict,
            excluded_names: config.exclude.iter().map(|n| n.to_lowercase()).collect(),
            skip_dunder_files: config.skip_dunder_files,
            parse_errors: config.parse_errors,
            ignore_patterns: config.ignore_patterns.clone(),
        }
    }

    pub fn with_module_roots<I, S>(mut self, roots: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.module_roots = roots.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_strict_mode(mut self, strict: bool) -> Self {
        self.strict_mode = strict;
        self
    }

    /// Replace the exclusion set.
    pub fn with_excluded_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.excluded_names = names.into_iter().map(|n| n.as_ref().to_lowercase()).collect();
        self
    }

    /// Add one name to the exclusion set.
    pub fn exclude(mut self, name: &str) -> Self {
        self.excluded_names.insert(name.to_lowercase());
        self
    }

    pub fn with_skip_dunder_files(mut self, skip: bool) -> Self {
        self.skip_dunder_files = skip;
        self
    }

    pub fn with_parse_errors(mut self, policy: ParseErrorPolicy) -> Self {
        self.parse_errors = policy;
        self
    }

    pub fn with_ignore_patterns(mut self, patterns: Vec<String>) -> Self {
        self.ignore_patterns = patterns;
        self
    }

    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    pub fn module_roots(&self) -> &[String] {
        &self.module_roots
    }

    pub fn strict_mode(&self) -> bool {
        self.strict_mode
    }

    /// Lowercased names skipped by the audit.
    pub fn excluded_names(&self) -> &BTreeSet<String> {
        &self.excluded_names
    }

    pub fn skip_dunder_files(&self) -> bool {
        self.skip_dunder_files
    }

    pub fn parse_errors(&self) -> ParseErrorPolicy {
        self.parse_errors
    }

    pub fn ignore_patterns(&self) -> &[String] {
        &self.ignore_patterns
    }
}
