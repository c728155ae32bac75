use serde::{Deserialize, Serialize};

use wtfd_core::error::ModuleResolutionFailure;
use wtfd_core::types::{SkippedFile, Violation};

/// Accumulates per-file results over one run.
///
/// Consumed by [`ReportAggregator::finish`], so it cannot be reused once the
/// run is finalized.
#[derive(Debug, Default)]
pub struct ReportAggregator {
    violations: Vec<Violation>,
    files_scanned: u32,
    skipped_files: Vec<SkippedFile>,
    unresolved_roots: Vec<String>,
}

impl ReportAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the audit result of one fully processed file.
    pub fn record_file(&mut self, violations: Vec<Violation>) {
        self.files_scanned += 1;
        self.violations.extend(violations);
    }

    pub fn record_skipped(&mut self, skipped: SkippedFile) {
        self.skipped_files.push(skipped);
    }

    pub fn record_unresolved(&mut self, failure: ModuleResolutionFailure) {
        self.unresolved_roots.push(failure.name);
    }

    pub fn violation_count(&self) -> usize {
        self.violations.len()
    }

    pub fn finish(self, strict_mode: bool) -> RunReport {
        RunReport {
            strict_mode,
            files_scanned: self.files_scanned,
            violations: self.violations,
            skipped_files: self.skipped_files,
            unresolved_roots: self.unresolved_roots,
        }
    }
}

/// Everything a finished run produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunReport {
    pub strict_mode: bool,
    pub files_scanned: u32,
    /// File-then-declaration order.
    pub violations: Vec<Violation>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub skipped_files: Vec<SkippedFile>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub unresolved_roots: Vec<String>,
}

/// Successful end of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// No violations; nothing to print.
    Clean,
    /// Permissive run with violations; the summary is informational.
    Reported(String),
}

/// Strict-mode failure. `Display` renders the full summary.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{report}")]
pub struct DocstringPolicyViolation {
    pub count: usize,
    pub report: String,
}

impl RunReport {
    pub fn is_clean(&self) -> bool {
        self.violations.is_empty()
    }

    /// Human-readable listing, one line per violation.
    pub fn summary(&self) -> String {
        let mut out = format!("Missing docstrings ({}):\n", self.violations.len());
        for v in &self.violations {
            out.push_str(&format!("  {}:{}: {} `{}`\n", v.file, v.line, v.kind, v.name));
        }
        out
    }

    /// Decide the verdict of the run.
    pub fn finalize(&self) -> Result<Outcome, DocstringPolicyViolation> {
        if self.is_clean() {
            return Ok(Outcome::Clean);
        }
        let summary = self.summary();
        if self.strict_mode {
            Err(DocstringPolicyViolation {
                count: self.violations.len(),
                report: summary,
            })
        } else {
            Ok(Outcome::Reported(summary))
        }
    }
}
