//! Output formatters for wtfd run reports.
//!
//! Provides two output modes:
//! - **Human** (default): plain-text summary, empty on a clean run
//! - **JSON** (`--json`): Machine-readable structured output

pub mod human;
pub mod json;

use wtfd_enforce::report::RunReport;

pub trait OutputFormatter {
    fn format_report(&self, report: &RunReport) -> String;
}
