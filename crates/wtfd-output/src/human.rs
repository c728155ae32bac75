use crate::OutputFormatter;
use wtfd_enforce::report::RunReport;

pub struct HumanFormatter;

impl OutputFormatter for HumanFormatter {
    fn format_report(&self, report: &RunReport) -> String {
        if report.is_clean() {
            return String::new(); // Clean run = empty stdout
        }

        let mut out = report.summary();

        let mut files: Vec<&str> = report.violations.iter().map(|v| v.file.as_str()).collect();
        files.sort_unstable();
        files.dedup();

        out.push_str(&format!(
            "\n{} missing docstring(s) in {} file(s), {} file(s) scanned",
            report.violations.len(),
            files.len(),
            report.files_scanned,
        ));
        if !report.skipped_files.is_empty() {
            out.push_str(&format!(", {} skipped", report.skipped_files.len()));
        }
        out.push('\n');

        out
    }
}
