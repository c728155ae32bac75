use crate::OutputFormatter;
use wtfd_enforce::report::RunReport;

pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &RunReport) -> String {
        serde_json::to_string_pretty(report).unwrap_or_default()
    }
}
