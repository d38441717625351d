use crate::OutputFormatter;
use conform_check::types::{ConformanceReport, DiffResult};

pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &ConformanceReport) -> String {
        serde_json::to_string_pretty(report).unwrap_or_default()
    }
    fn format_diff(&self, result: &DiffResult) -> String {
        serde_json::to_string_pretty(result).unwrap_or_default()
    }
}
