use crate::human_helpers::{format_breakdown_human, format_violation_human, kind_phrase};
use crate::OutputFormatter;
use conform_check::types::{ConformanceReport, DiffResult, ReportStatus};

/// Plain-text report: one line per violation, each followed by its
/// specification breakdown.
pub struct HumanFormatter {
    max_groups: usize,
    max_breakdowns: usize,
}

impl Default for HumanFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl HumanFormatter {
    pub fn new() -> Self {
        Self {
            max_groups: 19,
            max_breakdowns: 10,
        }
    }

    /// Bound the number of violation lines and breakdown lines per violation.
    pub fn with_limits(mut self, max_groups: usize, max_breakdowns: usize) -> Self {
        self.max_groups = max_groups;
        self.max_breakdowns = max_breakdowns;
        self
    }
}

impl OutputFormatter for HumanFormatter {
    fn format_report(&self, report: &ConformanceReport) -> String {
        let mut out = format!("Selected cases: {}\n", report.total_cases);
        if report.skipped_rows > 0 {
            out.push_str(&format!(
                "Skipped rows: {} (case id is not an integer)\n",
                report.skipped_rows
            ));
        }
        out.push('\n');

        if report.status == ReportStatus::Skipped {
            out.push_str("No reference sequence; conformance check skipped\n");
            return out;
        }
        if !report.has_violations() {
            out.push_str("No violations found\n");
            return out;
        }

        for v in report.violations.iter().take(self.max_groups) {
            out.push_str(&format_violation_human(v, report.total_cases));
            for s in v.specifications.iter().take(self.max_breakdowns) {
                out.push_str(&format_breakdown_human(s, v.case_count));
            }
        }

        let shown = report.violations.len().min(self.max_groups) as u32;
        if report.total_violations > shown {
            out.push_str(&format!(
                "\n... and {} more violation(s)\n",
                report.total_violations - shown
            ));
        }
        out
    }

    fn format_diff(&self, result: &DiffResult) -> String {
        let mut out = format!(
            "Reference: {}\nVariant:   {}\n",
            result.reference.join(" -> "),
            result.variant.join(" -> "),
        );
        if result.deviations.is_empty() {
            out.push_str("\nVariant conforms to the reference\n");
            return out;
        }
        out.push('\n');
        for d in &result.deviations {
            out.push_str(&format!("  {} {}\n", kind_phrase(d.kind), d.activity));
        }
        out
    }
}
