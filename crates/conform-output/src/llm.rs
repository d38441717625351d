use crate::{percent_of, OutputFormatter};
use conform_check::types::{ConformanceReport, DiffResult, ReportStatus};

/// Compact line-oriented output for agents.
pub struct LlmFormatter {
    max_breakdowns: usize,
}

impl Default for LlmFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl LlmFormatter {
    pub fn new() -> Self {
        Self { max_breakdowns: 3 }
    }

    pub fn with_max_breakdowns(mut self, max_breakdowns: usize) -> Self {
        self.max_breakdowns = max_breakdowns;
        self
    }
}

impl OutputFormatter for LlmFormatter {
    fn format_report(&self, report: &ConformanceReport) -> String {
        let status = match report.status {
            ReportStatus::Clean => "CLEAN",
            ReportStatus::Violations => "VIOLATIONS",
            ReportStatus::Skipped => "SKIPPED",
        };
        let mut out = format!(
            "CHECK {} cases={} skipped_rows={} groups={} shown={}\n",
            status,
            report.total_cases,
            report.skipped_rows,
            report.total_violations,
            report.violations.len(),
        );
        if !report.reference.is_empty() {
            out.push_str(&format!("REFERENCE {}\n", report.reference.join(" -> ")));
        }
        for v in &report.violations {
            out.push_str(&format!(
                "{} cases={} pct={}",
                v.key,
                v.case_count,
                percent_of(v.case_count, report.total_cases),
            ));
            if !v.specifications.is_empty() {
                let top: Vec<String> = v
                    .specifications
                    .iter()
                    .take(self.max_breakdowns)
                    .map(|s| format!("{}:{}", s.name, s.case_count))
                    .collect();
                out.push_str(&format!(" top={}", top.join(",")));
            }
            out.push('\n');
        }
        out
    }

    fn format_diff(&self, result: &DiffResult) -> String {
        let mut out = format!("DIFF deviations={}\n", result.deviations.len());
        for d in &result.deviations {
            out.push_str(&format!("  {}\n", d.kind.key_for(&d.activity)));
        }
        out
    }
}
