use conform_core::types::CaseId;
use serde::{Deserialize, Serialize};

use super::DeviationKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportStatus {
    /// Reference present, no deviations found.
    Clean,
    /// Reference present, at least one deviation.
    Violations,
    /// No reference sequence; nothing was checked.
    Skipped,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConformanceReport {
    pub version: String,
    pub command: String,
    pub status: ReportStatus,
    /// Cases that took part in the check.
    pub total_cases: u32,
    /// Rows dropped because their case id did not parse.
    pub skipped_rows: u32,
    pub reference: Vec<String>,
    /// Number of distinct violation groups before any top-N cut.
    pub total_violations: u32,
    pub violations: Vec<RankedViolation>,
}

impl ConformanceReport {
    /// Whether any group was found, counted before a top-N cut.
    pub fn has_violations(&self) -> bool {
        self.total_violations > 0
    }

    /// Whether a top-N cut dropped some groups.
    pub fn is_truncated(&self) -> bool {
        (self.violations.len() as u32) < self.total_violations
    }
}

/// A violation group in ranked order, with its ranked specification breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedViolation {
    pub key: String,
    pub kind: DeviationKind,
    pub activity: String,
    pub case_count: u32,
    pub case_ids: Vec<CaseId>,
    pub specifications: Vec<SpecificationBreakdown>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecificationBreakdown {
    pub name: String,
    pub case_count: u32,
    pub case_ids: Vec<CaseId>,
}

// --- Single-variant diff ---

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiffResult {
    pub version: String,
    pub command: String,
    pub reference: Vec<String>,
    pub variant: Vec<String>,
    pub deviations: Vec<DiffEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffEntry {
    pub kind: DeviationKind,
    pub activity: String,
}
