use conform_core::config::ConformConfig;
use conform_core::reference::resolve_reference;
use conform_core::row::{RowSettings, TableRow};
use conform_core::types::{split_variant, Case, ReferenceSequence};

use crate::aggregate::aggregate;
use crate::classify::classify;
use crate::diff::diff;
use crate::rank::rank;
use crate::types::{ConformanceReport, DiffEntry, DiffResult, RankedViolation, ReportStatus};

/// Settings for one conformance run.
#[derive(Debug, Clone, Default)]
pub struct EngineSettings {
    pub rows: RowSettings,
    /// Happy path supplied up front. Row flags are used when this is `None` or empty.
    pub reference: Option<ReferenceSequence>,
    /// Keep only the N largest violation groups.
    pub top_n: Option<usize>,
}

/// Runs the full check over a materialized table. Keeps no state between runs.
#[derive(Debug, Clone, Default)]
pub struct ConformanceEngine {
    settings: EngineSettings,
}

impl ConformanceEngine {
    pub fn new(settings: EngineSettings) -> Self {
        Self { settings }
    }

    /// Create an engine configured from a `ConformConfig`.
    pub fn with_config(config: &ConformConfig) -> Self {
        Self::new(EngineSettings {
            rows: config.row_settings(),
            reference: config.explicit_reference(),
            top_n: None,
        })
    }

    /// Override the happy path. An empty sequence falls back to row flags.
    pub fn with_reference(mut self, reference: ReferenceSequence) -> Self {
        self.settings.reference = Some(reference);
        self
    }

    pub fn with_top_n(mut self, top_n: Option<usize>) -> Self {
        self.settings.top_n = top_n;
        self
    }

    pub fn settings(&self) -> &EngineSettings {
        &self.settings
    }

    /// The reference this engine would use for `rows`.
    pub fn reference_for(&self, rows: &[TableRow]) -> ReferenceSequence {
        resolve_reference(self.settings.reference.as_ref(), rows, &self.settings.rows)
    }

    /// Check every row against the happy path and rank the deviations.
    pub fn run(&self, rows: &[TableRow]) -> ConformanceReport {
        let reference = self.reference_for(rows);
        let (cases, skipped_rows) = self.cases_from(rows);

        if reference.is_empty() {
            tracing::info!(rows = rows.len(), "no reference sequence, skipping conformance check");
            return self.report(
                ReportStatus::Skipped,
                &reference,
                cases.len(),
                skipped_rows,
                0,
                Vec::new(),
            );
        }

        let deviations = classify(&cases, &reference);
        tracing::debug!(
            cases = cases.len(),
            deviations = deviations.len(),
            reference = %reference,
            "classified cases"
        );
        let groups = aggregate(deviations);
        let total_groups = groups.len();
        let violations = rank(groups, self.settings.top_n);

        // top_n only trims the listing; status reflects every group found
        let status = if total_groups == 0 {
            ReportStatus::Clean
        } else {
            ReportStatus::Violations
        };
        self.report(status, &reference, cases.len(), skipped_rows, total_groups, violations)
    }

    /// Diff a single delimited variant against `reference`.
    pub fn diff_variant(&self, variant: &str, reference: &ReferenceSequence) -> DiffResult {
        let activities = split_variant(variant, &self.settings.rows.delimiter);
        let deviations = diff(reference.activities(), &activities)
            .into_iter()
            .map(|(kind, activity)| DiffEntry { kind, activity })
            .collect();
        DiffResult {
            version: env!("CARGO_PKG_VERSION").to_string(),
            command: "diff".to_string(),
            reference: reference.activities().to_vec(),
            variant: activities,
            deviations,
        }
    }

    /// Convert rows to cases, counting rows dropped by the case id policy.
    fn cases_from(&self, rows: &[TableRow]) -> (Vec<Case>, usize) {
        let mut cases = Vec::with_capacity(rows.len());
        let mut skipped = 0;
        for (idx, row) in rows.iter().enumerate() {
            match row.to_case(&self.settings.rows) {
                Ok(case) => cases.push(case),
                Err(rejected) => {
                    tracing::warn!(row = idx + 1, "skipping row: {}", rejected);
                    skipped += 1;
                }
            }
        }
        (cases, skipped)
    }

    fn report(
        &self,
        status: ReportStatus,
        reference: &ReferenceSequence,
        total_cases: usize,
        skipped_rows: usize,
        total_violations: usize,
        violations: Vec<RankedViolation>,
    ) -> ConformanceReport {
        ConformanceReport {
            version: env!("CARGO_PKG_VERSION").to_string(),
            command: "check".to_string(),
            status,
            total_cases: total_cases as u32,
            skipped_rows: skipped_rows as u32,
            reference: reference.activities().to_vec(),
            total_violations: total_violations as u32,
            violations,
        }
    }
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
