use conform_core::types::{Case, ReferenceSequence};

use crate::diff::diff;
use crate::types::DeviationRecord;

/// Diff every case against `reference` and emit one record per differing activity.
///
/// An empty reference means nothing is checked and no records are produced.
/// Record order follows case order but carries no meaning downstream.
pub fn classify(cases: &[Case], reference: &ReferenceSequence) -> Vec<DeviationRecord> {
    if reference.is_empty() {
        return Vec::new();
    }

    let mut records = Vec::new();
    for case in cases {
        for (kind, activity) in diff(reference.activities(), &case.variant) {
            records.push(DeviationRecord {
                kind,
                activity,
                case_id: case.id,
                specification: case.specification.clone(),
            });
        }
    }
    records
}
