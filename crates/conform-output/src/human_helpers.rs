use conform_check::types::{DeviationKind, RankedViolation, SpecificationBreakdown};

use crate::percent_of;

/// `is MISSING` for skipped steps, `DID` for extra ones.
pub(crate) fn kind_phrase(kind: DeviationKind) -> &'static str {
    match kind {
        DeviationKind::MissingStep => "is MISSING",
        DeviationKind::ExtraOrDifferentStep => "DID",
    }
}

pub(crate) fn format_violation_human(v: &RankedViolation, total_cases: u32) -> String {
    format!(
        "{}% of cases {} {}\n",
        percent_of(v.case_count, total_cases),
        kind_phrase(v.kind),
        v.activity,
    )
}

pub(crate) fn format_breakdown_human(s: &SpecificationBreakdown, group_count: u32) -> String {
    format!(
        "    {}% ({} out of {} cases from {})\n",
        percent_of(s.case_count, group_count),
        s.case_count,
        group_count,
        s.name,
    )
}
