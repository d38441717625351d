use conform_core::types::CaseId;

use crate::types::{RankedViolation, SpecificationBreakdown, ViolationGroup, ViolationMap};

/// Order groups by affected-case count, largest first, keeping at most `top_n`.
///
/// Equal counts are ordered by composite key. Each group's specification
/// breakdown is ordered the same way (count descending, then label). Case id
/// lists are sorted so repeated runs over reordered input agree exactly.
pub fn rank(groups: ViolationMap, top_n: Option<usize>) -> Vec<RankedViolation> {
    let mut ranked: Vec<RankedViolation> = groups.into_values().map(rank_group).collect();
    ranked.sort_by(|a, b| {
        b.case_count
            .cmp(&a.case_count)
            .then_with(|| a.key.cmp(&b.key))
    });
    if let Some(n) = top_n {
        ranked.truncate(n);
    }
    ranked
}

fn rank_group(group: ViolationGroup) -> RankedViolation {
    let mut specifications: Vec<SpecificationBreakdown> = group
        .specifications
        .into_iter()
        .map(|(name, case_ids)| SpecificationBreakdown {
            name,
            case_count: case_ids.len() as u32,
            case_ids: sorted(case_ids),
        })
        .collect();
    specifications.sort_by(|a, b| {
        b.case_count
            .cmp(&a.case_count)
            .then_with(|| a.name.cmp(&b.name))
    });

    RankedViolation {
        key: group.key,
        kind: group.kind,
        activity: group.activity,
        case_count: group.case_ids.len() as u32,
        case_ids: sorted(group.case_ids),
        specifications,
    }
}

fn sorted(mut ids: Vec<CaseId>) -> Vec<CaseId> {
    ids.sort();
    ids
}
