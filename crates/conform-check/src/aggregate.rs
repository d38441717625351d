use std::collections::HashMap;

use crate::types::{DeviationRecord, ViolationGroup, ViolationMap};

/// Merge deviation records into one group per composite key.
///
/// The first record for a key creates its group; every record (the first
/// included) appends its case id to the group and to its specification
/// label's bucket. No ordering is applied here, see [`crate::rank`].
pub fn aggregate<I>(deviations: I) -> ViolationMap
where
    I: IntoIterator<Item = DeviationRecord>,
{
    let mut groups: ViolationMap = HashMap::new();

    for record in deviations {
        let key = record.key();
        let group = groups.entry(key).or_insert_with_key(|key| ViolationGroup {
            key: key.clone(),
            kind: record.kind,
            activity: record.activity.clone(),
            case_ids: Vec::new(),
            specifications: HashMap::new(),
        });
        group.case_ids.push(record.case_id);
        group
            .specifications
            .entry(record.specification)
            .or_default()
            .push(record.case_id);
    }

    tracing::debug!(groups = groups.len(), "aggregated deviations");
    groups
}
