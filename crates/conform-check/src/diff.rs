//! Sequence diff: the symmetric set difference of two activity sequences.
//!
//! Both sequences are reduced to sets before comparison. Position and
//! repetition of an activity are not evaluated, only presence.

use std::collections::HashSet;

use crate::types::DeviationKind;

/// Reduce a sequence to its set of distinct activities. Ordering is dropped here.
pub fn activity_set(sequence: &[String]) -> HashSet<&str> {
    sequence.iter().map(String::as_str).collect()
}

/// Compare `actual` against `reference` and classify every differing activity.
///
/// Activities only in `reference` are [`DeviationKind::MissingStep`]; activities
/// only in `actual` are [`DeviationKind::ExtraOrDifferentStep`]. Each distinct
/// activity is reported once: missing steps first in reference order, then
/// extra steps in the order they were observed.
pub fn diff(reference: &[String], actual: &[String]) -> Vec<(DeviationKind, String)> {
    let reference_set = activity_set(reference);
    let actual_set = activity_set(actual);

    let only_reference = distinct(reference).filter(|a| !actual_set.contains(a));
    let only_actual = distinct(actual).filter(|a| !reference_set.contains(a));

    only_reference
        .chain(only_actual)
        .map(|activity| (classify_activity(&reference_set, activity), activity.to_string()))
        .collect()
}

/// Kind of an activity known to be in exactly one of the two sets.
fn classify_activity(reference_set: &HashSet<&str>, activity: &str) -> DeviationKind {
    if reference_set.contains(activity) {
        DeviationKind::MissingStep
    } else {
        DeviationKind::ExtraOrDifferentStep
    }
}

/// Distinct activities in first-appearance order.
fn distinct(sequence: &[String]) -> impl Iterator<Item = &str> {
    let mut seen = HashSet::new();
    sequence
        .iter()
        .map(String::as_str)
        .filter(move |a| seen.insert(*a))
}
