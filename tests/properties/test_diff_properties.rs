//! Property tests: the sequence diff behaves as a set difference in both
//! directions.

use std::collections::HashSet;

use conform_check::diff::diff;
use conform_check::types::DeviationKind;
use proptest::prelude::*;

fn arb_sequence() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[A-F]", 0..10)
}

proptest! {
    #[test]
    fn deviations_match_set_difference(reference in arb_sequence(), actual in arb_sequence()) {
        let ref_set: HashSet<&String> = reference.iter().collect();
        let act_set: HashSet<&String> = actual.iter().collect();

        let out = diff(&reference, &actual);
        let missing: HashSet<&String> = out
            .iter()
            .filter(|(k, _)| *k == DeviationKind::MissingStep)
            .map(|(_, a)| a)
            .collect();
        let extra: HashSet<&String> = out
            .iter()
            .filter(|(k, _)| *k == DeviationKind::ExtraOrDifferentStep)
            .map(|(_, a)| a)
            .collect();

        prop_assert_eq!(missing, ref_set.difference(&act_set).copied().collect::<HashSet<_>>());
        prop_assert_eq!(extra, act_set.difference(&ref_set).copied().collect::<HashSet<_>>());
        prop_assert_eq!(out.len(), ref_set.symmetric_difference(&act_set).count());
    }

    #[test]
    fn reordering_never_deviates(reference in arb_sequence(), seed in any::<usize>()) {
        let mut actual = reference.clone();
        if !actual.is_empty() {
            let len = actual.len();
            actual.rotate_right(seed % len);
        }
        prop_assert!(diff(&reference, &actual).is_empty());
    }
}
