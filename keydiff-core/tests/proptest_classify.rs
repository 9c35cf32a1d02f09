//! Property-based tests for the keyed classifier.
//!
//! These tests verify that, for inputs with unique keys per side:
//! - classifying a collection against itself yields an empty diff
//! - removal keys are exactly original \ new, insertion keys exactly
//!   new \ original, and update keys a subset of the intersection
//! - the three buckets never share a key
//! - updates carry new-side records, removals original-side records
//! - the strict entry point agrees with the lenient one

use std::collections::{BTreeSet, HashMap, HashSet};

use keydiff_core::{Keyed, classify, try_classify};
use proptest::prelude::*;

#[derive(Debug, Clone, PartialEq, Eq)]
struct Rec {
    id: u8,
    payload: u8,
}

impl Keyed for Rec {
    type Key = u8;
    fn key(&self) -> u8 {
        self.id
    }
}

/// Strategy for one input side with unique ids: a small id space keeps key
/// overlap between the two sides likely.
fn arb_side() -> impl Strategy<Value = Vec<Rec>> {
    prop::collection::vec((0u8..32, any::<u8>()), 0..24).prop_map(|pairs| {
        let mut seen = HashSet::new();
        pairs
            .into_iter()
            .filter(|(id, _)| seen.insert(*id))
            .map(|(id, payload)| Rec { id, payload })
            .collect()
    })
}

fn keys(records: &[Rec]) -> BTreeSet<u8> {
    records.iter().map(Keyed::key).collect()
}

proptest! {
    #[test]
    fn identical_inputs_produce_empty_diff(side in arb_side()) {
        let diff = classify(&side, &side);
        prop_assert!(diff.is_empty());
        prop_assert!(diff.all_changes().is_empty());
    }

    #[test]
    fn bucket_keys_partition_the_key_sets(original in arb_side(), new in arb_side()) {
        let diff = classify(&original, &new);

        let original_keys = keys(&original);
        let new_keys = keys(&new);

        let removal_keys = keys(&diff.removals);
        let update_keys = keys(&diff.updates);
        let insertion_keys = keys(&diff.insertions);

        let only_original: BTreeSet<u8> = original_keys.difference(&new_keys).copied().collect();
        let only_new: BTreeSet<u8> = new_keys.difference(&original_keys).copied().collect();
        let shared: BTreeSet<u8> = original_keys.intersection(&new_keys).copied().collect();

        prop_assert_eq!(removal_keys.clone(), only_original);
        prop_assert_eq!(insertion_keys.clone(), only_new);
        prop_assert!(update_keys.is_subset(&shared));

        // Disjointness across buckets.
        prop_assert!(removal_keys.is_disjoint(&update_keys));
        prop_assert!(removal_keys.is_disjoint(&insertion_keys));
        prop_assert!(update_keys.is_disjoint(&insertion_keys));
    }

    #[test]
    fn buckets_carry_the_right_side(original in arb_side(), new in arb_side()) {
        let diff = classify(&original, &new);

        let original_by_key: HashMap<u8, u8> =
            original.iter().map(|r| (r.id, r.payload)).collect();
        let new_by_key: HashMap<u8, u8> = new.iter().map(|r| (r.id, r.payload)).collect();

        for update in &diff.updates {
            prop_assert_eq!(Some(&update.payload), new_by_key.get(&update.id));
        }
        for insertion in &diff.insertions {
            prop_assert_eq!(Some(&insertion.payload), new_by_key.get(&insertion.id));
        }
        for removal in &diff.removals {
            prop_assert_eq!(Some(&removal.payload), original_by_key.get(&removal.id));
        }
    }

    #[test]
    fn all_changes_covers_every_bucket_entry(original in arb_side(), new in arb_side()) {
        let diff = classify(&original, &new);
        let changes = diff.all_changes();

        prop_assert_eq!(changes.len(), diff.len());

        let removal_count = changes.iter().filter(|c| c.is_removal()).count();
        let update_count = changes.iter().filter(|c| c.is_update()).count();
        let insertion_count = changes.iter().filter(|c| c.is_insertion()).count();

        prop_assert_eq!(removal_count, diff.removals.len());
        prop_assert_eq!(update_count, diff.updates.len());
        prop_assert_eq!(insertion_count, diff.insertions.len());
    }

    #[test]
    fn strict_agrees_with_lenient_on_unique_keys(original in arb_side(), new in arb_side()) {
        let strict = try_classify(&original, &new);
        prop_assert_eq!(strict, Ok(classify(&original, &new)));
    }
}
