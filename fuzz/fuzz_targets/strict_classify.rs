#![no_main]

use std::collections::BTreeSet;

use arbitrary::Arbitrary;
use keydiff_core::{Keyed, try_classify};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Clone, PartialEq, Eq, Arbitrary)]
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

fn keys(records: &[Rec]) -> BTreeSet<u8> {
    records.iter().map(Keyed::key).collect()
}

fuzz_target!(|input: (Vec<Rec>, Vec<Rec>)| {
    let (original, new) = input;

    let Ok(diff) = try_classify(&original, &new) else {
        return;
    };

    // Unique inputs: buckets never share a key.
    let removal_keys = keys(&diff.removals);
    let update_keys = keys(&diff.updates);
    let insertion_keys = keys(&diff.insertions);

    assert!(removal_keys.is_disjoint(&update_keys));
    assert!(removal_keys.is_disjoint(&insertion_keys));
    assert!(update_keys.is_disjoint(&insertion_keys));
});
