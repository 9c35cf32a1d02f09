#![no_main]

use arbitrary::Arbitrary;
use keydiff_core::{Keyed, classify};
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

fuzz_target!(|input: (Vec<Rec>, Vec<Rec>)| {
    // Duplicate ids are allowed here; classify must stay total over them.
    let (original, new) = input;
    let diff = classify(&original, &new);

    assert!(diff.removals.len() <= original.len());
    assert!(diff.updates.len() + diff.insertions.len() <= new.len());
    assert_eq!(diff.all_changes().len(), diff.len());
});
