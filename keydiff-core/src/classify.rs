//! Reinterpret a raw edit script by identity key.

use std::collections::HashSet;

use keydiff_align::{Aligner, EditScript, MyersAligner};
use keydiff_types::{Keyed, KeyedDiff};
use tracing::{debug, warn};

use crate::error::{ClassifyError, Side};

/// Classify the differences between `original` and `new` by identity key.
///
/// Total over any pair of finite slices; empty inputs yield an empty diff.
/// A key present in both a remove and an insert of the underlying alignment
/// is always an update carrying the new-side record, even when the content
/// did not change (a repositioned record the aligner could not place).
///
/// Duplicate keys within one side are unspecified: the classification
/// collapses them and logs a warning. Use [`try_classify`] to reject such
/// inputs instead.
pub fn classify<T>(original: &[T], new: &[T]) -> KeyedDiff<T>
where
    T: Keyed + PartialEq + Clone,
{
    classify_with(&MyersAligner, original, new)
}

/// Classify with a caller-supplied aligner.
///
/// The classifier uses only the set of elements the script touches; any
/// sound aligner produces the same buckets up to ordering.
pub fn classify_with<A, T>(aligner: &A, original: &[T], new: &[T]) -> KeyedDiff<T>
where
    A: Aligner,
    T: Keyed + PartialEq + Clone,
{
    let script = aligner.align(original, new);
    partition(original, new, &script)
}

/// Classify after validating that each side's identity keys are unique.
pub fn try_classify<T>(original: &[T], new: &[T]) -> Result<KeyedDiff<T>, ClassifyError>
where
    T: Keyed + PartialEq + Clone,
{
    ensure_unique_keys(original, Side::Original)?;
    ensure_unique_keys(new, Side::New)?;
    Ok(classify(original, new))
}

fn ensure_unique_keys<T: Keyed>(records: &[T], side: Side) -> Result<(), ClassifyError> {
    let mut seen = HashSet::with_capacity(records.len());
    for (index, record) in records.iter().enumerate() {
        if !seen.insert(record.key()) {
            return Err(ClassifyError::DuplicateKey { side, index });
        }
    }
    Ok(())
}

fn partition<T>(original: &[T], new: &[T], script: &EditScript) -> KeyedDiff<T>
where
    T: Keyed + Clone,
{
    let removals_raw: Vec<&T> = script.removes.iter().map(|&i| &original[i]).collect();

    let mut keys_to_remove: HashSet<T::Key> = removals_raw.iter().map(|r| r.key()).collect();
    if keys_to_remove.len() != removals_raw.len() {
        warn!(
            removed = removals_raw.len(),
            distinct = keys_to_remove.len(),
            "duplicate identity keys among removed records collapse"
        );
    }

    let mut updates = Vec::new();
    let mut insertions = Vec::new();

    for &i in &script.inserts {
        let record = &new[i];
        // A consumed key classifies at most one insert as an update.
        if keys_to_remove.remove(&record.key()) {
            updates.push(record.clone());
        } else {
            insertions.push(record.clone());
        }
    }

    let removals: Vec<T> = removals_raw
        .into_iter()
        .filter(|r| keys_to_remove.contains(&r.key()))
        .cloned()
        .collect();

    debug!(
        updates = updates.len(),
        insertions = insertions.len(),
        removals = removals.len(),
        "classified keyed diff"
    );

    KeyedDiff {
        updates,
        insertions,
        removals,
    }
}
