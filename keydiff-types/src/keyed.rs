use std::hash::Hash;

/// Identity capability for diffable records.
///
/// The key must be stable for the duration of a classification and usable as
/// a set member. Identity is separate from full-value equality: two records
/// with the same key but different content are the same record, changed.
pub trait Keyed {
    /// Stable identity key.
    type Key: Eq + Hash;

    fn key(&self) -> Self::Key;
}
