use crate::change::Change;
use serde::{Deserialize, Serialize};

/// The classified difference between two identity-keyed collections.
///
/// Each bucket is ordered by the aligner's emission order; no global order
/// holds across buckets. All three are plain public vectors, so a holder may
/// append to or replace them after construction, and
/// [`KeyedDiff::all_changes`] reflects whatever the buckets hold at read
/// time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyedDiff<T> {
    /// Records whose key exists on both sides, carrying the new-side value.
    #[serde(default)]
    pub updates: Vec<T>,

    /// Records whose key appears only on the new side.
    #[serde(default)]
    pub insertions: Vec<T>,

    /// Records whose key appears only on the original side.
    #[serde(default)]
    pub removals: Vec<T>,
}

impl<T> Default for KeyedDiff<T> {
    fn default() -> Self {
        Self {
            updates: Vec::new(),
            insertions: Vec::new(),
            removals: Vec::new(),
        }
    }
}

impl<T> KeyedDiff<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of classified changes across the three buckets.
    pub fn len(&self) -> usize {
        self.removals.len() + self.updates.len() + self.insertions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.removals.is_empty() && self.updates.is_empty() && self.insertions.is_empty()
    }
}

impl<T: Clone> KeyedDiff<T> {
    /// All changes in one sequence: removals, then updates, then insertions.
    ///
    /// Recomputed from the current bucket contents on every call; never
    /// cached.
    pub fn all_changes(&self) -> Vec<Change<T>> {
        let mut out = Vec::with_capacity(self.len());
        out.extend(self.removals.iter().cloned().map(Change::Removal));
        out.extend(self.updates.iter().cloned().map(Change::Update));
        out.extend(self.insertions.iter().cloned().map(Change::Insertion));
        out
    }
}
