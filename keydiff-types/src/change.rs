use serde::{Deserialize, Serialize};

/// Classification bucket for a single change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeKind {
    Removal,
    Update,
    Insertion,
}

impl ChangeKind {
    pub fn is_removal(self) -> bool {
        matches!(self, ChangeKind::Removal)
    }
    pub fn is_update(self) -> bool {
        matches!(self, ChangeKind::Update)
    }
    pub fn is_insertion(self) -> bool {
        matches!(self, ChangeKind::Insertion)
    }
}

/// One classified change carrying the affected record.
///
/// Removals carry the original-side record; updates and insertions carry the
/// new-side record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "record", rename_all = "snake_case")]
pub enum Change<T> {
    Removal(T),
    Update(T),
    Insertion(T),
}

impl<T> Change<T> {
    pub fn kind(&self) -> ChangeKind {
        match self {
            Change::Removal(_) => ChangeKind::Removal,
            Change::Update(_) => ChangeKind::Update,
            Change::Insertion(_) => ChangeKind::Insertion,
        }
    }

    pub fn record(&self) -> &T {
        match self {
            Change::Removal(record) | Change::Update(record) | Change::Insertion(record) => record,
        }
    }

    pub fn into_record(self) -> T {
        match self {
            Change::Removal(record) | Change::Update(record) | Change::Insertion(record) => record,
        }
    }

    pub fn is_removal(&self) -> bool {
        self.kind().is_removal()
    }
    pub fn is_update(&self) -> bool {
        self.kind().is_update()
    }
    pub fn is_insertion(&self) -> bool {
        self.kind().is_insertion()
    }
}
