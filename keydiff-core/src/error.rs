//! Error types for keydiff-core.
//!
//! Classification itself is total; only the strict entry point can fail, and
//! only when a caller violates the unique-key contract.

use std::fmt;
use thiserror::Error;

/// Which input side an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Original,
    New,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Original => f.write_str("original"),
            Side::New => f.write_str("new"),
        }
    }
}

/// Errors reported by the strict classification entry point.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ClassifyError {
    /// Two records in one input side share an identity key. `index` is the
    /// position of the second offending record.
    #[error("duplicate identity key in the {side} input at index {index}")]
    DuplicateKey { side: Side, index: usize },
}
