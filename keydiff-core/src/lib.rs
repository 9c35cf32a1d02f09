//! Identity-keyed collection diffing.
//!
//! Given an original and a new sequence of identifiable records, classify
//! every difference into updates (key persisted, content changed),
//! insertions (key is new), and removals (key disappeared). Element order is
//! irrelevant to the classification; the alignment underneath is only a
//! source of touched elements.
//!
//! Entry points:
//! - [`classify`] — default Myers alignment, lenient about duplicate keys.
//! - [`classify_with`] — caller-supplied [`Aligner`].
//! - [`try_classify`] — rejects inputs with duplicate keys within one side.

mod classify;
mod error;

pub use classify::{classify, classify_with, try_classify};
pub use error::{ClassifyError, Side};

pub use keydiff_align::{Aligner, EditScript, MyersAligner};
pub use keydiff_types::{Change, ChangeKind, Keyed, KeyedDiff};
