//! Ordered-sequence alignment seam for keydiff.
//!
//! Responsibilities:
//! - Define the [`EditScript`] shape consumers work with.
//! - Define the [`Aligner`] trait so consumers stay independent of the
//!   alignment algorithm.
//! - Provide [`MyersAligner`], the default implementation backed by the
//!   `similar` crate.

use similar::DiffTag;
use similar::algorithms::{Capture, myers};

/// Raw output of an ordered-sequence alignment.
///
/// `removes` holds indices into the old slice and `inserts` indices into the
/// new slice, each in the order the aligner emitted them. The script need
/// not be minimal; consumers may use only the set of touched elements.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditScript {
    /// Indices of old-side elements dropped by the alignment.
    pub removes: Vec<usize>,

    /// Indices of new-side elements introduced by the alignment.
    pub inserts: Vec<usize>,
}

impl EditScript {
    pub fn is_empty(&self) -> bool {
        self.removes.is_empty() && self.inserts.is_empty()
    }
}

/// An ordered-sequence aligner.
///
/// Contract: every old-side element the alignment drops appears in
/// `removes`, every new-side element it introduces appears in `inserts`, and
/// every index is in bounds for the slice it refers to. Minimality is not
/// required.
pub trait Aligner {
    fn align<T: PartialEq>(&self, old: &[T], new: &[T]) -> EditScript;
}

/// Myers-diff aligner.
///
/// The default choice: requires only `PartialEq` on elements, unlike the
/// hashed algorithm variants.
#[derive(Debug, Clone, Copy, Default)]
pub struct MyersAligner;

impl Aligner for MyersAligner {
    fn align<T: PartialEq>(&self, old: &[T], new: &[T]) -> EditScript {
        let mut capture = Capture::new();
        // The capture hook's error type is Infallible.
        myers::diff(&mut capture, old, 0..old.len(), new, 0..new.len())
            .unwrap_or_else(|never| match never {});

        let mut script = EditScript::default();
        for op in capture.ops() {
            match op.tag() {
                DiffTag::Equal => {}
                DiffTag::Delete => script.removes.extend(op.old_range()),
                DiffTag::Insert => script.inserts.extend(op.new_range()),
                DiffTag::Replace => {
                    script.removes.extend(op.old_range());
                    script.inserts.extend(op.new_range());
                }
            }
        }
        script
    }
}
