//! Public move-aware sequence matcher façade.
//!
//! Mirrors the shape of `mdiff/seqmatch/heckel.py`'s two classes
//! (`HeckelSequenceMatcher` and `DisplacementSequenceMatcher`) as one type
//! parameterized over [`AlgorithmKind`], since the two only ever differ in
//! which annotation pass produces `na`/`oa` — everything downstream
//! (extraction, replace folding) is shared.

use crate::cell::Annotation;
use crate::extractor::extract_opcodes;
use crate::opcode::OpCode;
use crate::replace_fold::fold_replace;
use crate::{displacement, heckel};

/// Which annotation algorithm a [`SequenceMatcher`] uses.
///
/// `Heckel` is faster (one pass over a symbol table keyed purely by
/// uniqueness counts) but, per its own known limitation, anchors nothing
/// on sequences where a value repeats the same number of times on both
/// sides (see `heckel::tests::duplicates_in_both_defeat_uniqueness_heuristic`).
/// `Displacement` pairs every occurrence independently and has no such
/// blind spot, at the cost of tracking a per-value occurrence list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlgorithmKind {
    Heckel,
    Displacement,
}

/// Compares two sequences of hashable, equality-comparable items and
/// produces move-aware opcodes describing how to turn `a` into `b`.
///
/// Unlike a classic `difflib`-style matcher, the opcode stream may contain
/// `move`/`moved` pairs in addition to `equal`/`delete`/`insert`/`replace`.
pub struct SequenceMatcher<T> {
    a: Vec<T>,
    b: Vec<T>,
    algorithm: AlgorithmKind,
    replace_mode: bool,
}

impl<T: std::hash::Hash + Eq> SequenceMatcher<T> {
    pub fn new(a: Vec<T>, b: Vec<T>) -> Self {
        Self {
            a,
            b,
            algorithm: AlgorithmKind::Heckel,
            replace_mode: true,
        }
    }

    pub fn with_algorithm(mut self, algorithm: AlgorithmKind) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Controls whether adjacent `delete`+`insert` opcodes are folded into
    /// a single `replace` (the default), or left separate.
    pub fn with_replace_mode(mut self, replace_mode: bool) -> Self {
        self.replace_mode = replace_mode;
        self
    }

    pub fn set_seqs(&mut self, a: Vec<T>, b: Vec<T>) {
        self.a = a;
        self.b = b;
    }

    /// Replaces `a` only, leaving `b` untouched.
    pub fn set_seq1(&mut self, a: Vec<T>) {
        self.a = a;
    }

    /// Replaces `b` only, leaving `a` untouched.
    pub fn set_seq2(&mut self, b: Vec<T>) {
        self.b = b;
    }

    fn annotate(&self) -> Annotation {
        match self.algorithm {
            AlgorithmKind::Heckel => heckel::annotate(&self.a, &self.b),
            AlgorithmKind::Displacement => displacement::annotate(&self.a, &self.b),
        }
    }

    /// Returns the opcode sequence describing how to turn `a` into `b`.
    ///
    /// The first opcode usually starts at `i1 == j1 == 0` and each
    /// following opcode usually picks up where the previous one on the
    /// same side left off — except across `move`/`moved` pairs, where the
    /// relocation breaks that chaining by design.
    pub fn get_opcodes(&self) -> Vec<OpCode> {
        let ann = self.annotate();
        let opcodes = extract_opcodes(&ann);
        if self.replace_mode {
            fold_replace(&opcodes)
        } else {
            opcodes
        }
    }
}
