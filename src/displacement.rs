//! Displacement annotation: occurrence-cursor based pairing.
//!
//! Translation of `mdiff/seqmatch/heckel.py::DisplacementSequenceMatcher._alg`.
//! Unlike Heckel's uniqueness-count heuristic, every occurrence of a value
//! is recorded up front; `a`'s k-th occurrence of a value is paired with
//! `b`'s k-th occurrence of the same value, independently per side. This
//! is what makes it robust on duplicate-heavy inputs where Heckel produces
//! no anchors at all (see `heckel::tests::duplicates_in_both_defeat_uniqueness_heuristic`).

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::cell::{Annotation, Cell};

#[derive(Default)]
struct Occurrences {
    a_indexes: SmallVec<[usize; 4]>,
    b_indexes: SmallVec<[usize; 4]>,
}

/// Pairs up the k-th occurrence of each distinct value in `a` with the k-th
/// occurrence of the same value in `b`. Excess occurrences on the longer
/// side (when `a` and `b` don't contain a value the same number of times)
/// are left unanchored.
pub(crate) fn annotate<T: std::hash::Hash + Eq>(a: &[T], b: &[T]) -> Annotation {
    let mut table: FxHashMap<&T, Occurrences> = FxHashMap::default();

    for (idx, item) in a.iter().enumerate() {
        table.entry(item).or_default().a_indexes.push(idx);
    }
    for (idx, item) in b.iter().enumerate() {
        table.entry(item).or_default().b_indexes.push(idx);
    }

    let mut ann = Annotation::new(a.len(), b.len());
    // Per-value cursors into a_indexes/b_indexes, advanced as each
    // occurrence is consumed while walking `a` and `b` in parallel.
    let mut a_cursor: FxHashMap<&T, usize> = FxHashMap::default();
    let mut b_cursor: FxHashMap<&T, usize> = FxHashMap::default();

    for (i, item) in a.iter().enumerate() {
        let occ = &table[item];
        let cursor = b_cursor.entry(item).or_insert(0);
        if let Some(&j) = occ.b_indexes.get(*cursor) {
            *cursor += 1;
            ann.na[i] = Cell::Anchor(j);
        }
    }
    for (j, item) in b.iter().enumerate() {
        let occ = &table[item];
        let cursor = a_cursor.entry(item).or_insert(0);
        if let Some(&i) = occ.a_indexes.get(*cursor) {
            *cursor += 1;
            ann.oa[j] = Cell::Anchor(i);
        }
    }

    ann
}
