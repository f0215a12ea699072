//! Heckel's five-pass annotation algorithm.
//!
//! Direct translation of `mdiff/seqmatch/heckel.py::HeckelSequenceMatcher._alg`.
//! Python represents a cell as either the Python `int` partner index or a
//! shared `HeckelSymbolTableEntry`, compared by identity (`is`) in passes
//! 4 and 5. Rust's [`Cell`](crate::cell::Cell) only ever needs to answer
//! "is this the same placeholder as that one", which an arena index gives
//! us without needing `Rc`/`RefCell` or requiring `T: Clone`.

use rustc_hash::FxHashMap;

use crate::cell::{Annotation, Cell};

/// A symbol table entry: counts of how many times the value occurs in `a`
/// (`nc`) and in `b` (`oc`), plus the last index it was seen at in `b`
/// (`olno`, written once in pass 2 — see spec.md §9 / DESIGN.md Open
/// Question 1).
#[derive(Debug, Clone, Copy)]
struct SymbolEntry {
    oc: u32,
    nc: u32,
    olno: usize,
}

/// A cell before passes 4/5 have run: either a resolved anchor (pass 3) or
/// a reference to a symbol-table slot, so that two unanchored cells can be
/// compared for "same placeholder" by slot index, exactly like Python's
/// `is` comparison on the shared dataclass instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RawCell {
    Anchor(usize),
    Symbol(u32),
}

/// Runs Heckel's five-pass algorithm over `a` and `b`, returning the
/// resulting [`Annotation`].
pub(crate) fn annotate<T: std::hash::Hash + Eq>(a: &[T], b: &[T]) -> Annotation {
    let mut table: FxHashMap<&T, u32> = FxHashMap::default();
    let mut entries: Vec<SymbolEntry> = Vec::new();

    let mut na: Vec<RawCell> = Vec::with_capacity(a.len());
    let mut oa: Vec<RawCell> = Vec::with_capacity(b.len());

    // pass 1: count occurrences in a.
    for item in a {
        let slot = *table.entry(item).or_insert_with(|| {
            entries.push(SymbolEntry { oc: 0, nc: 0, olno: 0 });
            (entries.len() - 1) as u32
        });
        entries[slot as usize].nc += 1;
        na.push(RawCell::Symbol(slot));
    }

    // pass 2: count occurrences in b, remember the last-seen b index.
    for (idx, item) in b.iter().enumerate() {
        let slot = *table.entry(item).or_insert_with(|| {
            entries.push(SymbolEntry { oc: 0, nc: 0, olno: 0 });
            (entries.len() - 1) as u32
        });
        entries[slot as usize].oc += 1;
        entries[slot as usize].olno = idx;
        oa.push(RawCell::Symbol(slot));
    }

    // pass 3: unique-in-both-sequences entries become reciprocal anchors.
    for i in 0..na.len() {
        if let RawCell::Symbol(slot) = na[i] {
            let e = entries[slot as usize];
            if e.nc == 1 && e.oc == 1 {
                let j = e.olno;
                na[i] = RawCell::Anchor(j);
                oa[j] = RawCell::Anchor(i);
            }
        }
    }

    // pass 4: forward propagation. An anchor at (i, j) whose successors on
    // both sides are the same unresolved symbol extends the anchor run.
    for i in 0..na.len() {
        if let RawCell::Anchor(j) = na[i] {
            if i + 1 < na.len() && j + 1 < oa.len() {
                if let (RawCell::Symbol(na_sym), RawCell::Symbol(oa_sym)) = (na[i + 1], oa[j + 1]) {
                    if na_sym == oa_sym {
                        na[i + 1] = RawCell::Anchor(j + 1);
                        oa[j + 1] = RawCell::Anchor(i + 1);
                    }
                }
            }
        }
    }

    // pass 5: backward propagation, mirroring pass 4.
    for i in (1..na.len()).rev() {
        if let RawCell::Anchor(j) = na[i] {
            if j >= 1 {
                if let (RawCell::Symbol(na_sym), RawCell::Symbol(oa_sym)) = (na[i - 1], oa[j - 1]) {
                    if na_sym == oa_sym {
                        na[i - 1] = RawCell::Anchor(j - 1);
                        oa[j - 1] = RawCell::Anchor(i - 1);
                    }
                }
            }
        }
    }

    let to_cell = |c: RawCell| match c {
        RawCell::Anchor(k) => Cell::Anchor(k),
        RawCell::Symbol(_) => Cell::Unanchored,
    };

    Annotation {
        na: na.into_iter().map(to_cell).collect(),
        oa: oa.into_iter().map(to_cell).collect(),
    }
}
