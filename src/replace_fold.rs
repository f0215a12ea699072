//! Folds adjacent `delete`+`insert` opcode pairs into a single `replace`.
//!
//! Translation of `mdiff/seqmatch/heckel.py::_map_replace_opcodes`, which
//! scans for a `delete` immediately followed by an `insert` (its
//! `HeckelDeleteThenInsertBlockExtractor` always yields blocks of exactly
//! length two). `move`/`moved` opcodes interleaved elsewhere in the
//! sequence never interrupt a delete directly adjacent to an insert, since
//! adjacency here means adjacent in the already-merged opcode list.

use crate::opcode::{OpCode, Tag};

/// Merges every `delete` immediately followed by an `insert` into one
/// `replace` spanning both ranges. All other opcodes pass through
/// unchanged, in order.
pub(crate) fn fold_replace(opcodes: &[OpCode]) -> Vec<OpCode> {
    let mut out = Vec::with_capacity(opcodes.len());
    let mut i = 0;
    while i < opcodes.len() {
        if opcodes[i].tag == Tag::Delete
            && i + 1 < opcodes.len()
            && opcodes[i + 1].tag == Tag::Insert
        {
            let delete = opcodes[i];
            let insert = opcodes[i + 1];
            out.push(OpCode::new(Tag::Replace, delete.i1, delete.i2, insert.j1, insert.j2));
            i += 2;
        } else {
            out.push(opcodes[i]);
            i += 1;
        }
    }
    out
}
