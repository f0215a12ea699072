//! The standard (non-move) matching-block matcher.
//!
//! Ratcliff/Obershelp longest-matching-block recursion, the algorithm
//! behind Python's `difflib.SequenceMatcher`. Move detection belongs to
//! [`crate::matcher::SequenceMatcher`]; this type is the plain collaborator
//! the line differ's inline character refinement needs, and is also useful
//! on its own whenever move detection isn't wanted.
//!
//! The matching-block index (`b2j`) and the "index by item, scan forward,
//! take the longest run" shape of block-finding follow `algo/myers.rs`'s
//! `extract_edits` map-lookup scan, generalized from `StableId` to any
//! `T: Eq + Hash`.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::opcode::{OpCode, Tag};

/// A single matching block: `a[a_start..a_start+size] == b[b_start..b_start+size]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchingBlock {
    pub a_start: usize,
    pub b_start: usize,
    pub size: usize,
}

/// Ratcliff/Obershelp matcher over two generic, hashable sequences.
pub struct ClassicMatcher<'a, T> {
    a: &'a [T],
    b: &'a [T],
    b2j: FxHashMap<&'a T, SmallVec<[usize; 4]>>,
}

impl<'a, T: std::hash::Hash + Eq> ClassicMatcher<'a, T> {
    pub fn new(a: &'a [T], b: &'a [T]) -> Self {
        let mut b2j: FxHashMap<&T, SmallVec<[usize; 4]>> = FxHashMap::default();
        for (j, item) in b.iter().enumerate() {
            b2j.entry(item).or_default().push(j);
        }
        Self { a, b, b2j }
    }

    /// The single longest matching block within `a[alo..ahi]` and
    /// `b[blo..bhi]`, preferring the match starting earliest in `a`, then
    /// earliest in `b`, among ties — same tie-break as difflib.
    fn find_longest_match(&self, alo: usize, ahi: usize, blo: usize, bhi: usize) -> MatchingBlock {
        let mut best = MatchingBlock { a_start: alo, b_start: blo, size: 0 };
        // run_length[j] = length of the match ending at b-index j that was
        // extended from the previous a-index. Rebuilt per a-index.
        let mut run_length: FxHashMap<usize, usize> = FxHashMap::default();

        for i in alo..ahi {
            let mut new_runs: FxHashMap<usize, usize> = FxHashMap::default();
            if let Some(js) = self.b2j.get(&self.a[i]) {
                for &j in js.iter() {
                    if j < blo || j >= bhi {
                        continue;
                    }
                    let prev = if j > 0 { *run_length.get(&(j - 1)).unwrap_or(&0) } else { 0 };
                    let len = prev + 1;
                    new_runs.insert(j, len);
                    if len > best.size {
                        best = MatchingBlock { a_start: i + 1 - len, b_start: j + 1 - len, size: len };
                    }
                }
            }
            run_length = new_runs;
        }

        best
    }

    /// All non-adjacent maximal matching blocks covering `a`/`b`, in order,
    /// terminated by a zero-length sentinel block at the very end (the
    /// difflib convention, kept so callers can walk gaps uniformly).
    pub fn get_matching_blocks(&self) -> Vec<MatchingBlock> {
        let mut blocks = Vec::new();
        // Explicit work stack instead of recursion, same posture as the
        // line differ's replace-region refinement.
        let mut stack = vec![(0usize, self.a.len(), 0usize, self.b.len())];
        while let Some((alo, ahi, blo, bhi)) = stack.pop() {
            let m = self.find_longest_match(alo, ahi, blo, bhi);
            if m.size == 0 {
                continue;
            }
            blocks.push(m);
            if alo < m.a_start && blo < m.b_start {
                stack.push((alo, m.a_start, blo, m.b_start));
            }
            if m.a_start + m.size < ahi && m.b_start + m.size < bhi {
                stack.push((m.a_start + m.size, ahi, m.b_start + m.size, bhi));
            }
        }
        blocks.sort_by_key(|b| (b.a_start, b.b_start));
        blocks.push(MatchingBlock { a_start: self.a.len(), b_start: self.b.len(), size: 0 });
        blocks
    }

    /// Converts matching blocks to a classic `equal`/`delete`/`insert`/`replace`
    /// opcode stream. Never emits `move`/`moved`.
    pub fn get_opcodes(&self) -> Vec<OpCode> {
        let mut ops = Vec::new();
        let mut i = 0usize;
        let mut j = 0usize;
        for block in self.get_matching_blocks() {
            let (ai, bj, size) = (block.a_start, block.b_start, block.size);
            if i < ai && j < bj {
                ops.push(OpCode::new(Tag::Replace, i, ai, j, bj));
            } else if i < ai {
                ops.push(OpCode::new(Tag::Delete, i, ai, j, j));
            } else if j < bj {
                ops.push(OpCode::new(Tag::Insert, i, i, j, bj));
            }
            if size > 0 {
                ops.push(OpCode::new(Tag::Equal, ai, ai + size, bj, bj + size));
            }
            i = ai + size;
            j = bj + size;
        }
        ops
    }

    /// `2*M / T`, `M` = total matched length, `T = |a| + |b|`. `1.0` when
    /// both sequences are empty.
    pub fn ratio(&self) -> f64 {
        let matches: usize = self.get_matching_blocks().iter().map(|b| b.size).sum();
        calculate_ratio(matches, self.a.len() + self.b.len())
    }

    /// Upper bound on [`Self::ratio`] via multiset intersection of element
    /// frequencies. Always >= the true ratio, much cheaper to compute.
    pub fn quick_ratio(&self) -> f64 {
        let mut b_counts: FxHashMap<&T, usize> = FxHashMap::default();
        for item in self.b {
            *b_counts.entry(item).or_insert(0) += 1;
        }
        let mut a_counts: FxHashMap<&T, usize> = FxHashMap::default();
        let mut matches = 0usize;
        for item in self.a {
            let seen = a_counts.entry(item).or_insert(0);
            if let Some(&avail) = b_counts.get(item) {
                if *seen < avail {
                    matches += 1;
                }
            }
            *seen += 1;
        }
        calculate_ratio(matches, self.a.len() + self.b.len())
    }

    /// Upper bound on [`Self::ratio`] via lengths alone. Cheapest, loosest
    /// bound; used to short-circuit before [`Self::quick_ratio`].
    pub fn real_quick_ratio(&self) -> f64 {
        calculate_ratio(self.a.len().min(self.b.len()), self.a.len() + self.b.len())
    }
}

fn calculate_ratio(matches: usize, total_len: usize) -> f64 {
    if total_len == 0 {
        1.0
    } else {
        2.0 * matches as f64 / total_len as f64
    }
}
