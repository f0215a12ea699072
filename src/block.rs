//! Generic contiguous-run extraction.
//!
//! `mdiff/block_extractor.py` expresses this as a `BaseBlockExtractor`
//! abstract base class with two template methods (`_open_block_cond`,
//! `_close_block_cond`) and a generator `extract_blocks`. Rust has no
//! runtime-polymorphic template-method idiom that reads as naturally as a
//! pair of closures, so `extract_runs` below takes the open/close
//! predicates directly and returns the completed runs.

/// A maximal run of consecutive indices `[start, end)` (half-open) into the
/// scanned slice, all satisfying the run predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Run {
    pub(crate) start: usize,
    pub(crate) end: usize,
}

impl Run {
    pub(crate) fn len(self) -> usize {
        self.end - self.start
    }
}

/// Scans `items`, grouping maximal runs of adjacent elements for which
/// `in_run(prev, cur)` holds between every consecutive pair. The first
/// element of any would-be run always starts one (there is no "previous"
/// element to compare it against).
///
/// This single predicate replaces the Python base class's separate
/// open/close conditions: `in_run(prev, cur)` is exactly "cur continues the
/// run prev is part of".
pub(crate) fn extract_runs<T>(items: &[T], in_run: impl Fn(&T, &T) -> bool) -> Vec<Run> {
    let mut runs = Vec::new();
    if items.is_empty() {
        return runs;
    }

    let mut start = 0usize;
    for i in 1..items.len() {
        if !in_run(&items[i - 1], &items[i]) {
            runs.push(Run { start, end: i });
            start = i;
        }
    }
    runs.push(Run { start, end: items.len() });
    runs
}

/// Runs of consecutive integers (`cur == prev + 1`), over `mdiff`'s
/// `ConsecutiveIntegersBlockExtractor`. Used to turn a sorted list of
/// anchor indices into contiguous index ranges.
pub(crate) fn consecutive_integer_runs(sorted_indices: &[usize]) -> Vec<Run> {
    extract_runs(sorted_indices, |&prev, &cur| cur == prev + 1)
}

/// Runs of `(index, value)` pairs where both the index and the value
/// increase by exactly one between consecutive elements, over `mdiff`'s
/// `ConsecutiveVectorBlockExtractor`. Used on LIS output and on
/// `na`-derived `(i, j)` move candidates: a run here is a contiguous block
/// that moved (or stayed) together as a unit.
pub(crate) fn consecutive_vector_runs(pairs: &[(usize, usize)]) -> Vec<Run> {
    extract_runs(pairs, |prev, cur| {
        cur.0 == prev.0 + 1 && cur.1 == prev.1 + 1
    })
}

/// Runs of consecutive empty strings, over `mdiff`'s
/// `EmptyStringsBlockExtractor`. Used there by paragraph splitting; kept as
/// a library primitive even though nothing in this crate's call graph
/// reaches for it yet, same as `consecutive_integer_runs`.
pub(crate) fn empty_string_runs(lines: &[&str]) -> Vec<Run> {
    non_member_runs(lines.len(), |i| !lines[i].is_empty())
}

/// Runs of indices whose predicate value is `false` for every member, over
/// `mdiff`'s `NonIntegersBlockExtractor` (there: runs of cells that are
/// *not* a plain `int`, i.e. unanchored). `is_member` is evaluated by
/// position in `0..len`, since callers scan `Cell` slices that are not
/// literally integers here.
pub(crate) fn non_member_runs(len: usize, is_member: impl Fn(usize) -> bool) -> Vec<Run> {
    let flags: Vec<bool> = (0..len).map(|i| !is_member(i)).collect();
    let mut runs = Vec::new();
    let mut start: Option<usize> = None;
    for (i, &excluded) in flags.iter().enumerate() {
        match (excluded, start) {
            (true, None) => start = Some(i),
            (false, Some(s)) => {
                runs.push(Run { start: s, end: i });
                start = None;
            }
            _ => {}
        }
    }
    if let Some(s) = start {
        runs.push(Run { start: s, end: len });
    }
    runs
}
