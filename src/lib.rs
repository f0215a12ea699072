//! Move-aware sequence diff.
//!
//! Compares two sequences of arbitrary hashable, equality-comparable items
//! and produces an opcode stream describing how to turn one into the
//! other, the same way `difflib.SequenceMatcher` does — except the
//! matcher can also recognize that a run of elements was *relocated*
//! rather than deleted and reinserted, emitting paired `move`/`moved`
//! opcodes for it.
//!
//! ## Core Modules
//! - `opcode`: `OpCode`/`Tag`/`CompositeOpCode`, the public data model.
//! - `matcher`: [`SequenceMatcher`], the move-aware façade.
//! - `classic`: [`ClassicMatcher`], the plain (non-move) matching-block
//!   matcher used internally for character-level refinement and usable on
//!   its own.
//! - `line_differ`: [`LineDiffer`], a two-level line + character text differ
//!   built on top of the two matchers above.
//!
//! ## Internals
//! - `cell`/`heckel`/`displacement`: the two interchangeable annotation
//!   algorithms that locate correspondences between the two sequences.
//! - `lis`: longest increasing subsequence, used to separate `equal` runs
//!   from `move`/`moved` runs.
//! - `block`: generic contiguous-run extraction shared by both algorithms.
//! - `extractor`/`replace_fold`: turn an annotation into the final opcode
//!   stream.
//!
//! # Usage
//!
//! ```
//! use seqdiff::{AlgorithmKind, SequenceMatcher};
//!
//! let a = vec!["a", "b", "c"];
//! let b = vec!["b", "c", "a"];
//! let matcher = SequenceMatcher::new(a, b).with_algorithm(AlgorithmKind::Displacement);
//! let opcodes = matcher.get_opcodes();
//! assert!(opcodes.iter().any(|op| op.tag == seqdiff::Tag::Move));
//! ```

mod block;
mod cell;
mod classic;
mod displacement;
mod error;
mod extractor;
mod heckel;
mod line_differ;
mod lis;
mod matcher;
mod opcode;
mod replace_fold;

pub use classic::{ClassicMatcher, MatchingBlock};
pub use error::{DiffError, DiffResult};
pub use line_differ::{diff_lines_with_similarities, LineDiffConfig, LineDiffer};
pub use matcher::{AlgorithmKind, SequenceMatcher};
pub use opcode::{CompositeOpCode, OpCode, Tag};
