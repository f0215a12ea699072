//! Error types for seqdiff.
//!
//! Matching sequences of arbitrary hashable, equality-comparable items never
//! fails (empty inputs produce empty opcode lists). The only user-visible,
//! recoverable failure is invalid line-differ configuration.

use thiserror::Error;

/// Errors that can occur when configuring or running a diff.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum DiffError {
    /// The similarity cutoff passed to the line differ was outside `[0.0, 1.0]`.
    #[error("invalid similarity cutoff: {cutoff} is not in [0.0, 1.0]")]
    InvalidCutoff { cutoff: f64 },
}

/// Result type alias for seqdiff operations.
pub type DiffResult<T> = Result<T, DiffError>;
