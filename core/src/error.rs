//! Errors raised by sequence operations.
//!
//! Out-of-range indices have no variant: reads past the end yield an absent
//! slot and writes past the end grow the sequence.

use miette::Diagnostic;
use thiserror::Error;

/// Convenience alias for results of fallible sequence operations.
pub type Result<T, E = SequenceError> = core::result::Result<T, E>;

#[derive(Error, Debug, Diagnostic, Clone, PartialEq)]
pub enum SequenceError {
    /// `reduce` or `reduce_right` found no element to seed the accumulator.
    #[diagnostic(
        code(arrayish::empty_reduce),
        help("pass an initial accumulator with `reduce_with` or `reduce_right_with`")
    )]
    #[error("reduce of empty sequence with no initial value")]
    EmptySequenceReduce,

    /// A `sort_by` comparator returned something that does not order its operands.
    #[diagnostic(
        code(arrayish::invalid_comparator),
        help("a comparator must return a negative, zero or positive number")
    )]
    #[error("comparator returned {result} when comparing elements at {left} and {right}")]
    InvalidComparator {
        result: f64,
        left: usize,
        right: usize,
    },
}
