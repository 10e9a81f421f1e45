//! Failure taxonomy shared across the library.
//!
//! Every fallible operation in the workspace reports one of these variants.
//! Nothing is caught or retried internally: a failure propagates synchronously
//! to the immediate caller. Operations whose failure is an expected outcome
//! (looking up a maybe-absent element, reducing a maybe-empty source) come in
//! paired forms, one returning `Result<_, Error>` and one returning `Option`.

use thiserror::Error as ThisError;

/// Failure kinds surfaced by tuples, iterators and collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ThisError)]
pub enum Error {
    /// An index outside `[0, len)` was passed to an element accessor.
    #[error("index out of range: {index} (length: {len})")]
    IndexOutOfBounds { index: usize, len: usize },

    /// A terminal operation that requires at least one element was applied
    /// to an empty source.
    #[error("empty source")]
    EmptySource,

    /// Two tuples of different arities were given to an operation that
    /// requires equal arities.
    #[error("tuple arity mismatch: {left} vs {right}")]
    ArityMismatch { left: usize, right: usize },

    /// A dynamic element comparator was applied at a position whose runtime
    /// types do not match the comparator's expected type.
    #[error("element type mismatch at position {index}")]
    TypeMismatch { index: usize },
}
