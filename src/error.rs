//! Error types for sparsealg

use thiserror::Error;

/// Result type alias using sparsealg's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in sparsealg operations
#[derive(Error, Debug)]
pub enum Error {
    /// Index and value buffers have different lengths
    #[error("Length mismatch: expected {expected} paired entries, got {got}")]
    LengthMismatch {
        /// Expected number of entries
        expected: usize,
        /// Actual number of entries
        got: usize,
    },

    /// Operand dimensions differ in a binary operation
    #[error("Dimension mismatch: {lhs} vs {rhs}")]
    DimensionMismatch {
        /// Left-hand side dimension
        lhs: usize,
        /// Right-hand side dimension
        rhs: usize,
    },

    /// Index out of bounds
    #[error("Index {index} out of bounds for dimension of size {size}")]
    IndexOutOfBounds {
        /// The invalid index
        index: usize,
        /// Size of the dimension
        size: usize,
    },

    /// An index is stored in more than one slot
    ///
    /// This signals corrupted storage and is never silently deduplicated.
    #[error("Index {index} is stored more than once: uniqueness invariant violated")]
    DuplicateIndex {
        /// The multiply-defined index
        index: usize,
    },

    /// Invalid argument provided to an operation
    #[error("Invalid argument '{arg}': {reason}")]
    InvalidArgument {
        /// The argument name
        arg: &'static str,
        /// Reason for invalidity
        reason: String,
    },
}

impl Error {
    /// Create a length mismatch error
    pub fn length_mismatch(expected: usize, got: usize) -> Self {
        Self::LengthMismatch { expected, got }
    }

    /// Create an invalid argument error
    pub fn invalid_argument(arg: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            arg,
            reason: reason.into(),
        }
    }
}
