//! Error types for sequence operations.

use thiserror::Error;

/// Errors that can occur when reading a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum IndexError {
    /// Position outside `-len..len`.
    #[error("index {index} out of range for sequence of length {len}")]
    OutOfRange {
        /// Requested position.
        index: isize,
        /// Length of the sequence.
        len: usize,
    },
}

/// Errors that can occur when slicing with a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SliceError {
    /// Step is zero.
    #[error("slice step cannot be zero")]
    ZeroStep,
}

/// Errors that can occur when sampling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SampleError {
    /// More elements requested than the sequence holds.
    #[error("cannot sample {requested} elements from a sequence of length {len}")]
    TooLarge {
        /// Number of elements requested.
        requested: usize,
        /// Length of the sequence.
        len: usize,
    },
    /// A drawn position could not be read.
    #[error(transparent)]
    Index(#[from] IndexError),
}
