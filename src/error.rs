//! Error types for packed boolean vector operations.

use thiserror::Error;

/// Error variants for packed boolean vector operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// An index was provided that is out of the vector's bounds.
    #[error("index out of bounds: {0}")]
    IndexOutOfBounds(usize),

    /// A pop requested more elements than the vector holds.
    #[error("insufficient elements: requested {requested}, have {available}")]
    InsufficientElements {
        /// Number of elements the caller asked to remove.
        requested: usize,
        /// Number of elements actually stored.
        available: usize,
    },

    /// An append would exceed the maximum representable occupancy.
    #[error("capacity exceeded")]
    CapacityExceeded,
}

/// A specialized Result type for packed vector operations.
pub type Result<T> = std::result::Result<T, Error>;
