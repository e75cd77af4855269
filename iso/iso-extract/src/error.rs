//! Error types for isosurface extraction.

use thiserror::Error;

/// Result type for extraction operations.
pub type ExtractResult<T> = Result<T, ExtractError>;

/// Errors that can occur while extracting an isosurface from a lattice.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ExtractError {
    /// The lattice contains a NaN or infinite sample.
    ///
    /// Non-finite values poison interpolation silently, so the whole lattice
    /// is rejected before any cell is visited.
    #[error("lattice contains a non-finite sample")]
    NonFiniteSample,

    /// The lattice has fewer than two samples on some axis, so it spans no
    /// cube cells.
    #[error("lattice of {0} x {1} x {2} samples spans no cells")]
    LatticeTooSmall(usize, usize, usize),
}
