//! Error types for grid sampling.

use thiserror::Error;

/// Result type for grid sampling operations.
pub type GridResult<T> = Result<T, GridError>;

/// Errors that can occur while building a scalar lattice.
///
/// All variants are detected during parameter validation, before any field
/// evaluation happens.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum GridError {
    /// The sampling domain edge length is zero or negative.
    #[error("domain size must be positive, got {0}")]
    DomainNotPositive(f64),

    /// The per-axis sample count is below the supported minimum.
    #[error("resolution must be at least {min}, got {resolution}")]
    ResolutionTooLow {
        /// The requested samples per axis.
        resolution: usize,
        /// The minimum accepted value.
        min: usize,
    },
}
