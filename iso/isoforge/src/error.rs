//! Unified pipeline error.

use thiserror::Error;

/// Result type for pipeline operations.
pub type SurfaceResult<T> = Result<T, SurfaceError>;

/// Any failure along the sample → extract → export pipeline.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SurfaceError {
    /// Parameter validation or sampling failed.
    #[error(transparent)]
    Grid(#[from] iso_grid::GridError),

    /// Isosurface extraction failed.
    #[error(transparent)]
    Extract(#[from] iso_extract::ExtractError),

    /// STL serialization failed.
    #[error(transparent)]
    Io(#[from] iso_io::IoError),
}
