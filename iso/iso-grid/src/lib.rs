//! Regular 3D scalar lattices and field sampling.
//!
//! The sampler evaluates a [`ScalarField`](iso_field::ScalarField) at every
//! point of a regular lattice spanning a cubic domain centered at the
//! origin. The resulting [`ScalarLattice`] is the sole input to isosurface
//! extraction.
//!
//! Sampling is a pure map over independent points, so it is parallelized
//! across z-slabs with rayon; evaluation order never affects the result.
//!
//! # Example
//!
//! ```
//! use iso_field::Gyroid;
//! use iso_grid::sample_field;
//!
//! let field = Gyroid::new(0.18, 0.0);
//! let lattice = sample_field(&field, 60.0, 40).unwrap();
//! assert_eq!(lattice.dimensions(), (40, 40, 40));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod error;
mod lattice;
mod sample;

pub use error::{GridError, GridResult};
pub use lattice::ScalarLattice;
pub use sample::{sample_field, MIN_RESOLUTION};
