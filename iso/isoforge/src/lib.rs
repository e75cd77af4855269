//! Implicit-field-to-mesh pipeline.
//!
//! This umbrella crate re-exports the `iso-*` crates and wires them into a
//! one-shot pipeline: evaluate a scalar field on a regular lattice, extract
//! the iso-level surface with marching cubes, and serialize the result as
//! ASCII STL.
//!
//! # Quick Start
//!
//! ```no_run
//! use isoforge::prelude::*;
//!
//! let params = SurfaceParams::new().with_resolution(80);
//! let field = Gyroid::new(params.scale, 0.0);
//!
//! let mesh = generate_surface(&params, &field).unwrap();
//! println!("{} triangles", mesh.face_count());
//!
//! export_stl(&params, &field, "gyroid.stl").unwrap();
//! ```
//!
//! # Module Organization
//!
//! - [`types`] - Core data structures: `IndexedMesh`, `Vertex`, `Triangle`
//! - [`field`] - The `ScalarField` trait and the TPMS / analytic fields
//! - [`grid`] - `ScalarLattice` and the parallel field sampler
//! - [`extract`] - Marching cubes, normals, optional vertex welding
//! - [`io`] - ASCII STL reading and writing

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

/// Core data structures.
pub use iso_types as types;

/// Scalar fields: TPMS surfaces and analytic test fields.
pub use iso_field as field;

/// Lattice sampling.
pub use iso_grid as grid;

/// Marching-cubes extraction.
pub use iso_extract as extract;

/// STL serialization.
pub use iso_io as io;

mod error;
mod params;
mod pipeline;

pub use error::{SurfaceError, SurfaceResult};
pub use params::SurfaceParams;
pub use pipeline::{export_stl, generate_gyroid, generate_surface};

/// Common imports for surface generation.
pub mod prelude {
    pub use crate::{export_stl, generate_gyroid, generate_surface, SurfaceParams};
    pub use iso_extract::{extract_isosurface, face_normals, weld_vertices};
    pub use iso_field::{Diamond, Gyroid, ScalarField, SchwarzP, Sphere};
    pub use iso_grid::sample_field;
    pub use iso_io::{load_stl, save_stl};
    pub use iso_types::{IndexedMesh, MeshBounds, MeshTopology, Triangle, Vertex};
}
