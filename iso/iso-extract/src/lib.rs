//! Marching-cubes isosurface extraction.
//!
//! Turns a sampled [`ScalarLattice`](iso_grid::ScalarLattice) into an
//! [`IndexedMesh`](iso_types::IndexedMesh) approximating the surface where
//! the field equals a chosen iso-level. Each lattice cell is classified
//! against the classic 256-case tables and triangulated independently, which
//! makes extraction embarrassingly parallel.
//!
//! The output triangle soup keeps duplicate vertices along shared cell
//! edges; [`weld_vertices`] merges them on request.
//!
//! # Example
//!
//! ```
//! use iso_extract::{extract_isosurface, face_normals};
//! use iso_field::Gyroid;
//! use iso_grid::sample_field;
//! use iso_types::MeshTopology;
//!
//! let lattice = sample_field(&Gyroid::new(0.18, 0.0), 60.0, 40).unwrap();
//! let mesh = extract_isosurface(&lattice, 0.0).unwrap();
//! assert_eq!(face_normals(&mesh).len(), mesh.face_count());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod error;
mod extract;
mod normals;
mod tables;
mod weld;

pub use error::{ExtractError, ExtractResult};
pub use extract::{extract_isosurface, INTERP_EPSILON};
pub use normals::{face_normal, face_normals};
pub use weld::{weld_vertices, WELD_QUANTUM};
