//! Core mesh types for isoforge.
//!
//! This crate provides the foundational types shared by the implicit-surface
//! pipeline:
//!
//! - [`Vertex`] - A point in 3D space
//! - [`IndexedMesh`] - A triangle mesh with indexed vertices
//! - [`Triangle`] - A concrete triangle with vertex positions
//! - [`Aabb`] - Axis-aligned bounding box
//!
//! # Units
//!
//! This library is unit-agnostic. All coordinates are `f64`. Downstream
//! crates assume millimeters, the convention for fabrication output.
//!
//! # Coordinate System
//!
//! Uses a right-handed coordinate system. Face winding is
//! **counter-clockwise (CCW) when viewed from outside**, so normals point
//! outward by the right-hand rule.
//!
//! # Example
//!
//! ```
//! use iso_types::{Vertex, IndexedMesh, Point3, MeshTopology};
//!
//! let mut mesh = IndexedMesh::new();
//! mesh.vertices.push(Vertex::new(Point3::new(0.0, 0.0, 0.0)));
//! mesh.vertices.push(Vertex::new(Point3::new(1.0, 0.0, 0.0)));
//! mesh.vertices.push(Vertex::new(Point3::new(0.5, 1.0, 0.0)));
//! mesh.faces.push([0, 1, 2]);
//!
//! assert_eq!(mesh.face_count(), 1);
//! assert!(!mesh.is_empty());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod bounds;
mod mesh;
mod traits;
mod triangle;
mod vertex;

pub use bounds::Aabb;
pub use mesh::IndexedMesh;
pub use traits::{MeshBounds, MeshTopology};
pub use triangle::Triangle;
pub use vertex::Vertex;

// Re-export nalgebra types for convenience
pub use nalgebra::{Point3, Vector3};
