//! ASCII STL reading and writing.
//!
//! The writer serializes an [`IndexedMesh`](iso_types::IndexedMesh) as an
//! ASCII STL triangle soup, recomputing facet normals from vertex geometry.
//! The reader parses the same dialect back and exists mainly for round-trip
//! verification; binary STL is out of scope.
//!
//! # Example
//!
//! ```
//! use iso_io::write_stl_ascii;
//! use iso_types::IndexedMesh;
//!
//! let mut out = Vec::new();
//! write_stl_ascii(&IndexedMesh::new(), &mut out).unwrap();
//! let text = String::from_utf8(out).unwrap();
//! assert!(text.starts_with("solid"));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod error;
mod stl;

pub use error::{IoError, IoResult};
pub use stl::{load_stl, read_stl_ascii, save_stl, write_stl_ascii};
