//! Traits for mesh types.

use crate::{Aabb, Triangle, Vertex};

/// Trait for types that provide mesh topology information.
///
/// This is the minimal interface isosurface consumers (writers, preview
/// surfaces) need, allowing them to work with different mesh
/// representations.
pub trait MeshTopology {
    /// Get the number of vertices.
    fn vertex_count(&self) -> usize;

    /// Get the number of faces (triangles).
    fn face_count(&self) -> usize;

    /// Check if the mesh is empty.
    fn is_empty(&self) -> bool {
        self.vertex_count() == 0 || self.face_count() == 0
    }

    /// Get a vertex by index.
    ///
    /// Returns `None` if the index is out of bounds.
    fn vertex(&self, index: usize) -> Option<&Vertex>;

    /// Get a face by index as a vertex index triple.
    ///
    /// Returns `None` if the index is out of bounds.
    fn face(&self, index: usize) -> Option<[u32; 3]>;

    /// Iterate over all faces as vertex index triples.
    fn faces(&self) -> impl Iterator<Item = [u32; 3]>;

    /// Iterate over all triangles with resolved vertex positions.
    fn triangles(&self) -> impl Iterator<Item = Triangle>;
}

/// Trait for types that can compute a bounding box.
pub trait MeshBounds {
    /// Compute the axis-aligned bounding box.
    ///
    /// Returns an empty AABB if the mesh has no vertices.
    fn bounds(&self) -> Aabb;
}
