//! Indexed triangle mesh.

use crate::{Aabb, MeshBounds, MeshTopology, Triangle, Vertex};
use nalgebra::{Point3, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An indexed triangle mesh.
///
/// This is the primary mesh type produced by isosurface extraction. It
/// stores vertices and faces separately, with faces referencing vertices by
/// index.
///
/// # Winding Order
///
/// Faces use **counter-clockwise (CCW) winding** when viewed from outside,
/// so normals point outward by the right-hand rule. Per-triangle normals are
/// derived from geometry (see `iso-extract`), never stored here.
///
/// # Example
///
/// ```
/// use iso_types::{IndexedMesh, Vertex, MeshTopology};
///
/// let mut mesh = IndexedMesh::new();
/// mesh.vertices.push(Vertex::from_coords(0.0, 0.0, 0.0));
/// mesh.vertices.push(Vertex::from_coords(1.0, 0.0, 0.0));
/// mesh.vertices.push(Vertex::from_coords(0.0, 1.0, 0.0));
/// mesh.faces.push([0, 1, 2]);
///
/// assert_eq!(mesh.vertex_count(), 3);
/// assert_eq!(mesh.face_count(), 1);
/// ```
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct IndexedMesh {
    /// Vertex data.
    pub vertices: Vec<Vertex>,

    /// Triangle faces as indices into the vertex array.
    /// Each face is `[v0, v1, v2]` with counter-clockwise winding.
    pub faces: Vec<[u32; 3]>,
}

impl IndexedMesh {
    /// Create a new empty mesh.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            vertices: Vec::new(),
            faces: Vec::new(),
        }
    }

    /// Create a mesh with pre-allocated capacity.
    #[inline]
    #[must_use]
    pub fn with_capacity(vertex_count: usize, face_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            faces: Vec::with_capacity(face_count),
        }
    }

    /// Create a mesh from vertices and faces.
    ///
    /// # Example
    ///
    /// ```
    /// use iso_types::{IndexedMesh, Vertex, MeshTopology};
    ///
    /// let vertices = vec![
    ///     Vertex::from_coords(0.0, 0.0, 0.0),
    ///     Vertex::from_coords(1.0, 0.0, 0.0),
    ///     Vertex::from_coords(0.0, 1.0, 0.0),
    /// ];
    /// let mesh = IndexedMesh::from_parts(vertices, vec![[0, 1, 2]]);
    /// assert_eq!(mesh.face_count(), 1);
    /// ```
    #[inline]
    #[must_use]
    pub const fn from_parts(vertices: Vec<Vertex>, faces: Vec<[u32; 3]>) -> Self {
        Self { vertices, faces }
    }

    /// Reserve capacity for additional vertices and faces.
    pub fn reserve(&mut self, additional_vertices: usize, additional_faces: usize) {
        self.vertices.reserve(additional_vertices);
        self.faces.reserve(additional_faces);
    }

    /// Merge another mesh into this one.
    ///
    /// The other mesh's vertices and faces are appended, with face indices
    /// offset by this mesh's vertex count. This is how per-cell (and
    /// per-worker) sub-meshes are concatenated into one surface.
    ///
    /// # Note
    ///
    /// Vertex indices are u32, so meshes beyond ~4 billion vertices are
    /// unsupported.
    #[allow(clippy::cast_possible_truncation)]
    // Truncation: mesh indices are u32, vertex counts > 4B are unsupported by design
    pub fn merge(&mut self, other: &Self) {
        let vertex_offset = self.vertices.len() as u32;

        self.vertices.extend(other.vertices.iter().copied());

        for face in &other.faces {
            self.faces.push([
                face[0] + vertex_offset,
                face[1] + vertex_offset,
                face[2] + vertex_offset,
            ]);
        }
    }

    /// Check that every face index is within `[0, vertex_count)`.
    #[must_use]
    pub fn indices_in_range(&self) -> bool {
        let n = self.vertices.len();
        self.faces
            .iter()
            .all(|f| f.iter().all(|&i| (i as usize) < n))
    }

    /// Compute the centroid of the vertex positions.
    ///
    /// Returns the origin for an empty mesh. Duplicate vertices (as emitted
    /// by the extractor at shared cell edges) are counted once each, which
    /// still preserves point symmetry of symmetric surfaces.
    #[must_use]
    #[allow(clippy::cast_precision_loss)] // vertex counts are far below 2^52
    pub fn vertex_centroid(&self) -> Point3<f64> {
        if self.vertices.is_empty() {
            return Point3::origin();
        }

        let mut sum = Vector3::<f64>::zeros();
        for v in &self.vertices {
            sum += v.position.coords;
        }
        let n = self.vertices.len() as f64;
        Point3::from(sum / n)
    }

    /// Compute the total surface area of the mesh.
    #[must_use]
    pub fn surface_area(&self) -> f64 {
        self.triangles().map(|tri| tri.area()).sum()
    }
}

impl MeshTopology for IndexedMesh {
    #[inline]
    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    fn face_count(&self) -> usize {
        self.faces.len()
    }

    fn vertex(&self, index: usize) -> Option<&Vertex> {
        self.vertices.get(index)
    }

    fn face(&self, index: usize) -> Option<[u32; 3]> {
        self.faces.get(index).copied()
    }

    fn faces(&self) -> impl Iterator<Item = [u32; 3]> {
        self.faces.iter().copied()
    }

    fn triangles(&self) -> impl Iterator<Item = Triangle> {
        self.faces.iter().map(|&[i0, i1, i2]| Triangle {
            v0: self.vertices[i0 as usize].position,
            v1: self.vertices[i1 as usize].position,
            v2: self.vertices[i2 as usize].position,
        })
    }
}

impl MeshBounds for IndexedMesh {
    fn bounds(&self) -> Aabb {
        if self.vertices.is_empty() {
            return Aabb::empty();
        }

        Aabb::from_points(self.vertices.iter().map(|v| &v.position))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn triangle_mesh() -> IndexedMesh {
        IndexedMesh::from_parts(
            vec![
                Vertex::from_coords(0.0, 0.0, 0.0),
                Vertex::from_coords(1.0, 0.0, 0.0),
                Vertex::from_coords(0.0, 1.0, 0.0),
            ],
            vec![[0, 1, 2]],
        )
    }

    #[test]
    fn mesh_is_empty() {
        let mesh = IndexedMesh::new();
        assert!(mesh.is_empty());

        let mut with_verts = IndexedMesh::new();
        with_verts.vertices.push(Vertex::from_coords(0.0, 0.0, 0.0));
        assert!(with_verts.is_empty()); // no faces

        assert!(!triangle_mesh().is_empty());
    }

    #[test]
    fn mesh_merge_offsets_indices() {
        let mut a = triangle_mesh();
        let b = triangle_mesh();

        a.merge(&b);
        assert_eq!(a.vertex_count(), 6);
        assert_eq!(a.face_count(), 2);
        assert_eq!(a.faces[1], [3, 4, 5]);
        assert!(a.indices_in_range());
    }

    #[test]
    fn indices_in_range_detects_bad_face() {
        let mut mesh = triangle_mesh();
        mesh.faces.push([0, 1, 7]);
        assert!(!mesh.indices_in_range());
    }

    #[test]
    fn vertex_centroid() {
        let mesh = IndexedMesh::from_parts(
            vec![
                Vertex::from_coords(-1.0, -2.0, -3.0),
                Vertex::from_coords(1.0, 2.0, 3.0),
            ],
            Vec::new(),
        );
        let c = mesh.vertex_centroid();
        assert_relative_eq!(c.x, 0.0);
        assert_relative_eq!(c.y, 0.0);
        assert_relative_eq!(c.z, 0.0);
    }

    #[test]
    fn vertex_centroid_averages_positions() {
        let mesh = IndexedMesh::from_parts(
            vec![
                Vertex::from_coords(0.0, 0.0, 0.0),
                Vertex::from_coords(3.0, 0.0, 0.0),
                Vertex::from_coords(0.0, 3.0, 3.0),
            ],
            Vec::new(),
        );
        let c = mesh.vertex_centroid();
        assert_relative_eq!(c.x, 1.0);
        assert_relative_eq!(c.y, 1.0);
        assert_relative_eq!(c.z, 1.0);
    }

    #[test]
    fn empty_mesh_centroid_is_origin() {
        let mesh = IndexedMesh::new();
        assert_relative_eq!(mesh.vertex_centroid().x, 0.0);
    }

    #[test]
    fn mesh_bounds() {
        let mesh = triangle_mesh();
        let bounds = mesh.bounds();
        assert_relative_eq!(bounds.min.x, 0.0);
        assert_relative_eq!(bounds.max.x, 1.0);
        assert_relative_eq!(bounds.max.y, 1.0);

        assert!(IndexedMesh::new().bounds().is_empty());
    }

    #[test]
    fn surface_area_single_triangle() {
        assert_relative_eq!(triangle_mesh().surface_area(), 0.5);
    }
}
