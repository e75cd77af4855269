//! Per-face normals derived from mesh geometry.

use iso_types::{IndexedMesh, MeshTopology, Triangle};
use nalgebra::Vector3;

/// Compute the unit normal of a triangle.
///
/// Returns the zero vector when the triangle is degenerate (collinear or
/// coincident corners), so callers never divide by a vanishing magnitude.
/// Degenerate triangles are kept in the mesh; consumers that care filter on
/// the zero normal.
#[must_use]
pub fn face_normal(triangle: &Triangle) -> Vector3<f64> {
    triangle.normal().unwrap_or_else(Vector3::zeros)
}

/// Compute the unit normal of every face, in face order.
#[must_use]
pub fn face_normals(mesh: &IndexedMesh) -> Vec<Vector3<f64>> {
    mesh.triangles().map(|tri| face_normal(&tri)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use crate::extract_isosurface;
    use iso_field::ScalarField;
    use iso_grid::sample_field;
    use iso_types::Point3;

    #[test]
    fn ccw_triangle_normal_points_up() {
        let tri = Triangle::new(
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
        );
        let n = face_normal(&tri);
        assert_relative_eq!(n.x, 0.0);
        assert_relative_eq!(n.y, 0.0);
        assert_relative_eq!(n.z, 1.0);
    }

    #[test]
    fn degenerate_triangle_normal_is_zero() {
        let collinear = Triangle::new(
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(2.0, 0.0, 0.0),
        );
        assert_eq!(face_normal(&collinear), Vector3::zeros());

        let collapsed = Triangle::new(
            Point3::new(1.0, 2.0, 3.0),
            Point3::new(1.0, 2.0, 3.0),
            Point3::new(1.0, 2.0, 3.0),
        );
        assert_eq!(face_normal(&collapsed), Vector3::zeros());
    }

    #[test]
    fn extracted_plane_normals_point_toward_higher_values() {
        // Field grows with z, so the outside (at or above the level) is up.
        struct Height;
        impl ScalarField for Height {
            fn value(&self, p: Point3<f64>) -> f64 {
                p.z
            }
        }

        let lattice = sample_field(&Height, 10.0, 11).ok();
        assert!(lattice.is_some());
        let Some(lattice) = lattice else { return };

        let mesh = extract_isosurface(&lattice, 0.5).ok();
        assert!(mesh.is_some());
        let Some(mesh) = mesh else { return };
        assert!(mesh.face_count() > 0);

        for n in face_normals(&mesh) {
            assert_relative_eq!(n.x, 0.0, epsilon = 1e-9);
            assert_relative_eq!(n.y, 0.0, epsilon = 1e-9);
            assert_relative_eq!(n.z, 1.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn one_normal_per_face() {
        let mut mesh = IndexedMesh::new();
        assert!(face_normals(&mesh).is_empty());

        mesh.vertices.push(iso_types::Vertex::from_coords(0.0, 0.0, 0.0));
        mesh.vertices.push(iso_types::Vertex::from_coords(1.0, 0.0, 0.0));
        mesh.vertices.push(iso_types::Vertex::from_coords(0.0, 1.0, 0.0));
        mesh.faces.push([0, 1, 2]);
        mesh.faces.push([0, 2, 1]);
        assert_eq!(face_normals(&mesh).len(), 2);
    }
}
