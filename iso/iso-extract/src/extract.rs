//! Marching-cubes triangulation of a scalar lattice.

use crate::tables::{CORNER_OFFSETS, EDGE_CORNERS, EDGE_TABLE, TRI_TABLE};
use crate::{ExtractError, ExtractResult};
use iso_grid::ScalarLattice;
use iso_types::{IndexedMesh, Vertex};
use nalgebra::Point3;
use rayon::prelude::*;
use tracing::debug;

/// Minimum value difference across a cell edge for linear interpolation.
///
/// When the two endpoint values are closer than this, the crossing point is
/// placed at the edge midpoint instead of dividing by a near-zero span.
pub const INTERP_EPSILON: f64 = 1e-12;

/// Extract the iso-level surface of a sampled lattice as a triangle mesh.
///
/// Each cube cell is classified by which of its eight corners sample below
/// `iso_level` (a corner exactly at the level counts as outside), then
/// triangulated from the classic 256-case lookup tables with crossing points
/// linearly interpolated along the crossed edges.
///
/// Every triangle gets its own three vertices; coincident vertices on shared
/// cell edges are not merged. Pass the result through
/// [`weld_vertices`](crate::weld_vertices) when index sharing matters.
///
/// A lattice with no sign change anywhere produces an empty mesh, which is
/// the normal outcome for a level set that misses the sampled domain.
///
/// Cells are processed in parallel by z-slab; slabs are concatenated in
/// order, so the output is independent of thread scheduling.
///
/// # Errors
///
/// Returns [`ExtractError::LatticeTooSmall`] when some axis has fewer than
/// two samples, and [`ExtractError::NonFiniteSample`] when any sample is NaN
/// or infinite. Both are checked before any cell is triangulated.
///
/// # Example
///
/// ```
/// use iso_extract::extract_isosurface;
/// use iso_field::Sphere;
/// use iso_grid::sample_field;
/// use iso_types::MeshTopology;
///
/// let lattice = sample_field(&Sphere::new(10.0), 30.0, 24).unwrap();
/// let mesh = extract_isosurface(&lattice, 0.0).unwrap();
/// assert!(mesh.face_count() > 0);
/// ```
pub fn extract_isosurface(
    lattice: &ScalarLattice,
    iso_level: f64,
) -> ExtractResult<IndexedMesh> {
    let (nx, ny, nz) = lattice.dimensions();
    if nx < 2 || ny < 2 || nz < 2 {
        return Err(ExtractError::LatticeTooSmall(nx, ny, nz));
    }
    if !lattice.all_finite() {
        return Err(ExtractError::NonFiniteSample);
    }

    let (cx, cy, cz) = lattice.cell_dimensions();

    let slabs: Vec<IndexedMesh> = (0..cz)
        .into_par_iter()
        .map(|iz| {
            let mut slab = IndexedMesh::new();
            for iy in 0..cy {
                for ix in 0..cx {
                    march_cell(lattice, ix, iy, iz, iso_level, &mut slab);
                }
            }
            slab
        })
        .collect();

    let vertex_total: usize = slabs.iter().map(|m| m.vertices.len()).sum();
    let face_total: usize = slabs.iter().map(|m| m.faces.len()).sum();
    let mut mesh = IndexedMesh::with_capacity(vertex_total, face_total);
    for slab in &slabs {
        mesh.merge(slab);
    }

    debug!(
        vertices = vertex_total,
        faces = face_total,
        iso_level,
        "extracted isosurface"
    );

    Ok(mesh)
}

/// Triangulate the cell whose lowest corner is at `(ix, iy, iz)`.
#[allow(clippy::cast_sign_loss)] // table entries are -1-terminated, loop stops before the cast
#[allow(clippy::cast_possible_truncation)] // slab meshes stay far below u32::MAX vertices
fn march_cell(
    lattice: &ScalarLattice,
    ix: usize,
    iy: usize,
    iz: usize,
    iso_level: f64,
    mesh: &mut IndexedMesh,
) {
    let mut values = [0.0_f64; 8];
    let mut corners = [Point3::origin(); 8];
    let mut config = 0_usize;

    for (i, &(dx, dy, dz)) in CORNER_OFFSETS.iter().enumerate() {
        let value = lattice.get(ix + dx, iy + dy, iz + dz);
        values[i] = value;
        corners[i] = lattice.position(ix + dx, iy + dy, iz + dz);
        if value < iso_level {
            config |= 1 << i;
        }
    }

    let crossed = EDGE_TABLE[config];
    if crossed == 0 {
        return;
    }

    let mut edge_points = [Point3::origin(); 12];
    for (e, &(a, b)) in EDGE_CORNERS.iter().enumerate() {
        if crossed & (1 << e) != 0 {
            edge_points[e] =
                interpolate_crossing(corners[a], corners[b], values[a], values[b], iso_level);
        }
    }

    let row = &TRI_TABLE[config];
    let mut i = 0;
    while row[i] != -1 {
        // Table rows wind toward the below-level side; swap the last two
        // corners so faces are CCW viewed from the at-or-above side.
        let base = mesh.vertices.len() as u32;
        mesh.vertices.push(Vertex::new(edge_points[row[i] as usize]));
        mesh.vertices
            .push(Vertex::new(edge_points[row[i + 2] as usize]));
        mesh.vertices
            .push(Vertex::new(edge_points[row[i + 1] as usize]));
        mesh.faces.push([base, base + 1, base + 2]);
        i += 3;
    }
}

/// Locate the iso-level crossing on the edge from `p0` to `p1`.
///
/// The parameter is clamped to `[0, 1]` so rounding near a corner can never
/// place the vertex outside the edge.
fn interpolate_crossing(
    p0: Point3<f64>,
    p1: Point3<f64>,
    v0: f64,
    v1: f64,
    iso_level: f64,
) -> Point3<f64> {
    let span = v1 - v0;
    let t = if span.abs() < INTERP_EPSILON {
        0.5
    } else {
        ((iso_level - v0) / span).clamp(0.0, 1.0)
    };
    p0 + (p1 - p0) * t
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use iso_field::Sphere;
    use iso_grid::sample_field;
    use iso_types::{MeshBounds, MeshTopology};
    use nalgebra::Vector3;

    fn unit_cell_lattice(values: [f64; 8]) -> ScalarLattice {
        let mut lattice = ScalarLattice::new(
            (2, 2, 2),
            Point3::origin(),
            Vector3::new(1.0, 1.0, 1.0),
        );
        for (i, &(dx, dy, dz)) in CORNER_OFFSETS.iter().enumerate() {
            lattice.set(dx, dy, dz, values[i]);
        }
        lattice
    }

    fn has_vertex_at(mesh: &IndexedMesh, x: f64, y: f64, z: f64) -> bool {
        mesh.vertices.iter().any(|v| {
            (v.position.x - x).abs() < 1e-9
                && (v.position.y - y).abs() < 1e-9
                && (v.position.z - z).abs() < 1e-9
        })
    }

    #[test]
    fn uniform_lattice_yields_empty_mesh() {
        let above = unit_cell_lattice([1.0; 8]);
        let mesh = extract_isosurface(&above, 0.0).ok();
        assert!(mesh.is_some_and(|m| m.vertex_count() == 0 && m.face_count() == 0));

        let below = unit_cell_lattice([-1.0; 8]);
        let mesh = extract_isosurface(&below, 0.0).ok();
        assert!(mesh.is_some_and(|m| m.face_count() == 0));
    }

    #[test]
    fn corner_exactly_at_level_counts_as_outside() {
        // Corner 0 sits exactly on the level; no strict sign change exists.
        let mut values = [1.0; 8];
        values[0] = 0.0;
        let mesh = extract_isosurface(&unit_cell_lattice(values), 0.0).ok();
        assert!(mesh.is_some_and(|m| m.face_count() == 0));
    }

    #[test]
    fn single_inside_corner_yields_one_triangle() {
        let mut values = [1.0; 8];
        values[0] = -1.0;
        let mesh = extract_isosurface(&unit_cell_lattice(values), 0.0).ok();
        assert!(mesh.is_some());
        let Some(mesh) = mesh else { return };

        assert_eq!(mesh.face_count(), 1);
        assert_eq!(mesh.vertex_count(), 3);
        assert!(mesh.indices_in_range());

        // Crossings sit halfway along the three edges leaving corner 0
        assert!(has_vertex_at(&mesh, 0.5, 0.0, 0.0));
        assert!(has_vertex_at(&mesh, 0.0, 0.5, 0.0));
        assert!(has_vertex_at(&mesh, 0.0, 0.0, 0.5));
    }

    #[test]
    fn near_equal_endpoints_fall_back_to_midpoint() {
        let mut values = [0.5 + 1e-13; 8];
        values[0] = 0.5 - 1e-13;
        let mesh = extract_isosurface(&unit_cell_lattice(values), 0.5).ok();
        assert!(mesh.is_some());
        let Some(mesh) = mesh else { return };

        assert_eq!(mesh.face_count(), 1);
        assert!(has_vertex_at(&mesh, 0.5, 0.0, 0.0));
        assert!(has_vertex_at(&mesh, 0.0, 0.5, 0.0));
        assert!(has_vertex_at(&mesh, 0.0, 0.0, 0.5));
    }

    #[test]
    fn interpolation_parameter_is_clamped() {
        let p0 = Point3::new(0.0, 0.0, 0.0);
        let p1 = Point3::new(1.0, 0.0, 0.0);

        // Level outside the value span lands on the nearer endpoint
        let below = interpolate_crossing(p0, p1, 1.0, 3.0, 0.0);
        assert_relative_eq!(below.x, 0.0);
        let above = interpolate_crossing(p0, p1, 1.0, 3.0, 5.0);
        assert_relative_eq!(above.x, 1.0);

        let mid = interpolate_crossing(p0, p1, 1.0, 3.0, 2.0);
        assert_relative_eq!(mid.x, 0.5);
    }

    #[test]
    fn rejects_non_finite_samples() {
        let mut values = [1.0; 8];
        values[3] = f64::NAN;
        let result = extract_isosurface(&unit_cell_lattice(values), 0.0);
        assert!(matches!(result, Err(ExtractError::NonFiniteSample)));

        values[3] = f64::INFINITY;
        let result = extract_isosurface(&unit_cell_lattice(values), 0.0);
        assert!(matches!(result, Err(ExtractError::NonFiniteSample)));
    }

    #[test]
    fn rejects_lattice_without_cells() {
        let flat = ScalarLattice::new(
            (1, 5, 5),
            Point3::origin(),
            Vector3::new(1.0, 1.0, 1.0),
        );
        let result = extract_isosurface(&flat, 0.0);
        assert!(matches!(result, Err(ExtractError::LatticeTooSmall(1, 5, 5))));
    }

    #[test]
    fn sphere_surface_matches_analytic_area() {
        let radius = 10.0;
        let lattice = sample_field(&Sphere::new(radius), 30.0, 48).ok();
        assert!(lattice.is_some());
        let Some(lattice) = lattice else { return };

        let mesh = extract_isosurface(&lattice, 0.0).ok();
        assert!(mesh.is_some());
        let Some(mesh) = mesh else { return };

        assert!(mesh.indices_in_range());
        assert!(mesh.face_count() > 100);

        let expected = 4.0 * std::f64::consts::PI * radius * radius;
        let area = mesh.surface_area();
        assert!(
            (area - expected).abs() / expected < 0.05,
            "area {area} vs {expected}"
        );

        let centroid = mesh.vertex_centroid();
        assert!(centroid.coords.norm() < 0.5, "centroid {centroid}");

        // Winding is outward: every normal points away from the center
        for tri in mesh.triangles() {
            if let Some(n) = tri.normal() {
                let mid = (tri.v0.coords + tri.v1.coords + tri.v2.coords) / 3.0;
                assert!(n.dot(&mid) > 0.0, "inward-facing triangle at {mid}");
            }
        }

        // The surface stays within the sampled domain
        let bounds = mesh.bounds();
        assert!(bounds.min.x >= -15.0 - 1e-9 && bounds.max.x <= 15.0 + 1e-9);
    }

    #[test]
    fn extraction_is_deterministic() {
        let lattice = sample_field(&Sphere::new(8.0), 24.0, 20).ok();
        assert!(lattice.is_some());
        let Some(lattice) = lattice else { return };

        let a = extract_isosurface(&lattice, 0.0).ok();
        let b = extract_isosurface(&lattice, 0.0).ok();
        assert!(a.is_some() && b.is_some());
        let (Some(a), Some(b)) = (a, b) else { return };

        assert_eq!(a.faces, b.faces);
        assert_eq!(a.vertex_count(), b.vertex_count());
        for (va, vb) in a.vertices.iter().zip(&b.vertices) {
            assert_eq!(va.position, vb.position);
        }
    }
}
