//! Optional vertex welding.
//!
//! The extractor intentionally emits three fresh vertices per triangle, so
//! crossings on shared cell edges appear once per incident triangle. Welding
//! collapses those duplicates into shared indices for consumers that want
//! connectivity (or smaller buffers); STL output does not need it.

use hashbrown::HashMap;
use iso_types::IndexedMesh;
use tracing::debug;

/// Quantization step, in world units, below which positions are considered
/// the same vertex.
pub const WELD_QUANTUM: f64 = 1e-6;

/// Merge vertices whose positions coincide within [`WELD_QUANTUM`].
///
/// Keeps the first occurrence of each position and rewrites face indices to
/// point at it. Face count and face order are unchanged, and so is the
/// geometry: surviving vertices keep their exact original coordinates.
///
/// # Example
///
/// ```
/// use iso_extract::{extract_isosurface, weld_vertices};
/// use iso_field::Sphere;
/// use iso_grid::sample_field;
/// use iso_types::MeshTopology;
///
/// let lattice = sample_field(&Sphere::new(10.0), 30.0, 24).unwrap();
/// let mut mesh = extract_isosurface(&lattice, 0.0).unwrap();
/// let before = mesh.vertex_count();
/// weld_vertices(&mut mesh);
/// assert!(mesh.vertex_count() < before);
/// ```
#[allow(clippy::cast_possible_truncation)] // mesh indices are u32 by design
pub fn weld_vertices(mesh: &mut IndexedMesh) {
    let inv = 1.0 / WELD_QUANTUM;
    let mut seen: HashMap<(i64, i64, i64), u32> = HashMap::with_capacity(mesh.vertices.len());
    let mut kept = Vec::with_capacity(mesh.vertices.len());
    let mut remap = Vec::with_capacity(mesh.vertices.len());

    for vertex in &mesh.vertices {
        let p = vertex.position;
        let key = (
            (p.x * inv).round() as i64,
            (p.y * inv).round() as i64,
            (p.z * inv).round() as i64,
        );
        let next = kept.len() as u32;
        let index = *seen.entry(key).or_insert_with(|| {
            kept.push(*vertex);
            next
        });
        remap.push(index);
    }

    for face in &mut mesh.faces {
        for slot in face {
            *slot = remap[*slot as usize];
        }
    }

    debug!(
        before = remap.len(),
        after = kept.len(),
        "welded duplicate vertices"
    );
    mesh.vertices = kept;
}
