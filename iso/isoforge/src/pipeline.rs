//! One-shot pipeline entry points.

use std::path::Path;

use iso_extract::{extract_isosurface, weld_vertices};
use iso_field::{Gyroid, ScalarField};
use iso_grid::sample_field;
use iso_io::save_stl;
use iso_types::{IndexedMesh, MeshTopology};
use tracing::info;

use crate::{SurfaceParams, SurfaceResult};

/// Sample a field and extract its iso-level surface.
///
/// Runs parameter validation, lattice sampling, marching cubes, and (when
/// [`SurfaceParams::weld`] is set) vertex welding. Each run is independent;
/// nothing is cached between invocations.
///
/// # Errors
///
/// Returns [`SurfaceError::Grid`](crate::SurfaceError::Grid) for invalid
/// parameters (before the field is evaluated) and
/// [`SurfaceError::Extract`](crate::SurfaceError::Extract) when the sampled
/// lattice is unusable.
///
/// # Example
///
/// ```
/// use iso_field::Gyroid;
/// use iso_types::MeshTopology;
/// use isoforge::{generate_surface, SurfaceParams};
///
/// let params = SurfaceParams::new().with_resolution(32);
/// let field = Gyroid::new(params.scale, 0.0);
/// let mesh = generate_surface(&params, &field).unwrap();
/// assert!(mesh.face_count() > 0);
/// ```
pub fn generate_surface<F: ScalarField>(
    params: &SurfaceParams,
    field: &F,
) -> SurfaceResult<IndexedMesh> {
    params.validate()?;

    let lattice = sample_field(field, params.domain_size, params.resolution)?;
    let mut mesh = extract_isosurface(&lattice, params.iso_level)?;
    if params.weld {
        weld_vertices(&mut mesh);
    }

    info!(
        vertices = mesh.vertex_count(),
        faces = mesh.face_count(),
        resolution = params.resolution,
        "generated surface mesh"
    );
    Ok(mesh)
}

/// Generate a gyroid surface from the parameters alone.
///
/// Convenience wrapper constructing the [`Gyroid`] field from
/// [`SurfaceParams::scale`], the configuration the reference tool ships
/// with.
///
/// # Errors
///
/// Same as [`generate_surface`].
pub fn generate_gyroid(params: &SurfaceParams) -> SurfaceResult<IndexedMesh> {
    generate_surface(params, &Gyroid::new(params.scale, 0.0))
}

/// Generate a surface and write it to an ASCII STL file.
///
/// # Errors
///
/// Same as [`generate_surface`], plus
/// [`SurfaceError::Io`](crate::SurfaceError::Io) when the file cannot be
/// written.
///
/// # Example
///
/// ```no_run
/// use iso_field::Gyroid;
/// use isoforge::{export_stl, SurfaceParams};
///
/// let params = SurfaceParams::default();
/// let field = Gyroid::new(params.scale, 0.0);
/// export_stl(&params, &field, "gyroid.stl").unwrap();
/// ```
pub fn export_stl<F: ScalarField, P: AsRef<Path>>(
    params: &SurfaceParams,
    field: &F,
    path: P,
) -> SurfaceResult<()> {
    let mesh = generate_surface(params, field)?;
    save_stl(&mesh, path)?;
    Ok(())
}
