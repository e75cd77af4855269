//! Parallel field sampling over a centered cubic domain.

use crate::{GridError, GridResult, ScalarLattice};
use iso_field::ScalarField;
use nalgebra::{Point3, Vector3};
use rayon::prelude::*;
use tracing::debug;

/// Minimum accepted samples per axis.
///
/// Below this the cell grid is too coarse to resolve any of the supported
/// surfaces; requests are rejected before any evaluation.
pub const MIN_RESOLUTION: usize = 10;

/// Sample a scalar field over a cubic domain centered at the origin.
///
/// Axis coordinates are `resolution` evenly spaced values from
/// `-domain_size / 2` to `+domain_size / 2`, so the spacing is
/// `domain_size / (resolution - 1)` on every axis. Every lattice value is
/// the field evaluated at the corresponding world-space point.
///
/// Evaluation is parallelized across z-slabs; since the field is pure, the
/// result is identical to a sequential scan.
///
/// # Errors
///
/// Returns [`GridError::DomainNotPositive`] or
/// [`GridError::ResolutionTooLow`] before evaluating the field even once.
///
/// # Example
///
/// ```
/// use iso_field::Sphere;
/// use iso_grid::sample_field;
///
/// let lattice = sample_field(&Sphere::new(20.0), 60.0, 16).unwrap();
/// // The domain corner is outside the sphere
/// assert!(lattice.get(0, 0, 0) > 0.0);
/// ```
pub fn sample_field<F: ScalarField>(
    field: &F,
    domain_size: f64,
    resolution: usize,
) -> GridResult<ScalarLattice> {
    if domain_size <= 0.0 || domain_size.is_nan() {
        return Err(GridError::DomainNotPositive(domain_size));
    }
    if resolution < MIN_RESOLUTION {
        return Err(GridError::ResolutionTooLow {
            resolution,
            min: MIN_RESOLUTION,
        });
    }

    let half = domain_size / 2.0;
    #[allow(clippy::cast_precision_loss)] // resolution is far below 2^52
    let step = domain_size / (resolution - 1) as f64;
    let origin = Point3::new(-half, -half, -half);
    let spacing = Vector3::new(step, step, step);

    debug!(
        resolution,
        domain_size, step, "sampling field on cubic lattice"
    );

    let mut lattice = ScalarLattice::new((resolution, resolution, resolution), origin, spacing);

    let slab_len = resolution * resolution;
    lattice
        .values
        .par_chunks_mut(slab_len)
        .enumerate()
        .for_each(|(iz, slab)| {
            #[allow(clippy::cast_precision_loss)]
            let z = (iz as f64).mul_add(step, -half);
            for iy in 0..resolution {
                #[allow(clippy::cast_precision_loss)]
                let y = (iy as f64).mul_add(step, -half);
                for ix in 0..resolution {
                    #[allow(clippy::cast_precision_loss)]
                    let x = (ix as f64).mul_add(step, -half);
                    slab[iy * resolution + ix] = field.value(Point3::new(x, y, z));
                }
            }
        });

    Ok(lattice)
}
