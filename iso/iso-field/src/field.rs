//! The scalar field capability.

use nalgebra::Point3;

/// A continuous scalar field over 3D space.
///
/// Implementations must be pure: the same point always yields the same
/// value, with no observable side effects. The field must be defined and
/// finite for every finite input point - marching cubes correctness
/// assumes there are no undefined regions inside the sampled domain.
///
/// `Sync` is required so the grid sampler can evaluate distinct points
/// from parallel workers.
///
/// # Example
///
/// ```
/// use iso_field::ScalarField;
/// use nalgebra::Point3;
///
/// /// Horizontal plane at z = 1.
/// struct Plane;
///
/// impl ScalarField for Plane {
///     fn value(&self, point: Point3<f64>) -> f64 {
///         point.z - 1.0
///     }
/// }
///
/// assert_eq!(Plane.value(Point3::new(0.0, 0.0, 3.0)), 2.0);
/// ```
pub trait ScalarField: Sync {
    /// Evaluate the field at a world-space point.
    fn value(&self, point: Point3<f64>) -> f64;
}

impl<F: ScalarField + ?Sized> ScalarField for &F {
    fn value(&self, point: Point3<f64>) -> f64 {
        (**self).value(point)
    }
}
