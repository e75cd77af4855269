//! Analytic test fields.
//!
//! These fields have exactly known surfaces, which makes them the reference
//! inputs for extractor tests: the sphere's surface area and centroid are
//! analytic, and the constant field has no surface at all.

use crate::ScalarField;
use nalgebra::Point3;

/// Exact signed distance to a sphere centered at the origin.
///
/// Negative inside, positive outside, zero on the surface.
///
/// # Example
///
/// ```
/// use iso_field::{ScalarField, Sphere};
/// use nalgebra::Point3;
///
/// let field = Sphere::new(5.0);
/// assert!(field.value(Point3::new(5.0, 0.0, 0.0)).abs() < 1e-12);
/// assert!(field.value(Point3::origin()) < 0.0);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Sphere {
    /// Sphere radius.
    pub radius: f64,
}

impl Sphere {
    /// Create a sphere field with the given radius.
    #[inline]
    #[must_use]
    pub const fn new(radius: f64) -> Self {
        Self { radius }
    }
}

impl ScalarField for Sphere {
    fn value(&self, point: Point3<f64>) -> f64 {
        point.coords.norm() - self.radius
    }
}

/// A field with the same value everywhere.
///
/// Never crosses any iso level other than its own value, so extraction
/// yields an empty mesh.
#[derive(Debug, Clone, Copy)]
pub struct Constant(pub f64);

impl ScalarField for Constant {
    fn value(&self, _point: Point3<f64>) -> f64 {
        self.0
    }
}
