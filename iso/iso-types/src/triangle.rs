//! Triangle type for geometric calculations.

use nalgebra::{Point3, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A triangle with concrete vertex positions.
///
/// Utility type for geometric calculations; stores actual positions rather
/// than indices. Winding is **counter-clockwise (CCW) when viewed from the
/// front** (normal points toward viewer).
///
/// # Example
///
/// ```
/// use iso_types::{Triangle, Point3};
///
/// let tri = Triangle::new(
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(1.0, 0.0, 0.0),
///     Point3::new(0.0, 1.0, 0.0),
/// );
///
/// assert!((tri.area() - 0.5).abs() < 1e-10);
/// let normal = tri.normal().unwrap();
/// assert!((normal.z - 1.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Triangle {
    /// First vertex.
    pub v0: Point3<f64>,
    /// Second vertex.
    pub v1: Point3<f64>,
    /// Third vertex.
    pub v2: Point3<f64>,
}

impl Triangle {
    /// Create a new triangle from three points.
    #[inline]
    #[must_use]
    pub const fn new(v0: Point3<f64>, v1: Point3<f64>, v2: Point3<f64>) -> Self {
        Self { v0, v1, v2 }
    }

    /// Compute the (unnormalized) face normal via cross product.
    ///
    /// The direction follows the right-hand rule with CCW winding. The
    /// magnitude equals twice the triangle's area.
    #[inline]
    #[must_use]
    pub fn normal_unnormalized(&self) -> Vector3<f64> {
        let e1 = self.v1 - self.v0;
        let e2 = self.v2 - self.v0;
        e1.cross(&e2)
    }

    /// Compute the unit face normal.
    ///
    /// Returns `None` for degenerate triangles (zero or near-zero area).
    ///
    /// # Example
    ///
    /// ```
    /// use iso_types::{Triangle, Point3};
    ///
    /// // Collinear points
    /// let degen = Triangle::new(
    ///     Point3::new(0.0, 0.0, 0.0),
    ///     Point3::new(1.0, 0.0, 0.0),
    ///     Point3::new(2.0, 0.0, 0.0),
    /// );
    /// assert!(degen.normal().is_none());
    /// ```
    #[must_use]
    pub fn normal(&self) -> Option<Vector3<f64>> {
        let n = self.normal_unnormalized();
        let len_sq = n.norm_squared();
        if len_sq > f64::EPSILON {
            Some(n / len_sq.sqrt())
        } else {
            None
        }
    }

    /// Compute the area of the triangle.
    #[inline]
    #[must_use]
    pub fn area(&self) -> f64 {
        self.normal_unnormalized().norm() * 0.5
    }

    /// Get vertices as an array.
    #[inline]
    #[must_use]
    pub const fn vertices(&self) -> [Point3<f64>; 3] {
        [self.v0, self.v1, self.v2]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn triangle_normal_points_up() {
        let tri = Triangle::new(
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
        );

        let n = tri.normal();
        assert!(n.is_some());
        let n = n.map_or((0.0, 0.0, 0.0), |n| (n.x, n.y, n.z));
        assert!(n.0.abs() < 1e-10);
        assert!(n.1.abs() < 1e-10);
        assert!((n.2 - 1.0).abs() < 1e-10);
    }

    #[test]
    fn triangle_area() {
        // Right triangle with legs 3 and 4
        let tri = Triangle::new(
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(3.0, 0.0, 0.0),
            Point3::new(0.0, 4.0, 0.0),
        );
        assert!((tri.area() - 6.0).abs() < 1e-10);
    }

    #[test]
    fn degenerate_triangle_has_no_normal() {
        let tri = Triangle::new(
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(2.0, 0.0, 0.0),
        );
        assert!(tri.normal().is_none());
        assert!(tri.area() < 1e-12);
    }
}
