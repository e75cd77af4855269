//! Vertex type.

use nalgebra::Point3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A vertex in 3D space.
///
/// The position is stored as a `Point3<f64>` for high precision. Isosurface
/// extraction emits vertices on cube edges, so positions are generally not
/// aligned to any grid.
///
/// # Example
///
/// ```
/// use iso_types::{Vertex, Point3};
///
/// let v1 = Vertex::new(Point3::new(1.0, 2.0, 3.0));
/// let v2 = Vertex::from_coords(1.0, 2.0, 3.0);
///
/// assert_eq!(v1.position, v2.position);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Vertex {
    /// 3D position.
    pub position: Point3<f64>,
}

impl Vertex {
    /// Create a new vertex at the given position.
    #[inline]
    #[must_use]
    pub const fn new(position: Point3<f64>) -> Self {
        Self { position }
    }

    /// Create a vertex from raw coordinates.
    ///
    /// # Example
    ///
    /// ```
    /// use iso_types::Vertex;
    ///
    /// let v = Vertex::from_coords(1.0, 2.0, 3.0);
    /// assert_eq!(v.position.y, 2.0);
    /// ```
    #[inline]
    #[must_use]
    #[allow(clippy::missing_const_for_fn)] // Point3::new is not const in nalgebra
    pub fn from_coords(x: f64, y: f64, z: f64) -> Self {
        Self::new(Point3::new(x, y, z))
    }

    /// Check that all coordinates are finite (no NaN or infinity).
    #[inline]
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.position.x.is_finite() && self.position.y.is_finite() && self.position.z.is_finite()
    }
}

impl From<Point3<f64>> for Vertex {
    fn from(position: Point3<f64>) -> Self {
        Self::new(position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertex_from_coords() {
        let v = Vertex::from_coords(1.0, 2.0, 3.0);
        assert!((v.position.x - 1.0).abs() < f64::EPSILON);
        assert!((v.position.y - 2.0).abs() < f64::EPSILON);
        assert!((v.position.z - 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn vertex_from_point() {
        let v: Vertex = Point3::new(1.0, 2.0, 3.0).into();
        assert_eq!(v.position, Point3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn vertex_finite() {
        assert!(Vertex::from_coords(0.0, -1.5, 3.0e8).is_finite());
        assert!(!Vertex::from_coords(f64::NAN, 0.0, 0.0).is_finite());
        assert!(!Vertex::from_coords(0.0, f64::INFINITY, 0.0).is_finite());
    }
}
