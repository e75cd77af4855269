//! Axis-aligned bounding box.

use nalgebra::{Point3, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An axis-aligned bounding box (AABB).
///
/// # Example
///
/// ```
/// use iso_types::{Aabb, Point3};
///
/// let aabb = Aabb::new(
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(10.0, 10.0, 10.0),
/// );
///
/// assert!(aabb.contains(&Point3::new(5.0, 5.0, 5.0)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Aabb {
    /// Minimum corner (smallest x, y, z values).
    pub min: Point3<f64>,
    /// Maximum corner (largest x, y, z values).
    pub max: Point3<f64>,
}

impl Aabb {
    /// Create a new AABB from minimum and maximum corners.
    ///
    /// The corners are automatically corrected if min > max for any axis.
    #[must_use]
    pub fn new(min: Point3<f64>, max: Point3<f64>) -> Self {
        Self {
            min: Point3::new(min.x.min(max.x), min.y.min(max.y), min.z.min(max.z)),
            max: Point3::new(min.x.max(max.x), min.y.max(max.y), min.z.max(max.z)),
        }
    }

    /// Create an empty (invalid) AABB.
    ///
    /// An empty AABB has min > max, which is useful as a starting point
    /// for expanding to include points.
    #[must_use]
    #[allow(clippy::missing_const_for_fn)] // Point3::new is not const in nalgebra
    pub fn empty() -> Self {
        Self {
            min: Point3::new(f64::INFINITY, f64::INFINITY, f64::INFINITY),
            max: Point3::new(f64::NEG_INFINITY, f64::NEG_INFINITY, f64::NEG_INFINITY),
        }
    }

    /// Create an AABB covering a cube of the given edge length centered
    /// at the origin.
    ///
    /// This is the sampling domain shape used by the grid sampler.
    ///
    /// # Example
    ///
    /// ```
    /// use iso_types::Aabb;
    ///
    /// let domain = Aabb::centered_cube(60.0);
    /// assert_eq!(domain.min.x, -30.0);
    /// assert_eq!(domain.max.z, 30.0);
    /// ```
    #[must_use]
    pub fn centered_cube(edge: f64) -> Self {
        let half = edge.abs() / 2.0;
        Self {
            min: Point3::new(-half, -half, -half),
            max: Point3::new(half, half, half),
        }
    }

    /// Create an AABB from an iterator of points.
    ///
    /// Returns an empty AABB if the iterator is empty.
    #[must_use]
    pub fn from_points<'a>(points: impl Iterator<Item = &'a Point3<f64>>) -> Self {
        let mut aabb = Self::empty();
        for point in points {
            aabb.expand_to_include(point);
        }
        aabb
    }

    /// Expand the AABB to include the given point.
    pub fn expand_to_include(&mut self, point: &Point3<f64>) {
        self.min.x = self.min.x.min(point.x);
        self.min.y = self.min.y.min(point.y);
        self.min.z = self.min.z.min(point.z);
        self.max.x = self.max.x.max(point.x);
        self.max.y = self.max.y.max(point.y);
        self.max.z = self.max.z.max(point.z);
    }

    /// Check if the AABB is empty (has no valid volume).
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y || self.min.z > self.max.z
    }

    /// Get the size (dimensions) of the AABB.
    #[inline]
    #[must_use]
    pub fn size(&self) -> Vector3<f64> {
        self.max - self.min
    }

    /// Get the center of the AABB.
    #[inline]
    #[must_use]
    pub fn center(&self) -> Point3<f64> {
        Point3::new(
            (self.min.x + self.max.x) * 0.5,
            (self.min.y + self.max.y) * 0.5,
            (self.min.z + self.max.z) * 0.5,
        )
    }

    /// Get the length of the longest edge.
    #[inline]
    #[must_use]
    pub fn max_extent(&self) -> f64 {
        let s = self.size();
        s.x.max(s.y).max(s.z)
    }

    /// Check if a point lies inside or on the boundary of the AABB.
    #[inline]
    #[must_use]
    pub fn contains(&self, point: &Point3<f64>) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
            && point.z >= self.min.z
            && point.z <= self.max.z
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn new_corrects_swapped_corners() {
        let aabb = Aabb::new(Point3::new(5.0, 0.0, 3.0), Point3::new(0.0, 2.0, 1.0));
        assert_relative_eq!(aabb.min.x, 0.0);
        assert_relative_eq!(aabb.max.x, 5.0);
        assert_relative_eq!(aabb.min.z, 1.0);
    }

    #[test]
    fn empty_aabb() {
        let aabb = Aabb::empty();
        assert!(aabb.is_empty());
    }

    #[test]
    fn centered_cube_spans_origin() {
        let aabb = Aabb::centered_cube(10.0);
        assert!(aabb.contains(&Point3::origin()));
        assert_relative_eq!(aabb.center().x, 0.0);
        assert_relative_eq!(aabb.size().x, 10.0);
        assert_relative_eq!(aabb.max_extent(), 10.0);
    }

    #[test]
    fn from_points_covers_all() {
        let points = [
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(10.0, 5.0, 3.0),
            Point3::new(-2.0, 8.0, 1.0),
        ];
        let aabb = Aabb::from_points(points.iter());
        assert_relative_eq!(aabb.min.x, -2.0);
        assert_relative_eq!(aabb.max.y, 8.0);
        assert_relative_eq!(aabb.max.z, 3.0);
    }

    #[test]
    fn contains_boundary() {
        let aabb = Aabb::centered_cube(2.0);
        assert!(aabb.contains(&Point3::new(1.0, 1.0, 1.0)));
        assert!(!aabb.contains(&Point3::new(1.0, 1.0, 1.1)));
    }
}
