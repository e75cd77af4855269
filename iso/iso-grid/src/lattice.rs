//! 3D scalar lattice storing sampled field values.

use nalgebra::{Point3, Vector3};

/// A regular 3D lattice of scalar samples.
///
/// Values are stored in row-major order with x varying fastest, paired with
/// the world-space position of sample `(0, 0, 0)` and the per-axis spacing
/// between adjacent samples. Spacing may be anisotropic, though the default
/// sampler always produces isotropic lattices.
///
/// A lattice with `(nx, ny, nz)` samples spans `(nx-1) × (ny-1) × (nz-1)`
/// cube cells.
///
/// # Example
///
/// ```
/// use iso_grid::ScalarLattice;
/// use nalgebra::{Point3, Vector3};
///
/// let mut lattice = ScalarLattice::new(
///     (10, 10, 10),
///     Point3::new(-5.0, -5.0, -5.0),
///     Vector3::new(1.0, 1.0, 1.0),
/// );
/// lattice.set(2, 3, 4, 1.5);
/// assert_eq!(lattice.get(2, 3, 4), 1.5);
/// ```
#[derive(Debug, Clone)]
pub struct ScalarLattice {
    /// Sample values in row-major order (x varies fastest).
    pub(crate) values: Vec<f64>,
    /// Lattice dimensions (nx, ny, nz).
    dimensions: (usize, usize, usize),
    /// World-space position of sample (0, 0, 0).
    origin: Point3<f64>,
    /// World-space distance between adjacent samples, per axis.
    spacing: Vector3<f64>,
}

impl ScalarLattice {
    /// Create a zero-filled lattice.
    ///
    /// # Arguments
    ///
    /// * `dimensions` - Samples per axis (nx, ny, nz)
    /// * `origin` - World-space position of sample (0, 0, 0)
    /// * `spacing` - Per-axis distance between adjacent samples
    #[must_use]
    pub fn new(
        dimensions: (usize, usize, usize),
        origin: Point3<f64>,
        spacing: Vector3<f64>,
    ) -> Self {
        let (nx, ny, nz) = dimensions;
        Self {
            values: vec![0.0; nx * ny * nz],
            dimensions,
            origin,
            spacing,
        }
    }

    /// Get lattice dimensions as samples per axis.
    #[must_use]
    pub fn dimensions(&self) -> (usize, usize, usize) {
        self.dimensions
    }

    /// Get the number of cube cells per axis.
    ///
    /// One less than the sample count on each axis; zero on any axis means
    /// the lattice has no cells at all.
    #[must_use]
    pub fn cell_dimensions(&self) -> (usize, usize, usize) {
        let (nx, ny, nz) = self.dimensions;
        (
            nx.saturating_sub(1),
            ny.saturating_sub(1),
            nz.saturating_sub(1),
        )
    }

    /// Get the world-space position of sample (0, 0, 0).
    #[must_use]
    pub fn origin(&self) -> Point3<f64> {
        self.origin
    }

    /// Get the per-axis sample spacing.
    #[must_use]
    pub fn spacing(&self) -> Vector3<f64> {
        self.spacing
    }

    /// Get the value at lattice coordinates.
    ///
    /// Returns 0.0 if coordinates are out of bounds.
    #[must_use]
    pub fn get(&self, ix: usize, iy: usize, iz: usize) -> f64 {
        if ix < self.dimensions.0 && iy < self.dimensions.1 && iz < self.dimensions.2 {
            self.values[self.index(ix, iy, iz)]
        } else {
            0.0
        }
    }

    /// Set the value at lattice coordinates.
    ///
    /// Does nothing if coordinates are out of bounds.
    pub fn set(&mut self, ix: usize, iy: usize, iz: usize, value: f64) {
        if ix < self.dimensions.0 && iy < self.dimensions.1 && iz < self.dimensions.2 {
            let idx = self.index(ix, iy, iz);
            self.values[idx] = value;
        }
    }

    /// Get the world-space position of a lattice point.
    #[must_use]
    #[allow(clippy::cast_precision_loss)] // lattice indices are far below 2^52
    pub fn position(&self, ix: usize, iy: usize, iz: usize) -> Point3<f64> {
        Point3::new(
            (ix as f64).mul_add(self.spacing.x, self.origin.x),
            (iy as f64).mul_add(self.spacing.y, self.origin.y),
            (iz as f64).mul_add(self.spacing.z, self.origin.z),
        )
    }

    /// Check that every sample is finite (no NaN or infinity).
    #[must_use]
    pub fn all_finite(&self) -> bool {
        self.values.iter().all(|v| v.is_finite())
    }

    /// Get the total number of samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if the lattice holds no samples.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Access the raw sample slice (x fastest).
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    /// Convert 3D coordinates to linear index.
    pub(crate) fn index(&self, ix: usize, iy: usize, iz: usize) -> usize {
        ix + iy * self.dimensions.0 + iz * self.dimensions.0 * self.dimensions.1
    }
}
