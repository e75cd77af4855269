//! Triply Periodic Minimal Surface (TPMS) fields.
//!
//! Each field evaluates its classic implicit equation at the scaled point
//! and subtracts an iso offset, so the target surface is always the zero
//! level-set regardless of the offset chosen.

use crate::ScalarField;
use nalgebra::Point3;

/// The gyroid surface.
///
/// Evaluates `sin(x)cos(y) + sin(y)cos(z) + sin(z)cos(x) - iso_offset` at
/// the scaled point. `scale` is the spatial frequency multiplier applied to
/// coordinates before evaluation; one period spans `2π / scale` world
/// units.
///
/// # Example
///
/// ```
/// use iso_field::{Gyroid, ScalarField};
/// use nalgebra::Point3;
///
/// let field = Gyroid::new(0.18, 0.0);
/// assert!(field.value(Point3::origin()).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Gyroid {
    /// Spatial frequency multiplier applied to coordinates.
    pub scale: f64,
    /// Offset subtracted from the raw equation value.
    pub iso_offset: f64,
}

impl Gyroid {
    /// Create a gyroid field with the given scale and iso offset.
    #[inline]
    #[must_use]
    pub const fn new(scale: f64, iso_offset: f64) -> Self {
        Self { scale, iso_offset }
    }
}

impl ScalarField for Gyroid {
    fn value(&self, point: Point3<f64>) -> f64 {
        let x = point.x * self.scale;
        let y = point.y * self.scale;
        let z = point.z * self.scale;

        z.sin()
            .mul_add(x.cos(), x.sin().mul_add(y.cos(), y.sin() * z.cos()))
            - self.iso_offset
    }
}

/// The Schwarz-P (Primitive) surface.
///
/// Evaluates `cos(x) + cos(y) + cos(z) - iso_offset` at the scaled point.
#[derive(Debug, Clone, Copy)]
pub struct SchwarzP {
    /// Spatial frequency multiplier applied to coordinates.
    pub scale: f64,
    /// Offset subtracted from the raw equation value.
    pub iso_offset: f64,
}

impl SchwarzP {
    /// Create a Schwarz-P field with the given scale and iso offset.
    #[inline]
    #[must_use]
    pub const fn new(scale: f64, iso_offset: f64) -> Self {
        Self { scale, iso_offset }
    }
}

impl ScalarField for SchwarzP {
    fn value(&self, point: Point3<f64>) -> f64 {
        let x = point.x * self.scale;
        let y = point.y * self.scale;
        let z = point.z * self.scale;

        x.cos() + y.cos() + z.cos() - self.iso_offset
    }
}

/// The Schwarz-D (Diamond) surface.
///
/// Evaluates
/// `sin(x)sin(y)sin(z) + sin(x)cos(y)cos(z) + cos(x)sin(y)cos(z) + cos(x)cos(y)sin(z) - iso_offset`
/// at the scaled point.
#[derive(Debug, Clone, Copy)]
pub struct Diamond {
    /// Spatial frequency multiplier applied to coordinates.
    pub scale: f64,
    /// Offset subtracted from the raw equation value.
    pub iso_offset: f64,
}

impl Diamond {
    /// Create a diamond field with the given scale and iso offset.
    #[inline]
    #[must_use]
    pub const fn new(scale: f64, iso_offset: f64) -> Self {
        Self { scale, iso_offset }
    }
}

impl ScalarField for Diamond {
    fn value(&self, point: Point3<f64>) -> f64 {
        let x = point.x * self.scale;
        let y = point.y * self.scale;
        let z = point.z * self.scale;

        let (sx, cx) = x.sin_cos();
        let (sy, cy) = y.sin_cos();
        let (sz, cz) = z.sin_cos();

        (cx * cy).mul_add(sz, (cx * sy).mul_add(cz, (sx * sy).mul_add(sz, sx * cy * cz)))
            - self.iso_offset
    }
}
