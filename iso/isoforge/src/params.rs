//! Surface generation parameters.

use iso_grid::{GridError, MIN_RESOLUTION};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration for one surface generation run.
///
/// Defaults match the reference gyroid: a 60 mm cube sampled at 120 points
/// per axis, field scale 0.18, zero level set.
///
/// # Examples
///
/// ```
/// use isoforge::SurfaceParams;
///
/// let params = SurfaceParams::new()
///     .with_resolution(40)
///     .with_iso_level(0.2);
/// assert!(params.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SurfaceParams {
    /// Edge length of the cubic sampling domain, in mm.
    ///
    /// The domain is centered at the origin.
    pub domain_size: f64,

    /// Samples per axis. Minimum is [`MIN_RESOLUTION`].
    pub resolution: usize,

    /// Spatial frequency passed to the TPMS field constructors.
    ///
    /// Smaller values stretch the surface period; 0.18 gives roughly two
    /// gyroid periods across the default 60 mm domain.
    pub scale: f64,

    /// Field value defining the surface.
    pub iso_level: f64,

    /// Merge coincident vertices after extraction.
    ///
    /// Off by default: STL output does not need shared indices, and the
    /// unwelded triangle soup keeps counts comparable across runs.
    pub weld: bool,
}

impl Default for SurfaceParams {
    fn default() -> Self {
        Self {
            domain_size: 60.0,
            resolution: 120,
            scale: 0.18,
            iso_level: 0.0,
            weld: false,
        }
    }
}

impl SurfaceParams {
    /// Creates parameters with the reference defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the domain edge length in mm.
    #[must_use]
    pub const fn with_domain_size(mut self, domain_size: f64) -> Self {
        self.domain_size = domain_size;
        self
    }

    /// Sets the samples per axis.
    #[must_use]
    pub const fn with_resolution(mut self, resolution: usize) -> Self {
        self.resolution = resolution;
        self
    }

    /// Sets the field scale.
    #[must_use]
    pub const fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    /// Sets the iso level.
    #[must_use]
    pub const fn with_iso_level(mut self, iso_level: f64) -> Self {
        self.iso_level = iso_level;
        self
    }

    /// Enables or disables vertex welding after extraction.
    #[must_use]
    pub const fn with_weld(mut self, weld: bool) -> Self {
        self.weld = weld;
        self
    }

    /// Validates the parameters.
    ///
    /// The same checks run inside the sampler; calling this first lets a
    /// caller reject bad input without touching a field.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::DomainNotPositive`] or
    /// [`GridError::ResolutionTooLow`].
    pub fn validate(&self) -> Result<(), GridError> {
        if self.domain_size <= 0.0 || self.domain_size.is_nan() {
            return Err(GridError::DomainNotPositive(self.domain_size));
        }
        if self.resolution < MIN_RESOLUTION {
            return Err(GridError::ResolutionTooLow {
                resolution: self.resolution,
                min: MIN_RESOLUTION,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_params_match_reference() {
        let params = SurfaceParams::default();
        assert!((params.domain_size - 60.0).abs() < f64::EPSILON);
        assert_eq!(params.resolution, 120);
        assert!((params.scale - 0.18).abs() < f64::EPSILON);
        assert!(params.iso_level.abs() < f64::EPSILON);
        assert!(!params.weld);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn builder_chain() {
        let params = SurfaceParams::new()
            .with_domain_size(30.0)
            .with_resolution(64)
            .with_scale(0.3)
            .with_iso_level(-0.1)
            .with_weld(true);

        assert!((params.domain_size - 30.0).abs() < f64::EPSILON);
        assert_eq!(params.resolution, 64);
        assert!((params.scale - 0.3).abs() < f64::EPSILON);
        assert!((params.iso_level + 0.1).abs() < f64::EPSILON);
        assert!(params.weld);
    }

    #[test]
    fn validate_rejects_bad_domain() {
        let params = SurfaceParams::new().with_domain_size(0.0);
        assert!(matches!(
            params.validate(),
            Err(GridError::DomainNotPositive(_))
        ));
    }

    #[test]
    fn validate_rejects_low_resolution() {
        let params = SurfaceParams::new().with_resolution(9);
        assert!(matches!(
            params.validate(),
            Err(GridError::ResolutionTooLow { resolution: 9, .. })
        ));
    }
}
