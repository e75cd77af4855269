//! Implicit scalar field definitions.
//!
//! A scalar field maps every point in 3D space to a value; the implicit
//! surface is the set of points where that value crosses an iso level
//! (zero by default). This crate defines the [`ScalarField`] capability
//! consumed by the grid sampler, plus the concrete fields shipped with
//! isoforge:
//!
//! - [`Gyroid`], [`SchwarzP`], [`Diamond`] - triply periodic minimal
//!   surfaces (TPMS), the classic self-supporting fabrication surfaces
//! - [`Sphere`] - exact signed distance to a sphere, with a known analytic
//!   surface area (used to validate the extractor)
//! - [`Constant`] - a field with no surface anywhere
//!
//! # Example
//!
//! ```
//! use iso_field::{Gyroid, ScalarField};
//! use nalgebra::Point3;
//!
//! let field = Gyroid::new(0.18, 0.0);
//! // The gyroid passes through the origin
//! assert!(field.value(Point3::origin()).abs() < 1e-12);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod analytic;
mod field;
mod tpms;

pub use analytic::{Constant, Sphere};
pub use field::ScalarField;
pub use tpms::{Diamond, Gyroid, SchwarzP};
