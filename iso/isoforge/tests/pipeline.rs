//! End-to-end pipeline tests: sample → extract → export.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use std::sync::atomic::{AtomicUsize, Ordering};

use approx::assert_relative_eq;
use isoforge::prelude::*;
use isoforge::types::Point3;
use isoforge::{SurfaceError, SurfaceParams};

/// Counts evaluations so tests can assert fail-fast behavior.
struct CountingField(AtomicUsize);

impl ScalarField for CountingField {
    fn value(&self, point: Point3<f64>) -> f64 {
        self.0.fetch_add(1, Ordering::Relaxed);
        point.x
    }
}

#[test]
fn reference_gyroid_produces_a_substantial_centered_mesh() {
    let params = SurfaceParams::new().with_resolution(40);
    let mesh = generate_gyroid(&params).unwrap();

    assert!(
        mesh.face_count() > 1000,
        "got {} triangles",
        mesh.face_count()
    );
    assert!(mesh.indices_in_range());

    // The gyroid is point-symmetric about the origin
    let centroid = mesh.vertex_centroid();
    assert!(centroid.coords.norm() < 1.0, "centroid {centroid}");

    // Every vertex stays inside the sampled domain
    let bounds = mesh.bounds();
    assert!(bounds.min.x >= -30.0 - 1e-9);
    assert!(bounds.max.x <= 30.0 + 1e-9);

    // Normals are unit length or exactly zero
    for n in face_normals(&mesh) {
        let len = n.norm();
        assert!(len.abs() < 1e-12 || (len - 1.0).abs() < 1e-9, "norm {len}");
    }
}

#[test]
fn low_resolution_fails_before_any_field_evaluation() {
    let params = SurfaceParams::new().with_resolution(9);
    let field = CountingField(AtomicUsize::new(0));

    let result = generate_surface(&params, &field);
    assert!(matches!(result, Err(SurfaceError::Grid(_))));
    assert_eq!(field.0.load(Ordering::Relaxed), 0);
}

#[test]
fn constant_field_yields_empty_mesh_not_error() {
    let params = SurfaceParams::new().with_resolution(16);
    let mesh = generate_surface(&params, &isoforge::field::Constant(1.0)).unwrap();
    assert_eq!(mesh.face_count(), 0);
    assert_eq!(mesh.vertex_count(), 0);
}

#[test]
fn higher_resolution_yields_more_triangles() {
    let coarse = SurfaceParams::new().with_resolution(24);
    let fine = SurfaceParams::new().with_resolution(40);

    let coarse_mesh = generate_gyroid(&coarse).unwrap();
    let fine_mesh = generate_gyroid(&fine).unwrap();

    assert!(fine_mesh.face_count() > coarse_mesh.face_count());
}

#[test]
fn welding_reduces_vertices_without_changing_faces() {
    let soup = generate_gyroid(&SurfaceParams::new().with_resolution(24)).unwrap();
    let welded =
        generate_gyroid(&SurfaceParams::new().with_resolution(24).with_weld(true)).unwrap();

    assert_eq!(welded.face_count(), soup.face_count());
    assert!(welded.vertex_count() < soup.vertex_count());
    assert!(welded.indices_in_range());
}

#[test]
fn exported_stl_round_trips_at_six_digit_precision() {
    let params = SurfaceParams::new().with_resolution(20);
    let field = Sphere::new(10.0);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sphere.stl");
    export_stl(&params, &field, &path).unwrap();

    let mesh = generate_surface(&params, &field).unwrap();
    let loaded = load_stl(&path).unwrap();

    assert_eq!(loaded.face_count(), mesh.face_count());
    assert_eq!(loaded.vertex_count(), mesh.vertex_count());
    for (a, b) in loaded.vertices.iter().zip(&mesh.vertices) {
        // Coordinates are within 15 mm, so 6 significant digits leave
        // at most ~1e-4 absolute error.
        assert_relative_eq!(a.position.x, b.position.x, epsilon = 1e-4);
        assert_relative_eq!(a.position.y, b.position.y, epsilon = 1e-4);
        assert_relative_eq!(a.position.z, b.position.z, epsilon = 1e-4);
    }
}

#[test]
fn empty_surface_exports_a_valid_stl() {
    let params = SurfaceParams::new().with_resolution(12);
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty.stl");

    export_stl(&params, &isoforge::field::Constant(-2.5), &path).unwrap();

    let loaded = load_stl(&path).unwrap();
    assert_eq!(loaded.face_count(), 0);
}
