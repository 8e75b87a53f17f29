#![allow(clippy::float_cmp)]

use super::*;

const EPSILON: f64 = 1e-10;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

// --- Point ---

#[test]
fn point_new() {
    let p = Point::new(3.0, 4.0);
    assert_eq!(p.x, 3.0);
    assert_eq!(p.y, 4.0);
}

#[test]
fn distance_is_euclidean() {
    let a = Point::new(0.0, 0.0);
    let b = Point::new(3.0, 4.0);
    assert!(approx_eq(a.distance_to(b), 5.0));
}

#[test]
fn distance_is_symmetric() {
    let a = Point::new(-12.5, 7.0);
    let b = Point::new(40.0, -3.25);
    assert!(approx_eq(a.distance_to(b), b.distance_to(a)));
}

#[test]
fn distance_to_self_is_zero() {
    let a = Point::new(9.0, 9.0);
    assert_eq!(a.distance_to(a), 0.0);
}

#[test]
fn midpoint_averages_coordinates() {
    let m = Point::new(0.0, 10.0).midpoint(Point::new(20.0, -10.0));
    assert_eq!(m, Point::new(10.0, 0.0));
}

// --- Viewport ---

#[test]
fn viewport_default_is_empty_with_unit_dpr() {
    let vp = Viewport::default();
    assert_eq!(vp.width, 0.0);
    assert_eq!(vp.height, 0.0);
    assert_eq!(vp.dpr, 1.0);
}

#[test]
fn viewport_new_rejects_invalid_dpr() {
    assert_eq!(Viewport::new(10.0, 10.0, 0.0).dpr, 1.0);
    assert_eq!(Viewport::new(10.0, 10.0, -2.0).dpr, 1.0);
    assert_eq!(Viewport::new(10.0, 10.0, f64::NAN).dpr, 1.0);
}

#[test]
fn viewport_new_clamps_negative_size() {
    let vp = Viewport::new(-5.0, -1.0, 1.0);
    assert_eq!(vp.width, 0.0);
    assert_eq!(vp.height, 0.0);
}

#[test]
fn viewport_area() {
    assert_eq!(Viewport::new(1200.0, 800.0, 2.0).area(), 960_000.0);
}

#[test]
fn backing_size_scales_by_dpr() {
    assert_eq!(Viewport::new(280.0, 280.0, 2.0).backing_size(), (560, 560));
}

#[test]
fn backing_size_rounds_fractional_pixels() {
    assert_eq!(Viewport::new(100.0, 50.0, 1.25).backing_size(), (125, 63));
}

#[test]
fn backing_size_is_never_zero() {
    assert_eq!(Viewport::default().backing_size(), (1, 1));
}
