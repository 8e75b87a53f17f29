#![allow(clippy::float_cmp)]

use super::*;

const EPSILON: f64 = 1e-9;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

fn globe_at(rotation: f64) -> GlobeState {
    GlobeState { rotation, size: GLOBE_SIZE }
}

// --- Geometry ---

#[test]
fn default_globe_is_280_with_radius_120() {
    let g = GlobeState::new();
    assert_eq!(g.size(), 280.0);
    assert_eq!(g.center(), Point::new(140.0, 140.0));
    assert_eq!(g.radius(), 120.0);
    assert_eq!(g.rotation(), 0.0);
}

#[test]
fn step_advances_rotation() {
    let mut g = GlobeState::new();
    for _ in 0..250 {
        g.step();
    }
    assert!(approx_eq(g.rotation(), 1.0));
}

// --- Meridians ---

#[test]
fn twelve_meridians() {
    assert_eq!(GlobeState::new().meridians().len(), 12);
}

#[test]
fn front_meridian_is_widest_and_brightest() {
    let m = globe_at(0.0).meridians();
    // angle 0: cos = 1
    assert!(approx_eq(m[0].rx, 120.0 * 0.08));
    assert!(approx_eq(m[0].alpha, 0.12));
    assert!(approx_eq(m[0].center.x, 140.0));
    assert!(approx_eq(m[0].ry, 114.0));
}

#[test]
fn edge_on_meridian_keeps_minimum_width() {
    let m = globe_at(0.0).meridians();
    // i = 6 -> angle π/2, cos ≈ 0
    assert_eq!(m[6].rx, 1.0);
    assert!(approx_eq(m[6].alpha, 0.04));
    assert!(approx_eq(m[6].center.x, 140.0 + 18.0));
}

#[test]
fn meridians_rotate() {
    let a = globe_at(0.0).meridians();
    let b = globe_at(0.3).meridians();
    assert_ne!(a[0].center.x, b[0].center.x);
}

// --- Parallels ---

#[test]
fn six_parallels_symmetric_about_equator() {
    let p = GlobeState::new().parallels();
    assert_eq!(p.len(), 6);
    for i in 0..3 {
        let top = p[i];
        let bottom = p[5 - i];
        assert!(approx_eq(140.0 - top.center.y, bottom.center.y - 140.0));
        assert!(approx_eq(top.rx, bottom.rx));
    }
}

#[test]
fn parallels_lie_inside_globe() {
    for e in GlobeState::new().parallels() {
        let dy = e.center.y - 140.0;
        assert!(approx_eq(e.rx * e.rx + dy * dy, 120.0 * 120.0));
        assert!(approx_eq(e.ry, e.rx * 0.15));
    }
}

#[test]
fn parallels_ignore_rotation() {
    assert_eq!(globe_at(0.0).parallels(), globe_at(2.0).parallels());
}

// --- Marker ---

#[test]
fn marker_visible_when_facing_viewer() {
    // lon = 1.36, cos ≈ 0.209
    let m = globe_at(0.0).marker(0.0).expect("marker should face the viewer");
    assert!(approx_eq(m.center.x, 140.0 + 1.36_f64.sin() * 72.0));
    assert!(approx_eq(m.center.y, 140.0 - 0.35 * 60.0));
    assert!(approx_eq(m.pulse_radius, 4.0));
}

#[test]
fn marker_hidden_on_far_side() {
    // lon = π -> cos = -1
    assert!(globe_at(PI - 1.36).marker(0.0).is_none());
}

#[test]
fn marker_hidden_just_past_horizon() {
    let lon = (-0.2_f64).acos() + 1e-6;
    assert!(globe_at(lon - 1.36).marker(0.0).is_none());
}

#[test]
fn marker_pulse_oscillates_between_two_and_six() {
    let g = globe_at(0.0);
    for t in (0..10_000).step_by(37) {
        let r = g.marker(f64::from(t)).map_or(0.0, |m| m.pulse_radius);
        assert!((2.0..=6.0).contains(&r));
    }
}
