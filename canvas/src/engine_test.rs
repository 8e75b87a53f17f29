#![allow(clippy::float_cmp)]

use rand::SeedableRng;
use rand::rngs::SmallRng;

use super::*;
use crate::geom::Point;

fn run<E: Effect>(effect: &mut E, frames: u32) {
    for frame in 0..frames {
        effect.step(f64::from(frame) * 16.0);
    }
}

#[test]
fn globe_effect_step_advances_rotation() {
    let mut globe = GlobeState::new();
    run(&mut globe, 10);
    assert!((globe.rotation() - 0.04).abs() < 1e-12);
}

#[test]
fn globe_effect_ignores_resize() {
    let mut globe = GlobeState::new();
    Effect::resize(&mut globe, Viewport::new(1000.0, 1000.0, 2.0));
    assert_eq!(globe.size(), 280.0);
}

#[test]
fn trail_effect_step_spawns_dots() {
    let mut trail = TrailState::new();
    trail.pointer_move(Point::new(40.0, 40.0));
    run(&mut trail, 3);
    assert_eq!(trail.dots().len(), 3);
}

#[test]
fn particle_effect_resize_updates_bounds() {
    let mut field = ParticleField::new(Viewport::new(800.0, 600.0, 1.0), &mut SmallRng::seed_from_u64(1));
    Effect::resize(&mut field, Viewport::new(320.0, 240.0, 1.0));
    assert_eq!(field.viewport().width, 320.0);
    assert_eq!(field.viewport().height, 240.0);
}

#[test]
fn particle_effect_step_advances_clock() {
    let mut field = ParticleField::new(Viewport::new(800.0, 600.0, 1.0), &mut SmallRng::seed_from_u64(1));
    run(&mut field, 5);
    assert!((field.time() - 0.04).abs() < 1e-12);
}
