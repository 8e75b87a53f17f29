//! Ambient particle field drawn behind the whole page.
//!
//! Particles drift on a slow shared clock, wrap around the viewport edges and
//! are pushed away from the pointer. Nearby particles are joined by faint
//! links that brighten around the pointer.
//!
//! Randomness is injected through [`rand::Rng`] so the field is reproducible
//! in tests; the browser host seeds a `SmallRng` from `Math.random`.

#[cfg(test)]
#[path = "particles_test.rs"]
mod particles_test;

use std::f64::consts::TAU;

use rand::Rng;

use crate::consts::{
    ORB_COUNT, ORB_RADIUS, PARTICLE_AREA_PER_PARTICLE, PARTICLE_LINK_DISTANCE, PARTICLE_MAX_COUNT,
    PARTICLE_REPEL_RADIUS, PARTICLE_REPEL_STRENGTH, PARTICLE_TIME_STEP, PARTICLE_WRAP_MARGIN,
};
use crate::geom::{Point, Viewport};

/// A single drifting particle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub pos: Point,
    /// Spawn position.
    pub base: Point,
    pub vx: f64,
    pub vy: f64,
    pub size: f64,
    pub opacity: f64,
    /// Pulse phase in radians.
    pub pulse: f64,
    pub pulse_speed: f64,
    /// Per-particle offset into the shared drift clock.
    pub drift: f64,
    /// Pointer proximity in `[0, 1]` measured during the last step.
    pub glow: f64,
}

impl Particle {
    fn spawn<R: Rng + ?Sized>(rng: &mut R, viewport: Viewport) -> Self {
        let x = rng.random::<f64>() * viewport.width;
        let y = rng.random::<f64>() * viewport.height;
        Self {
            pos: Point::new(x, y),
            base: Point::new(x, y),
            vx: (rng.random::<f64>() - 0.5) * 0.3,
            vy: (rng.random::<f64>() - 0.5) * 0.3,
            size: rng.random::<f64>() * 2.0 + 0.3,
            opacity: rng.random::<f64>() * 0.3 + 0.05,
            pulse: rng.random::<f64>() * TAU,
            pulse_speed: 0.01 + rng.random::<f64>() * 0.02,
            drift: rng.random::<f64>() * 0.5 + 0.2,
            glow: 0.0,
        }
    }

    /// Pulse multiplier in `[0.7, 1.0]`.
    #[must_use]
    pub fn pulse_amount(&self) -> f64 {
        self.pulse.sin() * 0.15 + 0.85
    }
}

/// Soft halo drawn around particles close to the pointer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Halo {
    pub radius: f64,
    pub alpha: f64,
}

/// Draw parameters for one particle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParticleSprite {
    pub center: Point,
    pub radius: f64,
    pub alpha: f64,
    pub halo: Option<Halo>,
}

/// A line between two nearby particles. `from` is the index of the
/// particle that owns it (the lower of the pair).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Link {
    pub from: usize,
    pub a: Point,
    pub b: Point,
    pub alpha: f64,
    pub width: f64,
}

/// A large, very faint background orb.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Orb {
    pub center: Point,
    pub radius: f64,
}

/// Number of particles for a viewport: one per 12 000 px², at most 100.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn particle_count(viewport: Viewport) -> usize {
    let raw = (viewport.area() / PARTICLE_AREA_PER_PARTICLE).floor();
    if raw.is_finite() && raw > 0.0 {
        (raw as usize).min(PARTICLE_MAX_COUNT)
    } else {
        0
    }
}

/// The particle field simulation.
#[derive(Debug, Clone)]
pub struct ParticleField {
    particles: Vec<Particle>,
    time: f64,
    pointer: Option<Point>,
    viewport: Viewport,
}

impl ParticleField {
    /// Populate a field for `viewport`. The particle count is fixed here and
    /// does not change on resize.
    pub fn new<R: Rng + ?Sized>(viewport: Viewport, rng: &mut R) -> Self {
        let particles = (0..particle_count(viewport))
            .map(|_| Particle::spawn(rng, viewport))
            .collect();
        Self { particles, time: 0.0, pointer: None, viewport }
    }

    // --- Inputs ---

    pub fn set_pointer(&mut self, pointer: Option<Point>) {
        self.pointer = pointer;
    }

    /// Adopt new bounds. Existing particles keep their positions and wrap
    /// into the new bounds over the following frames.
    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    // --- Simulation ---

    /// Advance one frame.
    pub fn step(&mut self) {
        self.time += PARTICLE_TIME_STEP;
        let time = self.time;
        let pointer = self.pointer;
        let max_x = self.viewport.width + PARTICLE_WRAP_MARGIN;
        let max_y = self.viewport.height + PARTICLE_WRAP_MARGIN;

        for p in &mut self.particles {
            p.pos.x += p.vx + (time + p.drift * 10.0).sin() * 0.15;
            p.pos.y += p.vy + (time + p.drift * 8.0).cos() * 0.12;

            p.glow = 0.0;
            if let Some(pointer) = pointer {
                let dx = p.pos.x - pointer.x;
                let dy = p.pos.y - pointer.y;
                let dist = dx.hypot(dy);
                if dist < PARTICLE_REPEL_RADIUS && dist > 0.0 {
                    let force = (PARTICLE_REPEL_RADIUS - dist) / PARTICLE_REPEL_RADIUS;
                    p.pos.x += dx / dist * force * PARTICLE_REPEL_STRENGTH;
                    p.pos.y += dy / dist * force * PARTICLE_REPEL_STRENGTH;
                    p.glow = 1.0 - dist / PARTICLE_REPEL_RADIUS;
                }
            }

            if p.pos.x < -PARTICLE_WRAP_MARGIN {
                p.pos.x = max_x;
            }
            if p.pos.x > max_x {
                p.pos.x = -PARTICLE_WRAP_MARGIN;
            }
            if p.pos.y < -PARTICLE_WRAP_MARGIN {
                p.pos.y = max_y;
            }
            if p.pos.y > max_y {
                p.pos.y = -PARTICLE_WRAP_MARGIN;
            }

            p.pulse += p.pulse_speed;
        }
    }

    // --- Queries ---

    #[must_use]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    #[must_use]
    pub fn time(&self) -> f64 {
        self.time
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn sprites(&self) -> Vec<ParticleSprite> {
        self.particles
            .iter()
            .map(|p| {
                let pulse = p.pulse_amount();
                let radius = (p.size + p.glow * 3.0) * pulse;
                ParticleSprite {
                    center: p.pos,
                    radius,
                    alpha: (p.opacity + p.glow * 0.5) * pulse,
                    halo: (p.glow > 0.1).then_some(Halo { radius: radius * 4.0, alpha: p.glow * 0.12 }),
                }
            })
            .collect()
    }

    /// Links between every pair of particles closer than the link distance,
    /// grouped by owning particle in particle order.
    #[must_use]
    pub fn links(&self) -> Vec<Link> {
        let mut out = Vec::new();
        for (i, a) in self.particles.iter().enumerate() {
            for b in &self.particles[i + 1..] {
                let dist = a.pos.distance_to(b.pos);
                if dist >= PARTICLE_LINK_DISTANCE {
                    continue;
                }
                let base = 0.03 * (1.0 - dist / PARTICLE_LINK_DISTANCE);
                let bonus = self.pointer.map_or(0.0, |pointer| {
                    let mid_dist = a.pos.midpoint(b.pos).distance_to(pointer);
                    if mid_dist < PARTICLE_REPEL_RADIUS {
                        (1.0 - mid_dist / PARTICLE_REPEL_RADIUS) * 0.12
                    } else {
                        0.0
                    }
                });
                out.push(Link { from: i, a: a.pos, b: b.pos, alpha: base + bonus, width: 0.4 + bonus * 2.0 });
            }
        }
        out
    }

    /// The slow background orbs for the current clock.
    #[must_use]
    pub fn orbs(&self) -> [Orb; ORB_COUNT] {
        let (w, h, t) = (self.viewport.width, self.viewport.height, self.time);
        std::array::from_fn(|k| {
            let k = k as f64;
            Orb {
                center: Point::new(
                    w * (0.2 + k * 0.3) + (t * 0.5 + k * 2.0).sin() * 80.0,
                    h * (0.3 + k * 0.15) + (t * 0.4 + k * 1.5).cos() * 60.0,
                ),
                radius: ORB_RADIUS,
            }
        })
    }
}
