//! Rotating wireframe globe shown in the hero section.
//!
//! The globe is faked in 2D: meridians are ellipses whose width follows the
//! cosine of their longitude and parallels are flattened ellipses at fixed
//! heights. A pulsing marker tracks the home location while it faces the
//! viewer.

#[cfg(test)]
#[path = "globe_test.rs"]
mod globe_test;

use std::f64::consts::PI;

use crate::consts::{
    GLOBE_MARKER_HORIZON, GLOBE_MARKER_LAT, GLOBE_MARKER_LON, GLOBE_MERIDIANS, GLOBE_PADDING, GLOBE_PARALLELS,
    GLOBE_PULSE_MS, GLOBE_ROTATION_STEP, GLOBE_SIZE,
};
use crate::geom::Point;

/// An axis-aligned ellipse outline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ellipse {
    pub center: Point,
    pub rx: f64,
    pub ry: f64,
    pub alpha: f64,
}

/// The pulsing home-location marker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Marker {
    pub center: Point,
    /// Radius of the pulsing glow.
    pub pulse_radius: f64,
}

/// Globe geometry and rotation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlobeState {
    rotation: f64,
    size: f64,
}

impl Default for GlobeState {
    fn default() -> Self {
        Self { rotation: 0.0, size: GLOBE_SIZE }
    }
}

impl GlobeState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance the rotation by one frame.
    pub fn step(&mut self) {
        self.rotation += GLOBE_ROTATION_STEP;
    }

    #[must_use]
    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    /// Side of the square canvas in CSS pixels.
    #[must_use]
    pub fn size(&self) -> f64 {
        self.size
    }

    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(self.size / 2.0, self.size / 2.0)
    }

    #[must_use]
    pub fn radius(&self) -> f64 {
        self.size / 2.0 - GLOBE_PADDING
    }

    /// Longitude lines, rotating with the globe.
    #[must_use]
    pub fn meridians(&self) -> Vec<Ellipse> {
        let c = self.center();
        let r = self.radius();
        (0..GLOBE_MERIDIANS)
            .map(|i| {
                let angle = (i as f64 / GLOBE_MERIDIANS as f64) * PI + self.rotation;
                let squeeze = angle.cos().abs();
                Ellipse {
                    center: Point::new(c.x + angle.sin() * r * 0.15, c.y),
                    rx: (squeeze * r * 0.08).max(1.0),
                    ry: r * 0.95,
                    alpha: 0.04 + squeeze * 0.08,
                }
            })
            .collect()
    }

    /// Latitude lines. These do not rotate.
    #[must_use]
    pub fn parallels(&self) -> Vec<Ellipse> {
        let c = self.center();
        let r = self.radius();
        (1..=GLOBE_PARALLELS)
            .map(|i| {
                let y = c.y + (i as f64 - 3.5) * (r * 0.24);
                let dy = y - c.y;
                let rx = (r * r - dy * dy).max(0.0).sqrt();
                Ellipse { center: Point::new(c.x, y), rx, ry: rx * 0.15, alpha: 0.06 }
            })
            .collect()
    }

    /// The home marker, or `None` while it is on the far side.
    #[must_use]
    pub fn marker(&self, now_ms: f64) -> Option<Marker> {
        let c = self.center();
        let r = self.radius();
        let lon = self.rotation + GLOBE_MARKER_LON;
        if lon.cos() <= GLOBE_MARKER_HORIZON {
            return None;
        }
        Some(Marker {
            center: Point::new(c.x + lon.sin() * r * 0.6, c.y - GLOBE_MARKER_LAT * r * 0.5),
            pulse_radius: 4.0 + (now_ms / GLOBE_PULSE_MS).sin() * 2.0,
        })
    }
}
