//! Cursor trail: a short queue of fading dots that follows the pointer.
//!
//! The host feeds pointer events in and calls [`TrailState::step`] once per
//! animation frame. [`TrailState::sprites`] and [`TrailState::cursor`] describe
//! what to draw; they never mutate state.

#[cfg(test)]
#[path = "trail_test.rs"]
mod trail_test;

use std::collections::VecDeque;

use crate::consts::{
    CURSOR_CORE_RADIUS, CURSOR_GLOW_RADIUS, TRAIL_MAX_DOTS, TRAIL_MIN_OPACITY, TRAIL_OFFSCREEN, TRAIL_OPACITY_DECAY,
    TRAIL_SCALE_DECAY, TRAIL_SPAWN_OPACITY,
};
use crate::geom::Point;

/// One dot left behind by the pointer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrailDot {
    pub x: f64,
    pub y: f64,
    pub opacity: f64,
    pub scale: f64,
}

/// Draw parameters for a single trail dot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrailSprite {
    pub center: Point,
    /// Radius of the outer radial glow.
    pub glow_radius: f64,
    /// Radius of the bright inner core.
    pub core_radius: f64,
    /// Base alpha; gradient stops scale this further.
    pub alpha: f64,
}

/// Draw parameters for the live cursor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CursorSprite {
    pub center: Point,
    pub glow_radius: f64,
    pub core_radius: f64,
}

/// Pointer tracking and trail dots.
#[derive(Debug, Clone)]
pub struct TrailState {
    pointer: Point,
    inside: bool,
    dots: VecDeque<TrailDot>,
}

impl Default for TrailState {
    fn default() -> Self {
        Self {
            pointer: Point::new(TRAIL_OFFSCREEN, TRAIL_OFFSCREEN),
            inside: false,
            dots: VecDeque::with_capacity(TRAIL_MAX_DOTS + 1),
        }
    }
}

impl TrailState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Pointer input ---

    /// Record a pointer move. A move always implies the pointer is inside.
    pub fn pointer_move(&mut self, p: Point) {
        self.pointer = p;
        self.inside = true;
    }

    pub fn pointer_enter(&mut self) {
        self.inside = true;
    }

    /// The pointer left the document: park it off-screen.
    pub fn pointer_leave(&mut self) {
        self.inside = false;
        self.pointer = Point::new(TRAIL_OFFSCREEN, TRAIL_OFFSCREEN);
    }

    // --- Simulation ---

    /// Advance one frame: spawn a dot under the pointer, trim, then decay.
    pub fn step(&mut self) {
        if self.is_tracking() {
            self.dots.push_back(TrailDot {
                x: self.pointer.x,
                y: self.pointer.y,
                opacity: TRAIL_SPAWN_OPACITY,
                scale: 1.0,
            });
        }

        while self.dots.len() > TRAIL_MAX_DOTS {
            self.dots.pop_front();
        }

        for dot in &mut self.dots {
            dot.opacity *= TRAIL_OPACITY_DECAY;
            dot.scale *= TRAIL_SCALE_DECAY;
        }
    }

    // --- Queries ---

    /// Whether the pointer is inside the document at a drawable position.
    #[must_use]
    pub fn is_tracking(&self) -> bool {
        self.inside && self.pointer.x > 0.0 && self.pointer.y > 0.0
    }

    #[must_use]
    pub fn is_inside(&self) -> bool {
        self.inside
    }

    #[must_use]
    pub fn pointer(&self) -> Point {
        self.pointer
    }

    /// Oldest first.
    pub fn dots(&self) -> impl ExactSizeIterator<Item = &TrailDot> {
        self.dots.iter()
    }

    /// Visible trail dots, oldest first. Older dots are smaller and fainter.
    #[must_use]
    pub fn sprites(&self) -> Vec<TrailSprite> {
        let n = self.dots.len() as f64;
        self.dots
            .iter()
            .enumerate()
            .filter(|(_, dot)| dot.opacity >= TRAIL_MIN_OPACITY)
            .map(|(i, dot)| {
                let progress = i as f64 / n;
                let size = 3.0 + progress * 10.0;
                TrailSprite {
                    center: Point::new(dot.x, dot.y),
                    glow_radius: size * 2.5,
                    core_radius: size * 0.35 * dot.scale,
                    alpha: dot.opacity * progress,
                }
            })
            .collect()
    }

    /// The live cursor, if the pointer is being tracked.
    #[must_use]
    pub fn cursor(&self) -> Option<CursorSprite> {
        self.is_tracking().then_some(CursorSprite {
            center: self.pointer,
            glow_radius: CURSOR_GLOW_RADIUS,
            core_radius: CURSOR_CORE_RADIUS,
        })
    }
}
