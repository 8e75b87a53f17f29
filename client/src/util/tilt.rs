//! 3D tilt and spotlight for project cards.

#[cfg(test)]
#[path = "tilt_test.rs"]
mod tilt_test;

/// Pointer offset from the card centre that maps to full tilt.
pub const TILT_RANGE_PX: f64 = 150.0;

/// Maximum rotation in degrees.
pub const TILT_MAX_DEG: f64 = 8.0;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CardTilt {
    pub rotate_x: f64,
    pub rotate_y: f64,
    /// Spotlight centre as a percentage of the card size.
    pub spot_x: f64,
    pub spot_y: f64,
}

impl CardTilt {
    /// Tilt for a pointer offset `(dx, dy)` from the card centre. Pointer
    /// below the centre tips the card back; right of the centre turns it
    /// right. Offsets beyond the range saturate.
    #[must_use]
    pub fn from_pointer(dx: f64, dy: f64) -> Self {
        let dx = dx.clamp(-TILT_RANGE_PX, TILT_RANGE_PX);
        let dy = dy.clamp(-TILT_RANGE_PX, TILT_RANGE_PX);
        let percent = |d: f64| (d + TILT_RANGE_PX) / (2.0 * TILT_RANGE_PX) * 100.0;
        Self {
            rotate_x: (0.0 - dy) / TILT_RANGE_PX * TILT_MAX_DEG,
            rotate_y: dx / TILT_RANGE_PX * TILT_MAX_DEG,
            spot_x: percent(dx),
            spot_y: percent(dy),
        }
    }

    /// Resting state: flat, spotlight centred.
    #[must_use]
    pub fn flat() -> Self {
        Self::from_pointer(0.0, 0.0)
    }

    /// Inline style for the card element.
    #[must_use]
    pub fn style(&self) -> String {
        format!(
            "transform: perspective(800px) rotateX({:.2}deg) rotateY({:.2}deg); --spot-x: {:.1}%; --spot-y: {:.1}%",
            self.rotate_x, self.rotate_y, self.spot_x, self.spot_y
        )
    }
}
