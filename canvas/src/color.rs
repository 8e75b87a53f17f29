//! HSLA colors and the site palette.
//!
//! Every effect draws in the same warm orange family, so colors are kept as
//! HSL triples and only the alpha varies from frame to frame.

#[cfg(test)]
#[path = "color_test.rs"]
mod color_test;

/// An HSLA color. `h` in degrees, `s` / `l` in percent, `a` in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsla {
    pub h: f64,
    pub s: f64,
    pub l: f64,
    pub a: f64,
}

impl Hsla {
    #[must_use]
    pub const fn new(h: f64, s: f64, l: f64, a: f64) -> Self {
        Self { h, s, l, a }
    }

    /// Same hue, saturation and lightness with a different alpha.
    #[must_use]
    pub const fn with_alpha(self, a: f64) -> Self {
        Self { a, ..self }
    }

    /// CSS `hsla(...)` string. Alpha is clamped to `[0, 1]` and rounded to
    /// four decimals.
    #[must_use]
    pub fn css(&self) -> String {
        let a = if self.a.is_finite() { self.a.clamp(0.0, 1.0) } else { 0.0 };
        let a = (a * 10_000.0).round() / 10_000.0;
        format!("hsla({}, {}%, {}%, {a})", self.h, self.s, self.l)
    }
}

/// Brand orange.
pub const PRIMARY: Hsla = Hsla::new(24.0, 95.0, 53.0, 1.0);

/// Darker red-orange used for secondary accents.
pub const EMBER: Hsla = Hsla::new(16.0, 90.0, 48.0, 1.0);

/// Deep ember used at the outer edge of glows.
pub const EMBER_DEEP: Hsla = Hsla::new(16.0, 80.0, 40.0, 1.0);

/// Muted orange for particle links.
pub const LINK: Hsla = Hsla::new(24.0, 80.0, 50.0, 1.0);

/// Bright core of trail dots.
pub const HIGHLIGHT: Hsla = Hsla::new(35.0, 100.0, 70.0, 1.0);

/// Core of the main cursor dot.
pub const CURSOR_CORE: Hsla = Hsla::new(35.0, 100.0, 75.0, 1.0);

/// Cursor halo.
pub const CURSOR_GLOW: Hsla = Hsla::new(24.0, 95.0, 55.0, 1.0);

/// Globe body shading toward the rim.
pub const GLOBE_DARK: Hsla = Hsla::new(0.0, 0.0, 5.0, 1.0);

/// Globe body mid-tone.
pub const GLOBE_MID: Hsla = Hsla::new(24.0, 80.0, 40.0, 1.0);

/// Specular highlight on the globe.
pub const SPECULAR: Hsla = Hsla::new(30.0, 40.0, 80.0, 1.0);
