//! Scroll-derived chrome state (navbar glass, back-to-top, progress bar).

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

/// Scroll offset past which the navbar switches to its solid glass style.
pub const NAV_SOLID_AFTER: f64 = 50.0;

/// Scroll offset past which the back-to-top button appears.
pub const BACK_TO_TOP_AFTER: f64 = 400.0;

/// Snapshot derived from the window scroll metrics.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollState {
    pub nav_solid: bool,
    pub show_back_to_top: bool,
    /// Fraction of the scrollable distance travelled, `[0, 1]`.
    pub progress: f64,
}

impl ScrollState {
    #[must_use]
    pub fn from_metrics(scroll_y: f64, scroll_height: f64, viewport_height: f64) -> Self {
        let scroll_y = if scroll_y.is_finite() { scroll_y.max(0.0) } else { 0.0 };
        let scrollable = scroll_height - viewport_height;
        let progress = if scrollable > 0.0 {
            (scroll_y / scrollable).clamp(0.0, 1.0)
        } else {
            0.0
        };
        Self {
            nav_solid: scroll_y > NAV_SOLID_AFTER,
            show_back_to_top: scroll_y > BACK_TO_TOP_AFTER,
            progress,
        }
    }

    /// `transform` value for the progress bar.
    #[must_use]
    pub fn progress_transform(&self) -> String {
        format!("scaleX({:.4})", self.progress)
    }
}
