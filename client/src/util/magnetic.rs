//! Pointer attraction for magnetic buttons.

#[cfg(test)]
#[path = "magnetic_test.rs"]
mod magnetic_test;

/// Default pull radius in CSS pixels.
pub const MAGNETIC_RADIUS: f64 = 120.0;

/// Default fraction of the pointer delta applied at the element centre.
pub const MAGNETIC_STRENGTH: f64 = 0.2;

/// Element bounds in viewport coordinates, as from `getBoundingClientRect`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    #[must_use]
    pub fn center(&self) -> (f64, f64) {
        (self.left + self.width / 2.0, self.top + self.height / 2.0)
    }
}

/// Translation to apply to the element, or `None` when the pointer is
/// outside `radius` of its centre.
#[must_use]
pub fn magnetic_offset(pointer: (f64, f64), bounds: Bounds, radius: f64, strength: f64) -> Option<(f64, f64)> {
    let (cx, cy) = bounds.center();
    let dx = pointer.0 - cx;
    let dy = pointer.1 - cy;
    let dist = dx.hypot(dy);
    if radius <= 0.0 || dist >= radius {
        return None;
    }
    let pull = (1.0 - dist / radius) * strength;
    Some((dx * pull, dy * pull))
}

/// `transform` value for an offset.
#[must_use]
pub fn translate_style(offset: (f64, f64)) -> String {
    format!("transform: translate({:.2}px, {:.2}px)", offset.0, offset.1)
}

/// Bounds of the element a mouse listener is attached to.
#[cfg(feature = "hydrate")]
#[must_use]
pub fn event_bounds(ev: &web_sys::MouseEvent) -> Option<Bounds> {
    use wasm_bindgen::JsCast;

    let el = ev.current_target()?.dyn_into::<web_sys::Element>().ok()?;
    let rect = el.get_bounding_client_rect();
    Some(Bounds {
        left: rect.left(),
        top: rect.top(),
        width: rect.width(),
        height: rect.height(),
    })
}
