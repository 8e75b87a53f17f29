use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::geom::Viewport;
use crate::globe::GlobeState;
use crate::particles::ParticleField;
use crate::render;
use crate::trail::TrailState;

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// A canvas animation that can be stepped once per frame and drawn.
///
/// Implementations keep all simulation state free of browser types so they
/// can be tested natively; only `draw` sees the 2D context.
pub trait Effect {
    /// Adopt a new surface size.
    fn resize(&mut self, viewport: Viewport);

    /// Advance the simulation by one frame.
    fn step(&mut self, now_ms: f64);

    /// Draw the current state.
    ///
    /// # Errors
    ///
    /// Returns `Err` if any `Canvas2D` call fails.
    fn draw(&self, ctx: &CanvasRenderingContext2d, viewport: Viewport, now_ms: f64) -> Result<(), JsValue>;
}

impl Effect for TrailState {
    fn resize(&mut self, _viewport: Viewport) {}

    fn step(&mut self, _now_ms: f64) {
        TrailState::step(self);
    }

    fn draw(&self, ctx: &CanvasRenderingContext2d, viewport: Viewport, _now_ms: f64) -> Result<(), JsValue> {
        render::draw_trail(ctx, self, viewport)
    }
}

impl Effect for ParticleField {
    fn resize(&mut self, viewport: Viewport) {
        ParticleField::resize(self, viewport);
    }

    fn step(&mut self, _now_ms: f64) {
        ParticleField::step(self);
    }

    fn draw(&self, ctx: &CanvasRenderingContext2d, viewport: Viewport, _now_ms: f64) -> Result<(), JsValue> {
        render::draw_particles(ctx, self, viewport)
    }
}

impl Effect for GlobeState {
    fn resize(&mut self, _viewport: Viewport) {}

    fn step(&mut self, _now_ms: f64) {
        GlobeState::step(self);
    }

    fn draw(&self, ctx: &CanvasRenderingContext2d, viewport: Viewport, now_ms: f64) -> Result<(), JsValue> {
        render::draw_globe(ctx, self, viewport, now_ms)
    }
}

/// An effect bound to a `<canvas>` element.
pub struct Engine<E> {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    viewport: Viewport,
    effect: E,
}

impl<E: Effect> Engine<E> {
    /// Bind `effect` to `canvas`.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the canvas cannot provide a 2D context.
    pub fn new(canvas: HtmlCanvasElement, effect: E) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas: 2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(Self { canvas, ctx, viewport: Viewport::default(), effect })
    }

    /// Resize the backing store for `viewport` and notify the effect.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        let (w, h) = viewport.backing_size();
        self.canvas.set_width(w);
        self.canvas.set_height(h);
        self.viewport = viewport;
        self.effect.resize(viewport);
    }

    /// Step the effect once and draw it.
    ///
    /// # Errors
    ///
    /// Returns `Err` if drawing fails; the simulation has still advanced.
    pub fn frame(&mut self, now_ms: f64) -> Result<(), JsValue> {
        self.effect.step(now_ms);
        self.effect.draw(&self.ctx, self.viewport, now_ms)
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn effect(&self) -> &E {
        &self.effect
    }

    pub fn effect_mut(&mut self) -> &mut E {
        &mut self.effect
    }
}
