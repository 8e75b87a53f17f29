//! Rendering: draws effect state onto a 2D context.
//!
//! This module is the only place that touches [`web_sys::CanvasRenderingContext2d`].
//! It receives read-only views of effect state and produces pixels; it does
//! not mutate any simulation.
//!
//! All fallible `Canvas2D` calls propagate errors via `Result<(), JsValue>`.
//! The caller ([`crate::engine::Engine::frame`]) handles the result.

use std::f64::consts::TAU;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::color::{
    CURSOR_CORE, CURSOR_GLOW, EMBER, EMBER_DEEP, GLOBE_DARK, GLOBE_MID, HIGHLIGHT, Hsla, LINK, PRIMARY, SPECULAR,
};
use crate::geom::{Point, Viewport};
use crate::globe::{Ellipse, GlobeState};
use crate::particles::{Link, ParticleField};
use crate::trail::TrailState;

/// Blur radius of the cursor core shadow.
const CURSOR_SHADOW_BLUR: f64 = 12.0;

/// Draw the cursor trail and the live cursor.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails.
pub fn draw_trail(ctx: &CanvasRenderingContext2d, trail: &TrailState, viewport: Viewport) -> Result<(), JsValue> {
    clear(ctx, viewport)?;

    for sprite in trail.sprites() {
        let a = sprite.alpha;
        fill_radial(
            ctx,
            sprite.center,
            sprite.glow_radius,
            &[(0.0, PRIMARY.with_alpha(a * 0.5)), (0.4, EMBER.with_alpha(a * 0.2)), (1.0, EMBER_DEEP.with_alpha(0.0))],
        )?;
        fill_circle(ctx, sprite.center, sprite.core_radius, &HIGHLIGHT.with_alpha(a).css())?;
    }

    if let Some(cursor) = trail.cursor() {
        fill_radial(
            ctx,
            cursor.center,
            cursor.glow_radius,
            &[(0.0, CURSOR_GLOW.with_alpha(0.12)), (1.0, CURSOR_GLOW.with_alpha(0.0))],
        )?;
        ctx.set_shadow_color(&PRIMARY.with_alpha(0.7).css());
        ctx.set_shadow_blur(CURSOR_SHADOW_BLUR);
        let drawn = fill_circle(ctx, cursor.center, cursor.core_radius, &CURSOR_CORE.with_alpha(0.9).css());
        ctx.set_shadow_blur(0.0);
        drawn?;
    }

    Ok(())
}

/// Draw the particle field: each particle followed by its links, then the
/// background orbs.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails.
pub fn draw_particles(
    ctx: &CanvasRenderingContext2d,
    field: &ParticleField,
    viewport: Viewport,
) -> Result<(), JsValue> {
    clear(ctx, viewport)?;

    // Each particle's links go down right after the particle, so later
    // particles paint over earlier links.
    let links = field.links();
    let mut links = links.iter().peekable();
    for (i, sprite) in field.sprites().iter().enumerate() {
        fill_circle(ctx, sprite.center, sprite.radius, &PRIMARY.with_alpha(sprite.alpha).css())?;
        if let Some(halo) = sprite.halo {
            fill_radial(
                ctx,
                sprite.center,
                halo.radius,
                &[(0.0, PRIMARY.with_alpha(halo.alpha)), (1.0, PRIMARY.with_alpha(0.0))],
            )?;
        }
        while let Some(link) = links.next_if(|l| l.from == i) {
            stroke_link(ctx, link);
        }
    }

    for orb in field.orbs() {
        fill_radial(
            ctx,
            orb.center,
            orb.radius,
            &[(0.0, PRIMARY.with_alpha(0.02)), (0.5, PRIMARY.with_alpha(0.008)), (1.0, PRIMARY.with_alpha(0.0))],
        )?;
    }

    Ok(())
}

fn stroke_link(ctx: &CanvasRenderingContext2d, link: &Link) {
    ctx.begin_path();
    ctx.move_to(link.a.x, link.a.y);
    ctx.line_to(link.b.x, link.b.y);
    ctx.set_stroke_style_str(&LINK.with_alpha(link.alpha).css());
    ctx.set_line_width(link.width);
    ctx.stroke();
}

/// Draw the globe: glow, shaded body, wireframe, home marker and highlight.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails.
pub fn draw_globe(
    ctx: &CanvasRenderingContext2d,
    globe: &GlobeState,
    viewport: Viewport,
    now_ms: f64,
) -> Result<(), JsValue> {
    clear(ctx, viewport)?;
    let c = globe.center();
    let r = globe.radius();

    // Layer 1: outer glow and body.
    let glow = ctx.create_radial_gradient(c.x, c.y, r * 0.8, c.x, c.y, r * 1.3)?;
    glow.add_color_stop(0.0, &PRIMARY.with_alpha(0.06).css())?;
    glow.add_color_stop(1.0, &PRIMARY.with_alpha(0.0).css())?;
    ctx.begin_path();
    ctx.arc(c.x, c.y, r * 1.3, 0.0, TAU)?;
    ctx.set_fill_style_canvas_gradient(&glow);
    ctx.fill();

    let body = ctx.create_radial_gradient(c.x - r * 0.3, c.y - r * 0.3, 0.0, c.x, c.y, r)?;
    body.add_color_stop(0.0, &PRIMARY.with_alpha(0.08).css())?;
    body.add_color_stop(0.5, &GLOBE_MID.with_alpha(0.04).css())?;
    body.add_color_stop(1.0, &GLOBE_DARK.with_alpha(0.4).css())?;
    ctx.begin_path();
    ctx.arc(c.x, c.y, r, 0.0, TAU)?;
    ctx.set_fill_style_canvas_gradient(&body);
    ctx.fill();

    ctx.begin_path();
    ctx.arc(c.x, c.y, r, 0.0, TAU)?;
    ctx.set_stroke_style_str(&PRIMARY.with_alpha(0.15).css());
    ctx.set_line_width(1.0);
    ctx.stroke();

    // Layer 2: wireframe and marker, clipped to the sphere.
    ctx.save();
    ctx.begin_path();
    ctx.arc(c.x, c.y, r, 0.0, TAU)?;
    ctx.clip();
    let clipped = draw_globe_wireframe(ctx, globe, now_ms);
    ctx.restore();
    clipped?;

    // Layer 3: specular highlight.
    let shine = ctx.create_radial_gradient(c.x - r * 0.35, c.y - r * 0.35, 0.0, c.x, c.y, r)?;
    shine.add_color_stop(0.0, &SPECULAR.with_alpha(0.04).css())?;
    shine.add_color_stop(0.5, "transparent")?;
    ctx.begin_path();
    ctx.arc(c.x, c.y, r, 0.0, TAU)?;
    ctx.set_fill_style_canvas_gradient(&shine);
    ctx.fill();

    Ok(())
}

fn draw_globe_wireframe(ctx: &CanvasRenderingContext2d, globe: &GlobeState, now_ms: f64) -> Result<(), JsValue> {
    for meridian in globe.meridians() {
        stroke_ellipse(ctx, &meridian, 0.6)?;
    }
    for parallel in globe.parallels() {
        stroke_ellipse(ctx, &parallel, 0.5)?;
    }

    if let Some(marker) = globe.marker(now_ms) {
        fill_radial(
            ctx,
            marker.center,
            marker.pulse_radius * 3.0,
            &[(0.0, PRIMARY.with_alpha(0.3)), (1.0, PRIMARY.with_alpha(0.0))],
        )?;
        fill_circle(ctx, marker.center, 2.5, &PRIMARY.css())?;
        fill_circle(ctx, marker.center, 1.0, "white")?;
    }
    Ok(())
}

// =============================================================
// Primitives
// =============================================================

fn clear(ctx: &CanvasRenderingContext2d, viewport: Viewport) -> Result<(), JsValue> {
    ctx.set_transform(viewport.dpr, 0.0, 0.0, viewport.dpr, 0.0, 0.0)?;
    ctx.clear_rect(0.0, 0.0, viewport.width, viewport.height);
    Ok(())
}

fn fill_circle(ctx: &CanvasRenderingContext2d, center: Point, radius: f64, style: &str) -> Result<(), JsValue> {
    ctx.begin_path();
    ctx.arc(center.x, center.y, radius.max(0.0), 0.0, TAU)?;
    ctx.set_fill_style_str(style);
    ctx.fill();
    Ok(())
}

/// Fill a circle with a radial gradient running from its centre to its rim.
fn fill_radial(
    ctx: &CanvasRenderingContext2d,
    center: Point,
    radius: f64,
    stops: &[(f32, Hsla)],
) -> Result<(), JsValue> {
    let radius = radius.max(0.0);
    let gradient = ctx.create_radial_gradient(center.x, center.y, 0.0, center.x, center.y, radius)?;
    for (offset, color) in stops {
        gradient.add_color_stop(*offset, &color.css())?;
    }
    ctx.begin_path();
    ctx.arc(center.x, center.y, radius, 0.0, TAU)?;
    ctx.set_fill_style_canvas_gradient(&gradient);
    ctx.fill();
    Ok(())
}

fn stroke_ellipse(ctx: &CanvasRenderingContext2d, e: &Ellipse, line_width: f64) -> Result<(), JsValue> {
    ctx.begin_path();
    ctx.ellipse(e.center.x, e.center.y, e.rx.max(0.0), e.ry.max(0.0), 0.0, 0.0, TAU)?;
    ctx.set_stroke_style_str(&PRIMARY.with_alpha(e.alpha).css());
    ctx.set_line_width(line_width);
    ctx.stroke();
    Ok(())
}
