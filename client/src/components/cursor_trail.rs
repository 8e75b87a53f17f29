//! Glowing cursor trail drawn on a full-viewport canvas.

use leptos::prelude::*;

/// Full-viewport overlay that trails the mouse pointer. Ignores pointer
/// events itself so the page underneath stays interactive.
#[component]
pub fn CursorTrail() -> impl IntoView {
    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
    // Latest pointer position in CSS pixels; `None` once it leaves the window.
    let pointer = RwSignal::new(None::<(f64, f64)>);

    #[cfg(feature = "hydrate")]
    {
        use canvas::engine::Engine;
        use canvas::geom::{Point, Viewport};
        use canvas::trail::TrailState;

        use crate::util::frame_loop::{FrameLoop, window_viewport};

        let viewport = RwSignal::new(window_viewport().unwrap_or_default());

        let on_move = window_event_listener(leptos::ev::mousemove, move |ev| {
            pointer.set(Some((f64::from(ev.client_x()), f64::from(ev.client_y()))));
        });
        let on_out = window_event_listener(leptos::ev::mouseout, move |ev| {
            if ev.related_target().is_none() {
                pointer.set(None);
            }
        });
        let on_resize = window_event_listener(leptos::ev::resize, move |_| {
            if let Some(vp) = window_viewport() {
                viewport.set(vp);
            }
        });

        let frames = FrameLoop::new();
        let frames_for_mount = frames.clone();
        Effect::new(move || {
            let Some(canvas) = canvas_ref.get() else {
                return;
            };
            let engine = match Engine::new(canvas, TrailState::new()) {
                Ok(engine) => engine,
                Err(err) => {
                    log::warn!("cursor trail: no 2d context: {err:?}");
                    return;
                }
            };
            let started = frames_for_mount.drive("cursor trail", engine, move |engine: &mut Engine<TrailState>| {
                let vp: Viewport = viewport.get_untracked();
                if vp != engine.viewport() {
                    engine.set_viewport(vp);
                }
                let trail = engine.effect_mut();
                match pointer.get_untracked() {
                    Some((x, y)) => trail.pointer_move(Point::new(x, y)),
                    None if trail.is_inside() => trail.pointer_leave(),
                    None => {}
                }
            });
            if let Err(err) = started {
                log::warn!("cursor trail: {err:?}");
            }
        });

        on_cleanup(move || {
            frames.stop();
            on_move.remove();
            on_out.remove();
            on_resize.remove();
        });
    }

    let class = move || trail_class(pointer.with(Option::is_some));

    view! { <canvas class=class node_ref=canvas_ref aria-hidden="true"></canvas> }
}

/// Canvas classes; the whole layer fades out while the pointer is outside
/// the window.
pub fn trail_class(pointer_inside: bool) -> &'static str {
    if pointer_inside { "cursor-trail" } else { "cursor-trail cursor-trail--hidden" }
}

#[cfg(test)]
#[path = "cursor_trail_test.rs"]
mod cursor_trail_test;
