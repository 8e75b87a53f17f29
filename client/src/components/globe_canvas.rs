//! Rotating wireframe globe in the hero.

use leptos::prelude::*;

use crate::content::PROFILE;

#[component]
pub fn GlobeCanvas() -> impl IntoView {
    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();

    #[cfg(feature = "hydrate")]
    {
        use canvas::engine::Engine;
        use canvas::geom::Viewport;
        use canvas::globe::GlobeState;

        use crate::util::frame_loop::FrameLoop;

        let frames = FrameLoop::new();
        let frames_for_mount = frames.clone();
        Effect::new(move || {
            let Some(canvas) = canvas_ref.get() else {
                return;
            };
            let globe = GlobeState::new();
            let size = globe.size();
            let mut engine = match Engine::new(canvas, globe) {
                Ok(engine) => engine,
                Err(err) => {
                    log::warn!("globe: no 2d context: {err:?}");
                    return;
                }
            };
            let dpr = web_sys::window().map_or(1.0, |w| w.device_pixel_ratio());
            engine.set_viewport(Viewport::new(size, size, dpr));
            if let Err(err) = frames_for_mount.drive("globe", engine, |_| {}) {
                log::warn!("globe: {err:?}");
            }
        });
        on_cleanup(move || frames.stop());
    }

    view! {
        <div class="globe">
            <canvas class="globe__canvas" node_ref=canvas_ref aria-label="Rotating globe"></canvas>
            <div class="globe__label">
                <span class="globe__pin"></span>
                <span>{PROFILE.location}</span>
            </div>
        </div>
    }
}
