//! Ambient particle field behind the page content.

use leptos::prelude::*;

#[component]
pub fn ParticleBackground() -> impl IntoView {
    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();

    #[cfg(feature = "hydrate")]
    {
        use canvas::engine::Engine;
        use canvas::geom::{Point, Viewport};
        use canvas::particles::ParticleField;
        use rand::SeedableRng;
        use rand::rngs::SmallRng;

        use crate::util::frame_loop::{FrameLoop, window_viewport};

        let pointer = RwSignal::new(None::<(f64, f64)>);
        let viewport = RwSignal::new(window_viewport().unwrap_or_default());

        let on_move = window_event_listener(leptos::ev::mousemove, move |ev| {
            pointer.set(Some((f64::from(ev.client_x()), f64::from(ev.client_y()))));
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
            let initial: Viewport = viewport.get_untracked();
            let seed = js_sys::Date::now().to_bits() ^ js_sys::Math::random().to_bits();
            let mut rng = SmallRng::seed_from_u64(seed);
            let field = ParticleField::new(initial, &mut rng);
            log::info!("particles: {} in {}x{}", field.particles().len(), initial.width, initial.height);

            let mut engine = match Engine::new(canvas, field) {
                Ok(engine) => engine,
                Err(err) => {
                    log::warn!("particles: no 2d context: {err:?}");
                    return;
                }
            };
            engine.set_viewport(initial);
            let started = frames_for_mount.drive("particles", engine, move |engine: &mut Engine<ParticleField>| {
                let vp = viewport.get_untracked();
                if vp != engine.viewport() {
                    engine.set_viewport(vp);
                }
                let p = pointer.get_untracked().map(|(x, y)| Point::new(x, y));
                engine.effect_mut().set_pointer(p);
            });
            if let Err(err) = started {
                log::warn!("particles: {err:?}");
            }
        });

        on_cleanup(move || {
            frames.stop();
            on_move.remove();
            on_resize.remove();
        });
    }

    view! {
        <div class="particle-background" aria-hidden="true">
            <canvas class="particle-background__canvas" node_ref=canvas_ref></canvas>
        </div>
    }
}
