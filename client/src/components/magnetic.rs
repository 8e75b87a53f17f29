//! Wrapper that pulls its content toward a nearby pointer.

use leptos::prelude::*;

use crate::util::magnetic::{MAGNETIC_RADIUS, MAGNETIC_STRENGTH, translate_style};

#[component]
pub fn Magnetic(
    children: Children,
    #[prop(default = MAGNETIC_STRENGTH)] strength: f64,
    #[prop(default = MAGNETIC_RADIUS)] radius: f64,
) -> impl IntoView {
    let offset = RwSignal::new((0.0_f64, 0.0_f64));

    let on_move = move |ev: leptos::ev::MouseEvent| {
        #[cfg(feature = "hydrate")]
        {
            use crate::util::magnetic::{event_bounds, magnetic_offset};

            let pointer = (f64::from(ev.client_x()), f64::from(ev.client_y()));
            if let Some(next) = event_bounds(&ev).and_then(|b| magnetic_offset(pointer, b, radius, strength)) {
                offset.set(next);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (ev, radius, strength);
    };

    view! {
        <div
            class="magnetic"
            style=move || translate_style(offset.get())
            on:mousemove=on_move
            on:mouseleave=move |_| offset.set((0.0, 0.0))
        >
            {children()}
        </div>
    }
}
