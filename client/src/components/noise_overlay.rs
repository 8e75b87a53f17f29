use leptos::prelude::*;

/// Full-page film grain. Pure CSS, never intercepts the pointer.
#[component]
pub fn NoiseOverlay() -> impl IntoView {
    view! { <div class="noise-overlay" aria-hidden="true"></div> }
}
