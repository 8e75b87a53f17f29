//! Floating back-to-top button.

use leptos::prelude::*;

use crate::state::scroll::ScrollState;

/// Appears once the page is scrolled past the threshold in [`ScrollState`].
#[component]
pub fn BackToTop() -> impl IntoView {
    let scroll = expect_context::<RwSignal<ScrollState>>();

    view! {
        <Show when=move || scroll.get().show_back_to_top>
            <button
                class="back-to-top"
                title="Back to top"
                aria-label="Back to top"
                on:click=move |_| {
                    #[cfg(feature = "hydrate")]
                    crate::util::scroll::scroll_to_top();
                }
            >
                "↑"
            </button>
        </Show>
    }
}
