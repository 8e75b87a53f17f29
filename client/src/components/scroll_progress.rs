//! Reading progress bar pinned to the top edge.

use leptos::prelude::*;

use crate::state::scroll::ScrollState;

#[component]
pub fn ScrollProgress() -> impl IntoView {
    let scroll = expect_context::<RwSignal<ScrollState>>();
    let style = move || format!("transform: {}", scroll.get().progress_transform());

    view! { <div class="scroll-progress" style=style aria-hidden="true"></div> }
}
