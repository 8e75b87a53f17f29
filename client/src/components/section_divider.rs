use leptos::prelude::*;

/// Gradient rule between sections; draws itself in when revealed.
#[component]
pub fn SectionDivider() -> impl IntoView {
    view! {
        <div class="divider" data-reveal="line" aria-hidden="true">
            <span class="divider__line"></span>
        </div>
    }
}
