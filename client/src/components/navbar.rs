//! Fixed top navigation bar.

use leptos::prelude::*;

use crate::content::{NAV_LINKS, PROFILE};
use crate::state::scroll::ScrollState;

/// Top navigation. Transparent at the top of the page, glass once scrolled.
#[component]
pub fn Navbar() -> impl IntoView {
    let scroll = expect_context::<RwSignal<ScrollState>>();
    let menu_open = RwSignal::new(false);

    let nav_class = move || {
        if scroll.get().nav_solid {
            "navbar navbar--solid"
        } else {
            "navbar"
        }
    };
    let links_class = move || {
        if menu_open.get() {
            "navbar__links navbar__links--open"
        } else {
            "navbar__links"
        }
    };

    let on_logo = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        menu_open.set(false);
        #[cfg(feature = "hydrate")]
        crate::util::scroll::scroll_to_top();
    };

    view! {
        <nav class=nav_class>
            <div class="navbar__inner">
                <a href="#hero" class="navbar__logo" title="Back to top" on:click=on_logo>
                    {PROFILE.monogram}
                    <span class="navbar__dot">"."</span>
                </a>
                <button
                    class="navbar__toggle"
                    aria-label="Toggle navigation"
                    aria-expanded=move || menu_open.get().to_string()
                    on:click=move |_| menu_open.update(|open| *open = !*open)
                >
                    {move || if menu_open.get() { "✕" } else { "☰" }}
                </button>
                <div class=links_class>
                    {NAV_LINKS
                        .iter()
                        .map(|link| {
                            let href = link.href;
                            view! {
                                <a
                                    class="navbar__link"
                                    href=href
                                    on:click=move |ev| {
                                        menu_open.set(false);
                                        #[cfg(feature = "hydrate")]
                                        if crate::util::scroll::scroll_to_anchor(href) {
                                            ev.prevent_default();
                                        }
                                        #[cfg(not(feature = "hydrate"))]
                                        let _ = ev;
                                    }
                                >
                                    {link.label}
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </nav>
    }
}
