//! Application shell and router.

use leptos::prelude::*;
use leptos_meta::{Link, Meta, MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::content::PROFILE;
use crate::pages::home::HomePage;

/// HTML document wrapper rendered by the server.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <MetaTags />
            </head>
            <body>
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let title = format!("{} {} | {}", PROFILE.first_name, PROFILE.last_name, PROFILE.headline);

    view! {
        <Stylesheet id="leptos" href="/pkg/portfolio.css" />
        <Link rel="icon" type_="image/svg+xml" href="/favicon.svg" />
        <Title text=title />
        <Meta name="description" content=crate::content::TAGLINE />
        <Router>
            <main class="page">
                <Routes fallback=|| view! { <p class="not-found">"Page not found."</p> }>
                    <Route path=path!("/") view=HomePage />
                </Routes>
            </main>
        </Router>
    }
}
