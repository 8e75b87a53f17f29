//! Portfolio site as a Leptos application.
//!
//! ARCHITECTURE
//! ============
//! - `content`: every literal the page renders.
//! - `state`: section state machines (scroll chrome, skill tabs, project
//!   filters, contact form), free of DOM types.
//! - `util`: interaction math plus `hydrate`-gated browser helpers.
//! - `components`: one component per section or overlay.
//! - `pages`: route-level composition.
//!
//! The crate builds twice: with `ssr` for server rendering inside the
//! `server` binary, and with `hydrate` as the browser bundle. Canvas loops,
//! timers and DOM listeners only exist in the `hydrate` build.

pub mod app;
pub mod components;
pub mod content;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point called by the hydrate bundle.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Info) {
        leptos::logging::warn!("logger already initialised: {err}");
    }
    log::info!("hydrating portfolio");
    leptos::mount::hydrate_body(app::App);
}
