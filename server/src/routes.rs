//! Router assembly.
//!
//! Leptos renders `/` on the server. Everything else under the site root
//! (the hydrate bundle in `/pkg`, `/resume.pdf`, favicons) is served as static
//! files.

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// Liveness probe routes.
pub fn health_routes() -> Router {
    Router::new().route("/healthz", get(healthz))
}

/// Full site router: SSR page, static site root, health probe.
pub fn app(options: &LeptosOptions) -> Router {
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(options, routes, {
            let opts = options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(options.clone());

    let site_root = PathBuf::from(options.site_root.as_ref());

    health_routes()
        .merge(leptos_router)
        .fallback_service(ServeDir::new(site_root))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;
