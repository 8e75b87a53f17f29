// Leptos view types for the whole page nest deeply.
#![recursion_limit = "512"]

mod config;
mod error;
mod routes;

use std::process::ExitCode;

use leptos::prelude::get_configuration;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use crate::config::SiteConfig;
use crate::error::ServerError;

const DEFAULT_LOG_FILTER: &str = "info,tower_http=debug";

#[tokio::main]
async fn main() -> ExitCode {
    // Load `.env` before the subscriber so `RUST_LOG` can come from it.
    let dotenv = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)))
        .init();

    match dotenv {
        Ok(path) => tracing::debug!(path = %path.display(), "loaded .env"),
        Err(e) => tracing::debug!(error = %e, "no .env loaded"),
    }

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "portfolio server exited");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), ServerError> {
    let conf = get_configuration(None).map_err(|e| ServerError::LeptosConfig(e.to_string()))?;
    let options = conf.leptos_options;
    let config = SiteConfig::from_env(options.site_addr)?;

    let app = routes::app(&options);
    let listener = TcpListener::bind(config.addr)
        .await
        .map_err(|source| ServerError::Bind { addr: config.addr, source })?;

    tracing::info!(addr = %config.addr, site_root = %options.site_root, "portfolio listening");
    axum::serve(listener, app).await.map_err(ServerError::Serve)
}
