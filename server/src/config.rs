//! Bind address configuration.
//!
//! The Leptos `site-addr` is the default. `HOST` and `PORT` override its
//! halves independently, so a platform that only injects `PORT` still binds
//! the configured interface.

use std::net::{IpAddr, SocketAddr};

use crate::error::ServerError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SiteConfig {
    pub addr: SocketAddr,
}

impl SiteConfig {
    /// Build config from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ServerError::InvalidEnv`] when `HOST` or `PORT` is set but
    /// does not parse.
    pub fn from_env(default_addr: SocketAddr) -> Result<Self, ServerError> {
        Self::from_lookup(default_addr, |key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Same as [`SiteConfig::from_env`].
    pub fn from_lookup<F>(default_addr: SocketAddr, lookup: F) -> Result<Self, ServerError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut addr = default_addr;
        if let Some(host) = non_empty(lookup("HOST")) {
            let ip = host
                .parse::<IpAddr>()
                .map_err(|_| ServerError::InvalidEnv { var: "HOST", value: host.clone() })?;
            addr.set_ip(ip);
        }
        if let Some(port) = non_empty(lookup("PORT")) {
            let port = port
                .parse::<u16>()
                .map_err(|_| ServerError::InvalidEnv { var: "PORT", value: port.clone() })?;
            addr.set_port(port);
        }
        Ok(Self { addr })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_owned()).filter(|v| !v.is_empty())
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
