use std::collections::HashMap;

use super::*;

fn default_addr() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], 3000))
}

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| vars.get(key).cloned()
}

#[test]
fn missing_vars_keep_default() {
    let cfg = SiteConfig::from_lookup(default_addr(), lookup(&[])).unwrap();
    assert_eq!(cfg.addr, default_addr());
}

#[test]
fn port_overrides_only_port() {
    let cfg = SiteConfig::from_lookup(default_addr(), lookup(&[("PORT", "8080")])).unwrap();
    assert_eq!(cfg.addr, SocketAddr::from(([127, 0, 0, 1], 8080)));
}

#[test]
fn host_overrides_only_ip() {
    let cfg = SiteConfig::from_lookup(default_addr(), lookup(&[("HOST", "0.0.0.0")])).unwrap();
    assert_eq!(cfg.addr, SocketAddr::from(([0, 0, 0, 0], 3000)));
}

#[test]
fn host_and_port_together() {
    let cfg = SiteConfig::from_lookup(default_addr(), lookup(&[("HOST", "::1"), ("PORT", " 9000 ")])).unwrap();
    assert_eq!(cfg.addr, "[::1]:9000".parse::<SocketAddr>().unwrap());
}

#[test]
fn blank_values_are_ignored() {
    let cfg = SiteConfig::from_lookup(default_addr(), lookup(&[("HOST", ""), ("PORT", "  ")])).unwrap();
    assert_eq!(cfg.addr, default_addr());
}

#[test]
fn invalid_port_is_rejected() {
    let err = SiteConfig::from_lookup(default_addr(), lookup(&[("PORT", "http")])).unwrap_err();
    assert!(matches!(err, ServerError::InvalidEnv { var: "PORT", .. }));
}

#[test]
fn out_of_range_port_is_rejected() {
    let err = SiteConfig::from_lookup(default_addr(), lookup(&[("PORT", "70000")])).unwrap_err();
    assert!(matches!(err, ServerError::InvalidEnv { var: "PORT", .. }));
}

#[test]
fn invalid_host_is_rejected() {
    let err = SiteConfig::from_lookup(default_addr(), lookup(&[("HOST", "localhost")])).unwrap_err();
    assert!(matches!(err, ServerError::InvalidEnv { var: "HOST", ref value } if value == "localhost"));
}
