use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

use super::*;

/// Site root with a fake hydrate bundle and resume.
fn site_root() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir_all(dir.path().join("pkg")).unwrap();
    std::fs::write(dir.path().join("pkg/portfolio.js"), "export default function init() {}").unwrap();
    std::fs::write(dir.path().join("resume.pdf"), "%PDF-1.4 resume").unwrap();
    dir
}

fn site_options(root: &tempfile::TempDir) -> LeptosOptions {
    LeptosOptions::builder()
        .output_name("portfolio")
        .site_root(root.path().display().to_string())
        .build()
}

async fn get_raw(router: Router, path: &str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let server = tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    let mut stream = TcpStream::connect(addr).await.unwrap();
    let request = format!("GET {path} HTTP/1.1\r\nHost: {addr}\r\nConnection: close\r\n\r\n");
    stream.write_all(request.as_bytes()).await.unwrap();

    let mut response = String::new();
    stream.read_to_string(&mut response).await.unwrap();
    server.abort();
    response
}

#[tokio::test]
async fn healthz_handler_returns_ok() {
    assert_eq!(healthz().await, StatusCode::OK);
}

#[tokio::test]
async fn healthz_route_answers_200() {
    let response = get_raw(health_routes(), "/healthz").await;
    assert!(response.starts_with("HTTP/1.1 200"), "unexpected response: {response}");
}

#[tokio::test]
async fn unknown_route_on_health_router_is_404() {
    let response = get_raw(health_routes(), "/nope").await;
    assert!(response.starts_with("HTTP/1.1 404"), "unexpected response: {response}");
}

#[tokio::test]
async fn app_renders_home_page() {
    let root = site_root();
    let response = get_raw(app(&site_options(&root)), "/").await;
    assert!(response.starts_with("HTTP/1.1 200"), "unexpected response: {response}");
    assert!(response.contains("Sanjay"));
    assert!(response.contains("id=\"contact-form\""));
    assert!(response.contains("portfolio.js"), "hydration script missing");
}

#[tokio::test]
async fn app_serves_static_files_from_site_root() {
    let root = site_root();
    let options = site_options(&root);

    let resume = get_raw(app(&options), "/resume.pdf").await;
    assert!(resume.starts_with("HTTP/1.1 200"), "unexpected response: {resume}");
    assert!(resume.contains("%PDF-1.4 resume"));

    let bundle = get_raw(app(&options), "/pkg/portfolio.js").await;
    assert!(bundle.starts_with("HTTP/1.1 200"), "unexpected response: {bundle}");
    assert!(bundle.contains("function init"));
}

#[tokio::test]
async fn app_answers_healthz() {
    let root = site_root();
    let response = get_raw(app(&site_options(&root)), "/healthz").await;
    assert!(response.starts_with("HTTP/1.1 200"), "unexpected response: {response}");
}

#[tokio::test]
async fn app_unknown_path_is_404() {
    let root = site_root();
    let response = get_raw(app(&site_options(&root)), "/nope").await;
    assert!(response.starts_with("HTTP/1.1 404"), "unexpected response: {response}");
}
