use axum::Router;
use axum::http::{HeaderMap, StatusCode, Uri};
use axum::response::{IntoResponse, Json};
use axum::routing::get;
use serde_json::{Value, json};

use super::*;
use crate::config::{AppConfig, UpstreamTimeouts};

fn config_for(base: &str) -> AppConfig {
    AppConfig {
        port: 0,
        api_base_url: Url::parse(base).unwrap(),
        access_token_cookie: "access_token".into(),
        refresh_token_cookie: "refresh_token".into(),
        timeouts: UpstreamTimeouts { request_secs: 5, connect_secs: 2 },
    }
}

fn request(segments: &[&str]) -> UpstreamRequest {
    UpstreamRequest { segments: segments.iter().map(|s| (*s).to_owned()).collect(), bearer: "tok-123".into() }
}

async fn echo(uri: Uri, headers: HeaderMap) -> Json<Value> {
    let header = |name: &str| headers.get(name).and_then(|v| v.to_str().ok()).map(str::to_owned);
    Json(json!({
        "path": uri.path(),
        "authorization": header("authorization"),
        "accept": header("accept"),
    }))
}

async fn unavailable() -> impl IntoResponse {
    (StatusCode::SERVICE_UNAVAILABLE, "backend down")
}

/// Start a throwaway upstream on an ephemeral port and return its base URL.
async fn spawn_stub() -> String {
    let app = Router::new()
        .route("/base/down", get(unavailable))
        .fallback(echo);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    format!("http://{addr}/base")
}

#[test]
fn url_for_appends_segments_to_base_path() {
    let upstream = HttpUpstream::new(&config_for("https://api.example.test/backend/")).unwrap();
    let url = upstream.url_for(&request(&["api", "v2", "users", "me"])).unwrap();
    assert_eq!(url.as_str(), "https://api.example.test/backend/api/v2/users/me");
}

#[test]
fn url_for_percent_encodes_parameters() {
    let upstream = HttpUpstream::new(&config_for("https://api.example.test")).unwrap();
    let url = upstream
        .url_for(&request(&["api", "v2", "timesheets", "projects", "../admin?x=1"]))
        .unwrap();
    assert_eq!(url.path(), "/api/v2/timesheets/projects/..%2Fadmin%3Fx=1");
    assert!(url.query().is_none());
}

#[test]
fn request_path_is_slash_joined() {
    assert_eq!(request(&["api", "v2", "projects"]).path(), "/api/v2/projects");
}

#[tokio::test]
async fn get_sends_bearer_and_accept_headers() {
    let base = spawn_stub().await;
    let upstream = HttpUpstream::new(&config_for(&base)).unwrap();

    let reply = upstream.get(&request(&["api", "v2", "users", "me"])).await.unwrap();
    assert_eq!(reply.status, 200);

    let body: Value = serde_json::from_str(&reply.body).unwrap();
    assert_eq!(body["path"], "/base/api/v2/users/me");
    assert_eq!(body["authorization"], "Bearer tok-123");
    assert_eq!(body["accept"], "application/json");
}

#[tokio::test]
async fn get_reports_non_success_status_without_error() {
    let base = spawn_stub().await;
    let upstream = HttpUpstream::new(&config_for(&base)).unwrap();

    let reply = upstream.get(&request(&["down"])).await.unwrap();
    assert_eq!(reply.status, 503);
    assert_eq!(reply.body, "backend down");
}

#[tokio::test]
async fn get_maps_connection_refused_to_transport_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let upstream = HttpUpstream::new(&config_for(&format!("http://{addr}"))).unwrap();
    let err = upstream.get(&request(&["api"])).await.unwrap_err();
    assert!(matches!(err, UpstreamError::Transport(_)), "unexpected error: {err}");
}
