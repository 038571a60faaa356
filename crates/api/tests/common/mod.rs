use std::path::PathBuf;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use sqlx::PgPool;
use tower::ServiceExt;
use uuid::Uuid;

use lingkod_api::config::ServerConfig;
use lingkod_api::router::build_app_router;
use lingkod_api::state::AppState;

/// Boundary string used by [`multipart_body`].
pub const MULTIPART_BOUNDARY: &str = "lingkod-test-boundary";

/// Create a unique writable upload root under the system temp directory.
pub fn temp_upload_root() -> PathBuf {
    let root = std::env::temp_dir()
        .join("lingkod-api-tests")
        .join(Uuid::new_v4().to_string());
    std::fs::create_dir_all(&root).expect("failed to create test upload root");
    root
}

/// `ServerConfig` for tests: the dev frontend origin, a 30-second timeout,
/// and the given upload root.
pub fn test_config(upload_root: PathBuf) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        upload_root,
    }
}

/// Application router over the given pool with a throwaway upload root.
///
/// Goes through [`build_app_router`], so tests see the production
/// middleware stack rather than a bare route tree.
pub fn build_test_app(pool: PgPool) -> Router {
    build_test_app_with_uploads(pool, temp_upload_root())
}

/// Like [`build_test_app`], but with a caller-provided upload root so tests
/// can inspect files written to disk.
pub fn build_test_app_with_uploads(pool: PgPool, upload_root: PathBuf) -> Router {
    let config = test_config(upload_root);
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

/// Send a GET request and return the raw response.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method(Method::GET)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Send a POST request with a JSON body.
pub async fn post_json(app: Router, uri: &str, body: Value) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Send a PUT request with a JSON body.
pub async fn put_json(app: Router, uri: &str, body: Value) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method(Method::PUT)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Send a DELETE request.
pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method(Method::DELETE)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Send a multipart request with an optional JSON `payload` field and any
/// number of `images` file parts.
pub async fn send_multipart(
    app: Router,
    method: Method,
    uri: &str,
    payload: Option<&Value>,
    images: &[(&str, &[u8])],
) -> Response<Body> {
    let (content_type, body) = multipart_body(payload, images);
    app.oneshot(
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, content_type)
            .body(body)
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Build a `multipart/form-data` body by hand.
///
/// The `payload` value becomes a text field named `payload`; each entry in
/// `images` becomes a file part named `images` with the given filename.
pub fn multipart_body(payload: Option<&Value>, images: &[(&str, &[u8])]) -> (String, Body) {
    let boundary = MULTIPART_BOUNDARY;
    let mut body: Vec<u8> = Vec::new();

    if let Some(payload) = payload {
        body.extend_from_slice(format!("--{boundary}\r\n").as_bytes());
        body.extend_from_slice(b"Content-Disposition: form-data; name=\"payload\"\r\n\r\n");
        body.extend_from_slice(payload.to_string().as_bytes());
        body.extend_from_slice(b"\r\n");
    }

    for (filename, data) in images {
        body.extend_from_slice(format!("--{boundary}\r\n").as_bytes());
        body.extend_from_slice(
            format!("Content-Disposition: form-data; name=\"images\"; filename=\"{filename}\"\r\n")
                .as_bytes(),
        );
        body.extend_from_slice(b"Content-Type: application/octet-stream\r\n\r\n");
        body.extend_from_slice(data);
        body.extend_from_slice(b"\r\n");
    }

    body.extend_from_slice(format!("--{boundary}--\r\n").as_bytes());

    (
        format!("multipart/form-data; boundary={boundary}"),
        Body::from(body),
    )
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("failed to read response body")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("response body is not valid JSON")
}
