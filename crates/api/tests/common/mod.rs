use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::header::{CONTENT_TYPE, COOKIE, SET_COOKIE};
use axum::http::{HeaderName, Method, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use tempfile::TempDir;
use tower::ServiceExt;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::services::ServeDir;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use lostfound_api::blob::BlobStore;
use lostfound_api::config::ServerConfig;
use lostfound_api::routes;
use lostfound_api::session::SessionStore;
use lostfound_api::state::AppState;
use lostfound_store::Store;

/// Password baked into the test configuration.
pub const TEST_ADMIN_PASSWORD: &str = "admin123";

/// A fully wired application plus the temp directory backing its static
/// and upload paths. Keep the struct alive for the duration of the test;
/// dropping it deletes the directories.
pub struct TestApp {
    pub router: Router,
    pub dir: TempDir,
}

/// Build a test `ServerConfig` rooted at `root`, with safe defaults.
pub fn test_config(root: &Path) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:3000".to_string()],
        request_timeout_secs: 30,
        admin_password: TEST_ADMIN_PASSWORD.to_string(),
        public_dir: root.join("public"),
        views_dir: root.join("views"),
        upload_dir: root.join("public").join("uploads"),
    }
}

/// Build the full application router with all middleware layers and fresh
/// in-memory state.
///
/// This mirrors the router construction in `main.rs` so integration tests
/// exercise the same middleware stack (CORS, request ID, timeout, tracing,
/// panic recovery, static serving) that production uses. The router is
/// cheap to clone and every clone shares the same state, so issue one
/// request per clone.
pub fn build_test_app() -> TestApp {
    let dir = TempDir::new().expect("tempdir");
    let config = test_config(dir.path());

    std::fs::create_dir_all(&config.upload_dir).expect("upload dir");
    std::fs::create_dir_all(&config.views_dir).expect("views dir");

    let state = AppState {
        store: Store::new(),
        sessions: SessionStore::new(),
        blobs: BlobStore::new(config.upload_dir.clone()),
        config: Arc::new(config.clone()),
    };

    let cors = CorsLayer::new()
        .allow_origin(["http://localhost:3000".parse().unwrap()])
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([CONTENT_TYPE])
        .allow_credentials(true)
        .max_age(Duration::from_secs(3600));

    let request_id_header = HeaderName::from_static("x-request-id");

    let router = Router::new()
        .merge(routes::health::router())
        .merge(routes::routes())
        .fallback_service(ServeDir::new(&config.public_dir))
        .layer(CatchPanicLayer::new())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(30),
        ))
        .layer(PropagateRequestIdLayer::new(request_id_header.clone()))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(SetRequestIdLayer::new(request_id_header, MakeRequestUuid))
        .layer(cors)
        .with_state(state);

    TestApp { router, dir }
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

/// Issue a GET request, optionally with a `Cookie` header.
pub async fn get(app: Router, path: &str, cookie: Option<&str>) -> Response {
    let mut builder = Request::builder().method(Method::GET).uri(path);
    if let Some(cookie) = cookie {
        builder = builder.header(COOKIE, cookie);
    }
    let request = builder.body(Body::empty()).unwrap();
    app.oneshot(request).await.unwrap()
}

/// Issue a bodyless POST request, optionally with a `Cookie` header.
pub async fn post(app: Router, path: &str, cookie: Option<&str>) -> Response {
    let mut builder = Request::builder().method(Method::POST).uri(path);
    if let Some(cookie) = cookie {
        builder = builder.header(COOKIE, cookie);
    }
    let request = builder.body(Body::empty()).unwrap();
    app.oneshot(request).await.unwrap()
}

/// POST a urlencoded form body.
pub async fn post_form(app: Router, path: &str, body: &str) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(path)
        .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// POST a multipart body built with [`multipart_body`].
pub async fn post_multipart(app: Router, path: &str, boundary: &str, body: Vec<u8>) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(path)
        .header(
            CONTENT_TYPE,
            format!("multipart/form-data; boundary={boundary}"),
        )
        .body(Body::from(body))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Build a multipart body from text fields and an optional file part.
pub fn multipart_body(
    boundary: &str,
    fields: &[(&str, &str)],
    file: Option<(&str, &str, &[u8])>,
) -> Vec<u8> {
    let mut body = Vec::new();
    for (name, value) in fields {
        body.extend_from_slice(format!("--{boundary}\r\n").as_bytes());
        body.extend_from_slice(
            format!("Content-Disposition: form-data; name=\"{name}\"\r\n\r\n").as_bytes(),
        );
        body.extend_from_slice(value.as_bytes());
        body.extend_from_slice(b"\r\n");
    }
    if let Some((name, filename, bytes)) = file {
        body.extend_from_slice(format!("--{boundary}\r\n").as_bytes());
        body.extend_from_slice(
            format!(
                "Content-Disposition: form-data; name=\"{name}\"; filename=\"{filename}\"\r\n\
                 Content-Type: application/octet-stream\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(bytes);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{boundary}--\r\n").as_bytes());
    body
}

/// Read a response body as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).expect("response body should be valid JSON")
}

/// Log in as admin via the API and return the session `Cookie` value to
/// attach to subsequent requests.
pub async fn login_admin(app: Router) -> String {
    let response = post_form(
        app,
        "/admin-login",
        &format!("password={TEST_ADMIN_PASSWORD}"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let set_cookie = response
        .headers()
        .get(SET_COOKIE)
        .expect("login response must set the session cookie")
        .to_str()
        .unwrap();
    // "sid=<token>; Path=/; ..." -> "sid=<token>"
    set_cookie
        .split(';')
        .next()
        .expect("cookie value")
        .to_string()
}
