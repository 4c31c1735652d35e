#![allow(dead_code)]

//! Shared helpers for HTTP-level integration tests.
//!
//! Builds the real application router (all middleware layers included)
//! against a database handle pointing at an unreachable address with
//! aggressive timeouts: paths that short-circuit before the store (auth,
//! validation, rate limiting, id parsing) behave exactly as in
//! production, and anything that does reach the store fails fast instead
//! of hanging. Tests that need a live MongoDB build their app with
//! [`build_live_app`] and are `#[ignore]`d by default.

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderName, Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use webtoon_api::auth::jwt::{issue_token, JwtConfig};
use webtoon_api::config::ServerConfig;
use webtoon_api::middleware::rate_limit::{self, RateLimitConfig, RateLimiter};
use webtoon_api::routes;
use webtoon_api::state::AppState;

/// Secret used to sign tokens in tests.
pub const TEST_SECRET: &str = "test-secret-that-is-long-enough-for-hmac";

/// Nothing listens on the discard port, and server selection gives up
/// fast, so store-reaching requests fail with a 500 instead of hanging.
const UNREACHABLE_MONGODB_URI: &str =
    "mongodb://127.0.0.1:9/?serverSelectionTimeoutMS=200&connectTimeoutMS=200";

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        rate_limit: RateLimitConfig {
            max_requests: 100,
            window: Duration::from_secs(900),
        },
        jwt: JwtConfig {
            secret: TEST_SECRET.to_string(),
            token_expiry_mins: 60,
        },
    }
}

/// Build the full application router against an unreachable store.
pub async fn build_test_app() -> Router {
    build_app(test_config(), UNREACHABLE_MONGODB_URI).await
}

/// Build the full application router with a custom configuration.
pub async fn build_test_app_with_config(config: ServerConfig) -> Router {
    build_app(config, UNREACHABLE_MONGODB_URI).await
}

/// Build the application router against a live MongoDB (`MONGODB_URI`
/// env var, default `mongodb://localhost:27017`). For `#[ignore]`d
/// round-trip tests only.
pub async fn build_live_app() -> Router {
    let uri = std::env::var("MONGODB_URI")
        .unwrap_or_else(|_| "mongodb://localhost:27017".to_string());
    build_app(test_config(), &uri).await
}

/// Build the application router with all middleware layers, using the
/// given configuration and database URI.
///
/// This mirrors the router construction in `main.rs` so integration
/// tests exercise the same middleware stack (CORS, request ID, tracing,
/// panic recovery, rate limiting) that production uses.
async fn build_app(config: ServerConfig, mongodb_uri: &str) -> Router {
    let db = webtoon_db::connect(mongodb_uri, "webtoonTestDB")
        .await
        .expect("client construction is lazy and must not fail");

    let rate_limiter = Arc::new(RateLimiter::new(config.rate_limit.clone()));

    let state = AppState {
        db,
        config: Arc::new(config),
        rate_limiter,
    };

    let cors = CorsLayer::new()
        .allow_origin(["http://localhost:5173".parse().unwrap()])
        .allow_methods([Method::GET, Method::POST, Method::DELETE])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION])
        .allow_credentials(true)
        .max_age(Duration::from_secs(3600));

    let request_id_header = HeaderName::from_static("x-request-id");

    Router::new()
        .merge(routes::health::router())
        .merge(routes::api_routes())
        .layer(CatchPanicLayer::new())
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            rate_limit::rate_limit,
        ))
        .layer(PropagateRequestIdLayer::new(request_id_header.clone()))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(SetRequestIdLayer::new(request_id_header, MakeRequestUuid))
        .layer(cors)
        .with_state(state)
}

/// Sign a token against the test secret, the way the issuance handler does.
pub fn test_token() -> String {
    issue_token(
        1,
        "testUser",
        &JwtConfig {
            secret: TEST_SECRET.to_string(),
            token_expiry_mins: 60,
        },
    )
    .expect("token issuance should succeed")
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

/// Send a GET request.
pub async fn get(app: Router, uri: &str) -> Response {
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
pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    app.oneshot(
        Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Send a POST request with a JSON body and a bearer token.
pub async fn post_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response {
    app.oneshot(
        Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(CONTENT_TYPE, "application/json")
            .header(AUTHORIZATION, format!("Bearer {token}"))
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Send a DELETE request.
pub async fn delete(app: Router, uri: &str) -> Response {
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

/// Send a DELETE request with a bearer token.
pub async fn delete_auth(app: Router, uri: &str, token: &str) -> Response {
    app.oneshot(
        Request::builder()
            .method(Method::DELETE)
            .uri(uri)
            .header(AUTHORIZATION, format!("Bearer {token}"))
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Collect a response body as a UTF-8 string.
pub async fn body_text(response: Response) -> String {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body collection should succeed")
        .to_bytes();
    String::from_utf8_lossy(&bytes).into_owned()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let text = body_text(response).await;
    serde_json::from_str(&text).expect("body should be valid JSON")
}
