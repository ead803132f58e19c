#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use folio_core::fixtures::{OWNER_ID, VISITOR_ID};
use folio_core::roles::{ROLE_ADMIN, ROLE_VISITOR};
use folio_db::DbPool;
use http_body_util::BodyExt;
use tower::ServiceExt;

use folio_api::auth::jwt::{generate_access_token, JwtConfig};
use folio_api::config::ServerConfig;
use folio_api::router::build_app_router;
use folio_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default)
/// and a 30-second request timeout.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        shutdown_timeout_secs: 1,
        jwt: JwtConfig {
            secret: "test-secret-for-integration-tests".to_string(),
            access_token_expiry_mins: 15,
        },
    }
}

/// Build the full application router over the given store.
pub fn build_test_app(pool: DbPool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        event_bus: Arc::new(folio_events::EventBus::default()),
    };
    build_app_router(state, &config)
}

/// Router over a freshly seeded store.
pub fn seeded_app() -> Router {
    build_test_app(folio_db::seeded_pool())
}

/// Bearer token for the demo visitor.
pub fn visitor_token() -> String {
    generate_access_token(VISITOR_ID, ROLE_VISITOR, &test_config().jwt).unwrap()
}

/// Bearer token for the portfolio owner.
pub fn admin_token() -> String {
    generate_access_token(OWNER_ID, ROLE_ADMIN, &test_config().jwt).unwrap()
}

async fn send(app: Router, request: Request<Body>) -> Response {
    app.oneshot(request).await.unwrap()
}

fn request(method: Method, uri: &str, token: Option<&str>, body: Option<serde_json::Value>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("Authorization", format!("Bearer {token}"));
    }
    match body {
        Some(json) => builder
            .header("Content-Type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

pub async fn get(app: Router, uri: &str) -> Response {
    send(app, request(Method::GET, uri, None, None)).await
}

pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response {
    send(app, request(Method::GET, uri, Some(token), None)).await
}

pub async fn post_auth(app: Router, uri: &str, token: &str) -> Response {
    send(app, request(Method::POST, uri, Some(token), None)).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send(app, request(Method::POST, uri, None, Some(body))).await
}

pub async fn post_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response {
    send(app, request(Method::POST, uri, Some(token), Some(body))).await
}

pub async fn put_auth(app: Router, uri: &str, token: &str) -> Response {
    send(app, request(Method::PUT, uri, Some(token), None)).await
}

pub async fn put_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response {
    send(app, request(Method::PUT, uri, Some(token), Some(body))).await
}

pub async fn delete_auth(app: Router, uri: &str, token: &str) -> Response {
    send(app, request(Method::DELETE, uri, Some(token), None)).await
}

/// Collect a response body as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
