#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::header::AUTHORIZATION;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use confera_api::app;
use confera_api::auth::jwt::JwtConfig;
use confera_api::config::ServerConfig;
use confera_api::state::AppState;
use confera_core::roles::{ROLE_ATTENDEE, ROLE_ORGANIZER};

/// Configuration used by the API tests: room booking enabled, a fixed JWT
/// secret, the dev CORS origin.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        room_booking_enabled: true,
        jwt: JwtConfig {
            secret: "test-secret-not-for-production".to_string(),
            access_token_expiry_mins: 15,
        },
    }
}

/// The production router (full middleware stack) over the given pool.
pub fn build_test_app(pool: PgPool) -> Router {
    build_test_app_with(pool, test_config())
}

/// Same, with a caller-adjusted configuration.
pub fn build_test_app_with(pool: PgPool, config: ServerConfig) -> Router {
    app::build_router(AppState {
        pool,
        config: Arc::new(config),
    })
}

/// Token for a user who can manage events.
pub fn organizer_token() -> String {
    test_config().jwt.issue_access_token(1, ROLE_ORGANIZER).unwrap()
}

/// Token for a user who cannot.
pub fn attendee_token() -> String {
    test_config().jwt.issue_access_token(2, ROLE_ATTENDEE).unwrap()
}

/// Send a GET request with a Bearer token.
pub async fn get(app: Router, uri: &str, token: &str) -> Response {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .header(AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a GET request without credentials.
pub async fn get_anonymous(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Collect a response body into JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
