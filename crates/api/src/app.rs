//! Router and middleware assembly, shared by the binary and the tests.

use std::time::Duration;

use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderName, Method};
use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::routes;
use crate::state::AppState;

const REQUEST_ID_HEADER: &str = "x-request-id";

/// Assemble the application router on top of `state`.
///
/// Layers apply bottom-up: request-id assignment and CORS sit outermost,
/// then tracing, request-id propagation, the timeout, and panic recovery
/// closest to the handlers. Integration tests build their app through this
/// function, so the stack they exercise is the one that ships.
pub fn build_router(state: AppState) -> Router {
    let request_id = HeaderName::from_static(REQUEST_ID_HEADER);
    let timeout = Duration::from_secs(state.config.request_timeout_secs);
    let cors = cors_layer(&state.config.cors_origins);

    Router::new()
        // Health stays at the root, outside the versioned API.
        .merge(routes::health::router())
        .nest("/api/v1", routes::api_routes())
        .layer(CatchPanicLayer::new())
        .layer(TimeoutLayer::new(timeout))
        .layer(PropagateRequestIdLayer::new(request_id.clone()))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(SetRequestIdLayer::new(request_id, MakeRequestUuid))
        .layer(cors)
        .with_state(state)
}

/// CORS for the configured frontend origins. Every endpoint in this
/// service is a read, so only GET is allowed.
///
/// Panics on a malformed origin; a misconfigured deployment should not
/// come up.
fn cors_layer(origins: &[String]) -> CorsLayer {
    let origins: Vec<_> = origins
        .iter()
        .map(|origin| {
            origin
                .parse()
                .unwrap_or_else(|err| panic!("invalid CORS origin '{origin}': {err}"))
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION])
        .allow_credentials(true)
        .max_age(Duration::from_secs(3600))
}
