//! Route tree.

pub mod event_bookings;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Everything served under `/api/v1`.
///
/// ```text
/// /events/{id}/bookings                             booking overview
/// /events/{id}/bookings/linkable/contributions      linkable contributions
/// /events/{id}/bookings/linkable/session-blocks     linkable session blocks
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/events", event_bookings::router())
}
