//! Route definitions for event room bookings.

use axum::routing::get;
use axum::Router;

use crate::handlers::event_bookings;
use crate::state::AppState;

/// Event-scoped booking routes, nested under `/events`.
///
/// ```text
/// GET /{id}/bookings                              booking_overview
/// GET /{id}/bookings/linkable/contributions       list_linkable_contributions
/// GET /{id}/bookings/linkable/session-blocks      list_linkable_session_blocks
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/{id}/bookings", get(event_bookings::booking_overview))
        .route(
            "/{id}/bookings/linkable/contributions",
            get(event_bookings::list_linkable_contributions),
        )
        .route(
            "/{id}/bookings/linkable/session-blocks",
            get(event_bookings::list_linkable_session_blocks),
        )
}
