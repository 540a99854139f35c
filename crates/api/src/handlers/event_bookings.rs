//! Handlers for event room bookings.
//!
//! One overview endpoint feeding the booking page, plus two picker endpoints
//! listing the schedule items a new booking can be linked to. All three are
//! read-only; reservations themselves are managed by the room-booking
//! service.

use std::collections::HashMap;

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use confera_core::bookings::{self, BookingDefaults};
use confera_core::error::CoreError;
use confera_core::types::{DbId, Timestamp};
use confera_db::models::event::Event;
use confera_db::models::reservation::BookingLinkRow;
use confera_db::repositories::{
    ContributionRepo, EventRepo, ReservationLinkRepo, SessionBlockRepo,
};

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireOrganizer;
use crate::response::DataResponse;
use crate::state::AppState;

/* --------------------------------------------------------------------------
Payload types
-------------------------------------------------------------------------- */

/// A schedule item eligible to be linked to a booking.
#[derive(Debug, Serialize)]
pub struct LinkableEntry {
    pub id: DbId,
    pub friendly_id: i32,
    pub title: String,
    pub full_title: String,
}

/// Start/end window of a linkable item, keyed by item id in the overview maps.
#[derive(Debug, Serialize)]
pub struct TimingData {
    pub start_dt: Timestamp,
    pub end_dt: Timestamp,
}

/// The room a reservation is booked in.
#[derive(Debug, Serialize)]
pub struct RoomData {
    pub id: DbId,
    pub name: String,
    pub full_name: String,
}

/// A reservation attached to a booking link.
#[derive(Debug, Serialize)]
pub struct ReservationData {
    pub id: DbId,
    pub room: Option<RoomData>,
    pub start_dt: Timestamp,
    pub end_dt: Timestamp,
    pub state: String,
    pub booked_for_name: String,
    pub reason: String,
}

/// A reservation link with its display data, as shown on the booking page.
#[derive(Debug, Serialize)]
pub struct BookingLinkData {
    pub id: DbId,
    pub link_type: String,
    pub contribution_id: Option<DbId>,
    pub session_block_id: Option<DbId>,
    /// Title of the linked contribution or session block, when the link
    /// targets one.
    pub target_title: Option<String>,
    /// Absent while the link's reservation has not been created yet.
    pub reservation: Option<ReservationData>,
}

impl BookingLinkData {
    fn from_row(row: BookingLinkRow) -> Self {
        let target_title = match row.link_type.as_str() {
            bookings::LINK_TYPE_CONTRIBUTION => row.contribution_title.clone(),
            bookings::LINK_TYPE_SESSION_BLOCK => row.session_title.as_deref().map(|session| {
                bookings::session_block_full_title(
                    session,
                    row.session_block_title.as_deref().unwrap_or(""),
                )
            }),
            _ => None,
        };

        let room = match (row.room_id, row.room_name, row.room_full_name) {
            (Some(id), Some(name), Some(full_name)) => Some(RoomData {
                id,
                name,
                full_name,
            }),
            _ => None,
        };

        let reservation = match (row.reservation_id, row.start_dt, row.end_dt, row.state) {
            (Some(id), Some(start_dt), Some(end_dt), Some(state)) => Some(ReservationData {
                id,
                room,
                start_dt,
                end_dt,
                state,
                booked_for_name: row.booked_for_name.unwrap_or_default(),
                reason: row.booking_reason.unwrap_or_default(),
            }),
            _ => None,
        };

        BookingLinkData {
            id: row.id,
            link_type: row.link_type,
            contribution_id: row.contribution_id,
            session_block_id: row.session_block_id,
            target_title,
            reservation,
        }
    }
}

/// Full payload of the booking overview page.
#[derive(Debug, Serialize)]
pub struct BookingOverview {
    pub links: Vec<BookingLinkData>,
    pub has_contributions: bool,
    pub has_session_blocks: bool,
    pub contributions_data: HashMap<DbId, TimingData>,
    pub session_blocks_data: HashMap<DbId, TimingData>,
    pub booking_defaults: BookingDefaults,
    pub is_past_event: bool,
}

/* --------------------------------------------------------------------------
Helpers
-------------------------------------------------------------------------- */

/// Load an event by id, returning 404 if it does not exist.
async fn load_event(pool: &sqlx::PgPool, event_id: DbId) -> AppResult<Event> {
    EventRepo::find_by_id(pool, event_id).await?.ok_or_else(|| {
        AppError::Core(CoreError::NotFound {
            entity: "Event",
            id: event_id,
        })
    })
}

/// Reject the request when the room-booking module is disabled.
fn ensure_room_booking_enabled(state: &AppState) -> AppResult<()> {
    if state.config.room_booking_enabled {
        Ok(())
    } else {
        Err(AppError::Core(CoreError::Forbidden(
            "The room booking module is disabled".into(),
        )))
    }
}

/* --------------------------------------------------------------------------
Handlers
-------------------------------------------------------------------------- */

/// GET /events/{id}/bookings
///
/// Booking overview for an event: active reservation links, flags and timing
/// maps for the linkable schedule items, and prefill defaults for the
/// booking-creation widget. Requires the room-booking module to be enabled.
pub async fn booking_overview(
    RequireOrganizer(_user): RequireOrganizer,
    State(state): State<AppState>,
    Path(event_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    ensure_room_booking_enabled(&state)?;
    let event = load_event(&state.pool, event_id).await?;

    // One timestamp for the whole request keeps the flags, maps, and lists
    // mutually consistent.
    let now = chrono::Utc::now();
    let contributions = ContributionRepo::list_upcoming(&state.pool, event_id, now).await?;
    let session_blocks = SessionBlockRepo::list_upcoming(&state.pool, event_id, now).await?;
    let links = ReservationLinkRepo::list_active_for_event(&state.pool, event_id).await?;

    let booking_defaults = bookings::booking_defaults(
        event.id,
        event.start_dt,
        event.end_dt,
        &event.timezone,
        event.room_name.clone(),
    )?;

    let overview = BookingOverview {
        links: links.into_iter().map(BookingLinkData::from_row).collect(),
        has_contributions: !contributions.is_empty(),
        has_session_blocks: !session_blocks.is_empty(),
        contributions_data: contributions
            .iter()
            .map(|c| {
                (
                    c.id,
                    TimingData {
                        start_dt: c.start_dt,
                        end_dt: c.end_dt,
                    },
                )
            })
            .collect(),
        session_blocks_data: session_blocks
            .iter()
            .map(|b| {
                (
                    b.id,
                    TimingData {
                        start_dt: b.start_dt,
                        end_dt: b.end_dt,
                    },
                )
            })
            .collect(),
        booking_defaults,
        is_past_event: event.end_dt < now,
    };

    Ok(Json(DataResponse { data: overview }))
}

/// GET /events/{id}/bookings/linkable/contributions
///
/// List the event's contributions a new booking can be linked to: scheduled,
/// starting in the future, ordered by friendly id.
pub async fn list_linkable_contributions(
    RequireOrganizer(_user): RequireOrganizer,
    State(state): State<AppState>,
    Path(event_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    load_event(&state.pool, event_id).await?;

    let now = chrono::Utc::now();
    let entries: Vec<LinkableEntry> = ContributionRepo::list_upcoming(&state.pool, event_id, now)
        .await?
        .into_iter()
        .map(|c| LinkableEntry {
            id: c.id,
            friendly_id: c.friendly_id,
            full_title: bookings::contribution_full_title(c.friendly_id, &c.title),
            title: c.title,
        })
        .collect();

    Ok(Json(DataResponse { data: entries }))
}

/// GET /events/{id}/bookings/linkable/session-blocks
///
/// List the event's session blocks a new booking can be linked to, labelled
/// with the parent session's friendly id and the scheduled start.
pub async fn list_linkable_session_blocks(
    RequireOrganizer(_user): RequireOrganizer,
    State(state): State<AppState>,
    Path(event_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    load_event(&state.pool, event_id).await?;

    let now = chrono::Utc::now();
    let entries: Vec<LinkableEntry> = SessionBlockRepo::list_upcoming(&state.pool, event_id, now)
        .await?
        .into_iter()
        .map(|b| {
            let full_title = bookings::session_block_full_title(&b.session_title, &b.title);
            let label =
                bookings::session_block_label(b.session_friendly_id, &full_title, b.start_dt);
            LinkableEntry {
                id: b.id,
                friendly_id: b.session_friendly_id,
                title: full_title,
                full_title: label,
            }
        })
        .collect();

    Ok(Json(DataResponse { data: entries }))
}
