//! Reservation link projections for the booking overview.

use confera_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A reservation link row with its reservation, room, and linked sub-entity
/// data fetched in a single query (no follow-up loads).
///
/// Reservation and room columns are `Option` because a link may exist before
/// its reservation is created; the api layer shapes this into a nested
/// payload.
#[derive(Debug, Clone, FromRow)]
pub struct BookingLinkRow {
    pub id: DbId,
    pub link_type: String,
    pub contribution_id: Option<DbId>,
    pub session_block_id: Option<DbId>,
    pub contribution_title: Option<String>,
    pub session_title: Option<String>,
    pub session_block_title: Option<String>,
    pub reservation_id: Option<DbId>,
    pub start_dt: Option<Timestamp>,
    pub end_dt: Option<Timestamp>,
    pub state: Option<String>,
    pub booked_for_name: Option<String>,
    pub booking_reason: Option<String>,
    pub room_id: Option<DbId>,
    pub room_name: Option<String>,
    pub room_full_name: Option<String>,
}
