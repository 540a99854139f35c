//! Session block projections for the booking queries.

use confera_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A session block scheduled to start in the future, joined with its parent
/// session and timetable slot.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct UpcomingSessionBlock {
    pub id: DbId,
    pub session_id: DbId,
    /// Per-event sequential identifier of the parent session.
    pub session_friendly_id: i32,
    pub session_title: String,
    /// Block title; empty when the block is the session's only slot.
    pub title: String,
    pub start_dt: Timestamp,
    pub end_dt: Timestamp,
}
