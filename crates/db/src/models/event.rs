//! Event model.

use confera_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `events` table, with the default room's name joined in.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Event {
    pub id: DbId,
    pub title: String,
    pub start_dt: Timestamp,
    pub end_dt: Timestamp,
    /// IANA timezone name the event is scheduled in.
    pub timezone: String,
    pub room_id: Option<DbId>,
    pub room_name: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
