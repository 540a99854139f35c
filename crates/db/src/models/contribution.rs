//! Contribution projections for the booking queries.

use confera_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A contribution scheduled to start in the future, with its timetable slot.
///
/// Only scheduled contributions appear here; a contribution without a
/// timetable entry is not eligible for booking links.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct UpcomingContribution {
    pub id: DbId,
    /// Per-event sequential identifier shown to users.
    pub friendly_id: i32,
    pub title: String,
    pub start_dt: Timestamp,
    pub end_dt: Timestamp,
}
