//! Repository for the `session_blocks` table.

use confera_core::types::{DbId, Timestamp};
use sqlx::PgPool;

use crate::models::session::UpcomingSessionBlock;

/// Column list for upcoming-session-block queries.
const UPCOMING_COLUMNS: &str = "sb.id, sb.session_id, \
    s.friendly_id AS session_friendly_id, s.title AS session_title, \
    sb.title, te.start_dt, te.end_dt";

/// Read access to session blocks.
pub struct SessionBlockRepo;

impl SessionBlockRepo {
    /// List the event's session blocks scheduled to start after `now`,
    /// joined with their session and timetable slot.
    ///
    /// Ordered by session friendly id, then session title, then block title,
    /// which is the order the booking picker presents them in.
    pub async fn list_upcoming(
        pool: &PgPool,
        event_id: DbId,
        now: Timestamp,
    ) -> Result<Vec<UpcomingSessionBlock>, sqlx::Error> {
        let query = format!(
            "SELECT {UPCOMING_COLUMNS}
             FROM session_blocks sb
             INNER JOIN sessions s ON s.id = sb.session_id
             INNER JOIN timetable_entries te ON te.session_block_id = sb.id
             WHERE s.event_id = $1 AND te.start_dt > $2
             ORDER BY s.friendly_id, s.title, sb.title"
        );
        sqlx::query_as::<_, UpcomingSessionBlock>(&query)
            .bind(event_id)
            .bind(now)
            .fetch_all(pool)
            .await
    }
}
