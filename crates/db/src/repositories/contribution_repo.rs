//! Repository for the `contributions` table.

use confera_core::types::{DbId, Timestamp};
use sqlx::PgPool;

use crate::models::contribution::UpcomingContribution;

/// Column list for upcoming-contribution queries.
const UPCOMING_COLUMNS: &str = "c.id, c.friendly_id, c.title, te.start_dt, te.end_dt";

/// Read access to contributions.
pub struct ContributionRepo;

impl ContributionRepo {
    /// List the event's contributions scheduled to start after `now`, with
    /// their timetable slot, ordered by friendly id.
    ///
    /// The inner join doubles as the "is scheduled" predicate: contributions
    /// without a timetable entry never match.
    pub async fn list_upcoming(
        pool: &PgPool,
        event_id: DbId,
        now: Timestamp,
    ) -> Result<Vec<UpcomingContribution>, sqlx::Error> {
        let query = format!(
            "SELECT {UPCOMING_COLUMNS}
             FROM contributions c
             INNER JOIN timetable_entries te ON te.contribution_id = c.id
             WHERE c.event_id = $1 AND te.start_dt > $2
             ORDER BY c.friendly_id"
        );
        sqlx::query_as::<_, UpcomingContribution>(&query)
            .bind(event_id)
            .bind(now)
            .fetch_all(pool)
            .await
    }
}
