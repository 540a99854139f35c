//! Repository for the `events` table.

use confera_core::types::DbId;
use sqlx::PgPool;

use crate::models::event::Event;

/// Column list for event queries (room name joined from `rooms`).
const EVENT_COLUMNS: &str = "e.id, e.title, e.start_dt, e.end_dt, e.timezone, \
    e.room_id, r.name AS room_name, e.created_at, e.updated_at";

/// Read access to events.
pub struct EventRepo;

impl EventRepo {
    /// Find an event by its ID, including the name of its default room.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Event>, sqlx::Error> {
        let query = format!(
            "SELECT {EVENT_COLUMNS}
             FROM events e
             LEFT JOIN rooms r ON r.id = e.room_id
             WHERE e.id = $1"
        );
        sqlx::query_as::<_, Event>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
