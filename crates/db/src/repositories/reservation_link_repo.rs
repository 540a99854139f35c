//! Repository for the `reservation_links` table.

use confera_core::bookings::RESERVATION_STATE_CANCELLED;
use confera_core::types::DbId;
use sqlx::PgPool;

use crate::models::reservation::BookingLinkRow;

/// Column list for booking-link queries. Reservation, room, and linked
/// sub-entity data are joined in so one query serves the whole overview.
const LINK_COLUMNS: &str = "rl.id, rl.link_type, rl.contribution_id, rl.session_block_id, \
    c.title AS contribution_title, \
    s.title AS session_title, sb.title AS session_block_title, \
    r.id AS reservation_id, r.start_dt, r.end_dt, r.state, \
    r.booked_for_name, r.reason AS booking_reason, \
    rm.id AS room_id, rm.name AS room_name, rm.full_name AS room_full_name";

/// Read access to reservation links.
pub struct ReservationLinkRepo;

impl ReservationLinkRepo {
    /// List the event's reservation links whose reservation is not
    /// cancelled. Links that have no reservation yet are included.
    pub async fn list_active_for_event(
        pool: &PgPool,
        event_id: DbId,
    ) -> Result<Vec<BookingLinkRow>, sqlx::Error> {
        let query = format!(
            "SELECT {LINK_COLUMNS}
             FROM reservation_links rl
             LEFT JOIN reservations r ON r.link_id = rl.id
             LEFT JOIN rooms rm ON rm.id = r.room_id
             LEFT JOIN contributions c ON c.id = rl.contribution_id
             LEFT JOIN session_blocks sb ON sb.id = rl.session_block_id
             LEFT JOIN sessions s ON s.id = sb.session_id
             WHERE rl.event_id = $1 AND (r.id IS NULL OR r.state <> $2)
             ORDER BY rl.id"
        );
        sqlx::query_as::<_, BookingLinkRow>(&query)
            .bind(event_id)
            .bind(RESERVATION_STATE_CANCELLED)
            .fetch_all(pool)
            .await
    }
}
