//! Room-booking domain helpers.
//!
//! Pure functions shared by the booking endpoints: display-title formatting
//! for linkable schedule items, single-day detection, and the prefill
//! parameters for the booking-creation widget.

use chrono_tz::Tz;
use serde::Serialize;

use crate::error::CoreError;
use crate::types::{DbId, Timestamp};

/* --------------------------------------------------------------------------
Constants
-------------------------------------------------------------------------- */

/// Reservation requested but not yet confirmed.
pub const RESERVATION_STATE_PENDING: &str = "pending";

/// Reservation confirmed by a room manager.
pub const RESERVATION_STATE_ACCEPTED: &str = "accepted";

/// Reservation cancelled by the requester.
pub const RESERVATION_STATE_CANCELLED: &str = "cancelled";

/// Reservation rejected by a room manager.
pub const RESERVATION_STATE_REJECTED: &str = "rejected";

/// All valid reservation state values.
pub const VALID_RESERVATION_STATES: &[&str] = &[
    RESERVATION_STATE_PENDING,
    RESERVATION_STATE_ACCEPTED,
    RESERVATION_STATE_CANCELLED,
    RESERVATION_STATE_REJECTED,
];

/// A booking linked to the event as a whole.
pub const LINK_TYPE_EVENT: &str = "event";

/// A booking linked to a single contribution.
pub const LINK_TYPE_CONTRIBUTION: &str = "contribution";

/// A booking linked to a session block.
pub const LINK_TYPE_SESSION_BLOCK: &str = "session_block";

/// One-off booking covering a single day.
pub const RECURRENCE_SINGLE: &str = "single";

/// Booking repeated on every day of the event.
pub const RECURRENCE_DAILY: &str = "daily";

/* --------------------------------------------------------------------------
Display titles
-------------------------------------------------------------------------- */

/// Display title of a contribution, prefixed with its friendly id.
pub fn contribution_full_title(friendly_id: i32, title: &str) -> String {
    format!("#{friendly_id}: {title}")
}

/// Display title of a session block: the session title, qualified by the
/// block's own title when it has one.
pub fn session_block_full_title(session_title: &str, block_title: &str) -> String {
    if block_title.is_empty() {
        session_title.to_string()
    } else {
        format!("{session_title}: {block_title}")
    }
}

/// Picker label for a session block: the session's friendly id, the block's
/// full title, and the scheduled start.
pub fn session_block_label(
    session_friendly_id: i32,
    full_title: &str,
    start_dt: Timestamp,
) -> String {
    format!(
        "#{session_friendly_id}: {full_title} ({})",
        format_datetime(start_dt)
    )
}

/// Format a timestamp for display, e.g. `04 Aug 2026 14:30` (UTC).
pub fn format_datetime(dt: Timestamp) -> String {
    dt.format("%d %b %Y %H:%M").to_string()
}

/* --------------------------------------------------------------------------
Booking-widget defaults
-------------------------------------------------------------------------- */

/// Prefill parameters for the booking-creation widget.
///
/// Dates and times are rendered in the event's own timezone so the widget
/// shows the schedule the way attendees see it.
#[derive(Debug, Clone, Serialize)]
pub struct BookingDefaults {
    pub link_type: &'static str,
    pub link_id: DbId,
    pub recurrence: &'static str,
    pub number: i32,
    pub interval: &'static str,
    pub start_date: String,
    pub end_date: Option<String>,
    pub start_time: String,
    pub end_time: String,
    pub room_name: Option<String>,
}

/// True when the event starts and ends on the same UTC calendar day.
pub fn is_single_day(start_dt: Timestamp, end_dt: Timestamp) -> bool {
    start_dt.date_naive() == end_dt.date_naive()
}

/// Compute the booking-widget defaults for an event.
///
/// A single-day event produces a `single` recurrence with no end date; a
/// multi-day event a `daily` recurrence spanning the whole event. Fails if
/// the stored timezone is not a valid IANA name.
pub fn booking_defaults(
    event_id: DbId,
    start_dt: Timestamp,
    end_dt: Timestamp,
    timezone: &str,
    room_name: Option<String>,
) -> Result<BookingDefaults, CoreError> {
    let tz: Tz = timezone.parse().map_err(|_| {
        CoreError::Internal(format!(
            "Event {event_id} has an invalid timezone '{timezone}'"
        ))
    })?;

    let start_local = start_dt.with_timezone(&tz);
    let end_local = end_dt.with_timezone(&tz);
    let single_day = is_single_day(start_dt, end_dt);

    Ok(BookingDefaults {
        link_type: LINK_TYPE_EVENT,
        link_id: event_id,
        recurrence: if single_day {
            RECURRENCE_SINGLE
        } else {
            RECURRENCE_DAILY
        },
        number: 1,
        interval: "week",
        start_date: start_local.date_naive().to_string(),
        end_date: (!single_day).then(|| end_local.date_naive().to_string()),
        start_time: start_local.format("%H:%M").to_string(),
        end_time: end_local.format("%H:%M").to_string(),
        room_name,
    })
}

/* --------------------------------------------------------------------------
Tests
-------------------------------------------------------------------------- */
