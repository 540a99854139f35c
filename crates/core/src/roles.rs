//! Role names carried in access-token claims.
//!
//! The api crate enforces roles through extractors; the booking endpoints
//! all sit behind [`can_manage_events`].

pub const ROLE_ADMIN: &str = "admin";
pub const ROLE_ORGANIZER: &str = "organizer";
pub const ROLE_ATTENDEE: &str = "attendee";

/// Whether a role grants event management, and with it the booking pages.
pub fn can_manage_events(role: &str) -> bool {
    role == ROLE_ADMIN || role == ROLE_ORGANIZER
}
