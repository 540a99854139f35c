//! Domain model structs and query projections.
//!
//! Each submodule contains `FromRow` structs matching either a database row
//! or a named projection used by the booking queries.

pub mod contribution;
pub mod event;
pub mod reservation;
pub mod session;
