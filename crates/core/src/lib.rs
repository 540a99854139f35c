//! Domain logic for the Confera event platform.
//!
//! Pure functions and shared types only -- no I/O, no database access.
//! The `db` and `api` crates build on the types and helpers defined here.

pub mod bookings;
pub mod error;
pub mod roles;
pub mod types;
