//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async query methods
//! that accept `&PgPool` as the first argument.

pub mod contribution_repo;
pub mod event_repo;
pub mod reservation_link_repo;
pub mod session_block_repo;

pub use contribution_repo::ContributionRepo;
pub use event_repo::EventRepo;
pub use reservation_link_repo::ReservationLinkRepo;
pub use session_block_repo::SessionBlockRepo;
