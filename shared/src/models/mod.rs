//! Data models
//!
//! Shared between the application core and any embedding UI layer.
//! Catalog types (`Restaurant`, `Review`) are immutable seed data; the
//! mutable aggregates (`Reservation`, `UserProfile`, favorites) are owned
//! by the store and persisted as whole JSON documents.

pub mod reservation;
pub mod restaurant;
pub mod review;
pub mod user;

// Re-exports
pub use reservation::*;
pub use restaurant::*;
pub use review::*;
pub use user::*;
