//! Shared types for TableNow
//!
//! Common types used across the workspace: data models, the unified
//! error type, and small utility functions (timestamps, ID generation).

pub mod error;
pub mod models;
pub mod util;

// Re-exports
pub use error::{AppError, AppResult};
pub use serde::{Deserialize, Serialize};
