//! Review Model

use serde::{Deserialize, Serialize};

/// Review entity. Immutable seed data.
///
/// `helpful` is a display counter; no operation in the core increments it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: String,
    pub restaurant_id: String,
    pub user_name: String,
    pub user_initials: String,
    /// 1-5 integer rating
    pub rating: u8,
    /// ISO date, e.g. "2026-01-28"
    pub date: String,
    pub text: String,
    pub helpful: u32,
}
