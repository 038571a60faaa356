//! Resident entity model and leaderboard projection.

use lingkod_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A resident row from the `residents` table.
///
/// `points` is maintained transactionally by badge awards/revocations and is
/// never written directly by handlers.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Resident {
    pub id: DbId,
    pub full_name: String,
    pub address: Option<String>,
    pub points: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for registering a new resident.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateResident {
    pub full_name: String,
    pub address: Option<String>,
}

/// DTO for updating a resident's details. Points move only through awards.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateResident {
    pub full_name: Option<String>,
    pub address: Option<String>,
}

/// One leaderboard row: a resident ranked by points with their badge tally.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct LeaderboardEntry {
    pub rank: i64,
    pub id: DbId,
    pub full_name: String,
    pub points: i32,
    pub badge_count: i64,
}
