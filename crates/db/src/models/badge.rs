//! Badge entity model and DTOs.

use lingkod_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A badge row from the `badges` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Badge {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub points: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new badge.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateBadge {
    pub name: String,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub points: i32,
}

/// DTO for updating a badge. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateBadge {
    pub name: Option<String>,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub points: Option<i32>,
}

/// A badge award row from the `resident_badges` join table.
///
/// `points_awarded` snapshots the badge's point value at award time so a
/// later revocation subtracts exactly what was added even if the badge has
/// been re-valued since.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ResidentBadge {
    pub id: DbId,
    pub resident_id: DbId,
    pub badge_id: DbId,
    pub points_awarded: i32,
    pub awarded_at: Timestamp,
}
