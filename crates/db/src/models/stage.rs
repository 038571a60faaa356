//! Project stage entity model and DTOs.

use chrono::NaiveDate;
use lingkod_core::stage::StageStatus;
use lingkod_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::status::StatusId;

/// A stage row from the `project_stages` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Stage {
    pub id: DbId,
    pub project_id: DbId,
    pub name: String,
    pub status_id: StatusId,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub sort_order: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// An incoming stage that already has a row (carries its id).
///
/// Statuses arrive as their display labels ("Not Started", "Ongoing", ...);
/// anything outside the closed set fails deserialization.
#[derive(Debug, Clone, Deserialize)]
pub struct ExistingStage {
    pub id: DbId,
    pub name: String,
    pub status: StageStatus,
    pub sort_order: i32,
}

/// An incoming stage with no row yet.
#[derive(Debug, Clone, Deserialize)]
pub struct NewStage {
    pub name: String,
    pub status: StageStatus,
    pub sort_order: i32,
}
