//! Complaint entity model and DTOs.

use lingkod_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::status::StatusId;

/// A complaint row from the `complaints` table.
///
/// `resolved_at` is set exactly while the status is `Resolved` and cleared
/// on any move away from it.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Complaint {
    pub id: DbId,
    pub complainant_name: String,
    pub contact: Option<String>,
    pub subject: String,
    pub details: String,
    pub status_id: StatusId,
    pub resolved_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for filing a new complaint.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateComplaint {
    pub complainant_name: String,
    pub contact: Option<String>,
    pub subject: String,
    pub details: String,
}

/// DTO for moving a complaint through its workflow.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateComplaintStatus {
    pub status_id: StatusId,
}
