//! Barangay official entity model and DTOs.

use lingkod_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// An official row from the `officials` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Official {
    pub id: DbId,
    pub full_name: String,
    pub position: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new official.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateOfficial {
    pub full_name: String,
    pub position: String,
    pub email: Option<String>,
    pub phone: Option<String>,
}

/// DTO for updating an official. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateOfficial {
    pub full_name: Option<String>,
    pub position: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub is_active: Option<bool>,
}
