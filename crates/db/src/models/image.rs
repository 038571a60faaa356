//! Project image entity model and DTOs.

use lingkod_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// An image row from the `project_images` table.
///
/// `file_name` is the stored name inside the project's upload directory;
/// `original_name` is whatever the uploader called it.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ProjectImage {
    pub id: DbId,
    pub project_id: DbId,
    pub file_name: String,
    pub original_name: String,
    pub file_size_bytes: i64,
    pub created_at: Timestamp,
}

/// A freshly stored upload, ready to be inserted as a row.
///
/// Built by the file store after the bytes are on disk, so the insert only
/// records what already exists.
#[derive(Debug, Clone)]
pub struct NewImageFile {
    pub file_name: String,
    pub original_name: String,
    pub file_size_bytes: i64,
}
