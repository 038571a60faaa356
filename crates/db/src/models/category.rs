//! Project category lookup model.

use lingkod_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A category row from the seeded `categories` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Category {
    pub id: DbId,
    pub name: String,
    pub created_at: Timestamp,
}
