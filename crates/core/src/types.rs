//! Shared type aliases used across all crates.

/// Database primary key type matching BIGSERIAL columns.
pub type DbId = i64;

/// Timestamp type matching TIMESTAMPTZ columns.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
