//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - Update DTOs where the entity supports edits

pub mod announcement;
pub mod badge;
pub mod category;
pub mod complaint;
pub mod document_request;
pub mod image;
pub mod official;
pub mod project;
pub mod resident;
pub mod stage;
pub mod status;
