//! Request handlers for the HTTP API.
//!
//! Each submodule provides async handler functions for one resource. Handlers
//! validate input, delegate to the corresponding repository in `lingkod_db`,
//! and map failures through [`AppError`](crate::error::AppError).

pub mod announcement;
pub mod badge;
pub mod category;
pub mod complaint;
pub mod document_request;
pub mod official;
pub mod project;
pub mod resident;
