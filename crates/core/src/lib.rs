//! Pure domain logic for the Lingkod barangay portal backend.
//!
//! This crate has no database or HTTP dependencies so the stage transition
//! engine, progress calculator, and validation rules can be tested without
//! standing up infrastructure. The `db` and `api` crates both build on it.

pub mod error;
pub mod naming;
pub mod pagination;
pub mod progress;
pub mod project;
pub mod stage;
pub mod types;
