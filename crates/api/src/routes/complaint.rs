//! Route definitions for the `/complaints` resource.
//!
//! Complaints are never deleted; they move through their status workflow
//! via the dedicated `/status` endpoint.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::complaint;
use crate::state::AppState;

/// Routes mounted at `/complaints`.
///
/// ```text
/// GET    /             -> list (?status_id, limit, offset)
/// POST   /             -> create
/// GET    /{id}         -> get_by_id
/// PUT    /{id}/status  -> update_status
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(complaint::list).post(complaint::create))
        .route("/{id}", get(complaint::get_by_id))
        .route("/{id}/status", put(complaint::update_status))
}
