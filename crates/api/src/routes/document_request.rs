//! Route definitions for document issuance.
//!
//! Two routers live here: the request lifecycle under `/document-requests`
//! and the read-only type catalog under `/document-types`.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::document_request;
use crate::state::AppState;

/// Routes mounted at `/document-requests`.
///
/// ```text
/// GET    /             -> list (?status_id, limit, offset)
/// POST   /             -> create
/// GET    /{id}         -> get_by_id
/// PUT    /{id}/status  -> update_status
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(document_request::list).post(document_request::create),
        )
        .route("/{id}", get(document_request::get_by_id))
        .route("/{id}/status", put(document_request::update_status))
}

/// Routes mounted at `/document-types`.
///
/// ```text
/// GET /  -> list_types
/// ```
pub fn types_router() -> Router<AppState> {
    Router::new().route("/", get(document_request::list_types))
}
