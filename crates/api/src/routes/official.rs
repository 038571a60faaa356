//! Route definitions for the `/officials` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::official;
use crate::state::AppState;

/// Routes mounted at `/officials`.
///
/// ```text
/// GET    /      -> list (?include_inactive)
/// POST   /      -> create
/// GET    /{id}  -> get_by_id
/// PUT    /{id}  -> update
/// DELETE /{id}  -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(official::list).post(official::create))
        .route(
            "/{id}",
            get(official::get_by_id)
                .put(official::update)
                .delete(official::delete),
        )
}
