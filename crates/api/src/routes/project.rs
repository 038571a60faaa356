//! Route definitions for the `/projects` resource.
//!
//! Project updates and image uploads are multipart endpoints because they
//! carry photo files alongside the JSON payload.

use axum::routing::{delete, get, post};
use axum::Router;

use crate::handlers::project;
use crate::state::AppState;

/// Routes mounted at `/projects`.
///
/// ```text
/// GET    /                        -> list
/// POST   /                        -> create
/// GET    /{id}                    -> get_by_id
/// PUT    /{id}                    -> update (multipart)
/// POST   /{id}/cancel             -> cancel
/// POST   /{id}/images             -> upload_images (multipart)
/// DELETE /{id}/images/{image_id}  -> delete_image
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(project::list).post(project::create))
        .route("/{id}", get(project::get_by_id).put(project::update))
        .route("/{id}/cancel", post(project::cancel))
        .route("/{id}/images", post(project::upload_images))
        .route("/{id}/images/{image_id}", delete(project::delete_image))
}
