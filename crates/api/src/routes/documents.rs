//! Route definitions for the `/documents` resource.

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;

use crate::handlers::documents;
use crate::state::AppState;

/// Multipart framing overhead allowed on top of the file size limit.
const MULTIPART_OVERHEAD_BYTES: usize = 64 * 1024;

/// Routes mounted at `/documents`.
///
/// ```text
/// POST   /                 -> upload (multipart)
/// GET    /mine             -> list_mine
/// GET    /user/{user_id}   -> list_by_user (hr)
/// GET    /{id}             -> get_by_id (owner or hr)
/// DELETE /{id}             -> delete (owner or hr)
/// ```
pub fn router(max_upload_bytes: usize) -> Router<AppState> {
    Router::new()
        .route(
            "/",
            post(documents::upload)
                .layer(DefaultBodyLimit::max(max_upload_bytes + MULTIPART_OVERHEAD_BYTES)),
        )
        .route("/mine", get(documents::list_mine))
        .route("/user/{user_id}", get(documents::list_by_user))
        .route(
            "/{id}",
            get(documents::get_by_id).delete(documents::delete),
        )
}
