//! Route definitions for the `/jobs` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::jobs;
use crate::state::AppState;

/// Routes mounted at `/jobs`.
///
/// ```text
/// GET    /       -> list
/// POST   /       -> create (hr)
/// GET    /{id}   -> get_by_id
/// PUT    /{id}   -> update (hr)
/// DELETE /{id}   -> delete (hr)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(jobs::list).post(jobs::create))
        .route(
            "/{id}",
            get(jobs::get_by_id).put(jobs::update).delete(jobs::delete),
        )
}
