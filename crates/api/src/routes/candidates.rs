//! Route definitions for the `/candidates` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::candidates;
use crate::state::AppState;

/// Routes mounted at `/candidates`.
///
/// ```text
/// GET    /                  -> list (hr)
/// POST   /                  -> create (apply)
/// GET    /mine              -> list_mine
/// GET    /status/{status}   -> list_by_status (hr)
/// GET    /user/{user_id}    -> list_by_user (hr)
/// GET    /job/{job_id}      -> list_by_job (hr)
/// POST   /next/{id}         -> next_step (hr)
/// POST   /reject/{id}       -> reject (hr)
/// GET    /{id}              -> get_by_id (owner or hr)
/// PUT    /{id}              -> update (owner or hr)
/// DELETE /{id}              -> delete (owner or hr)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(candidates::list).post(candidates::create))
        .route("/mine", get(candidates::list_mine))
        .route("/status/{status}", get(candidates::list_by_status))
        .route("/user/{user_id}", get(candidates::list_by_user))
        .route("/job/{job_id}", get(candidates::list_by_job))
        .route("/next/{id}", post(candidates::next_step))
        .route("/reject/{id}", post(candidates::reject))
        .route(
            "/{id}",
            get(candidates::get_by_id)
                .put(candidates::update)
                .delete(candidates::delete),
        )
}
