//! Route definitions for the `/users` resource (hr only).

use axum::routing::get;
use axum::Router;

use crate::handlers::users;
use crate::state::AppState;

/// Routes mounted at `/users`.
///
/// ```text
/// GET    /       -> list (?role=guest|employee|hr)
/// POST   /       -> create
/// GET    /{id}   -> get_by_id
/// PUT    /{id}   -> update (including role change)
/// DELETE /{id}   -> delete (deactivates)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(users::list).post(users::create))
        .route(
            "/{id}",
            get(users::get_by_id)
                .put(users::update)
                .delete(users::delete),
        )
}
