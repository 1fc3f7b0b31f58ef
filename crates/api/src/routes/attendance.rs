//! Route definitions for the `/attendance` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::attendance;
use crate::state::AppState;

/// Routes mounted at `/attendance`.
///
/// ```text
/// GET  /                 -> list (hr)
/// POST /clock-in         -> clock_in
/// POST /clock-out        -> clock_out
/// GET  /mine             -> list_mine
/// GET  /user/{user_id}   -> list_by_user (hr)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(attendance::list))
        .route("/clock-in", post(attendance::clock_in))
        .route("/clock-out", post(attendance::clock_out))
        .route("/mine", get(attendance::list_mine))
        .route("/user/{user_id}", get(attendance::list_by_user))
}
