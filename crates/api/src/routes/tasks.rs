//! Route definitions shared by `/tasks`, `/onboarding-tasks` and
//! `/hr-project-tasks`.

use axum::routing::{get, post};
use axum::Router;
use hrm_db::models::task::TaskTable;

use crate::handlers::tasks;
use crate::state::AppState;

/// Routes for one task table.
///
/// ```text
/// GET    /                      -> list
/// POST   /                      -> create (hr)
/// GET    /mine                  -> list_mine
/// GET    /upcoming?days=N       -> list_upcoming
/// GET    /status/{status}       -> list_by_status
/// GET    /priority/{priority}   -> list_by_priority
/// GET    /user/{user_id}        -> list_by_user
/// POST   /next/{id}             -> next_step (assignee or hr)
/// POST   /reject/{id}           -> reject (hr)
/// GET    /{id}                  -> get_by_id
/// PUT    /{id}                  -> update (hr)
/// DELETE /{id}                  -> delete (hr)
/// ```
pub fn router<T: TaskTable>() -> Router<AppState> {
    Router::new()
        .route("/", get(tasks::list::<T>).post(tasks::create::<T>))
        .route("/mine", get(tasks::list_mine::<T>))
        .route("/upcoming", get(tasks::list_upcoming::<T>))
        .route("/status/{status}", get(tasks::list_by_status::<T>))
        .route("/priority/{priority}", get(tasks::list_by_priority::<T>))
        .route("/user/{user_id}", get(tasks::list_by_user::<T>))
        .route("/next/{id}", post(tasks::next_step::<T>))
        .route("/reject/{id}", post(tasks::reject::<T>))
        .route(
            "/{id}",
            get(tasks::get_by_id::<T>)
                .put(tasks::update::<T>)
                .delete(tasks::delete::<T>),
        )
}
