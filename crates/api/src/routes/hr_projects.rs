//! Route definitions for the `/hr-projects` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::hr_projects;
use crate::state::AppState;

/// Routes mounted at `/hr-projects`.
///
/// ```text
/// GET    /                        -> list
/// POST   /                        -> create
/// GET    /upcoming?days=N         -> list_upcoming
/// GET    /status/{status}         -> list_by_status
/// GET    /priority/{priority}     -> list_by_priority
/// POST   /next/{id}               -> next_step
/// POST   /reject/{id}             -> reject
/// GET    /{id}                    -> get_by_id
/// PUT    /{id}                    -> update
/// DELETE /{id}                    -> delete
/// GET    /{id}/tasks              -> list_tasks (employee+)
/// PUT    /{id}/tasks              -> sync_tasks
/// POST   /{id}/tasks/{task_id}    -> attach_task
/// DELETE /{id}/tasks/{task_id}    -> detach_task
/// ```
///
/// Everything except `GET /{id}/tasks` is hr only.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(hr_projects::list).post(hr_projects::create))
        .route("/upcoming", get(hr_projects::list_upcoming))
        .route("/status/{status}", get(hr_projects::list_by_status))
        .route("/priority/{priority}", get(hr_projects::list_by_priority))
        .route("/next/{id}", post(hr_projects::next_step))
        .route("/reject/{id}", post(hr_projects::reject))
        .route(
            "/{id}",
            get(hr_projects::get_by_id)
                .put(hr_projects::update)
                .delete(hr_projects::delete),
        )
        .route(
            "/{id}/tasks",
            get(hr_projects::list_tasks).put(hr_projects::sync_tasks),
        )
        .route(
            "/{id}/tasks/{task_id}",
            post(hr_projects::attach_task).delete(hr_projects::detach_task),
        )
}
