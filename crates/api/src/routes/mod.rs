pub mod attendance;
pub mod auth;
pub mod candidates;
pub mod dashboard;
pub mod documents;
pub mod health;
pub mod hr_projects;
pub mod jobs;
pub mod tasks;
pub mod users;

use axum::Router;
use hrm_db::models::task::{GeneralTasks, HrProjectTasks, OnboardingTasks};

use crate::config::ServerConfig;
use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/register, /auth/login, /auth/refresh       public
/// /auth/logout, /auth/me                           any authenticated user
///
/// /users                                           user management (hr)
/// /jobs                                            job openings
/// /candidates                                      applications + hiring pipeline
///
/// /tasks                                           general tasks
/// /onboarding-tasks                                onboarding checklists
/// /hr-project-tasks                                tasks linkable to HR projects
/// /hr-projects                                     HR projects + task links
///
/// /documents                                       uploads (PDF, JPEG, PNG)
/// /attendance                                      clock in / clock out
/// /dashboard/summary                               aggregate counts (hr)
/// ```
pub fn api_routes(config: &ServerConfig) -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/users", users::router())
        .nest("/jobs", jobs::router())
        .nest("/candidates", candidates::router())
        .nest("/tasks", tasks::router::<GeneralTasks>())
        .nest("/onboarding-tasks", tasks::router::<OnboardingTasks>())
        .nest("/hr-project-tasks", tasks::router::<HrProjectTasks>())
        .nest("/hr-projects", hr_projects::router())
        .nest("/documents", documents::router(config.storage.max_upload_bytes))
        .nest("/attendance", attendance::router())
        .nest("/dashboard", dashboard::router())
}
