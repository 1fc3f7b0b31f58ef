//! Handlers shared by the three task resources: `/tasks`,
//! `/onboarding-tasks` and `/hr-project-tasks`.
//!
//! Every handler is generic over [`TaskTable`]; the router instantiates one
//! copy per table (see `routes::tasks::router`).

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use hrm_core::error::CoreError;
use hrm_core::lifecycle;
use hrm_core::status::{Priority, TaskStatus};
use hrm_core::types::DbId;
use hrm_db::models::task::{CreateTask, Task, TaskTable, UpdateTask};
use hrm_db::repositories::TaskRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{Path, Query, ValidatedJson};
use crate::middleware::rbac::{RequireEmployee, RequireHr};
use crate::query::UpcomingParams;
use crate::state::AppState;

fn not_found<T: TaskTable>(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: T::ENTITY,
        id,
    })
}

async fn load<T: TaskTable>(state: &AppState, id: DbId) -> AppResult<Task> {
    TaskRepo::<T>::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found::<T>(id))
}

/// POST /api/v1/{tasks}
pub async fn create<T: TaskTable>(
    State(state): State<AppState>,
    RequireHr(_hr): RequireHr,
    ValidatedJson(input): ValidatedJson<CreateTask>,
) -> AppResult<(StatusCode, Json<Task>)> {
    let task = TaskRepo::<T>::create(&state.pool, &input).await?;
    tracing::debug!(entity = T::ENTITY, id = task.id, user_id = task.user_id, "Task created");
    Ok((StatusCode::CREATED, Json(task)))
}

/// GET /api/v1/{tasks}
pub async fn list<T: TaskTable>(
    State(state): State<AppState>,
    RequireEmployee(_user): RequireEmployee,
) -> AppResult<Json<Vec<Task>>> {
    Ok(Json(TaskRepo::<T>::list(&state.pool).await?))
}

/// GET /api/v1/{tasks}/mine
pub async fn list_mine<T: TaskTable>(
    State(state): State<AppState>,
    RequireEmployee(user): RequireEmployee,
) -> AppResult<Json<Vec<Task>>> {
    Ok(Json(
        TaskRepo::<T>::list_by_user(&state.pool, user.user_id).await?,
    ))
}

/// GET /api/v1/{tasks}/status/{status}
pub async fn list_by_status<T: TaskTable>(
    State(state): State<AppState>,
    RequireEmployee(_user): RequireEmployee,
    Path(status): Path<String>,
) -> AppResult<Json<Vec<Task>>> {
    let status: TaskStatus = status.parse()?;
    Ok(Json(
        TaskRepo::<T>::list_by_status(&state.pool, status.id()).await?,
    ))
}

/// GET /api/v1/{tasks}/priority/{priority}
pub async fn list_by_priority<T: TaskTable>(
    State(state): State<AppState>,
    RequireEmployee(_user): RequireEmployee,
    Path(priority): Path<String>,
) -> AppResult<Json<Vec<Task>>> {
    let priority: Priority = priority.parse()?;
    Ok(Json(
        TaskRepo::<T>::list_by_priority(&state.pool, priority.id()).await?,
    ))
}

/// GET /api/v1/{tasks}/user/{user_id}
pub async fn list_by_user<T: TaskTable>(
    State(state): State<AppState>,
    RequireEmployee(_user): RequireEmployee,
    Path(user_id): Path<DbId>,
) -> AppResult<Json<Vec<Task>>> {
    Ok(Json(TaskRepo::<T>::list_by_user(&state.pool, user_id).await?))
}

/// GET /api/v1/{tasks}/upcoming?days=N
///
/// Tasks due between now and `days` days from now (default 7).
pub async fn list_upcoming<T: TaskTable>(
    State(state): State<AppState>,
    RequireEmployee(_user): RequireEmployee,
    Query(params): Query<UpcomingParams>,
) -> AppResult<Json<Vec<Task>>> {
    let window = params.window()?;
    Ok(Json(TaskRepo::<T>::list_due_within(&state.pool, window).await?))
}

/// GET /api/v1/{tasks}/{id}
pub async fn get_by_id<T: TaskTable>(
    State(state): State<AppState>,
    RequireEmployee(_user): RequireEmployee,
    Path(id): Path<DbId>,
) -> AppResult<Json<Task>> {
    Ok(Json(load::<T>(&state, id).await?))
}

/// PUT /api/v1/{tasks}/{id}
pub async fn update<T: TaskTable>(
    State(state): State<AppState>,
    RequireHr(_hr): RequireHr,
    Path(id): Path<DbId>,
    ValidatedJson(input): ValidatedJson<UpdateTask>,
) -> AppResult<Json<Task>> {
    let task = TaskRepo::<T>::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found::<T>(id))?;
    Ok(Json(task))
}

/// DELETE /api/v1/{tasks}/{id}
pub async fn delete<T: TaskTable>(
    State(state): State<AppState>,
    RequireHr(_hr): RequireHr,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if TaskRepo::<T>::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found::<T>(id))
    }
}

/// POST /api/v1/{tasks}/next/{id}
///
/// `pending -> in_progress -> done`. Allowed for the assignee and for hr.
pub async fn next_step<T: TaskTable>(
    State(state): State<AppState>,
    RequireEmployee(user): RequireEmployee,
    Path(id): Path<DbId>,
) -> AppResult<Json<Task>> {
    let task = load::<T>(&state, id).await?;
    user.ensure_owner_or_hr(task.user_id)?;

    let next = lifecycle::advance(task.status()?)?;
    let updated = TaskRepo::<T>::set_status(&state.pool, id, next)
        .await?
        .ok_or_else(|| not_found::<T>(id))?;
    tracing::info!(entity = T::ENTITY, id, status = %next, by = user.user_id, "Task advanced");
    Ok(Json(updated))
}

/// POST /api/v1/{tasks}/reject/{id}
pub async fn reject<T: TaskTable>(
    State(state): State<AppState>,
    RequireHr(hr): RequireHr,
    Path(id): Path<DbId>,
) -> AppResult<Json<Task>> {
    let task = load::<T>(&state, id).await?;
    let rejected = lifecycle::reject(task.status()?);

    let updated = TaskRepo::<T>::set_status(&state.pool, id, rejected)
        .await?
        .ok_or_else(|| not_found::<T>(id))?;
    tracing::info!(entity = T::ENTITY, id, by = hr.user_id, "Task rejected");
    Ok(Json(updated))
}
