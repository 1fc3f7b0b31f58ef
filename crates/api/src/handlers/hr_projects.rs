//! Handlers for the `/hr-projects` resource and its task links.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use hrm_core::error::CoreError;
use hrm_core::lifecycle;
use hrm_core::normalize::normalize_ids;
use hrm_core::status::{Priority, TaskStatus};
use hrm_core::types::DbId;
use hrm_db::models::hr_project::{CreateHrProject, HrProject, SyncProjectTasks, UpdateHrProject};
use hrm_db::models::task::{HrProjectTasks, Task, TaskTable};
use hrm_db::repositories::{HrProjectRepo, TaskRepo};

use crate::error::{AppError, AppResult};
use crate::extract::{Path, Query, ValidatedJson};
use crate::middleware::rbac::{RequireEmployee, RequireHr};
use crate::query::UpcomingParams;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "HrProject",
        id,
    })
}

async fn load(state: &AppState, id: DbId) -> AppResult<HrProject> {
    HrProjectRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))
}

/// POST /api/v1/hr-projects
pub async fn create(
    State(state): State<AppState>,
    RequireHr(_hr): RequireHr,
    ValidatedJson(input): ValidatedJson<CreateHrProject>,
) -> AppResult<(StatusCode, Json<HrProject>)> {
    let project = HrProjectRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(project)))
}

/// GET /api/v1/hr-projects
pub async fn list(
    State(state): State<AppState>,
    RequireHr(_hr): RequireHr,
) -> AppResult<Json<Vec<HrProject>>> {
    Ok(Json(HrProjectRepo::list(&state.pool).await?))
}

/// GET /api/v1/hr-projects/status/{status}
pub async fn list_by_status(
    State(state): State<AppState>,
    RequireHr(_hr): RequireHr,
    Path(status): Path<String>,
) -> AppResult<Json<Vec<HrProject>>> {
    let status: TaskStatus = status.parse()?;
    Ok(Json(
        HrProjectRepo::list_by_status(&state.pool, status.id()).await?,
    ))
}

/// GET /api/v1/hr-projects/priority/{priority}
pub async fn list_by_priority(
    State(state): State<AppState>,
    RequireHr(_hr): RequireHr,
    Path(priority): Path<String>,
) -> AppResult<Json<Vec<HrProject>>> {
    let priority: Priority = priority.parse()?;
    Ok(Json(
        HrProjectRepo::list_by_priority(&state.pool, priority.id()).await?,
    ))
}

/// GET /api/v1/hr-projects/upcoming?days=N
pub async fn list_upcoming(
    State(state): State<AppState>,
    RequireHr(_hr): RequireHr,
    Query(params): Query<UpcomingParams>,
) -> AppResult<Json<Vec<HrProject>>> {
    let window = params.window()?;
    Ok(Json(HrProjectRepo::list_due_within(&state.pool, window).await?))
}

/// GET /api/v1/hr-projects/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    RequireHr(_hr): RequireHr,
    Path(id): Path<DbId>,
) -> AppResult<Json<HrProject>> {
    Ok(Json(load(&state, id).await?))
}

/// PUT /api/v1/hr-projects/{id}
pub async fn update(
    State(state): State<AppState>,
    RequireHr(_hr): RequireHr,
    Path(id): Path<DbId>,
    ValidatedJson(input): ValidatedJson<UpdateHrProject>,
) -> AppResult<Json<HrProject>> {
    let project = HrProjectRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(project))
}

/// DELETE /api/v1/hr-projects/{id}
///
/// Removes the project and its task links; the tasks themselves remain.
pub async fn delete(
    State(state): State<AppState>,
    RequireHr(_hr): RequireHr,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if HrProjectRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}

/// POST /api/v1/hr-projects/next/{id}
pub async fn next_step(
    State(state): State<AppState>,
    RequireHr(hr): RequireHr,
    Path(id): Path<DbId>,
) -> AppResult<Json<HrProject>> {
    let project = load(&state, id).await?;
    let next = lifecycle::advance(project.status()?)?;

    let updated = HrProjectRepo::set_status(&state.pool, id, next)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(project_id = id, status = %next, by = hr.user_id, "HR project advanced");
    Ok(Json(updated))
}

/// POST /api/v1/hr-projects/reject/{id}
pub async fn reject(
    State(state): State<AppState>,
    RequireHr(hr): RequireHr,
    Path(id): Path<DbId>,
) -> AppResult<Json<HrProject>> {
    let project = load(&state, id).await?;
    let rejected = lifecycle::reject(project.status()?);

    let updated = HrProjectRepo::set_status(&state.pool, id, rejected)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(project_id = id, by = hr.user_id, "HR project rejected");
    Ok(Json(updated))
}

/// GET /api/v1/hr-projects/{id}/tasks
pub async fn list_tasks(
    State(state): State<AppState>,
    RequireEmployee(_user): RequireEmployee,
    Path(id): Path<DbId>,
) -> AppResult<Json<Vec<Task>>> {
    load(&state, id).await?;
    Ok(Json(HrProjectRepo::list_tasks(&state.pool, id).await?))
}

/// PUT /api/v1/hr-projects/{id}/tasks
///
/// Replace the project's task links with exactly `task_ids`. Duplicates are
/// collapsed; any id that is not an HR project task fails the whole request.
pub async fn sync_tasks(
    State(state): State<AppState>,
    RequireHr(_hr): RequireHr,
    Path(id): Path<DbId>,
    ValidatedJson(input): ValidatedJson<SyncProjectTasks>,
) -> AppResult<Json<Vec<Task>>> {
    load(&state, id).await?;
    let task_ids = normalize_ids(&input.task_ids)?;

    let existing = HrProjectRepo::count_existing_tasks(&state.pool, &task_ids).await?;
    if existing != task_ids.len() as i64 {
        return Err(AppError::Core(CoreError::Validation(format!(
            "{} of {} task ids do not exist",
            task_ids.len() as i64 - existing,
            task_ids.len()
        ))));
    }

    HrProjectRepo::sync_tasks(&state.pool, id, &task_ids).await?;
    Ok(Json(HrProjectRepo::list_tasks(&state.pool, id).await?))
}

/// POST /api/v1/hr-projects/{id}/tasks/{task_id}
pub async fn attach_task(
    State(state): State<AppState>,
    RequireHr(_hr): RequireHr,
    Path((id, task_id)): Path<(DbId, DbId)>,
) -> AppResult<StatusCode> {
    load(&state, id).await?;
    if TaskRepo::<HrProjectTasks>::find_by_id(&state.pool, task_id)
        .await?
        .is_none()
    {
        return Err(AppError::Core(CoreError::NotFound {
            entity: HrProjectTasks::ENTITY,
            id: task_id,
        }));
    }

    if HrProjectRepo::attach_task(&state.pool, id, task_id).await? {
        Ok(StatusCode::CREATED)
    } else {
        Ok(StatusCode::NO_CONTENT)
    }
}

/// DELETE /api/v1/hr-projects/{id}/tasks/{task_id}
pub async fn detach_task(
    State(state): State<AppState>,
    RequireHr(_hr): RequireHr,
    Path((id, task_id)): Path<(DbId, DbId)>,
) -> AppResult<StatusCode> {
    if HrProjectRepo::detach_task(&state.pool, id, task_id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "HrProjectTaskLink",
            id: task_id,
        }))
    }
}
