//! Handlers for the `/jobs` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use hrm_core::error::CoreError;
use hrm_core::types::DbId;
use hrm_db::models::job::{CreateJob, Job, UpdateJob};
use hrm_db::repositories::JobRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{Path, ValidatedJson};
use crate::middleware::rbac::{RequireGuest, RequireHr};
use crate::state::AppState;

/// POST /api/v1/jobs
pub async fn create(
    State(state): State<AppState>,
    RequireHr(_hr): RequireHr,
    ValidatedJson(input): ValidatedJson<CreateJob>,
) -> AppResult<(StatusCode, Json<Job>)> {
    let job = JobRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(job)))
}

/// GET /api/v1/jobs
pub async fn list(
    State(state): State<AppState>,
    RequireGuest(_user): RequireGuest,
) -> AppResult<Json<Vec<Job>>> {
    let jobs = JobRepo::list(&state.pool).await?;
    Ok(Json(jobs))
}

/// GET /api/v1/jobs/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    RequireGuest(_user): RequireGuest,
    Path(id): Path<DbId>,
) -> AppResult<Json<Job>> {
    let job = JobRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Job", id }))?;
    Ok(Json(job))
}

/// PUT /api/v1/jobs/{id}
pub async fn update(
    State(state): State<AppState>,
    RequireHr(_hr): RequireHr,
    Path(id): Path<DbId>,
    ValidatedJson(input): ValidatedJson<UpdateJob>,
) -> AppResult<Json<Job>> {
    let job = JobRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Job", id }))?;
    Ok(Json(job))
}

/// DELETE /api/v1/jobs/{id}
pub async fn delete(
    State(state): State<AppState>,
    RequireHr(_hr): RequireHr,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if JobRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound { entity: "Job", id }))
    }
}
