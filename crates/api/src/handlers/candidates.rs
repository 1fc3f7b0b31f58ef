//! Handlers for the `/candidates` resource (job applications).
//!
//! Any principal may apply and manage their own applications. Listing,
//! filtering and moving candidates through the hiring pipeline is `hr` only.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use hrm_core::error::CoreError;
use hrm_core::status::CandidateStatus;
use hrm_core::types::DbId;
use hrm_db::models::candidate::{Candidate, CreateCandidate, UpdateCandidate};
use hrm_db::repositories::{CandidateRepo, JobRepo};

use crate::error::{AppError, AppResult};
use crate::extract::{Path, ValidatedJson};
use crate::middleware::rbac::{RequireGuest, RequireHr};
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Candidate",
        id,
    })
}

async fn load(state: &AppState, id: DbId) -> AppResult<Candidate> {
    CandidateRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))
}

/// POST /api/v1/candidates
///
/// Apply for a job. Only `hr` may apply on behalf of another user.
pub async fn create(
    State(state): State<AppState>,
    RequireGuest(user): RequireGuest,
    ValidatedJson(input): ValidatedJson<CreateCandidate>,
) -> AppResult<(StatusCode, Json<Candidate>)> {
    let applicant_id = match input.user_id {
        Some(id) if user.is_hr() => id,
        _ => user.user_id,
    };

    if JobRepo::find_by_id(&state.pool, input.job_id).await?.is_none() {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Job",
            id: input.job_id,
        }));
    }

    let candidate = CandidateRepo::create(&state.pool, applicant_id, &input).await?;
    tracing::info!(
        candidate_id = candidate.id,
        user_id = applicant_id,
        job_id = input.job_id,
        "Application received"
    );
    Ok((StatusCode::CREATED, Json(candidate)))
}

/// GET /api/v1/candidates
pub async fn list(
    State(state): State<AppState>,
    RequireHr(_hr): RequireHr,
) -> AppResult<Json<Vec<Candidate>>> {
    Ok(Json(CandidateRepo::list(&state.pool).await?))
}

/// GET /api/v1/candidates/mine
pub async fn list_mine(
    State(state): State<AppState>,
    RequireGuest(user): RequireGuest,
) -> AppResult<Json<Vec<Candidate>>> {
    Ok(Json(
        CandidateRepo::list_by_user(&state.pool, user.user_id).await?,
    ))
}

/// GET /api/v1/candidates/status/{status}
pub async fn list_by_status(
    State(state): State<AppState>,
    RequireHr(_hr): RequireHr,
    Path(status): Path<String>,
) -> AppResult<Json<Vec<Candidate>>> {
    let status: CandidateStatus = status.parse()?;
    Ok(Json(
        CandidateRepo::list_by_status(&state.pool, status.id()).await?,
    ))
}

/// GET /api/v1/candidates/user/{user_id}
pub async fn list_by_user(
    State(state): State<AppState>,
    RequireHr(_hr): RequireHr,
    Path(user_id): Path<DbId>,
) -> AppResult<Json<Vec<Candidate>>> {
    Ok(Json(CandidateRepo::list_by_user(&state.pool, user_id).await?))
}

/// GET /api/v1/candidates/job/{job_id}
///
/// Ordered by pipeline step, furthest along first.
pub async fn list_by_job(
    State(state): State<AppState>,
    RequireHr(_hr): RequireHr,
    Path(job_id): Path<DbId>,
) -> AppResult<Json<Vec<Candidate>>> {
    Ok(Json(CandidateRepo::list_by_job(&state.pool, job_id).await?))
}

/// GET /api/v1/candidates/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    RequireGuest(user): RequireGuest,
    Path(id): Path<DbId>,
) -> AppResult<Json<Candidate>> {
    let candidate = load(&state, id).await?;
    user.ensure_owner_or_hr(candidate.user_id)?;
    Ok(Json(candidate))
}

/// PUT /api/v1/candidates/{id}
pub async fn update(
    State(state): State<AppState>,
    RequireGuest(user): RequireGuest,
    Path(id): Path<DbId>,
    ValidatedJson(input): ValidatedJson<UpdateCandidate>,
) -> AppResult<Json<Candidate>> {
    let candidate = load(&state, id).await?;
    user.ensure_owner_or_hr(candidate.user_id)?;

    let updated = CandidateRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(updated))
}

/// DELETE /api/v1/candidates/{id}
///
/// Withdraws an application (owner) or removes it (hr). Rejected
/// applications can only be removed by hr.
pub async fn delete(
    State(state): State<AppState>,
    RequireGuest(user): RequireGuest,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let candidate = load(&state, id).await?;
    user.ensure_owner_or_hr(candidate.user_id)?;
    if !user.is_hr() && candidate.progress()?.status == CandidateStatus::Rejected {
        return Err(AppError::Core(CoreError::InvalidTransition(
            "A rejected application cannot be withdrawn".into(),
        )));
    }

    if CandidateRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}

/// POST /api/v1/candidates/next/{id}
///
/// Advance one pipeline stage. 409 `INVALID_TRANSITION` for rejected
/// candidates and candidates already at the final stage.
pub async fn next_step(
    State(state): State<AppState>,
    RequireHr(hr): RequireHr,
    Path(id): Path<DbId>,
) -> AppResult<Json<Candidate>> {
    let candidate = load(&state, id).await?;
    let progress = candidate.progress()?.advance()?;

    let updated = CandidateRepo::set_progress(&state.pool, id, progress)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(
        candidate_id = id,
        step = progress.step,
        stage = progress.stage(),
        by = hr.user_id,
        "Candidate advanced"
    );
    Ok(Json(updated))
}

/// POST /api/v1/candidates/reject/{id}
///
/// Idempotent: rejecting a rejected candidate returns it unchanged.
pub async fn reject(
    State(state): State<AppState>,
    RequireHr(hr): RequireHr,
    Path(id): Path<DbId>,
) -> AppResult<Json<Candidate>> {
    let candidate = load(&state, id).await?;
    let progress = candidate.progress()?.reject();

    let updated = CandidateRepo::set_progress(&state.pool, id, progress)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(candidate_id = id, by = hr.user_id, "Candidate rejected");
    Ok(Json(updated))
}
