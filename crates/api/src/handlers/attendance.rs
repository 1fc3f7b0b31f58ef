//! Handlers for `/attendance` (clock in / clock out).

use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use hrm_core::error::CoreError;
use hrm_core::types::DbId;
use hrm_db::models::attendance::{AttendanceRecord, ClockIn};
use hrm_db::repositories::AttendanceRepo;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::extract::Path;
use crate::middleware::rbac::{RequireEmployee, RequireHr};
use crate::state::AppState;

/// POST /api/v1/attendance/clock-in
///
/// The JSON body (`{"note": "..."}`) is optional. 409 if the caller already
/// has an open record.
pub async fn clock_in(
    State(state): State<AppState>,
    RequireEmployee(user): RequireEmployee,
    body: Bytes,
) -> AppResult<(StatusCode, Json<AttendanceRecord>)> {
    let input: ClockIn = if body.is_empty() {
        ClockIn::default()
    } else {
        serde_json::from_slice(&body).map_err(|e| AppError::BadRequest(e.to_string()))?
    };
    input.validate().map_err(CoreError::from)?;

    let record = AttendanceRepo::clock_in(&state.pool, user.user_id, input.note.as_deref()).await?;
    tracing::info!(user_id = user.user_id, record_id = record.id, "Clocked in");
    Ok((StatusCode::CREATED, Json(record)))
}

/// POST /api/v1/attendance/clock-out
pub async fn clock_out(
    State(state): State<AppState>,
    RequireEmployee(user): RequireEmployee,
) -> AppResult<Json<AttendanceRecord>> {
    let record = AttendanceRepo::clock_out(&state.pool, user.user_id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::Conflict("You are not clocked in".into())))?;
    tracing::info!(user_id = user.user_id, record_id = record.id, "Clocked out");
    Ok(Json(record))
}

/// GET /api/v1/attendance/mine
pub async fn list_mine(
    State(state): State<AppState>,
    RequireEmployee(user): RequireEmployee,
) -> AppResult<Json<Vec<AttendanceRecord>>> {
    Ok(Json(
        AttendanceRepo::list_by_user(&state.pool, user.user_id).await?,
    ))
}

/// GET /api/v1/attendance
pub async fn list(
    State(state): State<AppState>,
    RequireHr(_hr): RequireHr,
) -> AppResult<Json<Vec<AttendanceRecord>>> {
    Ok(Json(AttendanceRepo::list(&state.pool).await?))
}

/// GET /api/v1/attendance/user/{user_id}
pub async fn list_by_user(
    State(state): State<AppState>,
    RequireHr(_hr): RequireHr,
    Path(user_id): Path<DbId>,
) -> AppResult<Json<Vec<AttendanceRecord>>> {
    Ok(Json(AttendanceRepo::list_by_user(&state.pool, user_id).await?))
}
