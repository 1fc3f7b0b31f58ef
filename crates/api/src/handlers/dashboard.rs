//! Handler for the HR dashboard summary.

use axum::extract::State;
use axum::Json;
use hrm_db::models::dashboard::DashboardSummary;
use hrm_db::repositories::DashboardRepo;

use crate::error::AppResult;
use crate::extract::Query;
use crate::middleware::rbac::RequireHr;
use crate::query::UpcomingParams;
use crate::state::AppState;

/// GET /api/v1/dashboard/summary?days=N
///
/// `upcoming_tasks` counts general tasks due within the next `days` days
/// (default 7).
pub async fn summary(
    State(state): State<AppState>,
    RequireHr(_hr): RequireHr,
    Query(params): Query<UpcomingParams>,
) -> AppResult<Json<DashboardSummary>> {
    let window = params.window()?;
    Ok(Json(DashboardRepo::summary(&state.pool, window).await?))
}
