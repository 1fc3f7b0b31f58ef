//! Aggregates for the HR dashboard.

use serde::Serialize;
use sqlx::FromRow;

/// Number of rows carrying a given status.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct StatusCount {
    pub status: String,
    pub count: i64,
}

/// Dashboard summary payload.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardSummary {
    pub employees: i64,
    pub jobs: i64,
    pub candidates_by_status: Vec<StatusCount>,
    pub tasks_by_status: Vec<StatusCount>,
    pub onboarding_by_status: Vec<StatusCount>,
    pub upcoming_tasks: i64,
    pub clocked_in: i64,
}
