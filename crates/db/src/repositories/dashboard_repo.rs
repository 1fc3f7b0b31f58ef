//! Aggregate queries backing the HR dashboard.

use hrm_core::roles::Role;
use hrm_core::schedule::DueWindow;
use sqlx::PgPool;

use crate::models::dashboard::{DashboardSummary, StatusCount};

/// Read-only aggregate queries.
pub struct DashboardRepo;

impl DashboardRepo {
    /// Collect every dashboard figure. `window` bounds the upcoming-task count.
    pub async fn summary(pool: &PgPool, window: DueWindow) -> Result<DashboardSummary, sqlx::Error> {
        let employees: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM users WHERE user_type IN ($1, $2) AND is_active",
        )
        .bind(Role::Employee.id())
        .bind(Role::Hr.id())
        .fetch_one(pool)
        .await?;

        let jobs: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM jobs")
            .fetch_one(pool)
            .await?;

        let candidates_by_status = Self::status_counts(pool, "candidates", "candidate_statuses").await?;
        let tasks_by_status = Self::status_counts(pool, "tasks", "task_statuses").await?;
        let onboarding_by_status =
            Self::status_counts(pool, "onboarding_tasks", "task_statuses").await?;

        let upcoming_tasks: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM tasks WHERE due_at BETWEEN $1 AND $2")
                .bind(window.start)
                .bind(window.end)
                .fetch_one(pool)
                .await?;

        let clocked_in: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM attendance_records WHERE clock_out_at IS NULL")
                .fetch_one(pool)
                .await?;

        Ok(DashboardSummary {
            employees,
            jobs,
            candidates_by_status,
            tasks_by_status,
            onboarding_by_status,
            upcoming_tasks,
            clocked_in,
        })
    }

    /// Per-status row counts for `table`, including zero counts, in lookup order.
    async fn status_counts(
        pool: &PgPool,
        table: &str,
        lookup: &str,
    ) -> Result<Vec<StatusCount>, sqlx::Error> {
        let query = format!(
            "SELECT s.name AS status, COUNT(t.id) AS count
             FROM {lookup} s
             LEFT JOIN {table} t ON t.status_id = s.id
             GROUP BY s.id, s.name
             ORDER BY s.id"
        );
        sqlx::query_as::<_, StatusCount>(&query).fetch_all(pool).await
    }
}
