//! Repository for `hr_projects` and the `hr_project_task_links` join table.

use hrm_core::schedule::DueWindow;
use hrm_core::status::{Priority, StatusId, TaskStatus};
use hrm_core::types::DbId;
use sqlx::PgPool;

use crate::models::hr_project::{CreateHrProject, HrProject, UpdateHrProject};
use crate::models::task::Task;

const COLUMNS: &str =
    "id, name, description, status_id, priority_id, due_at, created_at, updated_at";

/// Provides CRUD, filter, status and task-link operations for HR projects.
pub struct HrProjectRepo;

impl HrProjectRepo {
    /// Insert a new project in `pending`.
    pub async fn create(pool: &PgPool, input: &CreateHrProject) -> Result<HrProject, sqlx::Error> {
        let query = format!(
            "INSERT INTO hr_projects (name, description, status_id, priority_id, due_at)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, HrProject>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .bind(TaskStatus::Pending.id())
            .bind(input.priority.unwrap_or(Priority::Medium).id())
            .bind(input.due_at)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<HrProject>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM hr_projects WHERE id = $1");
        sqlx::query_as::<_, HrProject>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(pool: &PgPool) -> Result<Vec<HrProject>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM hr_projects ORDER BY created_at DESC, id DESC");
        sqlx::query_as::<_, HrProject>(&query).fetch_all(pool).await
    }

    pub async fn list_by_status(
        pool: &PgPool,
        status_id: StatusId,
    ) -> Result<Vec<HrProject>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM hr_projects WHERE status_id = $1 ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, HrProject>(&query)
            .bind(status_id)
            .fetch_all(pool)
            .await
    }

    pub async fn list_by_priority(
        pool: &PgPool,
        priority_id: StatusId,
    ) -> Result<Vec<HrProject>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM hr_projects WHERE priority_id = $1 ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, HrProject>(&query)
            .bind(priority_id)
            .fetch_all(pool)
            .await
    }

    /// Projects due inside `window`, soonest first.
    pub async fn list_due_within(
        pool: &PgPool,
        window: DueWindow,
    ) -> Result<Vec<HrProject>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM hr_projects WHERE due_at BETWEEN $1 AND $2 ORDER BY due_at ASC, id ASC"
        );
        sqlx::query_as::<_, HrProject>(&query)
            .bind(window.start)
            .bind(window.end)
            .fetch_all(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateHrProject,
    ) -> Result<Option<HrProject>, sqlx::Error> {
        let query = format!(
            "UPDATE hr_projects SET
                name = COALESCE($2, name),
                description = COALESCE($3, description),
                priority_id = COALESCE($4, priority_id),
                due_at = COALESCE($5, due_at)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, HrProject>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.priority.map(Priority::id))
            .bind(input.due_at)
            .fetch_optional(pool)
            .await
    }

    pub async fn set_status(
        pool: &PgPool,
        id: DbId,
        status: TaskStatus,
    ) -> Result<Option<HrProject>, sqlx::Error> {
        let query =
            format!("UPDATE hr_projects SET status_id = $2 WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, HrProject>(&query)
            .bind(id)
            .bind(status.id())
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM hr_projects WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    // -----------------------------------------------------------------------
    // Task links
    // -----------------------------------------------------------------------

    /// Tasks linked to a project, in id order.
    pub async fn list_tasks(pool: &PgPool, project_id: DbId) -> Result<Vec<Task>, sqlx::Error> {
        sqlx::query_as::<_, Task>(
            "SELECT t.id, t.user_id, t.title, t.description, t.status_id, t.priority_id,
                    t.due_at, t.created_at, t.updated_at
             FROM hr_project_tasks t
             JOIN hr_project_task_links l ON l.hr_project_task_id = t.id
             WHERE l.hr_project_id = $1
             ORDER BY t.id ASC",
        )
        .bind(project_id)
        .fetch_all(pool)
        .await
    }

    /// Link a task to a project. Returns `false` if it was already linked.
    pub async fn attach_task(
        pool: &PgPool,
        project_id: DbId,
        task_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "INSERT INTO hr_project_task_links (hr_project_id, hr_project_task_id)
             VALUES ($1, $2)
             ON CONFLICT DO NOTHING",
        )
        .bind(project_id)
        .bind(task_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Unlink a task from a project. Returns `true` if a link was removed.
    pub async fn detach_task(
        pool: &PgPool,
        project_id: DbId,
        task_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "DELETE FROM hr_project_task_links
             WHERE hr_project_id = $1 AND hr_project_task_id = $2",
        )
        .bind(project_id)
        .bind(task_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Count how many of `task_ids` exist in `hr_project_tasks`.
    ///
    /// `task_ids` must already be normalised (sorted, unique).
    pub async fn count_existing_tasks(pool: &PgPool, task_ids: &[DbId]) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM hr_project_tasks WHERE id = ANY($1)")
            .bind(task_ids)
            .fetch_one(pool)
            .await
    }

    /// Replace a project's links with exactly `task_ids`, in one transaction.
    ///
    /// `task_ids` must already be normalised (sorted, unique).
    pub async fn sync_tasks(
        pool: &PgPool,
        project_id: DbId,
        task_ids: &[DbId],
    ) -> Result<(), sqlx::Error> {
        let mut tx = pool.begin().await?;

        sqlx::query(
            "DELETE FROM hr_project_task_links
             WHERE hr_project_id = $1 AND NOT (hr_project_task_id = ANY($2))",
        )
        .bind(project_id)
        .bind(task_ids)
        .execute(&mut *tx)
        .await?;

        sqlx::query(
            "INSERT INTO hr_project_task_links (hr_project_id, hr_project_task_id)
             SELECT $1, unnest($2::BIGINT[])
             ON CONFLICT DO NOTHING",
        )
        .bind(project_id)
        .bind(task_ids)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        tracing::debug!(project_id, task_count = task_ids.len(), "Synced HR project task links");
        Ok(())
    }
}
