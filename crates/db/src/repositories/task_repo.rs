//! Repository shared by the three task tables.
//!
//! `TaskRepo::<OnboardingTasks>::list(pool)` queries `onboarding_tasks`, and
//! so on for each [`TaskTable`].

use std::marker::PhantomData;

use hrm_core::schedule::DueWindow;
use hrm_core::status::{Priority, StatusId, TaskStatus};
use hrm_core::types::DbId;
use sqlx::PgPool;

use crate::models::task::{CreateTask, Task, TaskTable, UpdateTask};

/// Column list shared across queries to avoid repetition.
pub(crate) const COLUMNS: &str =
    "id, user_id, title, description, status_id, priority_id, due_at, created_at, updated_at";

/// Provides CRUD, filter and status operations for the table `T`.
pub struct TaskRepo<T>(PhantomData<T>);

impl<T: TaskTable> TaskRepo<T> {
    /// Insert a new task in `pending`, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateTask) -> Result<Task, sqlx::Error> {
        let query = format!(
            "INSERT INTO {table} (user_id, title, description, status_id, priority_id, due_at)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}",
            table = T::TABLE
        );
        sqlx::query_as::<_, Task>(&query)
            .bind(input.user_id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(TaskStatus::Pending.id())
            .bind(input.priority.unwrap_or(Priority::Medium).id())
            .bind(input.due_at)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Task>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM {} WHERE id = $1", T::TABLE);
        sqlx::query_as::<_, Task>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all rows, newest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Task>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM {} ORDER BY created_at DESC, id DESC",
            T::TABLE
        );
        sqlx::query_as::<_, Task>(&query).fetch_all(pool).await
    }

    pub async fn list_by_status(
        pool: &PgPool,
        status_id: StatusId,
    ) -> Result<Vec<Task>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM {} WHERE status_id = $1 ORDER BY created_at DESC, id DESC",
            T::TABLE
        );
        sqlx::query_as::<_, Task>(&query)
            .bind(status_id)
            .fetch_all(pool)
            .await
    }

    pub async fn list_by_priority(
        pool: &PgPool,
        priority_id: StatusId,
    ) -> Result<Vec<Task>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM {} WHERE priority_id = $1 ORDER BY created_at DESC, id DESC",
            T::TABLE
        );
        sqlx::query_as::<_, Task>(&query)
            .bind(priority_id)
            .fetch_all(pool)
            .await
    }

    pub async fn list_by_user(pool: &PgPool, user_id: DbId) -> Result<Vec<Task>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM {} WHERE user_id = $1 ORDER BY created_at DESC, id DESC",
            T::TABLE
        );
        sqlx::query_as::<_, Task>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Rows due inside `window`, soonest first.
    pub async fn list_due_within(
        pool: &PgPool,
        window: DueWindow,
    ) -> Result<Vec<Task>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM {} WHERE due_at BETWEEN $1 AND $2 ORDER BY due_at ASC, id ASC",
            T::TABLE
        );
        sqlx::query_as::<_, Task>(&query)
            .bind(window.start)
            .bind(window.end)
            .fetch_all(pool)
            .await
    }

    /// Update a task. Only non-`None` fields in `input` are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateTask,
    ) -> Result<Option<Task>, sqlx::Error> {
        let query = format!(
            "UPDATE {table} SET
                user_id = COALESCE($2, user_id),
                title = COALESCE($3, title),
                description = COALESCE($4, description),
                priority_id = COALESCE($5, priority_id),
                due_at = COALESCE($6, due_at)
             WHERE id = $1
             RETURNING {COLUMNS}",
            table = T::TABLE
        );
        sqlx::query_as::<_, Task>(&query)
            .bind(id)
            .bind(input.user_id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.priority.map(Priority::id))
            .bind(input.due_at)
            .fetch_optional(pool)
            .await
    }

    /// Persist a status computed by the lifecycle rules.
    pub async fn set_status(
        pool: &PgPool,
        id: DbId,
        status: TaskStatus,
    ) -> Result<Option<Task>, sqlx::Error> {
        let query = format!(
            "UPDATE {} SET status_id = $2 WHERE id = $1 RETURNING {COLUMNS}",
            T::TABLE
        );
        sqlx::query_as::<_, Task>(&query)
            .bind(id)
            .bind(status.id())
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let query = format!("DELETE FROM {} WHERE id = $1", T::TABLE);
        let result = sqlx::query(&query).bind(id).execute(pool).await?;
        Ok(result.rows_affected() > 0)
    }
}
