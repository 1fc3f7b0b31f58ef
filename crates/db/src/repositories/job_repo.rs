//! Repository for the `jobs` table.

use hrm_core::types::DbId;
use sqlx::PgPool;

use crate::models::job::{CreateJob, Job, UpdateJob};

const COLUMNS: &str = "id, title, description, requirement, created_at, updated_at";

/// Provides CRUD operations for job postings.
pub struct JobRepo;

impl JobRepo {
    pub async fn create(pool: &PgPool, input: &CreateJob) -> Result<Job, sqlx::Error> {
        let query = format!(
            "INSERT INTO jobs (title, description, requirement)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Job>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.requirement)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Job>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM jobs WHERE id = $1");
        sqlx::query_as::<_, Job>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all jobs, newest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Job>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM jobs ORDER BY created_at DESC, id DESC");
        sqlx::query_as::<_, Job>(&query).fetch_all(pool).await
    }

    /// Update a job. Only non-`None` fields in `input` are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateJob,
    ) -> Result<Option<Job>, sqlx::Error> {
        let query = format!(
            "UPDATE jobs SET
                title = COALESCE($2, title),
                description = COALESCE($3, description),
                requirement = COALESCE($4, requirement)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Job>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.requirement)
            .fetch_optional(pool)
            .await
    }

    /// Delete a job (and, by cascade, its applications).
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM jobs WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
