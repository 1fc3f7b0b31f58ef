//! Repository for the `candidates` table.

use hrm_core::lifecycle::CandidateProgress;
use hrm_core::status::StatusId;
use hrm_core::types::DbId;
use sqlx::PgPool;

use crate::models::candidate::{Candidate, CreateCandidate, UpdateCandidate};

const COLUMNS: &str =
    "id, user_id, job_id, status_id, step, cv_url, cover_letter, created_at, updated_at";

/// Provides CRUD and pipeline operations for candidates.
pub struct CandidateRepo;

impl CandidateRepo {
    /// Insert an application for `user_id` at the first pipeline stage.
    pub async fn create(
        pool: &PgPool,
        user_id: DbId,
        input: &CreateCandidate,
    ) -> Result<Candidate, sqlx::Error> {
        let query = format!(
            "INSERT INTO candidates (user_id, job_id, cv_url, cover_letter)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Candidate>(&query)
            .bind(user_id)
            .bind(input.job_id)
            .bind(&input.cv_url)
            .bind(&input.cover_letter)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Candidate>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM candidates WHERE id = $1");
        sqlx::query_as::<_, Candidate>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all candidates, newest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Candidate>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM candidates ORDER BY created_at DESC, id DESC");
        sqlx::query_as::<_, Candidate>(&query).fetch_all(pool).await
    }

    pub async fn list_by_status(
        pool: &PgPool,
        status_id: StatusId,
    ) -> Result<Vec<Candidate>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM candidates WHERE status_id = $1 ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, Candidate>(&query)
            .bind(status_id)
            .fetch_all(pool)
            .await
    }

    pub async fn list_by_user(pool: &PgPool, user_id: DbId) -> Result<Vec<Candidate>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM candidates WHERE user_id = $1 ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, Candidate>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    pub async fn list_by_job(pool: &PgPool, job_id: DbId) -> Result<Vec<Candidate>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM candidates WHERE job_id = $1 ORDER BY step DESC, created_at ASC"
        );
        sqlx::query_as::<_, Candidate>(&query)
            .bind(job_id)
            .fetch_all(pool)
            .await
    }

    /// Update an application. Only non-`None` fields in `input` are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateCandidate,
    ) -> Result<Option<Candidate>, sqlx::Error> {
        let query = format!(
            "UPDATE candidates SET
                cv_url = COALESCE($2, cv_url),
                cover_letter = COALESCE($3, cover_letter)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Candidate>(&query)
            .bind(id)
            .bind(&input.cv_url)
            .bind(&input.cover_letter)
            .fetch_optional(pool)
            .await
    }

    /// Persist a pipeline position computed by the lifecycle rules.
    pub async fn set_progress(
        pool: &PgPool,
        id: DbId,
        progress: CandidateProgress,
    ) -> Result<Option<Candidate>, sqlx::Error> {
        let query = format!(
            "UPDATE candidates SET status_id = $2, step = $3
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Candidate>(&query)
            .bind(id)
            .bind(progress.status.id())
            .bind(progress.step)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM candidates WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
