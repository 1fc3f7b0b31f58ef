//! Repository for the `attendance_records` table.

use hrm_core::types::DbId;
use sqlx::PgPool;

use crate::models::attendance::AttendanceRecord;

const COLUMNS: &str = "id, user_id, clock_in_at, clock_out_at, note";

/// Provides clock-in / clock-out persistence.
pub struct AttendanceRepo;

impl AttendanceRepo {
    /// Open a new record for `user_id`.
    ///
    /// Fails with a unique violation on `uq_attendance_open_per_user` if the
    /// user already has an open record.
    pub async fn clock_in(
        pool: &PgPool,
        user_id: DbId,
        note: Option<&str>,
    ) -> Result<AttendanceRecord, sqlx::Error> {
        let query = format!(
            "INSERT INTO attendance_records (user_id, note)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, AttendanceRecord>(&query)
            .bind(user_id)
            .bind(note)
            .fetch_one(pool)
            .await
    }

    /// Close the user's open record. Returns `None` if none is open.
    pub async fn clock_out(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Option<AttendanceRecord>, sqlx::Error> {
        let query = format!(
            "UPDATE attendance_records SET clock_out_at = NOW()
             WHERE user_id = $1 AND clock_out_at IS NULL
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, AttendanceRecord>(&query)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(pool: &PgPool) -> Result<Vec<AttendanceRecord>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM attendance_records ORDER BY clock_in_at DESC, id DESC"
        );
        sqlx::query_as::<_, AttendanceRecord>(&query)
            .fetch_all(pool)
            .await
    }

    pub async fn list_by_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<AttendanceRecord>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM attendance_records WHERE user_id = $1
             ORDER BY clock_in_at DESC, id DESC"
        );
        sqlx::query_as::<_, AttendanceRecord>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }
}
