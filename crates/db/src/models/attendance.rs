//! Attendance (clock in / clock out) model.

use hrm_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `attendance_records` table. Open while `clock_out_at` is null.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct AttendanceRecord {
    pub id: DbId,
    pub user_id: DbId,
    pub clock_in_at: Timestamp,
    pub clock_out_at: Option<Timestamp>,
    pub note: Option<String>,
}

/// Optional body for clock-in.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct ClockIn {
    #[validate(length(max = 1000))]
    pub note: Option<String>,
}
