//! Job posting model and DTOs.

use hrm_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A job posting row from the `jobs` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Job {
    pub id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub requirement: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a job posting.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateJob {
    #[validate(length(min = 1, max = 255, message = "must be between 1 and 255 characters"))]
    pub title: String,
    pub description: Option<String>,
    pub requirement: Option<String>,
}

/// DTO for updating a job posting. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateJob {
    #[validate(length(min = 1, max = 255, message = "must be between 1 and 255 characters"))]
    pub title: Option<String>,
    pub description: Option<String>,
    pub requirement: Option<String>,
}
