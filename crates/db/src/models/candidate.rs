//! Candidate (job application) model and DTOs.

use hrm_core::error::CoreError;
use hrm_core::lifecycle::CandidateProgress;
use hrm_core::status::{CandidateStatus, StatusId};
use hrm_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `candidates` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Candidate {
    pub id: DbId,
    pub user_id: DbId,
    pub job_id: DbId,
    #[serde(rename = "status", serialize_with = "CandidateStatus::serialize_id")]
    pub status_id: StatusId,
    pub step: i16,
    pub cv_url: Option<String>,
    pub cover_letter: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Candidate {
    /// Current pipeline position.
    pub fn progress(&self) -> Result<CandidateProgress, CoreError> {
        Ok(CandidateProgress {
            status: CandidateStatus::from_id(self.status_id)?,
            step: self.step,
        })
    }
}

/// DTO for creating an application. New candidates always start at the
/// first pipeline stage.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCandidate {
    /// Ignored for guest applicants, who always apply as themselves.
    pub user_id: Option<DbId>,
    pub job_id: DbId,
    #[validate(url)]
    pub cv_url: Option<String>,
    #[validate(length(max = 10000))]
    pub cover_letter: Option<String>,
}

/// DTO for updating an application. All fields are optional.
///
/// The job is fixed at creation; pipeline progress belongs to one job.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateCandidate {
    #[validate(url)]
    pub cv_url: Option<String>,
    #[validate(length(max = 10000))]
    pub cover_letter: Option<String>,
}
