//! HR project model and DTOs.

use hrm_core::error::CoreError;
use hrm_core::status::{Priority, StatusId, TaskStatus};
use hrm_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `hr_projects` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct HrProject {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
    #[serde(rename = "status", serialize_with = "TaskStatus::serialize_id")]
    pub status_id: StatusId,
    #[serde(rename = "priority", serialize_with = "Priority::serialize_id")]
    pub priority_id: StatusId,
    pub due_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl HrProject {
    pub fn status(&self) -> Result<TaskStatus, CoreError> {
        TaskStatus::from_id(self.status_id)
    }
}

/// DTO for creating an HR project.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateHrProject {
    #[validate(length(min = 1, max = 255, message = "must be between 1 and 255 characters"))]
    pub name: String,
    pub description: Option<String>,
    /// Defaults to `medium` if omitted.
    pub priority: Option<Priority>,
    pub due_at: Option<Timestamp>,
}

/// DTO for updating an HR project. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateHrProject {
    #[validate(length(min = 1, max = 255, message = "must be between 1 and 255 characters"))]
    pub name: Option<String>,
    pub description: Option<String>,
    pub priority: Option<Priority>,
    pub due_at: Option<Timestamp>,
}

/// Request body replacing a project's full task list.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SyncProjectTasks {
    pub task_ids: Vec<DbId>,
}
