//! Task-like records: tasks, onboarding tasks and HR project tasks.
//!
//! The three tables share one column layout, so they share one row type and
//! one set of DTOs. [`TaskTable`] selects the table at compile time.

use hrm_core::error::CoreError;
use hrm_core::status::{Priority, StatusId, TaskStatus};
use hrm_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Identifies one of the task tables.
pub trait TaskTable: Send + Sync + 'static {
    /// Table name used in queries.
    const TABLE: &'static str;
    /// Entity name used in not-found errors and logs.
    const ENTITY: &'static str;
}

/// The general `tasks` table.
pub struct GeneralTasks;

impl TaskTable for GeneralTasks {
    const TABLE: &'static str = "tasks";
    const ENTITY: &'static str = "Task";
}

/// The `onboarding_tasks` table.
pub struct OnboardingTasks;

impl TaskTable for OnboardingTasks {
    const TABLE: &'static str = "onboarding_tasks";
    const ENTITY: &'static str = "OnboardingTask";
}

/// The `hr_project_tasks` table.
pub struct HrProjectTasks;

impl TaskTable for HrProjectTasks {
    const TABLE: &'static str = "hr_project_tasks";
    const ENTITY: &'static str = "HrProjectTask";
}

/// A row from any task table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Task {
    pub id: DbId,
    pub user_id: DbId,
    pub title: String,
    pub description: Option<String>,
    #[serde(rename = "status", serialize_with = "TaskStatus::serialize_id")]
    pub status_id: StatusId,
    #[serde(rename = "priority", serialize_with = "Priority::serialize_id")]
    pub priority_id: StatusId,
    pub due_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Task {
    pub fn status(&self) -> Result<TaskStatus, CoreError> {
        TaskStatus::from_id(self.status_id)
    }
}

/// DTO for creating a task. Status always starts at `pending`.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateTask {
    pub user_id: DbId,
    #[validate(length(min = 1, max = 255, message = "must be between 1 and 255 characters"))]
    pub title: String,
    pub description: Option<String>,
    /// Defaults to `medium` if omitted.
    pub priority: Option<Priority>,
    pub due_at: Option<Timestamp>,
}

/// DTO for updating a task. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateTask {
    pub user_id: Option<DbId>,
    #[validate(length(min = 1, max = 255, message = "must be between 1 and 255 characters"))]
    pub title: Option<String>,
    pub description: Option<String>,
    pub priority: Option<Priority>,
    pub due_at: Option<Timestamp>,
}
