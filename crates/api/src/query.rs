//! Shared query parameter types for API handlers.

use hrm_core::error::CoreError;
use hrm_core::schedule::{DueWindow, DEFAULT_UPCOMING_DAYS};
use serde::Deserialize;

/// Query parameters for the `upcoming` listings (`?days=N`).
#[derive(Debug, Deserialize)]
pub struct UpcomingParams {
    pub days: Option<i64>,
}

impl UpcomingParams {
    /// The due-date window starting now.
    pub fn window(&self) -> Result<DueWindow, CoreError> {
        DueWindow::upcoming(chrono::Utc::now(), self.days.unwrap_or(DEFAULT_UPCOMING_DAYS))
    }
}
