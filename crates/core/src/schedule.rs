//! Due-date windows for the "upcoming" listings.

use chrono::Duration;

use crate::error::CoreError;
use crate::types::Timestamp;

/// Default window when no `days` parameter is given.
pub const DEFAULT_UPCOMING_DAYS: i64 = 7;

/// Largest accepted window.
pub const MAX_UPCOMING_DAYS: i64 = 365;

/// An inclusive `[start, end]` due-date window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DueWindow {
    pub start: Timestamp,
    pub end: Timestamp,
}

impl DueWindow {
    /// Window covering the next `days` days from `now`.
    pub fn upcoming(now: Timestamp, days: i64) -> Result<Self, CoreError> {
        if !(0..=MAX_UPCOMING_DAYS).contains(&days) {
            return Err(CoreError::Validation(format!(
                "days must be between 0 and {MAX_UPCOMING_DAYS}, got {days}"
            )));
        }
        Ok(Self {
            start: now,
            end: now + Duration::days(days),
        })
    }

    pub fn contains(&self, due_at: Timestamp) -> bool {
        due_at >= self.start && due_at <= self.end
    }
}
