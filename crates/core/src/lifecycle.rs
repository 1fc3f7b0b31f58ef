//! "Next step" and "reject" transitions.
//!
//! Task-like records walk `pending -> in_progress -> done`. Candidates walk
//! the fixed [`HIRING_PIPELINE`] by `step`, with their status derived from the
//! step. `rejected` is terminal for both: it can always be entered, never left
//! through [`advance`].

use std::fmt;

use serde::Serialize;

use crate::error::CoreError;
use crate::status::{CandidateStatus, TaskStatus};

/// A status enumeration with a fixed forward sequence and a terminal
/// rejected value.
pub trait Lifecycle: Copy + Eq + fmt::Display {
    const REJECTED: Self;

    /// The next status in the fixed sequence, or `None` at its end.
    fn successor(self) -> Option<Self>;
}

impl Lifecycle for TaskStatus {
    const REJECTED: Self = TaskStatus::Rejected;

    fn successor(self) -> Option<Self> {
        match self {
            TaskStatus::Pending => Some(TaskStatus::InProgress),
            TaskStatus::InProgress => Some(TaskStatus::Done),
            TaskStatus::Done | TaskStatus::Rejected => None,
        }
    }
}

/// Move `current` one status forward.
pub fn advance<S: Lifecycle>(current: S) -> Result<S, CoreError> {
    if current == S::REJECTED {
        return Err(CoreError::InvalidTransition(
            "Cannot advance a rejected record".into(),
        ));
    }
    current.successor().ok_or_else(|| {
        CoreError::InvalidTransition(format!("'{current}' is the last status in the sequence"))
    })
}

/// Move `current` to the terminal rejected status. Rejecting twice is a no-op.
pub fn reject<S: Lifecycle>(_current: S) -> S {
    S::REJECTED
}

/// Stages of the hiring pipeline, indexed by `candidates.step`.
pub const HIRING_PIPELINE: [&str; 4] = [
    "applied",
    "screening_interview",
    "final_interview",
    "hired",
];

/// Index of the last pipeline stage.
pub const FINAL_STEP: i16 = (HIRING_PIPELINE.len() - 1) as i16;

/// A candidate's position in the hiring pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CandidateProgress {
    pub status: CandidateStatus,
    pub step: i16,
}

impl CandidateProgress {
    /// Progress of a freshly created application.
    pub fn initial() -> Self {
        Self {
            status: CandidateStatus::Applied,
            step: 0,
        }
    }

    /// Status implied by a pipeline step.
    pub fn status_for_step(step: i16) -> CandidateStatus {
        if step <= 0 {
            CandidateStatus::Applied
        } else if step >= FINAL_STEP {
            CandidateStatus::Hired
        } else {
            CandidateStatus::Interviewing
        }
    }

    /// Name of the current pipeline stage.
    pub fn stage(self) -> &'static str {
        HIRING_PIPELINE[self.step.clamp(0, FINAL_STEP) as usize]
    }

    /// Advance one stage. Fails for rejected candidates and at the final stage.
    pub fn advance(self) -> Result<Self, CoreError> {
        if self.status == CandidateStatus::Rejected {
            return Err(CoreError::InvalidTransition(
                "Cannot advance a rejected candidate".into(),
            ));
        }
        if self.step >= FINAL_STEP {
            return Err(CoreError::InvalidTransition(format!(
                "Candidate is already at the final stage '{}'",
                self.stage()
            )));
        }
        let step = self.step + 1;
        Ok(Self {
            status: Self::status_for_step(step),
            step,
        })
    }

    /// Mark rejected, keeping the stage reached.
    pub fn reject(self) -> Self {
        Self {
            status: CandidateStatus::Rejected,
            step: self.step,
        }
    }
}
