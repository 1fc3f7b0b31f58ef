//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod attendance_repo;
pub mod candidate_repo;
pub mod dashboard_repo;
pub mod document_repo;
pub mod hr_project_repo;
pub mod job_repo;
pub mod session_repo;
pub mod task_repo;
pub mod user_repo;

pub use attendance_repo::AttendanceRepo;
pub use candidate_repo::CandidateRepo;
pub use dashboard_repo::DashboardRepo;
pub use document_repo::DocumentRepo;
pub use hr_project_repo::HrProjectRepo;
pub use job_repo::JobRepo;
pub use session_repo::SessionRepo;
pub use task_repo::TaskRepo;
pub use user_repo::UserRepo;
