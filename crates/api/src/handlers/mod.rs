pub mod attendance;
pub mod auth;
pub mod candidates;
pub mod dashboard;
pub mod documents;
pub mod hr_projects;
pub mod jobs;
pub mod tasks;
pub mod users;
