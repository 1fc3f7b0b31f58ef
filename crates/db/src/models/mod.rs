//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO (all `Option` fields) for patches
//!
//! Status and step columns are absent from the DTOs: they only change through
//! the lifecycle transitions.

pub mod attendance;
pub mod candidate;
pub mod dashboard;
pub mod document;
pub mod hr_project;
pub mod job;
pub mod session;
pub mod task;
pub mod user;
