//! Domain logic for the HR management backend.
//!
//! Everything in this crate is free of I/O: the access gate, status
//! enumerations and their lifecycle transitions, due-date windows, and
//! input rules shared by the database and API layers.

pub mod access;
pub mod documents;
pub mod error;
pub mod lifecycle;
pub mod normalize;
pub mod roles;
pub mod schedule;
pub mod status;
pub mod types;
