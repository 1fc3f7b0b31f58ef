//! HR management API server library.
//!
//! Exposes config, state, error handling and routes so the binary and the
//! integration tests share them.

pub mod auth;
pub mod config;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod query;
pub mod router;
pub mod routes;
pub mod state;
pub mod storage;
