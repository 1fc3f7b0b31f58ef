use std::sync::Arc;

use crate::config::ServerConfig;
use crate::storage::DocumentStorage;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: hrm_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Where uploaded documents are kept.
    pub storage: Arc<DocumentStorage>,
}

impl AppState {
    pub fn new(pool: hrm_db::DbPool, config: ServerConfig) -> Self {
        let storage = Arc::new(DocumentStorage::new(&config.storage));
        Self {
            pool,
            config: Arc::new(config),
            storage,
        }
    }
}
