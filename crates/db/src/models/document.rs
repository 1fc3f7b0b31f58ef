//! Uploaded document model.

use hrm_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `documents` table. `url` points at the stored file.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Document {
    pub id: DbId,
    pub user_id: DbId,
    pub title: String,
    pub file_name: String,
    pub content_type: String,
    pub size_bytes: i64,
    pub url: String,
    pub created_at: Timestamp,
}

/// DTO for recording an upload once the file is stored.
#[derive(Debug, Clone)]
pub struct CreateDocument {
    pub user_id: DbId,
    pub title: String,
    pub file_name: String,
    pub content_type: String,
    pub size_bytes: i64,
    pub url: String,
}
