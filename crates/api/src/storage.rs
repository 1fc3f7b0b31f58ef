//! Local-disk storage for uploaded documents.
//!
//! Files are written under [`StorageConfig::dir`] with a random name and
//! served back from `/storage/{file_name}`; the database only keeps the URL.

use std::io::ErrorKind;
use std::path::PathBuf;

use hrm_core::documents::DocumentKind;
use uuid::Uuid;

use crate::config::StorageConfig;
use crate::error::AppError;

/// URL path the storage directory is mounted at.
pub const STORAGE_ROUTE: &str = "/storage";

/// A file that has been written to storage.
#[derive(Debug, Clone)]
pub struct StoredFile {
    pub file_name: String,
    pub url: String,
}

/// Writes and removes uploaded files.
#[derive(Debug)]
pub struct DocumentStorage {
    root: PathBuf,
    public_base_url: String,
}

impl DocumentStorage {
    pub fn new(config: &StorageConfig) -> Self {
        Self {
            root: config.dir.clone(),
            public_base_url: config.public_base_url.clone(),
        }
    }

    pub fn root(&self) -> &PathBuf {
        &self.root
    }

    /// Public URL for a stored file name.
    pub fn url_for(&self, file_name: &str) -> String {
        format!("{}{STORAGE_ROUTE}/{file_name}", self.public_base_url)
    }

    /// Write `data` under a fresh random name with the kind's extension.
    pub async fn store(&self, kind: DocumentKind, data: &[u8]) -> Result<StoredFile, AppError> {
        tokio::fs::create_dir_all(&self.root)
            .await
            .map_err(|e| AppError::InternalError(format!("Cannot create storage dir: {e}")))?;

        let file_name = format!("{}.{}", Uuid::new_v4(), kind.extension());
        tokio::fs::write(self.root.join(&file_name), data)
            .await
            .map_err(|e| AppError::InternalError(format!("Cannot write document: {e}")))?;

        Ok(StoredFile {
            url: self.url_for(&file_name),
            file_name,
        })
    }

    /// Remove a stored file. A file that is already gone is not an error.
    pub async fn remove(&self, file_name: &str) -> Result<(), AppError> {
        match tokio::fs::remove_file(self.root.join(file_name)).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(AppError::InternalError(format!("Cannot remove document: {e}"))),
        }
    }
}
