//! Rules for uploaded documents.

use crate::error::CoreError;

/// Default upload size limit (10 MiB).
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// A supported upload format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    Jpeg,
    Png,
}

impl DocumentKind {
    pub fn content_type(self) -> &'static str {
        match self {
            DocumentKind::Pdf => "application/pdf",
            DocumentKind::Jpeg => "image/jpeg",
            DocumentKind::Png => "image/png",
        }
    }

    /// Extension used for the stored file name.
    pub fn extension(self) -> &'static str {
        match self {
            DocumentKind::Pdf => "pdf",
            DocumentKind::Jpeg => "jpg",
            DocumentKind::Png => "png",
        }
    }

    /// Resolve the kind from an uploaded file name's extension.
    pub fn from_file_name(file_name: &str) -> Result<Self, CoreError> {
        let ext = file_name
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase())
            .unwrap_or_default();
        match ext.as_str() {
            "pdf" => Ok(DocumentKind::Pdf),
            "jpg" | "jpeg" => Ok(DocumentKind::Jpeg),
            "png" => Ok(DocumentKind::Png),
            _ => Err(CoreError::Validation(format!(
                "Unsupported file type '.{ext}'. Supported: .pdf, .jpg, .jpeg, .png"
            ))),
        }
    }

    /// Check the leading bytes match the claimed kind.
    pub fn matches_signature(self, data: &[u8]) -> bool {
        match self {
            DocumentKind::Pdf => data.starts_with(b"%PDF"),
            DocumentKind::Jpeg => data.starts_with(&[0xFF, 0xD8, 0xFF]),
            DocumentKind::Png => data.starts_with(&[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A]),
        }
    }
}

/// Validate an upload and return its kind.
pub fn validate_upload(file_name: &str, data: &[u8], max_bytes: usize) -> Result<DocumentKind, CoreError> {
    if data.is_empty() {
        return Err(CoreError::Validation("Uploaded file is empty".into()));
    }
    if data.len() > max_bytes {
        return Err(CoreError::Validation(format!(
            "Uploaded file exceeds the {max_bytes} byte limit"
        )));
    }
    let kind = DocumentKind::from_file_name(file_name)?;
    if !kind.matches_signature(data) {
        return Err(CoreError::Validation(format!(
            "File contents do not match a {} document",
            kind.content_type()
        )));
    }
    Ok(kind)
}
