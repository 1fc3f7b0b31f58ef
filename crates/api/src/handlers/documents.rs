//! Handlers for the `/documents` resource (multipart uploads).

use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::Json;
use hrm_core::documents::validate_upload;
use hrm_core::error::CoreError;
use hrm_core::types::DbId;
use hrm_db::models::document::{CreateDocument, Document};
use hrm_db::repositories::DocumentRepo;

use crate::error::{AppError, AppResult};
use crate::extract::Path;
use crate::middleware::rbac::{RequireEmployee, RequireHr};
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Document",
        id,
    })
}

/// POST /api/v1/documents
///
/// Multipart form with a `file` part (PDF, JPEG or PNG) and an optional
/// `title` part. The title defaults to the uploaded file name.
pub async fn upload(
    State(state): State<AppState>,
    RequireEmployee(user): RequireEmployee,
    mut multipart: Multipart,
) -> AppResult<(StatusCode, Json<Document>)> {
    let mut file_data: Option<(String, Vec<u8>)> = None;
    let mut title: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        let name = field.name().unwrap_or("").to_string();
        match name.as_str() {
            "file" => {
                let file_name = field.file_name().unwrap_or("upload").to_string();
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?;
                file_data = Some((file_name, data.to_vec()));
            }
            "title" => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?;
                title = Some(text.trim().to_string()).filter(|t| !t.is_empty());
            }
            _ => {}
        }
    }

    let (file_name, data) =
        file_data.ok_or_else(|| AppError::BadRequest("Missing required 'file' field".into()))?;
    let kind = validate_upload(&file_name, &data, state.config.storage.max_upload_bytes)?;

    let stored = state.storage.store(kind, &data).await?;
    let input = CreateDocument {
        user_id: user.user_id,
        title: title.unwrap_or(file_name),
        file_name: stored.file_name.clone(),
        content_type: kind.content_type().to_string(),
        size_bytes: data.len() as i64,
        url: stored.url,
    };

    let document = match DocumentRepo::create(&state.pool, &input).await {
        Ok(document) => document,
        Err(e) => {
            state.storage.remove(&stored.file_name).await?;
            return Err(e.into());
        }
    };

    tracing::info!(
        document_id = document.id,
        user_id = user.user_id,
        content_type = %document.content_type,
        size_bytes = document.size_bytes,
        "Document uploaded"
    );
    Ok((StatusCode::CREATED, Json(document)))
}

/// GET /api/v1/documents/mine
pub async fn list_mine(
    State(state): State<AppState>,
    RequireEmployee(user): RequireEmployee,
) -> AppResult<Json<Vec<Document>>> {
    Ok(Json(DocumentRepo::list_by_user(&state.pool, user.user_id).await?))
}

/// GET /api/v1/documents/user/{user_id}
pub async fn list_by_user(
    State(state): State<AppState>,
    RequireHr(_hr): RequireHr,
    Path(user_id): Path<DbId>,
) -> AppResult<Json<Vec<Document>>> {
    Ok(Json(DocumentRepo::list_by_user(&state.pool, user_id).await?))
}

/// GET /api/v1/documents/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    RequireEmployee(user): RequireEmployee,
    Path(id): Path<DbId>,
) -> AppResult<Json<Document>> {
    let document = DocumentRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    user.ensure_owner_or_hr(document.user_id)?;
    Ok(Json(document))
}

/// DELETE /api/v1/documents/{id}
///
/// Deletes the record and the stored file.
pub async fn delete(
    State(state): State<AppState>,
    RequireEmployee(user): RequireEmployee,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let document = DocumentRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    user.ensure_owner_or_hr(document.user_id)?;

    if !DocumentRepo::delete(&state.pool, id).await? {
        return Err(not_found(id));
    }
    state.storage.remove(&document.file_name).await?;
    Ok(StatusCode::NO_CONTENT)
}
