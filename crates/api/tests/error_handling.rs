//! Tests for `AppError` -> HTTP response mapping.
//!
//! Most call `IntoResponse` directly and need no database; the extractor
//! rejection tests go through the router.

mod common;

use axum::http::header::CONTENT_TYPE;
use axum::http::{Method, StatusCode};
use axum::response::IntoResponse;
use common::{body_json, create_user_with_role, get, send};
use hrm_api::error::AppError;
use hrm_core::error::CoreError;
use hrm_core::roles::Role;
use http_body_util::BodyExt;
use serde_json::json;
use sqlx::PgPool;

async fn error_to_response(err: AppError) -> (StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn not_found_error_returns_404() {
    let (status, json) = error_to_response(AppError::Core(CoreError::NotFound {
        entity: "Candidate",
        id: 42,
    }))
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["error"], "Candidate with id 42 not found");
}

#[tokio::test]
async fn invalid_transition_returns_409() {
    let (status, json) = error_to_response(AppError::Core(CoreError::InvalidTransition(
        "Cannot advance a rejected record".into(),
    )))
    .await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json["code"], "INVALID_TRANSITION");
    assert_eq!(json["error"], "Cannot advance a rejected record");
}

#[tokio::test]
async fn validation_error_returns_400() {
    let (status, json) =
        error_to_response(AppError::Core(CoreError::Validation("days: too large".into()))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn unauthorized_and_forbidden_are_distinct() {
    let (status, json) =
        error_to_response(AppError::Core(CoreError::Unauthorized("no token".into()))).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["code"], "UNAUTHORIZED");

    let (status, json) =
        error_to_response(AppError::Core(CoreError::Forbidden("hr only".into()))).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(json["code"], "FORBIDDEN");
}

#[tokio::test]
async fn conflict_error_returns_409() {
    let (status, json) =
        error_to_response(AppError::Core(CoreError::Conflict("duplicate".into()))).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json["code"], "CONFLICT");
}

#[tokio::test]
async fn internal_errors_are_sanitized() {
    let (status, json) =
        error_to_response(AppError::InternalError("disk on fire at /var/x".into())).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "INTERNAL_ERROR");
    assert_eq!(json["error"], "An internal error occurred");

    let (status, _) =
        error_to_response(AppError::Core(CoreError::Internal("bad status id 9".into()))).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn row_not_found_returns_404() {
    let (status, json) = error_to_response(AppError::Database(sqlx::Error::RowNotFound)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "NOT_FOUND");
}

// ---------------------------------------------------------------------------
// Extractor rejections
// ---------------------------------------------------------------------------

async fn assert_json_bad_request(response: axum::response::Response) {
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        response.headers().get(CONTENT_TYPE).unwrap(),
        "application/json"
    );
    let json = body_json(response).await;
    assert_eq!(json["code"], "BAD_REQUEST");
    assert!(json["error"].is_string());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn non_numeric_path_id_is_a_json_400(pool: PgPool) {
    let (_, employee) = create_user_with_role(&pool, "employee", Role::Employee).await;

    let response = get(common::build_test_app(pool), "/api/v1/tasks/abc", &employee).await;
    assert_json_bad_request(response).await;
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn malformed_query_is_a_json_400(pool: PgPool) {
    let (_, hr) = create_user_with_role(&pool, "hr", Role::Hr).await;

    let response = get(
        common::build_test_app(pool.clone()),
        "/api/v1/tasks/upcoming?days=abc",
        &hr,
    )
    .await;
    assert_json_bad_request(response).await;

    let response = get(
        common::build_test_app(pool),
        "/api/v1/users?role=admin",
        &hr,
    )
    .await;
    assert_json_bad_request(response).await;
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn malformed_task_sync_body_is_a_json_400(pool: PgPool) {
    let (_, hr) = create_user_with_role(&pool, "hr", Role::Hr).await;

    let response = send(
        common::build_test_app(pool),
        Method::PUT,
        "/api/v1/hr-projects/1/tasks",
        Some(&hr),
        Some(json!({ "task_ids": "all" })),
    )
    .await;
    assert_json_bad_request(response).await;
}
