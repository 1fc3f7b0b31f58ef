#![allow(dead_code)]

use std::path::PathBuf;

use axum::body::Body;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use hrm_api::auth::jwt::{generate_access_token, JwtConfig};
use hrm_api::config::{ServerConfig, StorageConfig};
use hrm_api::router::build_app_router;
use hrm_api::state::AppState;
use hrm_core::roles::Role;
use hrm_core::types::DbId;
use hrm_db::models::user::CreateUser;
use hrm_db::repositories::UserRepo;

pub const TEST_JWT_SECRET: &str = "test-secret-for-integration-tests";
pub const TEST_BASE_URL: &str = "http://localhost:3000";

/// A fresh storage directory per call so parallel tests never share files.
pub fn test_storage_dir() -> PathBuf {
    std::env::temp_dir().join(format!("hrm-test-storage-{}", uuid::Uuid::new_v4()))
}

/// Build a test `ServerConfig` with safe defaults and a small upload limit.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        jwt: JwtConfig {
            secret: TEST_JWT_SECRET.to_string(),
            access_token_expiry_mins: 15,
            refresh_token_expiry_days: 7,
        },
        storage: StorageConfig {
            dir: test_storage_dir(),
            public_base_url: TEST_BASE_URL.to_string(),
            max_upload_bytes: 64 * 1024,
        },
    }
}

/// Build the full application router, same middleware stack as `main.rs`.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState::new(pool, config.clone());
    build_app_router(state, &config)
}

/// Insert a user with the given role and return `(id, access_token)`.
pub async fn create_user_with_role(pool: &PgPool, name: &str, role: Role) -> (DbId, String) {
    let user = UserRepo::create(
        pool,
        &CreateUser {
            name: name.to_string(),
            email: format!("{name}@example.com"),
            password_hash: "not-a-real-hash".to_string(),
            role,
        },
    )
    .await
    .expect("create test user");
    let token = token_for(user.id, role);
    (user.id, token)
}

/// Mint an access token signed with the test secret.
pub fn token_for(user_id: DbId, role: Role) -> String {
    generate_access_token(user_id, role, &test_config().jwt).expect("sign test token")
}

/// Send a request with an optional bearer token and optional JSON body.
pub async fn send(
    app: Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<serde_json::Value>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(AUTHORIZATION, format!("Bearer {token}"));
    }
    let request = match body {
        Some(json) => builder
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(app, Method::GET, uri, Some(token), None).await
}

pub async fn get_anonymous(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None, None).await
}

pub async fn post_json(
    app: Router,
    uri: &str,
    token: &str,
    body: serde_json::Value,
) -> Response<Body> {
    send(app, Method::POST, uri, Some(token), Some(body)).await
}

/// POST with no body (transitions, clock-in/out, attach).
pub async fn post(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(app, Method::POST, uri, Some(token), None).await
}

pub async fn put_json(
    app: Router,
    uri: &str,
    token: &str,
    body: serde_json::Value,
) -> Response<Body> {
    send(app, Method::PUT, uri, Some(token), Some(body)).await
}

pub async fn delete(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, Some(token), None).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
