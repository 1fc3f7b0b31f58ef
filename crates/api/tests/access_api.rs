//! Role gate behaviour at the HTTP boundary, plus `/users` management.

mod common;

use axum::http::{Method, StatusCode};
use common::{body_json, create_user_with_role, delete, get, get_anonymous, post_json, put_json, send};
use hrm_core::roles::Role;
use serde_json::json;
use sqlx::PgPool;

#[sqlx::test(migrations = "../../db/migrations")]
async fn missing_token_is_401(pool: PgPool) {
    let response = get_anonymous(common::build_test_app(pool), "/api/v1/jobs").await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(response).await["code"], "UNAUTHORIZED");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn malformed_token_is_401(pool: PgPool) {
    let response = get(common::build_test_app(pool), "/api/v1/jobs", "not-a-jwt").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn guest_is_forbidden_from_employee_and_hr_routes(pool: PgPool) {
    let (_, guest) = create_user_with_role(&pool, "guest", Role::Guest).await;

    let employee_route = get(common::build_test_app(pool.clone()), "/api/v1/tasks", &guest).await;
    assert_eq!(employee_route.status(), StatusCode::FORBIDDEN);
    assert_eq!(body_json(employee_route).await["code"], "FORBIDDEN");

    let hr_route = get(common::build_test_app(pool.clone()), "/api/v1/users", &guest).await;
    assert_eq!(hr_route.status(), StatusCode::FORBIDDEN);

    let guest_route = get(common::build_test_app(pool), "/api/v1/jobs", &guest).await;
    assert_eq!(guest_route.status(), StatusCode::OK);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn employee_passes_employee_routes_but_not_hr_routes(pool: PgPool) {
    let (_, employee) = create_user_with_role(&pool, "employee", Role::Employee).await;

    let tasks = get(common::build_test_app(pool.clone()), "/api/v1/tasks", &employee).await;
    assert_eq!(tasks.status(), StatusCode::OK);

    let jobs = get(common::build_test_app(pool.clone()), "/api/v1/jobs", &employee).await;
    assert_eq!(jobs.status(), StatusCode::OK);

    let users = get(common::build_test_app(pool), "/api/v1/users", &employee).await;
    assert_eq!(users.status(), StatusCode::FORBIDDEN);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn hr_passes_every_route_class(pool: PgPool) {
    let (_, hr) = create_user_with_role(&pool, "hr", Role::Hr).await;

    for uri in [
        "/api/v1/jobs",
        "/api/v1/tasks",
        "/api/v1/onboarding-tasks",
        "/api/v1/users",
        "/api/v1/candidates",
        "/api/v1/dashboard/summary",
    ] {
        let response = get(common::build_test_app(pool.clone()), uri, &hr).await;
        assert_eq!(response.status(), StatusCode::OK, "hr should reach {uri}");
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn hr_creates_and_lists_users_by_role(pool: PgPool) {
    let (_, hr) = create_user_with_role(&pool, "hr", Role::Hr).await;

    let response = post_json(
        common::build_test_app(pool.clone()),
        "/api/v1/users",
        &hr,
        json!({
            "name": "New Starter",
            "email": "starter@example.com",
            "password": "welcome-aboard",
            "role": "employee",
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(body_json(response).await["role"], "employee");

    let response = get(
        common::build_test_app(pool),
        "/api/v1/users?role=employee",
        &hr,
    )
    .await;
    let json = body_json(response).await;
    let users = json.as_array().unwrap();
    assert_eq!(users.len(), 1);
    assert_eq!(users[0]["email"], "starter@example.com");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn emails_differing_only_in_case_conflict(pool: PgPool) {
    let (_, hr) = create_user_with_role(&pool, "hr", Role::Hr).await;
    create_user_with_role(&pool, "alice", Role::Guest).await;

    let response = post_json(
        common::build_test_app(pool.clone()),
        "/api/v1/users",
        &hr,
        json!({
            "name": "Alice Again",
            "email": "Alice@Example.com",
            "password": "welcome-aboard",
            "role": "employee",
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
    assert_eq!(body_json(response).await["code"], "CONFLICT");

    let (bob_id, _) = create_user_with_role(&pool, "bob", Role::Employee).await;
    let response = put_json(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/users/{bob_id}"),
        &hr,
        json!({ "email": "ALICE@example.com" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let (count,): (i64,) =
        sqlx::query_as("SELECT COUNT(*) FROM users WHERE lower(email) = 'alice@example.com'")
            .fetch_one(&pool)
            .await
            .unwrap();
    assert_eq!(count, 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn unknown_role_in_body_is_rejected(pool: PgPool) {
    let (_, hr) = create_user_with_role(&pool, "hr", Role::Hr).await;

    let response = post_json(
        common::build_test_app(pool),
        "/api/v1/users",
        &hr,
        json!({
            "name": "Bad Role",
            "email": "bad@example.com",
            "password": "welcome-aboard",
            "role": "admin",
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn promoting_a_guest_grants_employee_routes(pool: PgPool) {
    let (_, hr) = create_user_with_role(&pool, "hr", Role::Hr).await;
    let (guest_id, guest) = create_user_with_role(&pool, "applicant", Role::Guest).await;

    let response = put_json(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/users/{guest_id}"),
        &hr,
        json!({ "role": "employee" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["role"], "employee");

    // The token issued before the promotion picks up the new role.
    let tasks = get(common::build_test_app(pool), "/api/v1/tasks", &guest).await;
    assert_eq!(tasks.status(), StatusCode::OK);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn hr_cannot_demote_or_deactivate_self(pool: PgPool) {
    let (hr_id, hr) = create_user_with_role(&pool, "hr", Role::Hr).await;

    let demote = put_json(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/users/{hr_id}"),
        &hr,
        json!({ "role": "guest" }),
    )
    .await;
    assert_eq!(demote.status(), StatusCode::CONFLICT);

    let deactivate = delete(
        common::build_test_app(pool),
        &format!("/api/v1/users/{hr_id}"),
        &hr,
    )
    .await;
    assert_eq!(deactivate.status(), StatusCode::CONFLICT);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn deactivate_user(pool: PgPool) {
    let (_, hr) = create_user_with_role(&pool, "hr", Role::Hr).await;
    let (employee_id, _) = create_user_with_role(&pool, "leaver", Role::Employee).await;

    let response = send(
        common::build_test_app(pool.clone()),
        Method::DELETE,
        &format!("/api/v1/users/{employee_id}"),
        Some(&hr),
        None,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = get(
        common::build_test_app(pool),
        &format!("/api/v1/users/{employee_id}"),
        &hr,
    )
    .await;
    assert_eq!(body_json(response).await["is_active"], false);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn deactivation_applies_to_issued_tokens(pool: PgPool) {
    let (_, hr) = create_user_with_role(&pool, "hr", Role::Hr).await;
    let (employee_id, employee) = create_user_with_role(&pool, "leaver", Role::Employee).await;

    let before = get(common::build_test_app(pool.clone()), "/api/v1/tasks", &employee).await;
    assert_eq!(before.status(), StatusCode::OK);

    let response = delete(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/users/{employee_id}"),
        &hr,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let after = get(common::build_test_app(pool.clone()), "/api/v1/tasks", &employee).await;
    assert_eq!(after.status(), StatusCode::FORBIDDEN);

    let (open,): (i64,) = sqlx::query_as(
        "SELECT COUNT(*) FROM sessions WHERE user_id = $1 AND revoked_at IS NULL",
    )
    .bind(employee_id)
    .fetch_one(&pool)
    .await
    .unwrap();
    assert_eq!(open, 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn demotion_applies_to_issued_tokens(pool: PgPool) {
    let (_, hr) = create_user_with_role(&pool, "hr", Role::Hr).await;
    let (other_id, other_hr) = create_user_with_role(&pool, "other-hr", Role::Hr).await;

    let response = put_json(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/users/{other_id}"),
        &hr,
        json!({ "role": "employee" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let users = get(common::build_test_app(pool.clone()), "/api/v1/users", &other_hr).await;
    assert_eq!(users.status(), StatusCode::FORBIDDEN);

    let tasks = get(common::build_test_app(pool), "/api/v1/tasks", &other_hr).await;
    assert_eq!(tasks.status(), StatusCode::OK);
}
