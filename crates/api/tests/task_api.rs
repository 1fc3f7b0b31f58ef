//! Tasks, onboarding tasks and HR project tasks share one router; these
//! tests drive all three through it.

mod common;

use axum::http::StatusCode;
use chrono::{Duration, Utc};
use common::{body_json, create_user_with_role, delete, get, post, post_json, put_json};
use hrm_core::roles::Role;
use hrm_core::status::{Priority, TaskStatus};
use serde_json::json;
use sqlx::PgPool;

async fn create_task(
    pool: &PgPool,
    base: &str,
    hr: &str,
    body: serde_json::Value,
) -> serde_json::Value {
    let response = post_json(common::build_test_app(pool.clone()), base, hr, body).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await
}

fn ids(json: &serde_json::Value) -> Vec<i64> {
    json.as_array()
        .unwrap()
        .iter()
        .map(|t| t["id"].as_i64().unwrap())
        .collect()
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_defaults_to_pending_medium(pool: PgPool) {
    let (_, hr) = create_user_with_role(&pool, "hr", Role::Hr).await;
    let (employee_id, _) = create_user_with_role(&pool, "employee", Role::Employee).await;

    let task = create_task(
        &pool,
        "/api/v1/tasks",
        &hr,
        json!({ "user_id": employee_id, "title": "Write onboarding doc" }),
    )
    .await;

    assert_eq!(task["status"], TaskStatus::Pending.as_str());
    assert_eq!(task["priority"], Priority::Medium.as_str());
    assert_eq!(task["user_id"], employee_id);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn task_for_unknown_user_is_rejected(pool: PgPool) {
    let (_, hr) = create_user_with_role(&pool, "hr", Role::Hr).await;

    let response = post_json(
        common::build_test_app(pool),
        "/api/v1/tasks",
        &hr,
        json!({ "user_id": 999_999, "title": "Orphan" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn employees_read_but_only_hr_writes(pool: PgPool) {
    let (employee_id, employee) = create_user_with_role(&pool, "employee", Role::Employee).await;

    let response = post_json(
        common::build_test_app(pool.clone()),
        "/api/v1/onboarding-tasks",
        &employee,
        json!({ "user_id": employee_id, "title": "Self-assigned" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let response = get(
        common::build_test_app(pool),
        "/api/v1/onboarding-tasks",
        &employee,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn advance_runs_pending_in_progress_done_then_fails(pool: PgPool) {
    let (_, hr) = create_user_with_role(&pool, "hr", Role::Hr).await;
    let (employee_id, employee) = create_user_with_role(&pool, "employee", Role::Employee).await;
    let id = create_task(
        &pool,
        "/api/v1/onboarding-tasks",
        &hr,
        json!({ "user_id": employee_id, "title": "Sign contract" }),
    )
    .await["id"]
        .as_i64()
        .unwrap();

    for expected in [TaskStatus::InProgress, TaskStatus::Done] {
        let response = post(
            common::build_test_app(pool.clone()),
            &format!("/api/v1/onboarding-tasks/next/{id}"),
            &employee,
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["status"], expected.as_str());
    }

    let response = post(
        common::build_test_app(pool),
        &format!("/api/v1/onboarding-tasks/next/{id}"),
        &employee,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
    assert_eq!(body_json(response).await["code"], "INVALID_TRANSITION");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn only_the_assignee_or_hr_may_advance(pool: PgPool) {
    let (_, hr) = create_user_with_role(&pool, "hr", Role::Hr).await;
    let (owner_id, _) = create_user_with_role(&pool, "owner", Role::Employee).await;
    let (_, colleague) = create_user_with_role(&pool, "colleague", Role::Employee).await;
    let id = create_task(
        &pool,
        "/api/v1/tasks",
        &hr,
        json!({ "user_id": owner_id, "title": "Quarterly review" }),
    )
    .await["id"]
        .as_i64()
        .unwrap();

    let response = post(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/tasks/next/{id}"),
        &colleague,
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let response = post(
        common::build_test_app(pool),
        &format!("/api/v1/tasks/next/{id}"),
        &hr,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn reject_is_idempotent_and_terminal(pool: PgPool) {
    let (_, hr) = create_user_with_role(&pool, "hr", Role::Hr).await;
    let (employee_id, employee) = create_user_with_role(&pool, "employee", Role::Employee).await;
    let id = create_task(
        &pool,
        "/api/v1/hr-project-tasks",
        &hr,
        json!({ "user_id": employee_id, "title": "Plan offsite" }),
    )
    .await["id"]
        .as_i64()
        .unwrap();

    let forbidden = post(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/hr-project-tasks/reject/{id}"),
        &employee,
    )
    .await;
    assert_eq!(forbidden.status(), StatusCode::FORBIDDEN);

    for _ in 0..2 {
        let response = post(
            common::build_test_app(pool.clone()),
            &format!("/api/v1/hr-project-tasks/reject/{id}"),
            &hr,
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["status"], TaskStatus::Rejected.as_str());
    }

    let response = post(
        common::build_test_app(pool),
        &format!("/api/v1/hr-project-tasks/next/{id}"),
        &employee,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn upcoming_window_includes_and_excludes_by_days(pool: PgPool) {
    let (_, hr) = create_user_with_role(&pool, "hr", Role::Hr).await;
    let (employee_id, employee) = create_user_with_role(&pool, "employee", Role::Employee).await;
    let due_in_two_days = Utc::now() + Duration::days(2);
    let id = create_task(
        &pool,
        "/api/v1/tasks",
        &hr,
        json!({
            "user_id": employee_id,
            "title": "Payroll cutoff",
            "priority": "high",
            "due_at": due_in_two_days,
        }),
    )
    .await["id"]
        .as_i64()
        .unwrap();

    let within_three = get(
        common::build_test_app(pool.clone()),
        "/api/v1/tasks/upcoming?days=3",
        &employee,
    )
    .await;
    assert_eq!(within_three.status(), StatusCode::OK);
    assert_eq!(ids(&body_json(within_three).await), vec![id]);

    let within_one = get(
        common::build_test_app(pool.clone()),
        "/api/v1/tasks/upcoming?days=1",
        &employee,
    )
    .await;
    assert!(ids(&body_json(within_one).await).is_empty());

    let high = get(
        common::build_test_app(pool),
        "/api/v1/tasks/priority/high",
        &employee,
    )
    .await;
    assert_eq!(ids(&body_json(high).await), vec![id]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn negative_upcoming_days_is_a_validation_error(pool: PgPool) {
    let (_, employee) = create_user_with_role(&pool, "employee", Role::Employee).await;

    let response = get(
        common::build_test_app(pool),
        "/api/v1/tasks/upcoming?days=-1",
        &employee,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn filters_by_status_user_and_mine(pool: PgPool) {
    let (_, hr) = create_user_with_role(&pool, "hr", Role::Hr).await;
    let (alice_id, alice) = create_user_with_role(&pool, "alice", Role::Employee).await;
    let (bob_id, _) = create_user_with_role(&pool, "bob", Role::Employee).await;
    let alice_task = create_task(
        &pool,
        "/api/v1/tasks",
        &hr,
        json!({ "user_id": alice_id, "title": "A" }),
    )
    .await["id"]
        .as_i64()
        .unwrap();
    let bob_task = create_task(
        &pool,
        "/api/v1/tasks",
        &hr,
        json!({ "user_id": bob_id, "title": "B" }),
    )
    .await["id"]
        .as_i64()
        .unwrap();

    post(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/tasks/next/{bob_task}"),
        &hr,
    )
    .await;

    let pending = get(
        common::build_test_app(pool.clone()),
        "/api/v1/tasks/status/pending",
        &alice,
    )
    .await;
    assert_eq!(ids(&body_json(pending).await), vec![alice_task]);

    let in_progress = get(
        common::build_test_app(pool.clone()),
        "/api/v1/tasks/status/in_progress",
        &alice,
    )
    .await;
    assert_eq!(ids(&body_json(in_progress).await), vec![bob_task]);

    let by_user = get(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/tasks/user/{bob_id}"),
        &alice,
    )
    .await;
    assert_eq!(ids(&body_json(by_user).await), vec![bob_task]);

    let mine = get(common::build_test_app(pool), "/api/v1/tasks/mine", &alice).await;
    assert_eq!(ids(&body_json(mine).await), vec![alice_task]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn tables_are_independent(pool: PgPool) {
    let (_, hr) = create_user_with_role(&pool, "hr", Role::Hr).await;
    let (employee_id, _) = create_user_with_role(&pool, "employee", Role::Employee).await;
    let id = create_task(
        &pool,
        "/api/v1/onboarding-tasks",
        &hr,
        json!({ "user_id": employee_id, "title": "Laptop setup" }),
    )
    .await["id"]
        .as_i64()
        .unwrap();

    let general = get(common::build_test_app(pool.clone()), "/api/v1/tasks", &hr).await;
    assert!(ids(&body_json(general).await).is_empty());

    let missing = get(
        common::build_test_app(pool),
        &format!("/api/v1/tasks/{id}"),
        &hr,
    )
    .await;
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        body_json(missing).await["error"],
        format!("Task with id {id} not found")
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_and_delete(pool: PgPool) {
    let (_, hr) = create_user_with_role(&pool, "hr", Role::Hr).await;
    let (employee_id, _) = create_user_with_role(&pool, "employee", Role::Employee).await;
    let id = create_task(
        &pool,
        "/api/v1/tasks",
        &hr,
        json!({ "user_id": employee_id, "title": "Draft" }),
    )
    .await["id"]
        .as_i64()
        .unwrap();

    let response = put_json(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/tasks/{id}"),
        &hr,
        json!({ "title": "Final", "priority": "low" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["title"], "Final");
    assert_eq!(json["priority"], Priority::Low.as_str());

    let response = delete(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/tasks/{id}"),
        &hr,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = delete(
        common::build_test_app(pool),
        &format!("/api/v1/tasks/{id}"),
        &hr,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
