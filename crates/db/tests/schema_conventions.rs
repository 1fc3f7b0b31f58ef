use sqlx::PgPool;

/// Entity tables use BIGINT ids; seeded lookup tables use SMALLINT.
#[sqlx::test(migrations = "../../db/migrations")]
async fn primary_keys_are_bigint_or_smallint(pool: PgPool) {
    let rows: Vec<(String, String)> = sqlx::query_as(
        "SELECT table_name, data_type
         FROM information_schema.columns
         WHERE column_name = 'id'
           AND table_schema = 'public'
           AND table_name != '_sqlx_migrations'
         ORDER BY table_name",
    )
    .fetch_all(&pool)
    .await
    .unwrap();

    assert!(!rows.is_empty());
    for (table, data_type) in &rows {
        assert!(
            data_type == "bigint" || data_type == "smallint",
            "Table {table}.id should be bigint or smallint, got {data_type}"
        );
    }
}

/// Status and priority names must line up with the ids the code uses.
#[sqlx::test(migrations = "../../db/migrations")]
async fn lookup_tables_match_enum_ids(pool: PgPool) {
    use hrm_core::status::{CandidateStatus, Priority, TaskStatus};

    let candidate: Vec<(i16, String)> =
        sqlx::query_as("SELECT id, name FROM candidate_statuses ORDER BY id")
            .fetch_all(&pool)
            .await
            .unwrap();
    for (id, name) in &candidate {
        assert_eq!(CandidateStatus::from_id(*id).unwrap().as_str(), name.as_str());
    }
    assert_eq!(candidate.len(), CandidateStatus::ALL.len());

    let task: Vec<(i16, String)> = sqlx::query_as("SELECT id, name FROM task_statuses ORDER BY id")
        .fetch_all(&pool)
        .await
        .unwrap();
    for (id, name) in &task {
        assert_eq!(TaskStatus::from_id(*id).unwrap().as_str(), name.as_str());
    }
    assert_eq!(task.len(), TaskStatus::ALL.len());

    let priorities: Vec<(i16, String)> = sqlx::query_as("SELECT id, name FROM priorities ORDER BY id")
        .fetch_all(&pool)
        .await
        .unwrap();
    for (id, name) in &priorities {
        assert_eq!(Priority::from_id(*id).unwrap().as_str(), name.as_str());
    }
    assert_eq!(priorities.len(), Priority::ALL.len());
}
