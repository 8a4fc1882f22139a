//! Integration tests for the schema-migration contract on `restaurants.name`:
//! declared column shape after the forward step, exact invertibility of the
//! down step, ledger-backed at-most-once application, and the boundary
//! behaviour for pre-existing row values at the new length limit.

use sqlx::PgPool;

const CREATE_RESTAURANTS: &str =
    include_str!("../../../db/migrations/0001_create_restaurants.up.sql");
const NAME_LENGTH_UP: &str =
    include_str!("../../../db/migrations/0002_restaurant_name_length.up.sql");
const NAME_LENGTH_DOWN: &str =
    include_str!("../../../db/migrations/0002_restaurant_name_length.down.sql");

/// Fetch the declared definition of `restaurants.name`:
/// `(data_type, character_maximum_length, is_nullable)`.
async fn name_column(pool: &PgPool) -> (String, Option<i32>, String) {
    sqlx::query_as(
        "SELECT data_type, character_maximum_length, is_nullable
         FROM information_schema.columns
         WHERE table_schema = 'public'
           AND table_name = 'restaurants'
           AND column_name = 'name'",
    )
    .fetch_one(pool)
    .await
    .expect("restaurants.name should exist")
}

// ---------------------------------------------------------------------------
// Forward step: declared column shape
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn forward_migration_bounds_name_at_100_nullable(pool: PgPool) {
    let (data_type, max_len, is_nullable) = name_column(&pool).await;

    assert_eq!(data_type, "character varying");
    assert_eq!(max_len, Some(100));
    assert_eq!(is_nullable, "YES");
}

// ---------------------------------------------------------------------------
// Round-trip law: the down step restores the unconstrained definition
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn down_step_restores_unconstrained_text(pool: PgPool) {
    sqlx::raw_sql(NAME_LENGTH_DOWN)
        .execute(&pool)
        .await
        .expect("down step should apply cleanly");

    let (data_type, max_len, is_nullable) = name_column(&pool).await;

    assert_eq!(data_type, "text");
    assert_eq!(max_len, None, "text must carry no declared maximum");
    assert_eq!(is_nullable, "YES");
}

// ---------------------------------------------------------------------------
// Ledger: at-most-once application
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn ledger_prevents_reapplication(pool: PgPool) {
    let (applied,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM _sqlx_migrations")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(applied, 2, "both migrations should be in the ledger");

    // A second migrator run sees the ledger rows and applies nothing.
    odetofood_db::MIGRATOR.run(&pool).await.unwrap();

    let (after,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM _sqlx_migrations")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(after, applied);

    let (data_type, max_len, _) = name_column(&pool).await;
    assert_eq!(data_type, "character varying");
    assert_eq!(max_len, Some(100));
}

// ---------------------------------------------------------------------------
// Boundary: pre-existing row values at the new limit
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = false)]
async fn forward_migration_accepts_100_char_values(pool: PgPool) {
    sqlx::raw_sql(CREATE_RESTAURANTS).execute(&pool).await.unwrap();

    let name = "x".repeat(100);
    sqlx::query("INSERT INTO restaurants (name) VALUES ($1)")
        .bind(&name)
        .execute(&pool)
        .await
        .unwrap();

    sqlx::raw_sql(NAME_LENGTH_UP)
        .execute(&pool)
        .await
        .expect("100-char values fit the new bound");

    let (data_type, max_len, _) = name_column(&pool).await;
    assert_eq!(data_type, "character varying");
    assert_eq!(max_len, Some(100));

    // The row value is preserved untouched.
    let (stored,): (String,) = sqlx::query_as("SELECT name FROM restaurants")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(stored, name);
}

#[sqlx::test(migrations = false)]
async fn forward_migration_rejects_101_char_values_atomically(pool: PgPool) {
    sqlx::raw_sql(CREATE_RESTAURANTS).execute(&pool).await.unwrap();

    let name = "x".repeat(101);
    sqlx::query("INSERT INTO restaurants (name) VALUES ($1)")
        .bind(&name)
        .execute(&pool)
        .await
        .unwrap();

    let result = sqlx::raw_sql(NAME_LENGTH_UP).execute(&pool).await;
    assert!(result.is_err(), "a 101-char value must reject the ALTER");

    // The failed DDL rolls back: the column definition is unchanged and
    // the over-long value is still there.
    let (data_type, max_len, _) = name_column(&pool).await;
    assert_eq!(data_type, "text");
    assert_eq!(max_len, None);

    let (stored,): (String,) = sqlx::query_as("SELECT name FROM restaurants")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(stored, name);
}
