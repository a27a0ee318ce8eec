use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

use crate::MIGRATOR;

/// Connects to `DATABASE_URL` and migrates, or returns `None` when unset.
pub(crate) async fn test_pool() -> Option<PgPool> {
    let Ok(database_url) = std::env::var("DATABASE_URL") else {
        return None;
    };

    let pool = match PgPoolOptions::new()
        .max_connections(2)
        .connect(database_url.as_str())
        .await
    {
        Ok(pool) => pool,
        Err(error) => panic!("failed to connect to DATABASE_URL in test: {error}"),
    };

    if let Err(error) = MIGRATOR.run(&pool).await {
        panic!("failed to run migrations for postgres tests: {error}");
    }

    Some(pool)
}

/// Returns an identifier unique to this test run.
pub(crate) fn unique_id(prefix: &str) -> String {
    format!("{prefix}-{}", uuid::Uuid::new_v4())
}

pub(crate) async fn insert_user(pool: &PgPool, user_id: &str) {
    let insert = sqlx::query("INSERT INTO users (id, email) VALUES ($1, $2)")
        .bind(user_id)
        .bind(format!("{user_id}@example.com"))
        .execute(pool)
        .await;
    assert!(insert.is_ok());
}

pub(crate) async fn insert_role(pool: &PgPool, role_id: &str) {
    let insert = sqlx::query("INSERT INTO roles (id, name) VALUES ($1, $1)")
        .bind(role_id)
        .execute(pool)
        .await;
    assert!(insert.is_ok());
}
