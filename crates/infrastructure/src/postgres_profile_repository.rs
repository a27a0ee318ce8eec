use async_trait::async_trait;
use sqlx::{FromRow, PgPool};

use gatehouse_application::{ProfileRepository, UserDirectory};
use gatehouse_core::AppResult;
use gatehouse_domain::{DirectoryUser, Profile, RecordId};

use crate::sqlx_errors::map_sqlx_error;

/// PostgreSQL-backed profiles and read-only user directory.
#[derive(Clone)]
pub struct PostgresProfileRepository {
    pool: PgPool,
}

impl PostgresProfileRepository {
    /// Creates a repository with the provided connection pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ProfileRow {
    user_id: String,
    full_name: Option<String>,
}

#[derive(Debug, FromRow)]
struct UserRow {
    id: String,
    email: String,
}

#[async_trait]
impl ProfileRepository for PostgresProfileRepository {
    async fn find_profile(&self, user_id: &RecordId) -> AppResult<Option<Profile>> {
        let row = sqlx::query_as::<_, ProfileRow>(
            r#"
            SELECT user_id, full_name
            FROM profiles
            WHERE user_id = $1
            "#,
        )
        .bind(user_id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|error| map_sqlx_error(error, "read profile"))?;

        row.map(|row| Profile::new(row.user_id, row.full_name))
            .transpose()
    }

    async fn upsert_profile(&self, profile: Profile) -> AppResult<Profile> {
        let row = sqlx::query_as::<_, ProfileRow>(
            r#"
            INSERT INTO profiles (user_id, full_name)
            VALUES ($1, $2)
            ON CONFLICT (user_id)
            DO UPDATE SET full_name = EXCLUDED.full_name, updated_at = now()
            RETURNING user_id, full_name
            "#,
        )
        .bind(profile.user_id().as_str())
        .bind(profile.full_name())
        .fetch_one(&self.pool)
        .await
        .map_err(|error| map_sqlx_error(error, "save profile"))?;

        Profile::new(row.user_id, row.full_name)
    }
}

#[async_trait]
impl UserDirectory for PostgresProfileRepository {
    async fn list_users(&self) -> AppResult<Vec<DirectoryUser>> {
        let rows = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, email
            FROM users
            ORDER BY email
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|error| map_sqlx_error(error, "list users"))?;

        rows.into_iter()
            .map(|row| Ok(DirectoryUser::new(RecordId::new(row.id)?, row.email)))
            .collect()
    }
}

#[cfg(test)]
mod tests;
