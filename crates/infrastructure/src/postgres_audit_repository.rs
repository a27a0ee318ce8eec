use async_trait::async_trait;
use sqlx::PgPool;

use gatehouse_application::{AuditEvent, AuditRepository};
use gatehouse_core::AppResult;

use crate::sqlx_errors::map_sqlx_error;

/// PostgreSQL-backed append-only audit repository.
#[derive(Clone)]
pub struct PostgresAuditRepository {
    pool: PgPool,
}

impl PostgresAuditRepository {
    /// Creates a repository with the provided connection pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AuditRepository for PostgresAuditRepository {
    async fn append_event(&self, event: AuditEvent) -> AppResult<()> {
        sqlx::query(
            r#"
            INSERT INTO audit_logs (
                id,
                action,
                entity,
                entity_id,
                details,
                performed_by
            )
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(uuid::Uuid::new_v4())
        .bind(event.action.as_str())
        .bind(event.entity.as_str())
        .bind(event.entity_id)
        .bind(event.details)
        .bind(event.performed_by)
        .execute(&self.pool)
        .await
        .map_err(|error| map_sqlx_error(error, "append audit event"))?;

        Ok(())
    }
}
