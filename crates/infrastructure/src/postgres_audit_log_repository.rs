use async_trait::async_trait;
use serde_json::Value;
use sqlx::{FromRow, PgPool};

use gatehouse_application::{AuditLogEntry, AuditLogQuery, AuditLogRepository};
use gatehouse_core::AppResult;

use crate::sqlx_errors::map_sqlx_error;

/// PostgreSQL-backed repository for audit log read models.
#[derive(Clone)]
pub struct PostgresAuditLogRepository {
    pool: PgPool,
}

impl PostgresAuditLogRepository {
    /// Creates a repository with the provided connection pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct AuditLogRow {
    event_id: uuid::Uuid,
    action: String,
    entity: String,
    entity_id: String,
    details: Value,
    performed_by: Option<String>,
    created_at: String,
}

#[async_trait]
impl AuditLogRepository for PostgresAuditLogRepository {
    async fn list_recent_entries(&self, query: AuditLogQuery) -> AppResult<Vec<AuditLogEntry>> {
        let limit = i64::try_from(query.limit).unwrap_or(i64::MAX);
        let rows = sqlx::query_as::<_, AuditLogRow>(
            r#"
            SELECT
                id AS event_id,
                action,
                entity,
                entity_id,
                details,
                performed_by,
                to_char(created_at AT TIME ZONE 'UTC', 'YYYY-MM-DD"T"HH24:MI:SS"Z"') AS created_at
            FROM audit_logs
            WHERE ($1::TEXT IS NULL OR entity = $1)
                AND ($2::TEXT IS NULL OR action = $2)
            ORDER BY audit_logs.created_at DESC, id
            LIMIT $3
            "#,
        )
        .bind(query.entity.map(|entity| entity.as_str()))
        .bind(query.action.map(|action| action.as_str()))
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(|error| map_sqlx_error(error, "list audit log entries"))?;

        Ok(rows
            .into_iter()
            .map(|row| AuditLogEntry {
                event_id: row.event_id.to_string(),
                action: row.action,
                entity: row.entity,
                entity_id: row.entity_id,
                details: row.details,
                performed_by: row.performed_by,
                created_at: row.created_at,
            })
            .collect())
    }
}
