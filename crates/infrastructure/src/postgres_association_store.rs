use async_trait::async_trait;
use sqlx::PgPool;
use tracing::debug;

use gatehouse_application::AssociationStore;
use gatehouse_core::AppResult;
use gatehouse_domain::{Association, AssociationKind, RecordId};

use crate::sqlx_errors::map_sqlx_error;

/// PostgreSQL-backed store for `user_roles` and `role_permissions` rows.
#[derive(Clone)]
pub struct PostgresAssociationStore {
    pool: PgPool,
}

impl PostgresAssociationStore {
    /// Creates a store with the provided connection pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

struct AssociationStatements {
    delete: &'static str,
    insert: &'static str,
    select: &'static str,
}

fn statements(kind: AssociationKind) -> AssociationStatements {
    match kind {
        AssociationKind::UserRoles => AssociationStatements {
            delete: "DELETE FROM user_roles WHERE user_id = $1",
            insert: r#"
                INSERT INTO user_roles (user_id, role_id)
                SELECT * FROM UNNEST($1::TEXT[], $2::TEXT[])
                "#,
            select: r#"
                SELECT role_id
                FROM user_roles
                WHERE user_id = $1
                ORDER BY created_at, role_id
                "#,
        },
        AssociationKind::RolePermissions => AssociationStatements {
            delete: "DELETE FROM role_permissions WHERE role_id = $1",
            insert: r#"
                INSERT INTO role_permissions (role_id, permission_id)
                SELECT * FROM UNNEST($1::TEXT[], $2::TEXT[])
                "#,
            select: r#"
                SELECT permission_id
                FROM role_permissions
                WHERE role_id = $1
                ORDER BY created_at, permission_id
                "#,
        },
    }
}

#[async_trait]
impl AssociationStore for PostgresAssociationStore {
    async fn delete_by_subject(
        &self,
        kind: AssociationKind,
        subject_id: &RecordId,
    ) -> AppResult<u64> {
        let result = sqlx::query(statements(kind).delete)
            .bind(subject_id.as_str())
            .execute(&self.pool)
            .await
            .map_err(|error| map_sqlx_error(error, &format!("clear {}", kind.table())))?;

        debug!(
            table = kind.table(),
            %subject_id,
            removed = result.rows_affected(),
            "association rows deleted"
        );
        Ok(result.rows_affected())
    }

    async fn insert_many(&self, kind: AssociationKind, rows: &[Association]) -> AppResult<()> {
        if rows.is_empty() {
            return Ok(());
        }

        let (subject_ids, object_ids): (Vec<&str>, Vec<&str>) = rows
            .iter()
            .map(|row| (row.subject_id.as_str(), row.object_id.as_str()))
            .unzip();

        sqlx::query(statements(kind).insert)
            .bind(subject_ids)
            .bind(object_ids)
            .execute(&self.pool)
            .await
            .map_err(|error| map_sqlx_error(error, &format!("insert into {}", kind.table())))?;

        debug!(table = kind.table(), rows = rows.len(), "association rows inserted");
        Ok(())
    }

    async fn select_by_subject(
        &self,
        kind: AssociationKind,
        subject_id: &RecordId,
    ) -> AppResult<Vec<RecordId>> {
        let object_ids = sqlx::query_scalar::<_, String>(statements(kind).select)
            .bind(subject_id.as_str())
            .fetch_all(&self.pool)
            .await
            .map_err(|error| map_sqlx_error(error, &format!("read {}", kind.table())))?;

        object_ids.into_iter().map(RecordId::new).collect()
    }
}
