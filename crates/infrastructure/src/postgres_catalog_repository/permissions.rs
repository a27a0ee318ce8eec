use super::*;

#[async_trait]
impl PermissionRepository for PostgresCatalogRepository {
    async fn list_permissions(&self) -> AppResult<Vec<Permission>> {
        let rows = sqlx::query_as::<_, CatalogRow>(
            r#"
            SELECT id, name, description, created_at
            FROM permissions
            ORDER BY created_at DESC, id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|error| map_sqlx_error(error, "list permissions"))?;

        rows.into_iter().map(CatalogRow::into_permission).collect()
    }

    async fn create_permission(&self, entry: NewCatalogEntry) -> AppResult<Permission> {
        sqlx::query_as::<_, CatalogRow>(
            r#"
            INSERT INTO permissions (id, name, description)
            VALUES ($1, $2, $3)
            RETURNING id, name, description, created_at
            "#,
        )
        .bind(entry.id.as_str())
        .bind(entry.name.as_str())
        .bind(entry.description)
        .fetch_one(&self.pool)
        .await
        .map_err(|error| map_sqlx_error(error, "create permission"))?
        .into_permission()
    }

    async fn update_permission(
        &self,
        permission_id: &RecordId,
        changes: CatalogEntryChanges,
    ) -> AppResult<Permission> {
        sqlx::query_as::<_, CatalogRow>(
            r#"
            UPDATE permissions
            SET name = $2, description = $3
            WHERE id = $1
            RETURNING id, name, description, created_at
            "#,
        )
        .bind(permission_id.as_str())
        .bind(changes.name.as_str())
        .bind(changes.description)
        .fetch_optional(&self.pool)
        .await
        .map_err(|error| map_sqlx_error(error, "update permission"))?
        .ok_or_else(|| not_found("permission", permission_id))?
        .into_permission()
    }

    async fn delete_permission(&self, permission_id: &RecordId) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM permissions WHERE id = $1")
            .bind(permission_id.as_str())
            .execute(&self.pool)
            .await
            .map_err(|error| map_sqlx_error(error, "delete permission"))?;

        if result.rows_affected() == 0 {
            return Err(not_found("permission", permission_id));
        }

        Ok(())
    }
}
