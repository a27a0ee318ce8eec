use super::*;

#[async_trait]
impl RoleRepository for PostgresCatalogRepository {
    async fn list_roles(&self) -> AppResult<Vec<Role>> {
        let rows = sqlx::query_as::<_, CatalogRow>(
            r#"
            SELECT id, name, description, created_at
            FROM roles
            ORDER BY created_at DESC, id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|error| map_sqlx_error(error, "list roles"))?;

        rows.into_iter().map(CatalogRow::into_role).collect()
    }

    async fn create_role(&self, entry: NewCatalogEntry) -> AppResult<Role> {
        sqlx::query_as::<_, CatalogRow>(
            r#"
            INSERT INTO roles (id, name, description)
            VALUES ($1, $2, $3)
            RETURNING id, name, description, created_at
            "#,
        )
        .bind(entry.id.as_str())
        .bind(entry.name.as_str())
        .bind(entry.description)
        .fetch_one(&self.pool)
        .await
        .map_err(|error| map_sqlx_error(error, "create role"))?
        .into_role()
    }

    async fn update_role(
        &self,
        role_id: &RecordId,
        changes: CatalogEntryChanges,
    ) -> AppResult<Role> {
        sqlx::query_as::<_, CatalogRow>(
            r#"
            UPDATE roles
            SET name = $2, description = $3
            WHERE id = $1
            RETURNING id, name, description, created_at
            "#,
        )
        .bind(role_id.as_str())
        .bind(changes.name.as_str())
        .bind(changes.description)
        .fetch_optional(&self.pool)
        .await
        .map_err(|error| map_sqlx_error(error, "update role"))?
        .ok_or_else(|| not_found("role", role_id))?
        .into_role()
    }

    async fn delete_role(&self, role_id: &RecordId) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM roles WHERE id = $1")
            .bind(role_id.as_str())
            .execute(&self.pool)
            .await
            .map_err(|error| map_sqlx_error(error, "delete role"))?;

        if result.rows_affected() == 0 {
            return Err(not_found("role", role_id));
        }

        Ok(())
    }
}
