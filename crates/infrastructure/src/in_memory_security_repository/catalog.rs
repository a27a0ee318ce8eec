use super::*;

fn ensure_unique<'a>(
    label: &str,
    mut existing: impl Iterator<Item = (&'a RecordId, &'a str)>,
    id: &RecordId,
    name: &str,
) -> AppResult<()> {
    if existing.any(|(existing_id, existing_name)| existing_id == id || existing_name == name) {
        return Err(AppError::Conflict(format!(
            "{label} '{name}' already exists"
        )));
    }

    Ok(())
}

fn not_found(label: &str, id: &RecordId) -> AppError {
    AppError::NotFound(format!("{label} '{id}' was not found"))
}

#[async_trait]
impl RoleRepository for InMemorySecurityRepository {
    async fn list_roles(&self) -> AppResult<Vec<Role>> {
        Ok(self.roles.read().await.iter().rev().cloned().collect())
    }

    async fn create_role(&self, entry: NewCatalogEntry) -> AppResult<Role> {
        let mut roles = self.roles.write().await;
        ensure_unique(
            "role",
            roles.iter().map(|role| (role.id(), role.name().as_str())),
            &entry.id,
            entry.name.as_str(),
        )?;

        let role = Role::new(entry.id, entry.name.as_str(), entry.description, Utc::now())?;
        roles.push(role.clone());
        Ok(role)
    }

    async fn update_role(
        &self,
        role_id: &RecordId,
        changes: CatalogEntryChanges,
    ) -> AppResult<Role> {
        let mut roles = self.roles.write().await;
        ensure_unique(
            "role",
            roles
                .iter()
                .filter(|role| role.id() != role_id)
                .map(|role| (role.id(), role.name().as_str())),
            role_id,
            changes.name.as_str(),
        )?;

        let Some(stored) = roles.iter_mut().find(|role| role.id() == role_id) else {
            return Err(not_found("role", role_id));
        };
        *stored = Role::new(
            role_id.clone(),
            changes.name.as_str(),
            changes.description,
            stored.created_at(),
        )?;
        Ok(stored.clone())
    }

    async fn delete_role(&self, role_id: &RecordId) -> AppResult<()> {
        {
            let mut roles = self.roles.write().await;
            let before = roles.len();
            roles.retain(|role| role.id() != role_id);
            if roles.len() == before {
                return Err(not_found("role", role_id));
            }
        }

        self.associations
            .write()
            .await
            .remove(&(AssociationKind::RolePermissions, role_id.clone()));
        self.remove_object_references(AssociationKind::UserRoles, role_id)
            .await;
        Ok(())
    }
}

#[async_trait]
impl PermissionRepository for InMemorySecurityRepository {
    async fn list_permissions(&self) -> AppResult<Vec<Permission>> {
        Ok(self.permissions.read().await.iter().rev().cloned().collect())
    }

    async fn create_permission(&self, entry: NewCatalogEntry) -> AppResult<Permission> {
        let mut permissions = self.permissions.write().await;
        ensure_unique(
            "permission",
            permissions
                .iter()
                .map(|permission| (permission.id(), permission.name().as_str())),
            &entry.id,
            entry.name.as_str(),
        )?;

        let permission =
            Permission::new(entry.id, entry.name.as_str(), entry.description, Utc::now())?;
        permissions.push(permission.clone());
        Ok(permission)
    }

    async fn update_permission(
        &self,
        permission_id: &RecordId,
        changes: CatalogEntryChanges,
    ) -> AppResult<Permission> {
        let mut permissions = self.permissions.write().await;
        ensure_unique(
            "permission",
            permissions
                .iter()
                .filter(|permission| permission.id() != permission_id)
                .map(|permission| (permission.id(), permission.name().as_str())),
            permission_id,
            changes.name.as_str(),
        )?;

        let Some(stored) = permissions
            .iter_mut()
            .find(|permission| permission.id() == permission_id)
        else {
            return Err(not_found("permission", permission_id));
        };
        *stored = Permission::new(
            permission_id.clone(),
            changes.name.as_str(),
            changes.description,
            stored.created_at(),
        )?;
        Ok(stored.clone())
    }

    async fn delete_permission(&self, permission_id: &RecordId) -> AppResult<()> {
        {
            let mut permissions = self.permissions.write().await;
            let before = permissions.len();
            permissions.retain(|permission| permission.id() != permission_id);
            if permissions.len() == before {
                return Err(not_found("permission", permission_id));
            }
        }

        self.remove_object_references(AssociationKind::RolePermissions, permission_id)
            .await;
        Ok(())
    }
}
