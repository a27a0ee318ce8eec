use async_trait::async_trait;

use gatehouse_core::{AppResult, NonEmptyString};
use gatehouse_domain::{Permission, RecordId, Role};

/// Validated payload for a new role or permission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCatalogEntry {
    /// Identifier chosen by the caller or generated by the service.
    pub id: RecordId,
    /// Unique display name.
    pub name: NonEmptyString,
    /// Optional free-form description.
    pub description: Option<String>,
}

/// Validated replacement values for an existing role or permission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntryChanges {
    /// New name.
    pub name: NonEmptyString,
    /// New description.
    pub description: Option<String>,
}

/// Repository port for the role catalog.
#[async_trait]
pub trait RoleRepository: Send + Sync {
    /// Lists roles, newest first.
    async fn list_roles(&self) -> AppResult<Vec<Role>>;

    /// Persists a new role.
    async fn create_role(&self, entry: NewCatalogEntry) -> AppResult<Role>;

    /// Replaces name and description of an existing role.
    async fn update_role(&self, role_id: &RecordId, changes: CatalogEntryChanges)
    -> AppResult<Role>;

    /// Deletes a role together with its associations.
    async fn delete_role(&self, role_id: &RecordId) -> AppResult<()>;
}

/// Repository port for the permission catalog.
#[async_trait]
pub trait PermissionRepository: Send + Sync {
    /// Lists permissions, newest first.
    async fn list_permissions(&self) -> AppResult<Vec<Permission>>;

    /// Persists a new permission.
    async fn create_permission(&self, entry: NewCatalogEntry) -> AppResult<Permission>;

    /// Replaces name and description of an existing permission.
    async fn update_permission(
        &self,
        permission_id: &RecordId,
        changes: CatalogEntryChanges,
    ) -> AppResult<Permission>;

    /// Deletes a permission together with its associations.
    async fn delete_permission(&self, permission_id: &RecordId) -> AppResult<()>;
}
