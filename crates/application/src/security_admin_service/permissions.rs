use super::*;

use gatehouse_domain::{AuditAction, AuditEntity, Permission};

use crate::security_admin_ports::AuditEvent;

impl SecurityAdminService {
    /// Returns permissions, newest first.
    pub async fn list_permissions(&self) -> AppResult<Vec<Permission>> {
        self.permission_repository.list_permissions().await
    }

    /// Creates a permission and emits an audit event.
    pub async fn create_permission(
        &self,
        actor: Option<&UserIdentity>,
        input: CatalogEntryInput,
    ) -> AppResult<Audited<Permission>> {
        let entry = new_catalog_entry(input)?;

        self.audit_trail
            .mutate_with_audit(
                self.permission_repository.create_permission(entry),
                |permission: &Permission| {
                    AuditEvent::new(
                        AuditAction::Create,
                        AuditEntity::Permission,
                        permission.id().as_str(),
                        catalog_details(permission.name(), permission.description()),
                        actor,
                    )
                },
            )
            .await
    }

    /// Replaces the name and description of a permission and emits an audit event.
    pub async fn update_permission(
        &self,
        actor: Option<&UserIdentity>,
        permission_id: &str,
        input: CatalogEntryInput,
    ) -> AppResult<Audited<Permission>> {
        let permission_id = RecordId::new(permission_id)?;
        let changes = catalog_entry_changes(input)?;

        self.audit_trail
            .mutate_with_audit(
                self.permission_repository
                    .update_permission(&permission_id, changes),
                |permission: &Permission| {
                    AuditEvent::new(
                        AuditAction::Update,
                        AuditEntity::Permission,
                        permission.id().as_str(),
                        catalog_details(permission.name(), permission.description()),
                        actor,
                    )
                },
            )
            .await
    }

    /// Deletes a permission and emits an audit event.
    pub async fn delete_permission(
        &self,
        actor: Option<&UserIdentity>,
        permission_id: &str,
    ) -> AppResult<Audited<()>> {
        let permission_id = RecordId::new(permission_id)?;

        self.audit_trail
            .mutate_with_audit(
                self.permission_repository.delete_permission(&permission_id),
                |_: &()| {
                    AuditEvent::new(
                        AuditAction::Delete,
                        AuditEntity::Permission,
                        permission_id.as_str(),
                        json!({}),
                        actor,
                    )
                },
            )
            .await
    }
}
