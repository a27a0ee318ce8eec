use super::*;

use gatehouse_domain::{AuditAction, AuditEntity, Role};

use crate::security_admin_ports::AuditEvent;

impl SecurityAdminService {
    /// Returns roles, newest first.
    pub async fn list_roles(&self) -> AppResult<Vec<Role>> {
        self.role_repository.list_roles().await
    }

    /// Creates a role and emits an audit event.
    pub async fn create_role(
        &self,
        actor: Option<&UserIdentity>,
        input: CatalogEntryInput,
    ) -> AppResult<Audited<Role>> {
        let entry = new_catalog_entry(input)?;

        self.audit_trail
            .mutate_with_audit(self.role_repository.create_role(entry), |role: &Role| {
                AuditEvent::new(
                    AuditAction::Create,
                    AuditEntity::Role,
                    role.id().as_str(),
                    catalog_details(role.name(), role.description()),
                    actor,
                )
            })
            .await
    }

    /// Replaces the name and description of a role and emits an audit event.
    pub async fn update_role(
        &self,
        actor: Option<&UserIdentity>,
        role_id: &str,
        input: CatalogEntryInput,
    ) -> AppResult<Audited<Role>> {
        let role_id = RecordId::new(role_id)?;
        let changes = catalog_entry_changes(input)?;

        self.audit_trail
            .mutate_with_audit(
                self.role_repository.update_role(&role_id, changes),
                |role: &Role| {
                    AuditEvent::new(
                        AuditAction::Update,
                        AuditEntity::Role,
                        role.id().as_str(),
                        catalog_details(role.name(), role.description()),
                        actor,
                    )
                },
            )
            .await
    }

    /// Deletes a role and emits an audit event.
    pub async fn delete_role(
        &self,
        actor: Option<&UserIdentity>,
        role_id: &str,
    ) -> AppResult<Audited<()>> {
        let role_id = RecordId::new(role_id)?;

        self.audit_trail
            .mutate_with_audit(self.role_repository.delete_role(&role_id), |_: &()| {
                AuditEvent::new(
                    AuditAction::Delete,
                    AuditEntity::Role,
                    role_id.as_str(),
                    json!({}),
                    actor,
                )
            })
            .await
    }
}
