use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use serde_json::json;
use tokio::sync::Mutex;

use gatehouse_core::{AppError, AppResult, UserIdentity};
use gatehouse_domain::{AuditAction, AuditEntity, Permission, RecordId, Role};

use crate::security_admin_ports::{
    CatalogEntryChanges, NewCatalogEntry, PermissionRepository, RoleRepository,
};
use crate::test_support::FakeAuditRepository;

use super::{CatalogEntryInput, SecurityAdminService, catalog_entry_changes, new_catalog_entry};

#[derive(Default)]
struct FakeCatalogRepository {
    roles: Mutex<Vec<Role>>,
    permissions: Mutex<Vec<Permission>>,
}

#[async_trait]
impl RoleRepository for FakeCatalogRepository {
    async fn list_roles(&self) -> AppResult<Vec<Role>> {
        Ok(self.roles.lock().await.clone())
    }

    async fn create_role(&self, entry: NewCatalogEntry) -> AppResult<Role> {
        let role = Role::new(entry.id, entry.name.as_str(), entry.description, Utc::now())?;
        self.roles.lock().await.push(role.clone());
        Ok(role)
    }

    async fn update_role(
        &self,
        role_id: &RecordId,
        changes: CatalogEntryChanges,
    ) -> AppResult<Role> {
        let mut roles = self.roles.lock().await;
        let Some(stored) = roles.iter_mut().find(|role| role.id() == role_id) else {
            return Err(AppError::NotFound(format!("role '{role_id}' was not found")));
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
        let mut roles = self.roles.lock().await;
        let before = roles.len();
        roles.retain(|role| role.id() != role_id);
        if roles.len() == before {
            return Err(AppError::NotFound(format!("role '{role_id}' was not found")));
        }
        Ok(())
    }
}

#[async_trait]
impl PermissionRepository for FakeCatalogRepository {
    async fn list_permissions(&self) -> AppResult<Vec<Permission>> {
        Ok(self.permissions.lock().await.clone())
    }

    async fn create_permission(&self, entry: NewCatalogEntry) -> AppResult<Permission> {
        let permission =
            Permission::new(entry.id, entry.name.as_str(), entry.description, Utc::now())?;
        self.permissions.lock().await.push(permission.clone());
        Ok(permission)
    }

    async fn update_permission(
        &self,
        permission_id: &RecordId,
        _changes: CatalogEntryChanges,
    ) -> AppResult<Permission> {
        Err(AppError::NotFound(format!(
            "permission '{permission_id}' was not found"
        )))
    }

    async fn delete_permission(&self, _permission_id: &RecordId) -> AppResult<()> {
        Ok(())
    }
}

fn service(
    audit: FakeAuditRepository,
) -> (
    SecurityAdminService,
    Arc<FakeCatalogRepository>,
    Arc<FakeAuditRepository>,
) {
    let catalog = Arc::new(FakeCatalogRepository::default());
    let audit = Arc::new(audit);
    (
        SecurityAdminService::new(catalog.clone(), catalog.clone(), audit.clone()),
        catalog,
        audit,
    )
}

fn input(id: Option<&str>, name: &str, description: Option<&str>) -> CatalogEntryInput {
    CatalogEntryInput {
        id: id.map(ToOwned::to_owned),
        name: name.to_owned(),
        description: description.map(ToOwned::to_owned),
    }
}

#[tokio::test]
async fn create_role_writes_audit_event_with_details() {
    let (service, _, audit) = service(FakeAuditRepository::default());
    let actor = UserIdentity::new("admin-1", "Admin", None);

    let result = service
        .create_role(
            Some(&actor),
            input(Some("role-ops"), " ops ", Some("Operations")),
        )
        .await;

    assert!(matches!(result, Ok(ref audited) if audited.audit_error.is_none()));
    let events = audit.events.lock().await;
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].action, AuditAction::Create);
    assert_eq!(events[0].entity, AuditEntity::Role);
    assert_eq!(events[0].entity_id, "role-ops");
    assert_eq!(
        events[0].details,
        json!({ "name": "ops", "description": "Operations" })
    );
    assert_eq!(events[0].performed_by.as_deref(), Some("admin-1"));
}

#[tokio::test]
async fn create_role_generates_identifier_when_missing() {
    let (service, catalog, _) = service(FakeAuditRepository::default());

    let result = service.create_role(None, input(None, "viewer", None)).await;

    let Ok(audited) = result else {
        panic!("role creation should succeed");
    };
    assert_eq!(audited.value.id().as_str().len(), 36);
    assert_eq!(catalog.roles.lock().await.len(), 1);
}

#[tokio::test]
async fn blank_role_name_is_rejected_without_audit() {
    let (service, catalog, audit) = service(FakeAuditRepository::default());

    let result = service.create_role(None, input(None, "   ", None)).await;

    assert!(matches!(result, Err(AppError::Validation(_))));
    assert!(catalog.roles.lock().await.is_empty());
    assert!(audit.events.lock().await.is_empty());
}

#[tokio::test]
async fn update_missing_role_is_not_found_and_not_audited() {
    let (service, _, audit) = service(FakeAuditRepository::default());

    let result = service
        .update_role(None, "role-missing", input(None, "ops", None))
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
    assert!(audit.events.lock().await.is_empty());
}

#[tokio::test]
async fn delete_role_audits_with_empty_details() {
    let (service, catalog, audit) = service(FakeAuditRepository::default());
    let created = service
        .create_role(None, input(Some("role-ops"), "ops", None))
        .await;
    assert!(created.is_ok());

    let result = service.delete_role(None, "role-ops").await;

    assert!(result.is_ok());
    assert!(catalog.roles.lock().await.is_empty());
    let events = audit.events.lock().await;
    assert_eq!(events.len(), 2);
    assert_eq!(events[1].action, AuditAction::Delete);
    assert_eq!(events[1].details, json!({}));
    assert_eq!(events[1].performed_by, None);
}

#[tokio::test]
async fn audit_failure_keeps_created_permission() {
    let (service, catalog, _) = service(FakeAuditRepository {
        fail: true,
        ..FakeAuditRepository::default()
    });

    let result = service
        .create_permission(None, input(Some("perm-read"), "reports.read", None))
        .await;

    let Ok(audited) = result else {
        panic!("permission creation should succeed even when audit fails");
    };
    assert!(audited.audit_warning().is_some());
    assert_eq!(catalog.permissions.lock().await.len(), 1);
}

#[tokio::test]
async fn update_permission_propagates_not_found() {
    let (service, _, audit) = service(FakeAuditRepository::default());

    let result = service
        .update_permission(None, "perm-missing", input(None, "reports.write", None))
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
    assert!(audit.events.lock().await.is_empty());
}

#[test]
fn catalog_descriptions_are_trimmed_before_reaching_the_store() -> Result<(), AppError> {
    let blank = new_catalog_entry(input(Some("role-ops"), "ops", Some("   ")))?;
    assert_eq!(blank.description, None);

    let padded = catalog_entry_changes(input(None, "ops", Some("  Operations team ")))?;
    assert_eq!(padded.description.as_deref(), Some("Operations team"));
    Ok(())
}
