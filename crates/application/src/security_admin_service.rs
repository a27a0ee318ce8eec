use std::sync::Arc;

use serde_json::{Value, json};

use gatehouse_core::{AppResult, NonEmptyString, UserIdentity};
use gatehouse_domain::RecordId;

use crate::audit_trail::{AuditTrail, Audited};
use crate::security_admin_ports::{
    AuditRepository, CatalogEntryChanges, NewCatalogEntry, PermissionRepository, RoleRepository,
};

mod permissions;
mod roles;

#[cfg(test)]
mod tests;

/// Caller payload for creating or updating a role or permission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntryInput {
    /// Optional identifier chosen by the caller. A UUID is generated when absent.
    pub id: Option<String>,
    /// Display name.
    pub name: String,
    /// Optional description.
    pub description: Option<String>,
}

/// Application service for role and permission catalog administration.
#[derive(Clone)]
pub struct SecurityAdminService {
    role_repository: Arc<dyn RoleRepository>,
    permission_repository: Arc<dyn PermissionRepository>,
    audit_trail: AuditTrail,
}

impl SecurityAdminService {
    /// Creates a new service from required dependencies.
    #[must_use]
    pub fn new(
        role_repository: Arc<dyn RoleRepository>,
        permission_repository: Arc<dyn PermissionRepository>,
        audit_repository: Arc<dyn AuditRepository>,
    ) -> Self {
        Self {
            role_repository,
            permission_repository,
            audit_trail: AuditTrail::new(audit_repository),
        }
    }
}

fn new_catalog_entry(input: CatalogEntryInput) -> AppResult<NewCatalogEntry> {
    let id = match input.id {
        Some(id) => RecordId::new(id)?,
        None => RecordId::new(uuid::Uuid::new_v4().to_string())?,
    };

    Ok(NewCatalogEntry {
        id,
        name: NonEmptyString::trimmed(input.name)?,
        description: trimmed_description(input.description),
    })
}

fn catalog_entry_changes(input: CatalogEntryInput) -> AppResult<CatalogEntryChanges> {
    Ok(CatalogEntryChanges {
        name: NonEmptyString::trimmed(input.name)?,
        description: trimmed_description(input.description),
    })
}

// Blank descriptions are stored as absent on every backend.
fn trimmed_description(description: Option<String>) -> Option<String> {
    description
        .map(|value| value.trim().to_owned())
        .filter(|value| !value.is_empty())
}

fn catalog_details(name: &NonEmptyString, description: Option<&str>) -> Value {
    json!({
        "name": name.as_str(),
        "description": description,
    })
}
