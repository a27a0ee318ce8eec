use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{SecondsFormat, Utc};
use tokio::sync::RwLock;

use gatehouse_application::{
    AssociationStore, AuditEvent, AuditLogEntry, AuditLogQuery, AuditLogRepository,
    AuditRepository, CatalogEntryChanges, NewCatalogEntry, PermissionRepository,
    ProfileRepository, RoleRepository, UserDirectory,
};
use gatehouse_core::{AppError, AppResult};
use gatehouse_domain::{
    Association, AssociationKind, DirectoryUser, Permission, Profile, RecordId, Role,
};

mod associations;
mod audit;
mod catalog;
mod directory;


/// In-memory implementation of every security administration port.
///
/// Deleting a role or permission removes the association rows that reference
/// it, mirroring the cascading foreign keys of the PostgreSQL schema.
/// Association inserts do not check that the referenced records exist.
#[derive(Debug, Default)]
pub struct InMemorySecurityRepository {
    associations: RwLock<HashMap<(AssociationKind, RecordId), Vec<RecordId>>>,
    audit_entries: RwLock<Vec<AuditLogEntry>>,
    roles: RwLock<Vec<Role>>,
    permissions: RwLock<Vec<Permission>>,
    profiles: RwLock<HashMap<RecordId, Profile>>,
    users: RwLock<Vec<DirectoryUser>>,
}

impl InMemorySecurityRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository whose user directory lists `users`.
    #[must_use]
    pub fn with_users(users: Vec<DirectoryUser>) -> Self {
        Self {
            users: RwLock::new(users),
            ..Self::default()
        }
    }

    async fn remove_object_references(&self, kind: AssociationKind, object_id: &RecordId) {
        let mut associations = self.associations.write().await;
        for ((stored_kind, _), object_ids) in associations.iter_mut() {
            if *stored_kind == kind {
                object_ids.retain(|stored| stored != object_id);
            }
        }
        associations.retain(|_, object_ids| !object_ids.is_empty());
    }
}
