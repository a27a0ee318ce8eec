use std::sync::Arc;

use gatehouse_core::{AppError, AppResult, UserIdentity};
use gatehouse_domain::{AssociationKind, DesiredMembership, DirectoryUser, RecordId};

use crate::association_reconciler::{AssociationReconciler, ReconcileOutcome};
use crate::security_admin_ports::{
    AssociationStore, AuditRepository, RoleRepository, UserDirectory,
};
use crate::subject_locks::SubjectLocks;

/// Application service for user-role and role-permission assignment.
#[derive(Clone)]
pub struct AssignmentService {
    store: Arc<dyn AssociationStore>,
    user_directory: Arc<dyn UserDirectory>,
    role_repository: Arc<dyn RoleRepository>,
    reconciler: AssociationReconciler,
    locks: SubjectLocks,
}

impl AssignmentService {
    /// Creates a new service from required dependencies.
    #[must_use]
    pub fn new(
        store: Arc<dyn AssociationStore>,
        user_directory: Arc<dyn UserDirectory>,
        role_repository: Arc<dyn RoleRepository>,
        audit_repository: Arc<dyn AuditRepository>,
    ) -> Self {
        Self {
            reconciler: AssociationReconciler::new(store.clone(), audit_repository),
            store,
            user_directory,
            role_repository,
            locks: SubjectLocks::new(),
        }
    }

    /// Lists users that can receive roles.
    pub async fn list_users(&self) -> AppResult<Vec<DirectoryUser>> {
        self.user_directory.list_users().await
    }

    /// Returns the role ids currently assigned to a user.
    pub async fn assigned_roles(&self, user_id: &str) -> AppResult<Vec<RecordId>> {
        self.assigned(AssociationKind::UserRoles, user_id).await
    }

    /// Returns the names of the roles held by a user, in stored association order.
    ///
    /// Assigned ids without a catalog entry are skipped. An empty result means
    /// the user holds no role and is treated as a viewer.
    pub async fn role_names(&self, user_id: &str) -> AppResult<Vec<String>> {
        let role_ids = self.assigned_roles(user_id).await?;
        if role_ids.is_empty() {
            return Ok(Vec::new());
        }

        let roles = self.role_repository.list_roles().await?;
        Ok(role_ids
            .iter()
            .filter_map(|role_id| roles.iter().find(|role| role.id() == role_id))
            .map(|role| role.name().as_str().to_owned())
            .collect())
    }

    /// Returns the permission ids currently attached to a role.
    pub async fn assigned_permissions(&self, role_id: &str) -> AppResult<Vec<RecordId>> {
        self.assigned(AssociationKind::RolePermissions, role_id).await
    }

    /// Replaces the role set of a user.
    pub async fn save_user_roles(
        &self,
        actor: Option<&UserIdentity>,
        user_id: &str,
        role_ids: Vec<String>,
    ) -> AppResult<ReconcileOutcome> {
        self.save(AssociationKind::UserRoles, actor, user_id, role_ids)
            .await
    }

    /// Replaces the permission set of a role.
    pub async fn save_role_permissions(
        &self,
        actor: Option<&UserIdentity>,
        role_id: &str,
        permission_ids: Vec<String>,
    ) -> AppResult<ReconcileOutcome> {
        self.save(AssociationKind::RolePermissions, actor, role_id, permission_ids)
            .await
    }

    async fn assigned(&self, kind: AssociationKind, subject_id: &str) -> AppResult<Vec<RecordId>> {
        let subject_id = RecordId::new(subject_id)?;
        self.store.select_by_subject(kind, &subject_id).await
    }

    /// Validates input, claims the subject and runs the reconciliation on its
    /// own task so that a dropped caller cannot cancel it after the clear step.
    async fn save(
        &self,
        kind: AssociationKind,
        actor: Option<&UserIdentity>,
        subject_id: &str,
        object_ids: Vec<String>,
    ) -> AppResult<ReconcileOutcome> {
        let desired = DesiredMembership::new(subject_id, object_ids)?;
        let guard = self.locks.try_acquire(kind, desired.subject_id())?;

        let reconciler = self.reconciler.clone();
        let actor = actor.cloned();
        let task = tokio::spawn(async move {
            let _guard = guard;
            reconciler.reconcile(kind, &desired, actor.as_ref()).await
        });

        task.await
            .map_err(|error| AppError::Internal(format!("reconciliation task failed: {error}")))
    }
}
