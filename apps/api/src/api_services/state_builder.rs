use std::sync::Arc;

use gatehouse_application::{
    AssignmentService, AssociationStore, AuditLogRepository, AuditLogService, AuditRepository,
    PermissionRepository, ProfileRepository, ProfileService, RoleRepository,
    SecurityAdminService, UserDirectory,
};
use gatehouse_infrastructure::{
    InMemorySecurityRepository, PostgresAssociationStore, PostgresAuditLogRepository,
    PostgresAuditRepository, PostgresCatalogRepository, PostgresProfileRepository,
};
use sqlx::PgPool;

use crate::state::AppState;

/// Port implementations backing one running API.
pub struct RepositorySet {
    pub association_store: Arc<dyn AssociationStore>,
    pub audit_repository: Arc<dyn AuditRepository>,
    pub audit_log_repository: Arc<dyn AuditLogRepository>,
    pub role_repository: Arc<dyn RoleRepository>,
    pub permission_repository: Arc<dyn PermissionRepository>,
    pub profile_repository: Arc<dyn ProfileRepository>,
    pub user_directory: Arc<dyn UserDirectory>,
}

impl RepositorySet {
    pub fn postgres(pool: &PgPool) -> Self {
        let catalog = Arc::new(PostgresCatalogRepository::new(pool.clone()));
        let profiles = Arc::new(PostgresProfileRepository::new(pool.clone()));

        Self {
            association_store: Arc::new(PostgresAssociationStore::new(pool.clone())),
            audit_repository: Arc::new(PostgresAuditRepository::new(pool.clone())),
            audit_log_repository: Arc::new(PostgresAuditLogRepository::new(pool.clone())),
            role_repository: catalog.clone(),
            permission_repository: catalog,
            profile_repository: profiles.clone(),
            user_directory: profiles,
        }
    }

    pub fn in_memory(repository: Arc<InMemorySecurityRepository>) -> Self {
        Self {
            association_store: repository.clone(),
            audit_repository: repository.clone(),
            audit_log_repository: repository.clone(),
            role_repository: repository.clone(),
            permission_repository: repository.clone(),
            profile_repository: repository.clone(),
            user_directory: repository,
        }
    }
}

pub fn build_app_state(repositories: RepositorySet, storage_backend: &'static str) -> AppState {
    AppState {
        security_admin_service: SecurityAdminService::new(
            repositories.role_repository.clone(),
            repositories.permission_repository,
            repositories.audit_repository.clone(),
        ),
        assignment_service: AssignmentService::new(
            repositories.association_store,
            repositories.user_directory,
            repositories.role_repository,
            repositories.audit_repository.clone(),
        ),
        profile_service: ProfileService::new(
            repositories.profile_repository,
            repositories.audit_repository,
        ),
        audit_log_service: AuditLogService::new(repositories.audit_log_repository),
        storage_backend,
    }
}
