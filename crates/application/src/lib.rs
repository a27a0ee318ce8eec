//! Application services and ports.

#![forbid(unsafe_code)]

mod assignment_service;
mod association_reconciler;
mod audit_log_service;
mod audit_trail;
mod profile_service;
mod security_admin_ports;
mod security_admin_service;
mod subject_locks;

#[cfg(test)]
mod test_support;

pub use assignment_service::AssignmentService;
pub use association_reconciler::{
    AssociationReconciler, ReconcileOutcome, ReconcileStage, ReconciledMembership,
};
pub use audit_log_service::{AuditLogService, DEFAULT_AUDIT_LOG_LIMIT, MAX_AUDIT_LOG_LIMIT};
pub use audit_trail::{AuditTrail, Audited};
pub use profile_service::ProfileService;
pub use security_admin_ports::{
    AssociationStore, AuditEvent, AuditLogEntry, AuditLogQuery, AuditLogRepository,
    AuditRepository, CatalogEntryChanges, IdentityProvider, NewCatalogEntry, PermissionRepository,
    ProfileRepository, RoleRepository, UserDirectory,
};
pub use security_admin_service::{CatalogEntryInput, SecurityAdminService};
pub use subject_locks::{SubjectGuard, SubjectLocks};
