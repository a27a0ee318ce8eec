use gatehouse_application::{
    AssignmentService, AuditLogService, ProfileService, SecurityAdminService,
};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub security_admin_service: SecurityAdminService,
    pub assignment_service: AssignmentService,
    pub profile_service: ProfileService,
    pub audit_log_service: AuditLogService,
    pub storage_backend: &'static str,
}
