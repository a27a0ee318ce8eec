use std::sync::Arc;

use gatehouse_core::AppResult;

use crate::security_admin_ports::{AuditLogEntry, AuditLogQuery, AuditLogRepository};

/// Default number of entries returned by the audit log listing.
pub const DEFAULT_AUDIT_LOG_LIMIT: usize = 100;

/// Upper bound for one audit log page.
pub const MAX_AUDIT_LOG_LIMIT: usize = 500;

/// Application service for reading the audit trail.
#[derive(Clone)]
pub struct AuditLogService {
    repository: Arc<dyn AuditLogRepository>,
}

impl AuditLogService {
    /// Creates a new service from required dependencies.
    #[must_use]
    pub fn new(repository: Arc<dyn AuditLogRepository>) -> Self {
        Self { repository }
    }

    /// Returns the most recent entries, newest first.
    pub async fn list_recent(&self, query: AuditLogQuery) -> AppResult<Vec<AuditLogEntry>> {
        let query = AuditLogQuery {
            limit: query.limit.clamp(1, MAX_AUDIT_LOG_LIMIT),
            ..query
        };

        self.repository.list_recent_entries(query).await
    }
}
