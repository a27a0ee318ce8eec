use gatehouse_application::{AuditLogEntry, AuditLogQuery, DEFAULT_AUDIT_LOG_LIMIT};
use gatehouse_core::AppResult;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use ts_rs::TS;

/// Query string of the audit log listing.
#[derive(Debug, Default, Deserialize)]
pub struct AuditLogListQuery {
    pub limit: Option<usize>,
    pub entity: Option<String>,
    pub action: Option<String>,
}

impl AuditLogListQuery {
    pub fn into_query(self) -> AppResult<AuditLogQuery> {
        Ok(AuditLogQuery {
            limit: self.limit.unwrap_or(DEFAULT_AUDIT_LOG_LIMIT),
            entity: self.entity.as_deref().map(str::parse).transpose()?,
            action: self.action.as_deref().map(str::parse).transpose()?,
        })
    }
}

/// API representation of an audit log entry.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/audit-log-entry-response.ts"
)]
pub struct AuditLogEntryResponse {
    pub event_id: String,
    pub action: String,
    pub entity: String,
    pub entity_id: String,
    pub details: Value,
    pub performed_by: String,
    pub created_at: String,
}

impl From<AuditLogEntry> for AuditLogEntryResponse {
    fn from(value: AuditLogEntry) -> Self {
        Self {
            performed_by: value.performed_by_label().to_owned(),
            event_id: value.event_id,
            action: value.action,
            entity: value.entity,
            entity_id: value.entity_id,
            details: value.details,
            created_at: value.created_at,
        }
    }
}
