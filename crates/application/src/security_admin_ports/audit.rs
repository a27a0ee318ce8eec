use async_trait::async_trait;
use serde_json::Value;

use gatehouse_core::{AppResult, SYSTEM_ACTOR_LABEL, UserIdentity};
use gatehouse_domain::{AuditAction, AuditEntity};

/// Immutable audit event payload emitted by application services.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditEvent {
    /// Mutation kind.
    pub action: AuditAction,
    /// Logical resource type.
    pub entity: AuditEntity,
    /// Identifier of the affected resource or subject.
    pub entity_id: String,
    /// Snapshot of the resulting state.
    pub details: Value,
    /// Acting principal, absent for system changes.
    pub performed_by: Option<String>,
}

impl AuditEvent {
    /// Builds an event attributed to the optional actor.
    #[must_use]
    pub fn new(
        action: AuditAction,
        entity: AuditEntity,
        entity_id: impl Into<String>,
        details: Value,
        actor: Option<&UserIdentity>,
    ) -> Self {
        Self {
            action,
            entity,
            entity_id: entity_id.into(),
            details,
            performed_by: actor.map(|actor| actor.subject().to_owned()),
        }
    }
}

/// Port for persisting append-only audit events.
#[async_trait]
pub trait AuditRepository: Send + Sync {
    /// Persists one audit event.
    async fn append_event(&self, event: AuditEvent) -> AppResult<()>;
}

/// Audit log entry projection for administrative views.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditLogEntry {
    /// Stable event identifier.
    pub event_id: String,
    /// Stable action identifier.
    pub action: String,
    /// Logical resource type.
    pub entity: String,
    /// Affected resource identifier.
    pub entity_id: String,
    /// Snapshot written with the event.
    pub details: Value,
    /// Acting principal, absent for system changes.
    pub performed_by: Option<String>,
    /// Event timestamp in RFC3339.
    pub created_at: String,
}

impl AuditLogEntry {
    /// Returns the actor for display, falling back to the system label.
    #[must_use]
    pub fn performed_by_label(&self) -> &str {
        self.performed_by.as_deref().unwrap_or(SYSTEM_ACTOR_LABEL)
    }
}

/// Query parameters for audit log listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditLogQuery {
    /// Maximum rows returned.
    pub limit: usize,
    /// Optional entity filter.
    pub entity: Option<AuditEntity>,
    /// Optional action filter.
    pub action: Option<AuditAction>,
}

/// Repository port for reading audit logs.
#[async_trait]
pub trait AuditLogRepository: Send + Sync {
    /// Lists the most recent entries, newest first.
    async fn list_recent_entries(&self, query: AuditLogQuery) -> AppResult<Vec<AuditLogEntry>>;
}
