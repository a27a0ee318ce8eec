use std::future::Future;
use std::sync::Arc;

use gatehouse_core::{AppError, AppResult};
use tracing::warn;

use crate::security_admin_ports::{AuditEvent, AuditRepository};

/// Result of a mutation whose audit record is written best-effort.
#[derive(Debug)]
pub struct Audited<T> {
    /// Value returned by the mutation.
    pub value: T,
    /// Audit append failure, if any. The mutation is kept either way.
    pub audit_error: Option<AppError>,
}

impl<T> Audited<T> {
    /// Returns the audit failure as a user-facing warning.
    #[must_use]
    pub fn audit_warning(&self) -> Option<String> {
        self.audit_error
            .as_ref()
            .map(|error| format!("change saved but audit log write failed: {error}"))
    }

    /// Maps the mutated value while keeping the audit status.
    pub fn map<U>(self, map: impl FnOnce(T) -> U) -> Audited<U> {
        Audited {
            value: map(self.value),
            audit_error: self.audit_error,
        }
    }
}

/// Pairs mutations with exactly one audit record each.
#[derive(Clone)]
pub struct AuditTrail {
    repository: Arc<dyn AuditRepository>,
}

impl AuditTrail {
    /// Creates an audit trail over the provided sink.
    #[must_use]
    pub fn new(repository: Arc<dyn AuditRepository>) -> Self {
        Self { repository }
    }

    /// Appends one event. Failures are logged and returned to the caller.
    pub async fn append(&self, event: AuditEvent) -> AppResult<()> {
        let action = event.action;
        let entity = event.entity;
        let entity_id = event.entity_id.clone();

        self.repository
            .append_event(event)
            .await
            .inspect_err(|error| {
                warn!(
                    action = action.as_str(),
                    entity = entity.as_str(),
                    %entity_id,
                    %error,
                    "audit log write failed"
                );
            })
    }

    /// Runs a mutation, then records one audit event built from its result.
    ///
    /// A failed mutation writes nothing. A failed audit append does not undo
    /// the mutation and is reported in [`Audited::audit_error`].
    pub async fn mutate_with_audit<T, F, B>(
        &self,
        operation: F,
        build_event: B,
    ) -> AppResult<Audited<T>>
    where
        F: Future<Output = AppResult<T>> + Send,
        B: FnOnce(&T) -> AuditEvent + Send,
    {
        let value = operation.await?;
        let audit_error = self.append(build_event(&value)).await.err();

        Ok(Audited { value, audit_error })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;
    use serde_json::json;
    use tokio::sync::Mutex;

    use gatehouse_core::{AppError, AppResult};
    use gatehouse_domain::{AuditAction, AuditEntity};

    use super::AuditTrail;
    use crate::security_admin_ports::{AuditEvent, AuditRepository};

    #[derive(Default)]
    struct RecordingAuditRepository {
        events: Mutex<Vec<AuditEvent>>,
        fail: bool,
    }

    #[async_trait]
    impl AuditRepository for RecordingAuditRepository {
        async fn append_event(&self, event: AuditEvent) -> AppResult<()> {
            if self.fail {
                return Err(AppError::Unavailable("audit sink offline".to_owned()));
            }
            self.events.lock().await.push(event);
            Ok(())
        }
    }

    fn role_event(role_id: &str) -> AuditEvent {
        AuditEvent::new(
            AuditAction::Create,
            AuditEntity::Role,
            role_id,
            json!({ "name": "ops" }),
            None,
        )
    }

    #[tokio::test]
    async fn failed_mutation_writes_no_audit_event() {
        let repository = Arc::new(RecordingAuditRepository::default());
        let trail = AuditTrail::new(repository.clone());

        let result = trail
            .mutate_with_audit(
                async { Err::<String, _>(AppError::Conflict("duplicate".to_owned())) },
                |role_id: &String| role_event(role_id),
            )
            .await;

        assert!(matches!(result, Err(AppError::Conflict(_))));
        assert!(repository.events.lock().await.is_empty());
    }

    #[tokio::test]
    async fn successful_mutation_writes_one_event() {
        let repository = Arc::new(RecordingAuditRepository::default());
        let trail = AuditTrail::new(repository.clone());

        let result = trail
            .mutate_with_audit(async { Ok("role-1".to_owned()) }, |role_id: &String| {
                role_event(role_id)
            })
            .await;

        assert!(matches!(result, Ok(ref audited) if audited.audit_error.is_none()));
        let events = repository.events.lock().await;
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].entity_id, "role-1");
        assert_eq!(events[0].performed_by, None);
    }

    #[tokio::test]
    async fn audit_failure_keeps_mutation_result() {
        let repository = Arc::new(RecordingAuditRepository {
            events: Mutex::new(Vec::new()),
            fail: true,
        });
        let trail = AuditTrail::new(repository);

        let result = trail
            .mutate_with_audit(async { Ok("role-1".to_owned()) }, |role_id: &String| {
                role_event(role_id)
            })
            .await;

        let Ok(audited) = result else {
            panic!("mutation result should be kept when the audit write fails");
        };
        assert_eq!(audited.value, "role-1");
        assert!(matches!(audited.audit_error, Some(AppError::Unavailable(_))));
        assert!(audited.audit_warning().is_some());
    }
}
