//! Replaces the full association set of one subject.
//!
//! A reconciliation runs three remote steps in order: clear every stored row
//! of the subject, insert one row per desired object, append one audit
//! record. The clear and insert are separate calls on the store, so an insert
//! failure leaves the subject with no associations at all; that case is
//! reported as [`ReconcileOutcome::RepopulateFailed`] and never retried or
//! rolled back here.

use std::sync::Arc;

use gatehouse_core::{AppError, AppResult, UserIdentity};
use gatehouse_domain::{AssociationKind, AuditAction, DesiredMembership, RecordId};
use tracing::{debug, error, info};

use crate::audit_trail::AuditTrail;
use crate::security_admin_ports::{AssociationStore, AuditEvent, AuditRepository};

/// Step of a reconciliation in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReconcileStage {
    /// Deleting the stored association rows.
    Clearing,
    /// Inserting the desired association rows.
    Repopulating,
    /// Appending the audit record.
    Auditing,
}

impl ReconcileStage {
    /// Returns a stable label for logs.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Clearing => "clearing",
            Self::Repopulating => "repopulating",
            Self::Auditing => "auditing",
        }
    }
}

/// Terminal state of one reconciliation.
#[derive(Debug)]
pub enum ReconcileOutcome {
    /// The store holds exactly the desired objects and the audit record was written.
    Success {
        /// Distinct object ids now associated with the subject.
        object_ids: Vec<RecordId>,
    },
    /// The store holds the desired objects but the audit append failed.
    AuditFailed {
        /// Distinct object ids now associated with the subject.
        object_ids: Vec<RecordId>,
        /// Audit sink error.
        cause: AppError,
    },
    /// Nothing was changed because the clear step failed.
    ClearFailed {
        /// Store error.
        cause: AppError,
    },
    /// The subject was cleared but the new rows were not inserted.
    RepopulateFailed {
        /// Store error.
        cause: AppError,
    },
}

/// Successfully reconciled membership returned to callers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReconciledMembership {
    /// Distinct object ids now associated with the subject.
    pub object_ids: Vec<RecordId>,
    /// Present when the audit record could not be written.
    pub audit_warning: Option<String>,
}

impl ReconcileOutcome {
    /// Returns true when the store reflects the desired set.
    #[must_use]
    pub fn is_reconciled(&self) -> bool {
        matches!(self, Self::Success { .. } | Self::AuditFailed { .. })
    }

    /// Returns the stage that stopped the reconciliation, if any.
    #[must_use]
    pub fn failed_stage(&self) -> Option<ReconcileStage> {
        match self {
            Self::Success { .. } => None,
            Self::AuditFailed { .. } => Some(ReconcileStage::Auditing),
            Self::ClearFailed { .. } => Some(ReconcileStage::Clearing),
            Self::RepopulateFailed { .. } => Some(ReconcileStage::Repopulating),
        }
    }

    /// Returns the reconciled object ids when the store reflects the desired set.
    #[must_use]
    pub fn object_ids(&self) -> Option<&[RecordId]> {
        match self {
            Self::Success { object_ids } | Self::AuditFailed { object_ids, .. } => {
                Some(object_ids)
            }
            Self::ClearFailed { .. } | Self::RepopulateFailed { .. } => None,
        }
    }

    /// Converts the outcome into a caller result.
    ///
    /// `ClearFailed` propagates the store error unchanged. `RepopulateFailed`
    /// becomes [`AppError::PartialWrite`] because the subject lost its rows.
    pub fn into_result(self) -> AppResult<ReconciledMembership> {
        match self {
            Self::Success { object_ids } => Ok(ReconciledMembership {
                object_ids,
                audit_warning: None,
            }),
            Self::AuditFailed { object_ids, cause } => Ok(ReconciledMembership {
                object_ids,
                audit_warning: Some(format!(
                    "associations saved but audit log write failed: {cause}"
                )),
            }),
            Self::ClearFailed { cause } => Err(cause),
            Self::RepopulateFailed { cause } => Err(AppError::PartialWrite(format!(
                "existing associations were removed but the new set could not be saved; \
                 the subject currently has none: {cause}"
            ))),
        }
    }
}

/// Stateless delete-then-insert reconciler shared by every association kind.
#[derive(Clone)]
pub struct AssociationReconciler {
    store: Arc<dyn AssociationStore>,
    audit_trail: AuditTrail,
}

impl AssociationReconciler {
    /// Creates a reconciler over the association store and audit sink.
    #[must_use]
    pub fn new(store: Arc<dyn AssociationStore>, audit_repository: Arc<dyn AuditRepository>) -> Self {
        Self {
            store,
            audit_trail: AuditTrail::new(audit_repository),
        }
    }

    /// Replaces the stored association set of the subject with `desired`.
    ///
    /// Callers must not run two reconciliations for the same subject
    /// concurrently and must not cancel one after it started.
    pub async fn reconcile(
        &self,
        kind: AssociationKind,
        desired: &DesiredMembership,
        actor: Option<&UserIdentity>,
    ) -> ReconcileOutcome {
        let subject_id = desired.subject_id();

        debug!(
            table = kind.table(),
            %subject_id,
            stage = ReconcileStage::Clearing.as_str(),
            "reconciling associations"
        );
        let removed = match self.store.delete_by_subject(kind, subject_id).await {
            Ok(removed) => removed,
            Err(cause) => {
                error!(table = kind.table(), %subject_id, error = %cause, "failed to clear associations");
                return ReconcileOutcome::ClearFailed { cause };
            }
        };

        if !desired.is_empty() {
            debug!(
                table = kind.table(),
                %subject_id,
                stage = ReconcileStage::Repopulating.as_str(),
                rows = desired.object_ids().len(),
                "reconciling associations"
            );
            if let Err(cause) = self.store.insert_many(kind, &desired.associations()).await {
                error!(
                    table = kind.table(),
                    %subject_id,
                    removed,
                    error = %cause,
                    "associations cleared but not repopulated"
                );
                return ReconcileOutcome::RepopulateFailed { cause };
            }
        }

        let object_ids = desired.object_ids().to_vec();
        info!(
            table = kind.table(),
            %subject_id,
            removed,
            inserted = object_ids.len(),
            "associations reconciled"
        );

        let event = AuditEvent::new(
            AuditAction::Update,
            kind.audit_entity(),
            subject_id.as_str(),
            kind.audit_details(&object_ids),
            actor,
        );
        match self.audit_trail.append(event).await {
            Ok(()) => ReconcileOutcome::Success { object_ids },
            Err(cause) => ReconcileOutcome::AuditFailed { object_ids, cause },
        }
    }
}
