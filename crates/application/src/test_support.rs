use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::{Mutex, Notify};

use gatehouse_core::{AppError, AppResult};
use gatehouse_domain::{Association, AssociationKind, RecordId};

use crate::security_admin_ports::{AssociationStore, AuditEvent, AuditRepository};

/// Pauses `delete_by_subject` until released by the test.
pub(crate) struct DeleteGate {
    pub(crate) started: Notify,
    pub(crate) release: Notify,
}

#[derive(Default)]
pub(crate) struct FakeAssociationStore {
    pub(crate) rows: Mutex<HashMap<(AssociationKind, RecordId), Vec<RecordId>>>,
    pub(crate) insert_calls: Mutex<usize>,
    pub(crate) fail_delete: bool,
    pub(crate) fail_insert: bool,
    pub(crate) delete_gate: Option<Arc<DeleteGate>>,
}

impl FakeAssociationStore {
    pub(crate) async fn seed(&self, kind: AssociationKind, subject_id: &str, object_ids: &[&str]) {
        let Ok(subject_id) = RecordId::new(subject_id) else {
            panic!("invalid subject id in test seed");
        };
        let object_ids = object_ids
            .iter()
            .filter_map(|object_id| RecordId::new(object_id).ok())
            .collect();
        self.rows.lock().await.insert((kind, subject_id), object_ids);
    }

    pub(crate) async fn stored(&self, kind: AssociationKind, subject_id: &str) -> Vec<String> {
        let Ok(subject_id) = RecordId::new(subject_id) else {
            return Vec::new();
        };
        let mut stored: Vec<String> = self
            .rows
            .lock()
            .await
            .get(&(kind, subject_id))
            .map(|object_ids| object_ids.iter().map(ToString::to_string).collect())
            .unwrap_or_default();
        stored.sort();
        stored
    }
}

#[async_trait]
impl AssociationStore for FakeAssociationStore {
    async fn delete_by_subject(
        &self,
        kind: AssociationKind,
        subject_id: &RecordId,
    ) -> AppResult<u64> {
        if let Some(gate) = &self.delete_gate {
            gate.started.notify_one();
            gate.release.notified().await;
        }
        if self.fail_delete {
            return Err(AppError::Unavailable("store offline".to_owned()));
        }

        let removed = self
            .rows
            .lock()
            .await
            .remove(&(kind, subject_id.clone()))
            .map(|object_ids| object_ids.len() as u64)
            .unwrap_or(0);
        Ok(removed)
    }

    async fn insert_many(&self, kind: AssociationKind, rows: &[Association]) -> AppResult<()> {
        *self.insert_calls.lock().await += 1;
        if self.fail_insert {
            return Err(AppError::Internal("insert rejected".to_owned()));
        }

        let mut stored = self.rows.lock().await;
        for row in rows {
            let object_ids = stored
                .entry((kind, row.subject_id.clone()))
                .or_default();
            if object_ids.contains(&row.object_id) {
                return Err(AppError::Conflict("duplicate association".to_owned()));
            }
            object_ids.push(row.object_id.clone());
        }
        Ok(())
    }

    async fn select_by_subject(
        &self,
        kind: AssociationKind,
        subject_id: &RecordId,
    ) -> AppResult<Vec<RecordId>> {
        Ok(self
            .rows
            .lock()
            .await
            .get(&(kind, subject_id.clone()))
            .cloned()
            .unwrap_or_default())
    }
}

#[derive(Default)]
pub(crate) struct FakeAuditRepository {
    pub(crate) events: Mutex<Vec<AuditEvent>>,
    pub(crate) fail: bool,
}

#[async_trait]
impl AuditRepository for FakeAuditRepository {
    async fn append_event(&self, event: AuditEvent) -> AppResult<()> {
        if self.fail {
            return Err(AppError::Unavailable("audit sink offline".to_owned()));
        }
        self.events.lock().await.push(event);
        Ok(())
    }
}
