use async_trait::async_trait;

use gatehouse_core::AppResult;
use gatehouse_domain::{Association, AssociationKind, RecordId};

/// Repository port for many-to-many association tables.
#[async_trait]
pub trait AssociationStore: Send + Sync {
    /// Deletes every association of the subject and returns the removed row count.
    async fn delete_by_subject(&self, kind: AssociationKind, subject_id: &RecordId)
    -> AppResult<u64>;

    /// Inserts all rows in one batch.
    async fn insert_many(&self, kind: AssociationKind, rows: &[Association]) -> AppResult<()>;

    /// Lists the object ids currently associated with the subject.
    async fn select_by_subject(
        &self,
        kind: AssociationKind,
        subject_id: &RecordId,
    ) -> AppResult<Vec<RecordId>>;
}
