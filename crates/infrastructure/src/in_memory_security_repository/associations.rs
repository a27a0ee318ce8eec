use super::*;

#[async_trait]
impl AssociationStore for InMemorySecurityRepository {
    async fn delete_by_subject(
        &self,
        kind: AssociationKind,
        subject_id: &RecordId,
    ) -> AppResult<u64> {
        let removed = self
            .associations
            .write()
            .await
            .remove(&(kind, subject_id.clone()))
            .map_or(0, |object_ids| object_ids.len());

        Ok(removed as u64)
    }

    async fn insert_many(&self, kind: AssociationKind, rows: &[Association]) -> AppResult<()> {
        let mut associations = self.associations.write().await;

        let mut pending: HashMap<&RecordId, Vec<RecordId>> = HashMap::new();
        for row in rows {
            let stored = associations.get(&(kind, row.subject_id.clone()));
            let staged = pending.entry(&row.subject_id).or_default();
            if stored.is_some_and(|object_ids| object_ids.contains(&row.object_id))
                || staged.contains(&row.object_id)
            {
                return Err(AppError::Conflict(format!(
                    "{} row ('{}', '{}') already exists",
                    kind.table(),
                    row.subject_id,
                    row.object_id
                )));
            }
            staged.push(row.object_id.clone());
        }

        for (subject_id, object_ids) in pending {
            associations
                .entry((kind, subject_id.clone()))
                .or_default()
                .extend(object_ids);
        }

        Ok(())
    }

    async fn select_by_subject(
        &self,
        kind: AssociationKind,
        subject_id: &RecordId,
    ) -> AppResult<Vec<RecordId>> {
        Ok(self
            .associations
            .read()
            .await
            .get(&(kind, subject_id.clone()))
            .cloned()
            .unwrap_or_default())
    }
}
