use super::*;

#[async_trait]
impl AuditRepository for InMemorySecurityRepository {
    async fn append_event(&self, event: AuditEvent) -> AppResult<()> {
        self.audit_entries.write().await.push(AuditLogEntry {
            event_id: uuid::Uuid::new_v4().to_string(),
            action: event.action.as_str().to_owned(),
            entity: event.entity.as_str().to_owned(),
            entity_id: event.entity_id,
            details: event.details,
            performed_by: event.performed_by,
            created_at: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
        });

        Ok(())
    }
}

#[async_trait]
impl AuditLogRepository for InMemorySecurityRepository {
    async fn list_recent_entries(&self, query: AuditLogQuery) -> AppResult<Vec<AuditLogEntry>> {
        let entries = self.audit_entries.read().await;

        Ok(entries
            .iter()
            .rev()
            .filter(|entry| {
                query
                    .entity
                    .is_none_or(|entity| entry.entity == entity.as_str())
                    && query
                        .action
                        .is_none_or(|action| entry.action == action.as_str())
            })
            .take(query.limit)
            .cloned()
            .collect())
    }
}
