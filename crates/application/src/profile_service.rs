use std::sync::Arc;

use serde_json::json;

use gatehouse_core::{AppResult, UserIdentity};
use gatehouse_domain::{AuditAction, AuditEntity, Profile, RecordId};

use crate::audit_trail::{AuditTrail, Audited};
use crate::security_admin_ports::{AuditEvent, AuditRepository, ProfileRepository};

/// Application service for the caller's own profile.
#[derive(Clone)]
pub struct ProfileService {
    repository: Arc<dyn ProfileRepository>,
    audit_trail: AuditTrail,
}

impl ProfileService {
    /// Creates a new service from required dependencies.
    #[must_use]
    pub fn new(
        repository: Arc<dyn ProfileRepository>,
        audit_repository: Arc<dyn AuditRepository>,
    ) -> Self {
        Self {
            repository,
            audit_trail: AuditTrail::new(audit_repository),
        }
    }

    /// Returns the actor's profile, or an empty one when none was saved yet.
    pub async fn profile(&self, actor: &UserIdentity) -> AppResult<Profile> {
        let user_id = RecordId::new(actor.subject())?;
        match self.repository.find_profile(&user_id).await? {
            Some(profile) => Ok(profile),
            None => Profile::new(actor.subject(), None),
        }
    }

    /// Saves the actor's full name and emits an audit event.
    pub async fn update_profile(
        &self,
        actor: &UserIdentity,
        full_name: Option<String>,
    ) -> AppResult<Audited<Profile>> {
        let profile = Profile::new(actor.subject(), full_name)?;

        self.audit_trail
            .mutate_with_audit(self.repository.upsert_profile(profile), |profile: &Profile| {
                AuditEvent::new(
                    AuditAction::Update,
                    AuditEntity::Profile,
                    profile.user_id().as_str(),
                    json!({ "full_name": profile.full_name() }),
                    Some(actor),
                )
            })
            .await
    }
}
