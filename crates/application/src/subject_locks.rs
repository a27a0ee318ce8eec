use std::collections::HashSet;
use std::sync::{Arc, Mutex, PoisonError};

use gatehouse_core::{AppError, AppResult};
use gatehouse_domain::{AssociationKind, RecordId};

type SubjectKey = (AssociationKind, RecordId);

/// In-process registry of subjects with a reconciliation in flight.
#[derive(Clone, Default)]
pub struct SubjectLocks {
    in_flight: Arc<Mutex<HashSet<SubjectKey>>>,
}

impl SubjectLocks {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Claims the subject, failing with `Conflict` while another call holds it.
    pub fn try_acquire(&self, kind: AssociationKind, subject_id: &RecordId) -> AppResult<SubjectGuard> {
        let key = (kind, subject_id.clone());
        let mut in_flight = self.in_flight.lock().unwrap_or_else(PoisonError::into_inner);

        if !in_flight.insert(key.clone()) {
            return Err(AppError::Conflict(format!(
                "{} '{subject_id}' already has an assignment change in progress",
                kind.subject_label()
            )));
        }

        Ok(SubjectGuard {
            in_flight: Arc::clone(&self.in_flight),
            key,
        })
    }

    /// Returns true while the subject is claimed.
    #[must_use]
    pub fn is_held(&self, kind: AssociationKind, subject_id: &RecordId) -> bool {
        self.in_flight
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .contains(&(kind, subject_id.clone()))
    }
}

/// Releases the subject claim on drop.
#[derive(Debug)]
pub struct SubjectGuard {
    in_flight: Arc<Mutex<HashSet<SubjectKey>>>,
    key: SubjectKey,
}

impl Drop for SubjectGuard {
    fn drop(&mut self) {
        self.in_flight
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&self.key);
    }
}

#[cfg(test)]
mod tests {
    use gatehouse_core::AppError;
    use gatehouse_domain::{AssociationKind, RecordId};

    use super::SubjectLocks;

    #[test]
    fn second_claim_conflicts_until_release() -> Result<(), AppError> {
        let locks = SubjectLocks::new();
        let subject_id = RecordId::new("user-1")?;

        let guard = locks.try_acquire(AssociationKind::UserRoles, &subject_id)?;
        assert!(matches!(
            locks.try_acquire(AssociationKind::UserRoles, &subject_id),
            Err(AppError::Conflict(_))
        ));

        drop(guard);
        assert!(!locks.is_held(AssociationKind::UserRoles, &subject_id));
        assert!(locks.try_acquire(AssociationKind::UserRoles, &subject_id).is_ok());
        Ok(())
    }

    #[test]
    fn kinds_are_claimed_independently() -> Result<(), AppError> {
        let locks = SubjectLocks::new();
        let subject_id = RecordId::new("shared-id")?;

        let _user_roles = locks.try_acquire(AssociationKind::UserRoles, &subject_id)?;
        let role_permissions = locks.try_acquire(AssociationKind::RolePermissions, &subject_id);

        assert!(role_permissions.is_ok());
        Ok(())
    }
}
